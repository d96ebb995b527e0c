//! src/error.rs
//!
//! Foutentypes voor de graaf, de constructieheuristieken en de readers.

use thiserror::Error;

/// Resultaattype voor alle fallible operaties in deze crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Knoopindex buiten `[0, n)`.
    #[error("knoop {vertex} buiten bereik voor een graaf met {n} knopen")]
    InvalidVertex { vertex: usize, n: usize },

    /// De zoektocht naar de kleinste geldige kleur overschreed de veiligheidsgrens.
    /// Op een correct opgebouwde graaf is dit onbereikbaar.
    #[error("geen geldige kleur gevonden voor knoop {vertex} onder grens {bound}")]
    ColorSearchExhausted { vertex: usize, bound: usize },

    /// Ongeldige invoer in een graafbestand (1-gebaseerd regelnummer).
    #[error("regel {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
