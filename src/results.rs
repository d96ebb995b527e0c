//! src/results.rs
//!
//! CSV-logboek van experimenten: één regel per run, kopregel alleen bij een
//! nieuw bestand. Ontbrekende numerieke waarden worden als `-1` geschreven.

use std::borrow::Cow;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const CSV_HEADER: &str = "timestamp,instance,p,q,algorithm,alpha,iterations,block_size,\
seed,time_s,best_solution,best_alpha,average_solution";

/// Samenvatting van één run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunRecord {
    pub instance: String,
    pub p: usize,
    pub q: usize,
    pub algorithm: String,
    pub alpha: Option<f64>,
    pub iterations: Option<usize>,
    pub block_size: Option<usize>,
    pub seed: u64,
    pub time_s: f64,
    pub best_solution: usize,
    pub best_alpha: Option<f64>,
    pub average_solution: Option<f64>,
}

impl RunRecord {
    /// CSV-regel zonder afsluitende newline, met `timestamp` (unix-seconden,
    /// geen lokale datum/tijd) als eerste kolom. Tekstvelden met `,`, `"` of
    /// een regeleinde worden tussen aanhalingstekens gezet.
    pub fn to_csv_row(&self, timestamp: u64) -> String {
        format!(
            "{timestamp},{},{},{},{},{},{},{},{},{:.6},{},{},{}",
            csv_field(&self.instance),
            self.p,
            self.q,
            csv_field(&self.algorithm),
            or_missing(self.alpha.map(|a| format!("{a:.6}"))),
            or_missing(self.iterations),
            or_missing(self.block_size),
            self.seed,
            self.time_s,
            self.best_solution,
            or_missing(self.best_alpha.map(|a| format!("{a:.6}"))),
            or_missing(self.average_solution.map(|a| format!("{a:.6}"))),
        )
    }
}

fn csv_field(text: &str) -> Cow<'_, str> {
    if text.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-1".to_string(), |v| v.to_string())
}

/// Append-only CSV-bestand met resultaten.
#[derive(Clone, Debug)]
pub struct ResultLogger {
    path: PathBuf,
}

impl ResultLogger {
    /// Opent (of creëert) het logbestand. Ontbrekende mappen worden
    /// aangemaakt en een nieuw bestand krijgt meteen de kopregel.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        if !path.exists() {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            writeln!(file, "{CSV_HEADER}")?;
        }
        Ok(Self { path })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Voegt één regel toe met de huidige unix-tijd in seconden (UTC).
    pub fn log(&self, record: &RunRecord) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", record.to_csv_row(timestamp))
    }
}
