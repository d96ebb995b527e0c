// src/params.rs
//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de greedy-, GRASP- en reactieve
//! GRASP-oplossers, samen met de standaardwaarden en ondergrenzen.

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Standaard minimale verschil tussen buren.
pub const DEFAULT_P: usize = 2;
/// Standaard minimale verschil tussen knopen op afstand 2.
pub const DEFAULT_Q: usize = 1;
pub const DEFAULT_ALPHA: f64 = 0.3;
pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_BLOCK_SIZE: usize = 30;
pub const DEFAULT_REACTIVE_ITERATIONS: usize = 300;
pub const DEFAULT_REACTIVE_ALPHAS: [f64; 3] = [0.1, 0.3, 0.5];
pub const DEFAULT_SEED: u64 = 42;

/// Ondergrens voor het aantal GRASP-iteraties (stabiliseert het gemiddelde).
pub const MIN_GRASP_ITERATIONS: usize = 30;
/// Ondergrens voor de blokgrootte van reactieve GRASP.
pub const MIN_BLOCK_SIZE: usize = 30;
/// Ondergrens voor het totaal aantal iteraties van reactieve GRASP.
pub const MIN_REACTIVE_ITERATIONS: usize = 300;

/// Alle afstembare besturingselementen voor de L(p,q)-oplossers.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Minimaal kleurverschil tussen buren.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub p: usize,
    /// Minimaal kleurverschil tussen knopen op afstand 2.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub q: usize,
    /// RCL-parameter voor klassieke GRASP, in `[0, 1]`.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub alpha: f64,
    /// Aantal GRASP-iteraties (minstens [`MIN_GRASP_ITERATIONS`]).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub iterations: usize,
    /// Iteraties tussen twee herberekeningen van de alpha-kansen.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub block_size: usize,
    /// Totaal aantal iteraties voor reactieve GRASP.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub reactive_iterations: usize,
    /// Kandidaat-alpha's voor reactieve GRASP; leeg = standaardset.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub alphas: Vec<f64>,
    /// Random seed
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub seed: u64,
}

#[cfg(feature = "python")]
#[pymethods]
impl Params {
    #[new]
    #[pyo3(signature = (
        p = DEFAULT_P,
        q = DEFAULT_Q,
        alpha = DEFAULT_ALPHA,
        iterations = DEFAULT_ITERATIONS,
        block_size = DEFAULT_BLOCK_SIZE,
        reactive_iterations = DEFAULT_REACTIVE_ITERATIONS,
        alphas = None,
        seed = DEFAULT_SEED,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        p: usize,
        q: usize,
        alpha: f64,
        iterations: usize,
        block_size: usize,
        reactive_iterations: usize,
        alphas: Option<Vec<f64>>,
        seed: u64,
    ) -> Self {
        Self {
            p,
            q,
            alpha,
            iterations,
            block_size,
            reactive_iterations,
            alphas: alphas.unwrap_or_else(|| DEFAULT_REACTIVE_ALPHAS.to_vec()),
            seed,
        }
    }

    /// Methode om een kopie te maken, blootgesteld aan Python
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!("{self:?}")
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            p: DEFAULT_P,
            q: DEFAULT_Q,
            alpha: DEFAULT_ALPHA,
            iterations: DEFAULT_ITERATIONS,
            block_size: DEFAULT_BLOCK_SIZE,
            reactive_iterations: DEFAULT_REACTIVE_ITERATIONS,
            alphas: DEFAULT_REACTIVE_ALPHAS.to_vec(),
            seed: DEFAULT_SEED,
        }
    }
}

impl Params {
    /// Stelt de L(p,q)-afstanden in.
    pub fn with_separation(&mut self, p: usize, q: usize) -> &mut Self {
        self.p = p;
        self.q = q;
        self
    }

    /// Schakelt over op reactieve GRASP met de opgegeven alpha-set en limieten.
    pub fn enable_reactive(
        &mut self,
        alphas: &[f64],
        block_size: usize,
        total_iterations: usize,
    ) -> &mut Self {
        self.alphas = alphas.to_vec();
        self.block_size = block_size;
        self.reactive_iterations = total_iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let p = Params::default();
        assert_eq!((p.p, p.q), (2, 1));
        assert_eq!(p.alphas, vec![0.1, 0.3, 0.5]);
        assert_eq!(p.block_size, MIN_BLOCK_SIZE);
        assert_eq!(p.reactive_iterations, MIN_REACTIVE_ITERATIONS);
    }

    #[test]
    fn builder_helpers_chain() {
        let mut p = Params::default();
        p.with_separation(3, 2).enable_reactive(&[0.2, 0.8], 40, 500);
        assert_eq!((p.p, p.q), (3, 2));
        assert_eq!(p.alphas, vec![0.2, 0.8]);
        assert_eq!((p.block_size, p.reactive_iterations), (40, 500));
    }
}
