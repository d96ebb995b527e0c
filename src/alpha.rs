//! src/alpha.rs
//!
//! Adaptief geheugen van reactieve GRASP: per kandidaat-alpha een
//! selectiekans, een cumulatieve beloning en een gebruiksteller.
//! Beloningen zijn `1 / max(1, max_kleur)`, dus alpha's die kleinere
//! kleuringen opleveren krijgen na elke blokgrens een grotere kans.

use crate::grasp::clamp_alpha;
use crate::params::DEFAULT_REACTIVE_ALPHAS;
use rand::Rng;

/// Kansverdeling over een vaste, geordende set alpha-waarden.
#[derive(Clone, Debug)]
pub struct AlphaDistribution {
    values: Vec<f64>,
    probabilities: Vec<f64>,
    reward_sum: Vec<f64>,
    usage: Vec<usize>,
}

impl AlphaDistribution {
    /// Creëert een uniforme verdeling over `values` (afgekapt op `[0, 1]`).
    /// Een lege set valt terug op [`DEFAULT_REACTIVE_ALPHAS`].
    pub fn new(values: &[f64]) -> Self {
        let values: Vec<f64> = if values.is_empty() {
            DEFAULT_REACTIVE_ALPHAS.to_vec()
        } else {
            values.iter().copied().map(clamp_alpha).collect()
        };
        let k = values.len();
        Self {
            probabilities: vec![1.0 / k as f64; k],
            reward_sum: vec![0.0; k],
            usage: vec![0; k],
            values,
        }
    }

    /*────────── Queries ──────────*/

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Altijd `false`: de set valt terug op de standaardwaarden.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn value(&self, idx: usize) -> f64 {
        self.values[idx]
    }

    #[inline]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    #[inline]
    pub fn reward_sum(&self, idx: usize) -> f64 {
        self.reward_sum[idx]
    }

    #[inline]
    pub fn usage(&self, idx: usize) -> usize {
        self.usage[idx]
    }

    /// Gemiddelde beloning per alpha; 0 voor nooit gebruikte alpha's.
    pub fn reward_estimates(&self) -> Vec<f64> {
        self.reward_sum
            .iter()
            .zip(&self.usage)
            .map(|(&sum, &used)| if used > 0 { sum / used as f64 } else { 0.0 })
            .collect()
    }

    /*────────── Sampling ──────────*/

    /// Inverse-CDF op een vooraf getrokken `r ∈ [0, 1)`: de eerste index
    /// waarvan de cumulatieve kans `≥ r` is; bij afronding de laatste index.
    pub fn index_for(&self, r: f64) -> usize {
        let mut cumulative = 0.0;
        for (i, &prob) in self.probabilities.iter().enumerate() {
            cumulative += prob;
            if r <= cumulative {
                return i;
            }
        }
        self.len() - 1
    }

    /// Trekt één uniforme `f64` en kiest daarmee een alpha-index.
    pub fn select<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let r: f64 = rng.gen();
        self.index_for(r)
    }

    /*────────── Mutators ──────────*/

    /// Registreert het doel van één iteratie met alpha-index `idx`.
    pub fn reward(&mut self, idx: usize, max_color: usize) {
        self.reward_sum[idx] += 1.0 / max_color.max(1) as f64;
        self.usage[idx] += 1;
    }

    /// Herberekent de kansen evenredig met de gemiddelde beloning.
    /// Als alle schattingen 0 zijn, wordt de verdeling weer uniform.
    pub fn update(&mut self) {
        let estimates = self.reward_estimates();
        let total: f64 = estimates.iter().sum();
        if total <= 0.0 {
            let uniform = 1.0 / self.len() as f64;
            self.probabilities.fill(uniform);
            return;
        }
        for (prob, est) in self.probabilities.iter_mut().zip(estimates) {
            *prob = est / total;
        }
    }
}
