//! src/reactive.rs
//!
//! Reactieve GRASP: dezelfde gerandomiseerde greedy-constructie als
//! [`crate::grasp`], maar `alpha` wordt per iteratie getrokken uit een
//! [`AlphaDistribution`] die na elk blok van `block_size` iteraties wordt
//! bijgesteld op basis van de behaalde kleuringen.
use crate::{
    alpha::AlphaDistribution,
    construct::greedy_randomized,
    error::Result,
    graph::Graph,
    neighbour::Neighbourhood,
    params::{Params, MIN_BLOCK_SIZE, MIN_REACTIVE_ITERATIONS},
};
use rand::Rng;
use tracing::{debug, info};

/// Fase van de alpha-verdeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Vóór de eerste blokgrens: uniforme kansen.
    Warmup,
    /// Kansen zijn minstens eenmaal herberekend.
    Adaptive,
}

/// Reactieve GRASP-controller.
#[derive(Clone, Debug)]
pub struct ReactiveGrasp<'g> {
    graph: &'g Graph,
    p: usize,
    q: usize,
    block_size: usize,
    total_iterations: usize,
    dist: AlphaDistribution,
    /// Aantal herberekeningen van de kansen sinds de constructie.
    updates: usize,
    best_alpha: f64,
    best_objective: Option<usize>,
    average_objective: f64,
}

impl<'g> ReactiveGrasp<'g> {
    /// `block_size` wordt minstens [`MIN_BLOCK_SIZE`], `total_iterations`
    /// minstens [`MIN_REACTIVE_ITERATIONS`]. Een lege `alphas` gebruikt de standaardset.
    pub fn new(
        graph: &'g Graph,
        p: usize,
        q: usize,
        alphas: &[f64],
        block_size: usize,
        total_iterations: usize,
    ) -> Self {
        let dist = AlphaDistribution::new(alphas);
        Self {
            graph,
            p,
            q,
            block_size: block_size.max(MIN_BLOCK_SIZE),
            total_iterations: total_iterations.max(MIN_REACTIVE_ITERATIONS),
            best_alpha: dist.value(0),
            dist,
            updates: 0,
            best_objective: None,
            average_objective: 0.0,
        }
    }

    pub fn from_params(graph: &'g Graph, params: &Params) -> Self {
        Self::new(
            graph,
            params.p,
            params.q,
            &params.alphas,
            params.block_size,
            params.reactive_iterations,
        )
    }

    /*────────── Getters ──────────*/

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    #[inline]
    pub fn total_iterations(&self) -> usize {
        self.total_iterations
    }

    /// Alpha waarmee de beste kleuring gevonden is.
    #[inline]
    pub fn best_alpha(&self) -> f64 {
        self.best_alpha
    }

    #[inline]
    pub fn best_objective(&self) -> Option<usize> {
        self.best_objective
    }

    #[inline]
    pub fn average_objective(&self) -> f64 {
        self.average_objective
    }

    /// Alleen-lezen toegang tot de alpha-verdeling.
    #[inline]
    pub fn distribution(&self) -> &AlphaDistribution {
        &self.dist
    }

    /// Aantal blokgrenzen waarop de kansen herberekend zijn.
    #[inline]
    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn phase(&self) -> Phase {
        if self.updates > 0 {
            Phase::Adaptive
        } else {
            Phase::Warmup
        }
    }

    #[cfg(feature = "parallel_grasp")]
    #[inline]
    pub(crate) fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[cfg(feature = "parallel_grasp")]
    #[inline]
    pub(crate) fn separation(&self) -> (usize, usize) {
        (self.p, self.q)
    }

    #[cfg(feature = "parallel_grasp")]
    #[inline]
    pub(crate) fn distribution_mut(&mut self) -> &mut AlphaDistribution {
        &mut self.dist
    }

    /// Blokgrens: herbereken de alpha-kansen.
    pub(crate) fn recompute(&mut self, iter: usize) {
        self.dist.update();
        self.updates += 1;
        debug!(iter, probabilities = ?self.dist.probabilities(), "alpha-kansen bijgewerkt");
    }

    /*────────── Solve ──────────*/

    /// Voert `total_iterations` iteraties uit en geeft de beste kleuring terug.
    ///
    /// Per iteratie: eventueel kansen bijwerken (blokgrens), één `f64`
    /// trekken voor de alpha-keuze, één constructie, beloning registreren.
    pub fn solve<R>(&mut self, rng: &mut R) -> Result<Vec<usize>>
    where
        R: Rng + ?Sized,
    {
        let nb = Neighbourhood::new(self.graph);
        let mut best: Option<(usize, Vec<usize>)> = None;
        let mut sum = 0usize;

        for iter in 0..self.total_iterations {
            if iter > 0 && iter % self.block_size == 0 {
                self.recompute(iter);
            }

            let idx = self.dist.select(rng);
            let alpha = self.dist.value(idx);
            let sol = greedy_randomized(&nb, self.p, self.q, alpha, rng)?;
            let objective = sol.max_color();
            sum += objective;
            self.dist.reward(idx, objective);

            if best.as_ref().map_or(true, |(b, _)| objective < *b) {
                debug!(iter, alpha, objective, "reactieve GRASP: nieuwe beste kleuring");
                self.best_alpha = alpha;
                best = Some((objective, sol.into_colors()));
            }
        }

        let (objective, colors) = best.unwrap_or_default();
        self.record(objective, sum as f64 / self.total_iterations as f64);
        Ok(colors)
    }

    /// Slaat de samenvatting van een afgeronde run op.
    pub(crate) fn record(&mut self, best_objective: usize, average_objective: f64) {
        self.best_objective = Some(best_objective);
        self.average_objective = average_objective;
        info!(
            best = best_objective,
            best_alpha = self.best_alpha,
            average = average_objective,
            iterations = self.total_iterations,
            block_size = self.block_size,
            "reactieve GRASP klaar"
        );
    }

    #[cfg(feature = "parallel_grasp")]
    pub(crate) fn set_best_alpha(&mut self, alpha: f64) {
        self.best_alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn petersen() -> Graph {
        let mut edges = Vec::new();
        for i in 0..5 {
            edges.push((i, (i + 1) % 5));
            edges.push((i, i + 5));
            edges.push((i + 5, (i + 2) % 5 + 5));
        }
        Graph::from_edge_list(10, &edges).unwrap()
    }

    #[test]
    fn floors_and_defaults() {
        let g = petersen();
        let r = ReactiveGrasp::new(&g, 2, 1, &[], 5, 10);
        assert_eq!(r.block_size(), 30);
        assert_eq!(r.total_iterations(), 300);
        assert_eq!(r.distribution().values(), &[0.1, 0.3, 0.5]);
        assert_eq!(r.best_alpha(), 0.1);
        assert_eq!(r.phase(), Phase::Warmup);
        for &p in r.distribution().probabilities() {
            assert_eq!(p, 1.0 / 3.0);
        }
    }

    #[test]
    fn solve_updates_statistics() {
        let g = petersen();
        let mut r = ReactiveGrasp::new(&g, 2, 1, &[0.0, 0.5, 1.0], 30, 300);
        let colors = r.solve(&mut ChaCha8Rng::seed_from_u64(17)).unwrap();

        let best = r.best_objective().unwrap();
        assert_eq!(colors.iter().copied().max(), Some(best));
        assert!(r.average_objective() + 1e-12 >= best as f64);
        assert!(r.distribution().values().contains(&r.best_alpha()));
        assert_eq!(r.phase(), Phase::Adaptive);

        let d = r.distribution();
        let used: usize = (0..d.len()).map(|i| d.usage(i)).sum();
        assert_eq!(used, 300);
        assert_abs_diff_eq!(d.probabilities().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn recomputes_only_on_block_boundaries() {
        let g = petersen();
        let mut r = ReactiveGrasp::new(&g, 2, 1, &[], 30, 300);
        r.solve(&mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        assert_eq!(r.updates(), 9);

        let mut r = ReactiveGrasp::new(&g, 2, 1, &[], 50, 320);
        r.solve(&mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        assert_eq!(r.updates(), 6);

        let mut single = ReactiveGrasp::new(&g, 2, 1, &[], 300, 300);
        single.solve(&mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        assert_eq!(single.updates(), 0);
        assert_eq!(single.phase(), Phase::Warmup);
        for &p in single.distribution().probabilities() {
            assert_eq!(p, 1.0 / 3.0);
        }
    }

    #[test]
    fn one_uniform_draw_before_each_construction() {
        let g = petersen();
        let alphas = [0.0, 0.4, 1.0];
        let seed = 23;
        let mut r = ReactiveGrasp::new(&g, 2, 1, &alphas, 30, 300);
        let mut solver_rng = ChaCha8Rng::seed_from_u64(seed);
        let colors = r.solve(&mut solver_rng).unwrap();

        // Zelfde iteraties met de hand: f64 voor de alpha, dan de constructie.
        let nb = Neighbourhood::new(&g);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut dist = AlphaDistribution::new(&alphas);
        let mut best: Option<(usize, f64, Vec<usize>)> = None;
        for iter in 0..300 {
            if iter > 0 && iter % 30 == 0 {
                dist.update();
            }
            let u: f64 = rng.gen();
            let idx = dist.index_for(u);
            let sol = greedy_randomized(&nb, 2, 1, dist.value(idx), &mut rng).unwrap();
            let objective = sol.max_color();
            dist.reward(idx, objective);
            if best.as_ref().map_or(true, |(b, _, _)| objective < *b) {
                best = Some((objective, dist.value(idx), sol.into_colors()));
            }
        }

        let (objective, alpha, expected) = best.unwrap();
        assert_eq!(colors, expected);
        assert_eq!(r.best_objective(), Some(objective));
        assert_eq!(r.best_alpha(), alpha);
        assert_eq!(r.distribution().probabilities(), dist.probabilities());
        // Geen extra trekkingen: beide stromen staan op dezelfde positie.
        assert_eq!(solver_rng.gen::<u64>(), rng.gen::<u64>());
    }

    #[test]
    fn reproducible_for_seed() {
        let g = petersen();
        let run = || {
            let mut r = ReactiveGrasp::new(&g, 2, 1, &[], 30, 300);
            let colors = r.solve(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
            (colors, r.best_alpha(), r.average_objective())
        };
        assert_eq!(run(), run());
    }
}
