//! src/greedy.rs
//!
//! Deterministische greedy-oplosser: één doorgang in volgorde van dalende
//! graad (gelijke graad: oplopend id), elke knoop krijgt zijn kleinste
//! geldige kleur. Gebruikt geen randomness.

use crate::{
    construct::{greedy_in_order, greedy_order},
    error::Result,
    graph::Graph,
    neighbour::Neighbourhood,
    params::Params,
};
use tracing::info;

/// Greedy L(p,q)-kleuring van een vaste graaf.
#[derive(Clone, Debug)]
pub struct GreedySolver<'g> {
    graph: &'g Graph,
    p: usize,
    q: usize,
}

impl<'g> GreedySolver<'g> {
    pub fn new(graph: &'g Graph, p: usize, q: usize) -> Self {
        Self { graph, p, q }
    }

    pub fn from_params(graph: &'g Graph, params: &Params) -> Self {
        Self::new(graph, params.p, params.q)
    }

    /// Construeert de kleuring. Elke waarde in het resultaat is ≥ 1.
    pub fn solve(&self) -> Result<Vec<usize>> {
        let nb = Neighbourhood::new(self.graph);
        let order = greedy_order(self.graph);
        let sol = greedy_in_order(&nb, &order, self.p, self.q)?;
        info!(
            n = self.graph.n(),
            p = self.p,
            q = self.q,
            max_color = sol.max_color(),
            "greedy klaar"
        );
        Ok(sol.into_colors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_l21() {
        let g = Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(GreedySolver::new(&g, 2, 1).solve().unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn path_l21_uses_degree_order() {
        // Volgorde: 1, 2, 3 (graad 2), dan 0, 4 (graad 1).
        let g = Graph::from_edge_list(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let colors = GreedySolver::new(&g, 2, 1).solve().unwrap();
        // 1→1, 2→3, 3→5 (≠1 via afstand 2), 0→4 (≠3 via afstand 2), 4→1.
        assert_eq!(colors, vec![4, 1, 3, 5, 1]);
    }

    #[test]
    fn deterministic() {
        let g = Graph::from_edge_list(6, &[(0, 1), (0, 2), (0, 3), (3, 4), (4, 5), (5, 1)])
            .unwrap();
        let s = GreedySolver::new(&g, 3, 2);
        assert_eq!(s.solve().unwrap(), s.solve().unwrap());
    }

    #[test]
    fn empty_and_isolated() {
        assert!(GreedySolver::new(&Graph::with_vertices(0), 2, 1)
            .solve()
            .unwrap()
            .is_empty());
        assert_eq!(
            GreedySolver::new(&Graph::with_vertices(3), 2, 1).solve().unwrap(),
            vec![1, 1, 1]
        );
    }
}
