//! src/validate.rs
//!
//! Controle achteraf van een kleuring tegen de L(p,q)-voorwaarden. De
//! oplossers valideren zelf niets; de CLI en de tests roepen dit aan.

use crate::graph::Graph;
use crate::neighbour::Neighbourhood;
use crate::solution::UNCOLORED;
use thiserror::Error;

/// Eén geschonden voorwaarde.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("kleuring heeft {actual} waarden, graaf heeft {expected} knopen")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("knoop {vertex} heeft geen kleur")]
    Uncolored { vertex: usize },

    #[error("afstand 1: knopen {u} en {v} verschillen {diff}")]
    Distance1 { u: usize, v: usize, diff: usize },

    #[error("afstand 2: knopen {u} en {v} verschillen {diff}")]
    Distance2 { u: usize, v: usize, diff: usize },
}

/// Geeft alle schendingen terug; leeg betekent een geldige kleuring.
///
/// Bij een ongerichte graaf wordt elk paar eenmaal gemeld (met `u < v`).
/// Paren met een ongekleurde knoop worden niet op afstand gecontroleerd.
pub fn validate_coloring(graph: &Graph, colors: &[usize], p: usize, q: usize) -> Vec<Violation> {
    if colors.len() != graph.n() {
        return vec![Violation::LengthMismatch {
            expected: graph.n(),
            actual: colors.len(),
        }];
    }

    let mut violations: Vec<Violation> = colors
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == UNCOLORED)
        .map(|(vertex, _)| Violation::Uncolored { vertex })
        .collect();

    let nb = Neighbourhood::new(graph);
    let report = |u: usize, v: usize| {
        let colored = colors[u] != UNCOLORED && colors[v] != UNCOLORED;
        colored && (graph.is_directed() || u < v)
    };

    for u in 0..graph.n() {
        for &v in nb.direct(u) {
            let diff = colors[u].abs_diff(colors[v]);
            if report(u, v) && diff < p {
                violations.push(Violation::Distance1 { u, v, diff });
            }
        }
        for &v in nb.distance2(u) {
            let diff = colors[u].abs_diff(colors[v]);
            if report(u, v) && diff < q {
                violations.push(Violation::Distance2 { u, v, diff });
            }
        }
    }
    violations
}

#[inline]
pub fn is_valid_coloring(graph: &Graph, colors: &[usize], p: usize, q: usize) -> bool {
    validate_coloring(graph, colors, p, q).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edge_list(3, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn valid_coloring_has_no_violations() {
        assert!(is_valid_coloring(&path3(), &[3, 1, 5], 2, 1));
    }

    #[test]
    fn length_mismatch_short_circuits() {
        assert_eq!(
            validate_coloring(&path3(), &[1, 2], 2, 1),
            vec![Violation::LengthMismatch { expected: 3, actual: 2 }]
        );
    }

    #[test]
    fn reports_each_pair_once() {
        let v = validate_coloring(&path3(), &[1, 2, 1], 2, 1);
        assert_eq!(
            v,
            vec![
                Violation::Distance1 { u: 0, v: 1, diff: 1 },
                Violation::Distance2 { u: 0, v: 2, diff: 0 },
                Violation::Distance1 { u: 1, v: 2, diff: 1 },
            ]
        );
    }

    #[test]
    fn uncolored_is_reported() {
        let v = validate_coloring(&path3(), &[1, 0, 5], 2, 1);
        assert_eq!(v, vec![Violation::Uncolored { vertex: 1 }]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let g = Graph::from_edge_list(2, &[(0, 0), (0, 1)]).unwrap();
        assert!(is_valid_coloring(&g, &[1, 3], 2, 1));
    }
}
