//! src/construct.rs
//!
//! Constructieprocedures voor een volledige L(p,q)-kleuring.
//!
//! • `greedy_order` + `greedy_in_order`: deterministisch, één doorgang
//! • `greedy_randomized`: de gerandomiseerde greedy-stap van GRASP,
//!   gedeeld door [`crate::grasp`] en [`crate::reactive`]
//!
//! Beide geven een [`Solution`] terug waarin elke knoop gekleurd is.

use crate::{error::Result, graph::Graph, neighbour::Neighbourhood, solution::Solution};
use rand::Rng;

/// Kandidaat in een constructiestap: (kleinste geldige kleur, knoop).
pub type Candidate = (usize, usize);

/*───────────────────────────────────────────────────────────*/
/*  Greedy                                                   */
/*───────────────────────────────────────────────────────────*/

/// Alle knopen op dalende graad, bij gelijke graad op oplopend id.
pub fn greedy_order(graph: &Graph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.n()).collect();
    // Stabiele sort: gelijke graden houden hun oplopende id-volgorde.
    order.sort_by_key(|&v| std::cmp::Reverse(graph.adj_row(v).len()));
    order
}

/// Kleurt de knopen in de gegeven volgorde, elk met zijn kleinste geldige kleur.
pub fn greedy_in_order<'n>(
    nb: &'n Neighbourhood,
    order: &[usize],
    p: usize,
    q: usize,
) -> Result<Solution<'n>> {
    let mut sol = Solution::new(nb, p, q);
    for &v in order {
        let color = sol.smallest_valid_color(v)?;
        sol.assign(v, color);
    }
    Ok(sol)
}

/*───────────────────────────────────────────────────────────*/
/*  Restricted Candidate List                                */
/*───────────────────────────────────────────────────────────*/

/// Bouwt de RCL: alle kandidaten met kleur ≤ `c_min + alpha·(c_max − c_min)`.
/// De volgorde van `candidates` blijft behouden. Leeg alleen als de invoer leeg is.
pub fn restricted_candidates(candidates: &[Candidate], alpha: f64) -> Vec<Candidate> {
    let Some(c_min) = candidates.iter().map(|&(c, _)| c).min() else {
        return Vec::new();
    };
    let c_max = candidates.iter().map(|&(c, _)| c).max().unwrap_or(c_min);

    let threshold = c_min as f64 + alpha * (c_max - c_min) as f64;
    candidates
        .iter()
        .copied()
        .filter(|&(c, _)| c as f64 <= threshold)
        .collect()
}

/*───────────────────────────────────────────────────────────*/
/*  Gerandomiseerde greedy                                   */
/*───────────────────────────────────────────────────────────*/

/// Eén GRASP-constructie met parameter `alpha` (0 = puur greedy, 1 = puur random).
///
/// Elke stap:
/// 1. bepaal voor elke ongekleurde knoop de kleinste geldige kleur,
/// 2. bouw de RCL op basis van `c_min` en `c_max`,
/// 3. kies uniform één kandidaat uit de RCL (precies één trekking) en kleur die.
///
/// De kleinste geldige kleur verandert alleen voor de afhankelijken van de
/// zojuist gekleurde knoop, dus alleen die worden herberekend.
pub fn greedy_randomized<'n, R>(
    nb: &'n Neighbourhood,
    p: usize,
    q: usize,
    alpha: f64,
    rng: &mut R,
) -> Result<Solution<'n>>
where
    R: Rng + ?Sized,
{
    let n = nb.n();
    let mut sol = Solution::new(nb, p, q);

    let mut min_color = Vec::with_capacity(n);
    for v in 0..n {
        min_color.push(sol.smallest_valid_color(v)?);
    }

    // Ongekleurde knopen, oplopend op id.
    let mut open: Vec<usize> = (0..n).collect();
    let mut candidates: Vec<Candidate> = Vec::with_capacity(n);

    while !open.is_empty() {
        candidates.clear();
        candidates.extend(open.iter().map(|&v| (min_color[v], v)));

        let rcl = restricted_candidates(&candidates, alpha);
        let (color, chosen) = rcl[rng.gen_range(0..rcl.len())];

        sol.assign(chosen, color);
        if let Ok(pos) = open.binary_search(&chosen) {
            open.remove(pos);
        }

        for &w in nb.dependents(chosen) {
            if !sol.is_colored(w) {
                min_color[w] = sol.smallest_valid_color(w)?;
            }
        }
    }

    Ok(sol)
}

/*──────────────────────── tests ───────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn triangle() -> Graph {
        Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn order_is_degree_then_id() {
        // Graden: 0→1, 1→3, 2→2, 3→2
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(greedy_order(&g), vec![1, 2, 3, 0]);
    }

    #[test]
    fn rcl_alpha_zero_keeps_only_minimum() {
        let cands = vec![(3, 0), (1, 1), (5, 2), (1, 3)];
        assert_eq!(restricted_candidates(&cands, 0.0), vec![(1, 1), (1, 3)]);
    }

    #[test]
    fn rcl_alpha_one_keeps_everything() {
        let cands = vec![(3, 0), (1, 1), (5, 2), (1, 3)];
        assert_eq!(restricted_candidates(&cands, 1.0), cands);
    }

    #[test]
    fn rcl_half_window() {
        // Drempel = 1 + 0.5·(5 − 1) = 3
        let cands = vec![(3, 0), (1, 1), (5, 2), (4, 3)];
        assert_eq!(restricted_candidates(&cands, 0.5), vec![(3, 0), (1, 1)]);
        assert!(restricted_candidates(&[], 0.5).is_empty());
    }

    #[test]
    fn randomized_colors_everything() {
        let g = triangle();
        let nb = Neighbourhood::new(&g);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for &alpha in &[0.0, 0.3, 1.0] {
            let sol = greedy_randomized(&nb, 2, 1, alpha, &mut rng).unwrap();
            assert!(sol.is_complete());
            let mut colors = sol.into_colors();
            colors.sort_unstable();
            assert_eq!(colors, vec![1, 3, 5]);
        }
    }

    /// Referentie zonder incrementele cache: herberekent elke stap alles.
    fn naive_randomized<R: Rng>(
        nb: &Neighbourhood,
        p: usize,
        q: usize,
        alpha: f64,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut sol = Solution::new(nb, p, q);
        while !sol.is_complete() {
            let cands: Vec<Candidate> = (0..nb.n())
                .filter(|&v| !sol.is_colored(v))
                .map(|v| (sol.smallest_valid_color(v).unwrap(), v))
                .collect();
            let rcl = restricted_candidates(&cands, alpha);
            let (c, v) = rcl[rng.gen_range(0..rcl.len())];
            sol.assign(v, c);
        }
        sol.into_colors()
    }

    #[test]
    fn incremental_matches_full_recompute() {
        let g = Graph::from_edge_list(
            8,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 0), (0, 3), (6, 7)],
        )
        .unwrap();
        let nb = Neighbourhood::new(&g);
        for seed in 0..10 {
            for &alpha in &[0.0, 0.4, 1.0] {
                let mut a = ChaCha8Rng::seed_from_u64(seed);
                let mut b = ChaCha8Rng::seed_from_u64(seed);
                let fast = greedy_randomized(&nb, 2, 1, alpha, &mut a).unwrap();
                assert_eq!(fast.into_colors(), naive_randomized(&nb, 2, 1, alpha, &mut b));
            }
        }
    }
}
