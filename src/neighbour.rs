// Bestand: src/neighbour.rs
//!
//! Voorberekende buurtinformatie voor één `solve()`-aanroep.
//!
//! De graaf verandert niet tijdens het oplossen, dus de afstand-1 en afstand-2
//! lijsten worden eenmaal opgebouwd en door alle iteraties gedeeld. Daarnaast
//! houden we per knoop de *afhankelijken* bij: de knopen wier kleinste geldige
//! kleur kan veranderen wanneer deze knoop een kleur krijgt.

use crate::graph::Graph;
use bitvec::prelude::*;

/// Afstand-1, afstand-2 en omgekeerde (afhankelijke) lijsten per knoop.
#[derive(Clone, Debug)]
pub struct Neighbourhood {
    direct: Vec<Vec<usize>>,
    distance2: Vec<Vec<usize>>,
    dependents: Vec<Vec<usize>>,
}

impl Neighbourhood {
    /// Bouwt de buurtlijsten op in O(Σ deg²).
    pub fn new(graph: &Graph) -> Self {
        let n = graph.n();
        let mut seen = bitvec![0; n];
        let mut direct = Vec::with_capacity(n);
        let mut distance2 = Vec::with_capacity(n);

        for v in 0..n {
            // Dubbele kanten en zelf-lussen leggen geen extra eisen op.
            let mut row = Vec::with_capacity(graph.adj_row(v).len());
            for &u in graph.adj_row(v) {
                if u != v && !seen[u] {
                    seen.set(u, true);
                    row.push(u);
                }
            }
            for &u in &row {
                seen.set(u, false);
            }
            direct.push(row);
            distance2.push(graph.distance2_into(v, &mut seen));
        }

        // w hangt af van v als v in N1(w) of N2(w) zit.
        let mut dependents = vec![Vec::new(); n];
        for w in 0..n {
            for &v in direct[w].iter().chain(distance2[w].iter()) {
                dependents[v].push(w);
            }
        }

        Self {
            direct,
            distance2,
            dependents,
        }
    }

    /// Aantal knopen.
    #[inline]
    pub fn n(&self) -> usize {
        self.direct.len()
    }

    /// Directe (uit-)buren van `v`, zonder duplicaten of `v` zelf.
    #[inline]
    pub fn direct(&self, v: usize) -> &[usize] {
        &self.direct[v]
    }

    /// Knopen op afstand precies 2 van `v`, oplopend gesorteerd.
    #[inline]
    pub fn distance2(&self, v: usize) -> &[usize] {
        &self.distance2[v]
    }

    /// Knopen `w` met `v ∈ N1(w) ∪ N2(w)`.
    #[inline]
    pub fn dependents(&self, v: usize) -> &[usize] {
        &self.dependents[v]
    }
}
