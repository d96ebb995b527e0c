//! src/graph.rs
//!
//! Representeert een statische graaf als adjacency-lijsten, met optionele
//! knoop- en kantgewichten. Na het inlezen wordt de graaf niet meer gewijzigd;
//! de heuristieken vragen alleen buren, afstand-2 buren en graden op.
//!
//! Elke accessor die een knoop-id krijgt, geeft `Err(Error::InvalidVertex)`
//! terug voor een id buiten `[0, n)`. Er zijn geen stille sentinelwaarden.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Een (on)gerichte graaf met geordende uit-burenlijsten.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    directed: bool,
    /// `adj[v]` bevat de uit-buren van `v` in volgorde van toevoegen.
    adj: Vec<Vec<usize>>,
    vertex_weights: Vec<i64>,
    /// Gewicht per kant; sleutel is `(min, max)` voor ongerichte grafen.
    edge_weights: HashMap<(usize, usize), i64>,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf met `n` geïsoleerde knopen.
    pub fn new(n: usize, directed: bool) -> Self {
        Self {
            directed,
            adj: vec![Vec::new(); n],
            vertex_weights: vec![0; n],
            edge_weights: HashMap::new(),
        }
    }

    /// Ongerichte graaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self::new(n, false)
    }

    /// Bouwt een ongerichte graaf op basis van een lijst van kanten (0-gebaseerd).
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /*────────── Getters ──────────*/

    /// Aantal knopen.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Aantal verschillende kanten (parallelle kanten tellen eenmaal).
    pub fn m(&self) -> usize {
        self.edge_weights.len()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn is_valid_vertex(&self, v: usize) -> bool {
        v < self.n()
    }

    /// Ongecontroleerde variant van [`Self::neighbors`] voor interne lussen.
    #[inline]
    pub(crate) fn adj_row(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Geeft de uit-buren van `v` terug, in volgorde van toevoegen.
    pub fn neighbors(&self, v: usize) -> Result<&[usize]> {
        self.check(v)?;
        Ok(&self.adj[v])
    }

    /// Graad (aantal uit-buren) van `v`.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check(v)?;
        Ok(self.adj[v].len())
    }

    pub fn vertex_weight(&self, v: usize) -> Result<i64> {
        self.check(v)?;
        Ok(self.vertex_weights[v])
    }

    /// Gewicht van kant `(u, v)`, of `None` als die kant niet bestaat.
    pub fn edge_weight(&self, u: usize, v: usize) -> Result<Option<i64>> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.edge_weights.get(&self.edge_key(u, v)).copied())
    }

    /// Kortste-padlengte van `u` naar `v` via BFS.
    /// `Some(0)` als `u == v`, `None` als `v` onbereikbaar is.
    pub fn distance(&self, u: usize, v: usize) -> Result<Option<usize>> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Ok(Some(0));
        }

        let mut dist: Vec<Option<usize>> = vec![None; self.n()];
        let mut queue = VecDeque::new();
        dist[u] = Some(0);
        queue.push_back(u);

        while let Some(cur) = queue.pop_front() {
            let d = dist[cur].unwrap_or(0) + 1;
            for &w in &self.adj[cur] {
                if dist[w].is_none() {
                    if w == v {
                        return Ok(Some(d));
                    }
                    dist[w] = Some(d);
                    queue.push_back(w);
                }
            }
        }
        Ok(None)
    }

    /// Knopen op precies twee stappen van `v`: buren van buren, zonder `v`
    /// zelf en zonder de directe buren. Oplopend gesorteerd.
    ///
    /// Deze methode rekent bij elke aanroep opnieuw; de solvers gebruiken
    /// [`crate::neighbour::Neighbourhood`], dat alles eenmaal voorberekent.
    pub fn vertices_at_distance2(&self, v: usize) -> Result<Vec<usize>> {
        self.check(v)?;
        let mut seen = bitvec![0; self.n()];
        Ok(self.distance2_into(v, &mut seen))
    }

    /// Kern van [`Self::vertices_at_distance2`]; `seen` moet leeg zijn en
    /// is dat na afloop weer.
    pub(crate) fn distance2_into(&self, v: usize, seen: &mut BitSlice) -> Vec<usize> {
        seen.set(v, true);
        for &u in &self.adj[v] {
            seen.set(u, true);
        }

        let mut result = Vec::new();
        for &u in &self.adj[v] {
            for &w in &self.adj[u] {
                if !seen[w] {
                    seen.set(w, true);
                    result.push(w);
                }
            }
        }

        seen.set(v, false);
        for &u in &self.adj[v] {
            seen.set(u, false);
        }
        for &w in &result {
            seen.set(w, false);
        }
        result.sort_unstable();
        result
    }

    /*────────── Mutators ──────────*/

    /// Voegt kant `(u, v)` toe met gewicht 1.
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_weighted_edge(u, v, 1)
    }

    /// Voegt kant `(u, v)` toe; in een ongerichte graaf ook `v → u`.
    /// Het gewicht van een bestaande kant wordt overschreven.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.adj[u].push(v);
        if !self.directed && u != v {
            self.adj[v].push(u);
        }
        let key = self.edge_key(u, v);
        self.edge_weights.insert(key, weight);
        Ok(())
    }

    pub fn set_vertex_weight(&mut self, v: usize, weight: i64) -> Result<()> {
        self.check(v)?;
        self.vertex_weights[v] = weight;
        Ok(())
    }

    /*────────── Helpers ──────────*/

    #[inline]
    fn check(&self, v: usize) -> Result<()> {
        if self.is_valid_vertex(v) {
            Ok(())
        } else {
            Err(Error::InvalidVertex { vertex: v, n: self.n() })
        }
    }

    #[inline]
    fn edge_key(&self, u: usize, v: usize) -> (usize, usize) {
        if !self.directed && u > v {
            (v, u)
        } else {
            (u, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path5() -> Graph {
        Graph::from_edge_list(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn path_oracle() {
        let g = path5();
        assert_eq!(g.neighbors(2).unwrap(), &[1, 3]);
        assert_eq!(g.vertices_at_distance2(2).unwrap(), vec![0, 4]);
        assert_eq!(g.distance(0, 4).unwrap(), Some(4));
        assert_eq!(g.distance(3, 3).unwrap(), Some(0));
        assert!(matches!(
            g.distance(0, 5),
            Err(Error::InvalidVertex { vertex: 5, n: 5 })
        ));
    }

    #[test]
    fn invalid_vertex_everywhere() {
        let mut g = path5();
        assert!(g.add_edge(0, 7).is_err());
        assert!(g.set_vertex_weight(5, 3).is_err());
        assert!(g.neighbors(9).is_err());
        assert!(g.degree(5).is_err());
        assert!(g.vertices_at_distance2(5).is_err());
        // Een mislukte toevoeging laat de graaf ongemoeid.
        assert_eq!(g.m(), 4);
    }

    #[test]
    fn unreachable_is_none() {
        let g = Graph::from_edge_list(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(g.distance(0, 3).unwrap(), None);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::new(3, true);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.degree(1).unwrap(), 1);
        assert_eq!(g.vertices_at_distance2(0).unwrap(), vec![2]);
        assert_eq!(g.distance(2, 0).unwrap(), None);
        assert_eq!(g.edge_weight(1, 0).unwrap(), None);
    }

    #[test]
    fn weights_are_canonical_for_undirected() {
        let mut g = Graph::with_vertices(3);
        g.add_weighted_edge(2, 0, 7).unwrap();
        g.set_vertex_weight(1, -4).unwrap();
        assert_eq!(g.edge_weight(0, 2).unwrap(), Some(7));
        assert_eq!(g.edge_weight(2, 0).unwrap(), Some(7));
        assert_eq!(g.edge_weight(0, 1).unwrap(), None);
        assert_eq!(g.vertex_weight(1).unwrap(), -4);
        assert_eq!(g.vertex_weight(0).unwrap(), 0);
    }

    #[test]
    fn distance2_excludes_triangle_neighbours() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        // 1 en 2 zijn directe buren van 0; alleen 3 ligt op afstand 2.
        assert_eq!(g.vertices_at_distance2(0).unwrap(), vec![3]);
    }
}
