//! src/solution.rs
//!
//! Representeert een (gedeeltelijke) L(p,q)-kleuring tijdens de constructie:
//! een kleur per knoop (0 = nog ongekleurd), een bitset van gekleurde knopen
//! en een gecachte maximale kleur. Dit geeft O(1) toegang tot het doel
//! (de grootste gebruikte kleur) en O(1) updates per toekenning.

use crate::error::{Error, Result};
use crate::neighbour::Neighbourhood;
use bitvec::prelude::*;

/// Kleurwaarde van een nog niet gekleurde knoop.
pub const UNCOLORED: usize = 0;

/// Een veranderlijke kleuring, gebonden aan de buurtinformatie van één graaf.
#[derive(Clone, Debug)]
pub struct Solution<'n> {
    nb: &'n Neighbourhood,
    p: usize,
    q: usize,
    colors: Vec<usize>,
    colored: BitVec,
    size: usize,
    max_color: usize,
}

impl<'n> Solution<'n> {
    /*────────── Constructors ──────────*/

    /// Creëert een lege kleuring waarin buren minstens `p` en afstand-2
    /// knopen minstens `q` van elkaar moeten verschillen.
    pub fn new(nb: &'n Neighbourhood, p: usize, q: usize) -> Self {
        let n = nb.n();
        Self {
            nb,
            p,
            q,
            colors: vec![UNCOLORED; n],
            colored: bitvec![0; n],
            size: 0,
            max_color: 0,
        }
    }

    /*────────── Queries ──────────*/

    /// Aantal gekleurde knopen.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.size == self.colors.len()
    }

    /// Grootste toegekende kleur; 0 zolang niets gekleurd is.
    #[inline]
    pub fn max_color(&self) -> usize {
        self.max_color
    }

    #[inline]
    pub fn color(&self, v: usize) -> usize {
        self.colors[v]
    }

    #[inline]
    pub fn is_colored(&self, v: usize) -> bool {
        self.colored[v]
    }

    #[inline]
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    #[inline]
    pub fn neighbourhood(&self) -> &'n Neighbourhood {
        self.nb
    }

    /// Bovengrens voor de kleurzoektocht. Elke gekleurde buur sluit hooguit
    /// `2·max(p,q) − 1` kleuren uit, dus deze grens wordt nooit gehaald.
    /// Verzadigt op `usize::MAX`.
    pub fn color_bound(&self) -> usize {
        (self.colors.len() + 1)
            .saturating_mul(2)
            .saturating_mul(self.p.max(self.q).max(1))
    }

    /// Kleinste kleur `c ≥ 1` zodat elke gekleurde directe buur `u`
    /// `|c − color(u)| ≥ p` heeft en elke gekleurde afstand-2 knoop `≥ q`.
    ///
    /// Verzamelt de verboden intervallen, sorteert ze en veegt vanaf 1 omhoog.
    pub fn smallest_valid_color(&self, v: usize) -> Result<usize> {
        let mut blocked: Vec<(usize, usize)> = Vec::new();
        self.push_blocked(self.nb.direct(v), self.p, &mut blocked);
        self.push_blocked(self.nb.distance2(v), self.q, &mut blocked);
        blocked.sort_unstable();

        let bound = self.color_bound();
        let mut color = 1;
        for (lo, hi) in blocked {
            if lo > color {
                break;
            }
            color = color.max(hi.saturating_add(1));
            if color > bound {
                return Err(Error::ColorSearchExhausted { vertex: v, bound });
            }
        }
        Ok(color)
    }

    /// Voegt voor elke gekleurde `u` het verboden interval
    /// `[color(u) − (sep − 1), color(u) + (sep − 1)]` toe, afgekapt op 1.
    fn push_blocked(&self, vertices: &[usize], sep: usize, out: &mut Vec<(usize, usize)>) {
        if sep == 0 {
            return;
        }
        let reach = sep - 1;
        for &u in vertices {
            if self.colored[u] {
                let c = self.colors[u];
                out.push((c.saturating_sub(reach).max(1), c.saturating_add(reach)));
            }
        }
    }

    /*────────── Mutators ──────────*/

    /// Kent kleur `color` toe aan de ongekleurde knoop `v`.
    pub fn assign(&mut self, v: usize, color: usize) {
        debug_assert!(color != UNCOLORED, "kleuren zijn positief");
        debug_assert!(!self.colored[v], "knoop {v} is al gekleurd");
        self.colored.set(v, true);
        self.size += 1;
        self.colors[v] = color;
        self.max_color = self.max_color.max(color);
    }

    /// Levert de kleurvector op.
    pub fn into_colors(self) -> Vec<usize> {
        self.colors
    }
}
