//! src/output.rs
//!
//! Schrijft oplossingen weg: een tekstbestand met één `v kleur` per regel,
//! een edge-lijst voor de csacademy graph editor en een samenvatting op stdout.

use crate::graph::Graph;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Grootste kleur in `colors`, 0 voor een lege kleuring.
#[inline]
pub fn max_color(colors: &[usize]) -> usize {
    colors.iter().copied().max().unwrap_or(0)
}

/// Schrijft de kleuring: `#`-kopregels gevolgd door `"<v> <kleur>"` per knoop.
pub fn write_solution<W: Write>(mut writer: W, colors: &[usize]) -> io::Result<()> {
    writeln!(writer, "# L(p,q)-kleuring")?;
    writeln!(writer, "# grootste kleur: {}", max_color(colors))?;
    writeln!(writer, "# aantal knopen: {}", colors.len())?;
    writeln!(writer)?;
    for (v, c) in colors.iter().enumerate() {
        writeln!(writer, "{v} {c}")?;
    }
    writer.flush()
}

/// Eén regel `"u(c_u) v(c_v)"` per kant; ongerichte kanten eenmaal.
/// Plak de uitvoer in <https://csacademy.com/app/graph_editor/>.
pub fn visualization(graph: &Graph, colors: &[usize]) -> String {
    let mut out = String::new();
    let mut emitted: HashSet<(usize, usize)> = HashSet::new();
    let color = |v: usize| colors.get(v).copied().unwrap_or(0);

    for u in 0..graph.n() {
        for &v in graph.adj_row(u) {
            if !graph.is_directed() && !emitted.insert((u.min(v), u.max(v))) {
                continue;
            }
            let _ = writeln!(out, "{u}({}) {v}({})", color(u), color(v));
        }
    }
    out
}

/// Drukt een leesbare samenvatting af op stdout.
pub fn print_solution(colors: &[usize]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = render_summary(&mut out, colors);
}

fn render_summary<W: Write>(out: &mut W, colors: &[usize]) -> io::Result<()> {
    writeln!(out, "========== L(p,q)-kleuring ==========")?;
    writeln!(out, "grootste kleur: {}", max_color(colors))?;
    writeln!(out, "aantal knopen:  {}", colors.len())?;
    for (v, c) in colors.iter().enumerate() {
        writeln!(out, "knoop {v}: kleur {c}")?;
    }
    writeln!(out, "=====================================")
}
