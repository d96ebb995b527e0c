//! src/reader.rs
//!
//! Inlezen van grafen uit drie tekstformaten: een eenvoudige kantenlijst
//! (`n m` gevolgd door `u v`-regels), DIMACS (`p`/`e`-regels) en een
//! adjacency-lijst (`v: a b c`). Alle readers bouwen een ongerichte graaf.

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;
use tracing::info;

/// Herkende bestandsformaten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    EdgeList,
    Dimacs,
    AdjacencyList,
}

/*────────── Kantenlijst ──────────*/

/// Leest `n m` gevolgd door `m` regels `u v`. Regels die met `#` beginnen
/// worden overgeslagen. Ids in `1..=n` worden naar 0-gebaseerd verschoven,
/// ids in `0..n` blijven staan.
pub fn read_edge_list<R: Read>(reader: R) -> Result<Graph> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (idx, line) in io::BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lineno = idx + 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        match header {
            None => {
                let n = parse_number(parts.next(), lineno, "aantal knopen")?;
                let m = parse_number(parts.next(), lineno, "aantal kanten")?;
                edges.reserve(m);
                header = Some((n, m));
            }
            Some((_, m)) if edges.len() < m => {
                let u = parse_number(parts.next(), lineno, "eerste eindpunt")?;
                let v = parse_number(parts.next(), lineno, "tweede eindpunt")?;
                edges.push((u, v));
            }
            Some(_) => break,
        }
    }

    let (n, _) = header.ok_or_else(|| Error::parse(0, "kopregel `n m` ontbreekt"))?;
    normalize_ids(&mut edges, n)?;
    let graph = Graph::from_edge_list(n, &edges)?;
    info!(n = graph.n(), m = graph.m(), "kantenlijst ingelezen");
    Ok(graph)
}

/// Verschuift 1-gebaseerde ids naar 0-gebaseerd wanneer de grootste id
/// gelijk is aan `n` en geen id 0 voorkomt.
fn normalize_ids(edges: &mut [(usize, usize)], n: usize) -> Result<()> {
    let Some(max) = edges.iter().map(|&(u, v)| u.max(v)).max() else {
        return Ok(());
    };
    if max < n {
        return Ok(());
    }
    let min = edges.iter().map(|&(u, v)| u.min(v)).min().unwrap_or(0);
    if min >= 1 && max == n {
        for (u, v) in edges.iter_mut() {
            *u -= 1;
            *v -= 1;
        }
        return Ok(());
    }
    Err(Error::parse(
        0,
        format!("knoopids buiten bereik: min {min}, max {max} voor n={n}"),
    ))
}

/*────────── DIMACS ──────────*/

/// Leest een DIMACS-bestand: `c`-commentaar, één `p <fmt> n m` kopregel en
/// 1-gebaseerde `e u v` kanten. Andere regels worden genegeerd.
pub fn read_dimacs<R: Read>(reader: R) -> Result<Graph> {
    let mut graph: Option<Graph> = None;

    for (idx, line) in io::BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lineno = idx + 1;
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        let parts: Vec<_> = line.split_whitespace().collect();
        match parts[0] {
            "p" => {
                let n = parse_number(parts.get(2).copied(), lineno, "aantal knopen")?;
                parse_number::<usize>(parts.get(3).copied(), lineno, "aantal kanten")?;
                graph = Some(Graph::with_vertices(n));
            }
            "e" => {
                let g = graph
                    .as_mut()
                    .ok_or_else(|| Error::parse(lineno, "kant `e` vóór kopregel `p`"))?;
                let u: usize = parse_number(parts.get(1).copied(), lineno, "eerste eindpunt")?;
                let v: usize = parse_number(parts.get(2).copied(), lineno, "tweede eindpunt")?;
                if u == 0 || v == 0 || u > g.n() || v > g.n() {
                    return Err(Error::parse(
                        lineno,
                        format!("kant ({u}, {v}) buiten bereik voor n={}", g.n()),
                    ));
                }
                g.add_edge(u - 1, v - 1)?;
            }
            _ => {}
        }
    }

    let graph = graph.ok_or_else(|| Error::parse(0, "DIMACS-kopregel `p` ontbreekt"))?;
    info!(n = graph.n(), m = graph.m(), "DIMACS-graaf ingelezen");
    Ok(graph)
}

/*────────── Adjacency-lijst ──────────*/

/// Leest `n` gevolgd door regels `v: a b c` (0-gebaseerd); regels die met
/// `#` beginnen worden overgeslagen. Elke buur levert
/// een kant op; dubbel opgegeven kanten tellen eenmaal in [`Graph::m`].
pub fn read_adjacency_list<R: Read>(reader: R) -> Result<Graph> {
    let mut graph: Option<Graph> = None;

    for (idx, line) in io::BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lineno = idx + 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(g) = graph.as_mut() else {
            let n = parse_number(line.split_whitespace().next(), lineno, "aantal knopen")?;
            graph = Some(Graph::with_vertices(n));
            continue;
        };

        let (head, tail) = line
            .split_once(':')
            .ok_or_else(|| Error::parse(lineno, "verwacht `v: buren`"))?;
        let v: usize = parse_number(Some(head.trim()), lineno, "knoop")?;
        for token in tail.split_whitespace() {
            let w: usize = parse_number(Some(token), lineno, "buur")?;
            g.add_edge(v, w).map_err(|e| Error::parse(lineno, e.to_string()))?;
        }
    }

    let graph = graph.ok_or_else(|| Error::parse(0, "aantal knopen ontbreekt"))?;
    info!(n = graph.n(), m = graph.m(), "adjacency-lijst ingelezen");
    Ok(graph)
}

/*────────── Automatische detectie ──────────*/

/// Bepaalt het formaat op basis van de extensie en anders de eerste
/// niet-lege regel die niet met `#` begint. Een kopregel met alleen `n`
/// gevolgd door een regel met `:` is ook een adjacency-lijst.
pub fn detect_format(path: Option<&Path>, content: &str) -> Format {
    if let Some(ext) = path.and_then(Path::extension).and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("dimacs") || ext.eq_ignore_ascii_case("col") {
            return Format::Dimacs;
        }
    }

    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));
    let first = lines.next();
    let second = lines.next();
    match first {
        Some(l) if l.starts_with('c') || l.starts_with('p') => Format::Dimacs,
        Some(l) if l.contains(':') => Format::AdjacencyList,
        Some(l) if l.split_whitespace().count() == 1 && second.is_some_and(|s| s.contains(':')) => {
            Format::AdjacencyList
        }
        _ => Format::EdgeList,
    }
}

/// Leest `content` in het opgegeven formaat.
pub fn read_str(content: &str, format: Format) -> Result<Graph> {
    let bytes = content.as_bytes();
    match format {
        Format::EdgeList => read_edge_list(bytes),
        Format::Dimacs => read_dimacs(bytes),
        Format::AdjacencyList => read_adjacency_list(bytes),
    }
}

/// Leest een graafbestand en kiest het formaat automatisch.
pub fn read_auto<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let format = detect_format(Some(path), &content);
    info!(path = %path.display(), ?format, "graafbestand gedetecteerd");
    read_str(&content, format)
}

/// Alias van [`read_auto`].
#[inline]
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    read_auto(path)
}

/*────────── Helpers ──────────*/

fn parse_number<T: std::str::FromStr>(token: Option<&str>, line: usize, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| Error::parse(line, format!("{what} ontbreekt")))?;
    token
        .parse()
        .map_err(|_| Error::parse(line, format!("ongeldig {what}: `{token}`")))
}
