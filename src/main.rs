// src/main.rs
//! Command-line driver: leest een graaf, kleurt hem met de gekozen
//! heuristiek, valideert het resultaat en schrijft de uitvoerbestanden.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lpqcol::{
    output, params, reader,
    results::{ResultLogger, RunRecord},
    validate, GraspSolver, GreedySolver, Params, ReactiveGrasp,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Greedy,
    Grasp,
    Reactive,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Grasp => "grasp",
            Algorithm::Reactive => "reactive",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lpqcol")]
#[command(about = "L(p,q)-kleuring met greedy, GRASP en reactieve GRASP", long_about = None)]
struct Cli {
    /// Graafbestand (kantenlijst, DIMACS of adjacency-lijst)
    #[arg(short, long)]
    input: PathBuf,

    /// Schrijf de kleuring naar dit bestand
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Schrijf een csacademy-visualisatie naar dit bestand
    #[arg(short = 'v', long = "viz")]
    viz: Option<PathBuf>,

    #[arg(short, default_value_t = params::DEFAULT_P)]
    p: usize,

    #[arg(short, default_value_t = params::DEFAULT_Q)]
    q: usize,

    /// Random seed; 0 leidt een seed af van de klok
    #[arg(short, long, default_value_t = params::DEFAULT_SEED)]
    seed: u64,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Greedy)]
    algorithm: Algorithm,

    #[arg(long, default_value_t = params::DEFAULT_ALPHA)]
    alpha: f64,

    /// Aantal iteraties (GRASP of reactief)
    #[arg(long = "iter")]
    iterations: Option<usize>,

    /// Blokgrootte voor reactieve GRASP
    #[arg(long = "block", default_value_t = params::DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Kandidaat-alpha's voor reactieve GRASP, bv. `0.1,0.3,0.5`
    #[arg(long, value_delimiter = ',')]
    alphas: Vec<f64>,

    /// CSV-logbestand voor resultaten
    #[arg(long, default_value = "results/results.csv")]
    csv: PathBuf,

    /// Schakel het CSV-logboek uit
    #[arg(long, default_value_t = false)]
    no_csv: bool,

    /// Verdeel de iteraties over alle cores
    #[cfg(feature = "parallel_grasp")]
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

impl Cli {
    fn params(&self) -> Params {
        let mut p = Params {
            alpha: self.alpha,
            iterations: self.iterations.unwrap_or(params::DEFAULT_ITERATIONS),
            ..Params::default()
        };
        p.with_separation(self.p, self.q);
        let alphas = if self.alphas.is_empty() {
            params::DEFAULT_REACTIVE_ALPHAS.to_vec()
        } else {
            self.alphas.clone()
        };
        let total = self
            .iterations
            .unwrap_or(params::DEFAULT_REACTIVE_ITERATIONS);
        p.enable_reactive(&alphas, self.block_size, total);
        p.seed = if self.seed == 0 { clock_seed() } else { self.seed };
        p
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(params::DEFAULT_SEED)
}

/// Resultaat van één run, los van de gebruikte heuristiek.
struct Outcome {
    colors: Vec<usize>,
    alpha: Option<f64>,
    iterations: Option<usize>,
    block_size: Option<usize>,
    best_alpha: Option<f64>,
    average: Option<f64>,
}

fn run(cli: &Cli, graph: &lpqcol::Graph, params: &Params) -> Result<Outcome> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    #[cfg(feature = "parallel_grasp")]
    let parallel = cli.parallel;
    #[cfg(not(feature = "parallel_grasp"))]
    let parallel = false;

    let outcome = match cli.algorithm {
        Algorithm::Greedy => Outcome {
            colors: GreedySolver::from_params(graph, params).solve()?,
            alpha: None,
            iterations: None,
            block_size: None,
            best_alpha: None,
            average: None,
        },
        Algorithm::Grasp => {
            let mut solver = GraspSolver::from_params(graph, params);
            let colors = if parallel {
                solve_grasp_parallel(&mut solver, params.seed)?
            } else {
                solver.solve(&mut rng)?
            };
            Outcome {
                colors,
                alpha: Some(solver.alpha()),
                iterations: Some(solver.iterations()),
                block_size: None,
                best_alpha: None,
                average: Some(solver.average_objective()),
            }
        }
        Algorithm::Reactive => {
            let mut solver = ReactiveGrasp::from_params(graph, params);
            let colors = if parallel {
                solve_reactive_parallel(&mut solver, params.seed)?
            } else {
                solver.solve(&mut rng)?
            };
            Outcome {
                colors,
                alpha: None,
                iterations: Some(solver.total_iterations()),
                block_size: Some(solver.block_size()),
                best_alpha: Some(solver.best_alpha()),
                average: Some(solver.average_objective()),
            }
        }
    };
    Ok(outcome)
}

#[cfg(feature = "parallel_grasp")]
fn solve_grasp_parallel(solver: &mut GraspSolver<'_>, seed: u64) -> Result<Vec<usize>> {
    Ok(lpqcol::parallel::solve_grasp_par(solver, seed)?)
}

#[cfg(feature = "parallel_grasp")]
fn solve_reactive_parallel(solver: &mut ReactiveGrasp<'_>, seed: u64) -> Result<Vec<usize>> {
    Ok(lpqcol::parallel::solve_reactive_par(solver, seed)?)
}

#[cfg(not(feature = "parallel_grasp"))]
fn solve_grasp_parallel(_: &mut GraspSolver<'_>, _: u64) -> Result<Vec<usize>> {
    bail!("gebouwd zonder feature `parallel_grasp`")
}

#[cfg(not(feature = "parallel_grasp"))]
fn solve_reactive_parallel(_: &mut ReactiveGrasp<'_>, _: u64) -> Result<Vec<usize>> {
    bail!("gebouwd zonder feature `parallel_grasp`")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let params = cli.params();

    let graph = reader::read_graph_file(&cli.input)
        .with_context(|| format!("kan graaf niet lezen uit {}", cli.input.display()))?;
    info!(
        n = graph.n(),
        m = graph.m(),
        p = params.p,
        q = params.q,
        seed = params.seed,
        algorithm = cli.algorithm.name(),
        "start"
    );

    let start = Instant::now();
    let outcome = run(&cli, &graph, &params)?;
    let elapsed = start.elapsed().as_secs_f64();
    let best = output::max_color(&outcome.colors);
    info!(best, time_s = elapsed, "klaar");

    let violations = validate::validate_coloring(&graph, &outcome.colors, params.p, params.q);
    for v in &violations {
        warn!(%v, "schending");
    }

    if let Some(path) = &cli.output {
        let file = File::create(path)
            .with_context(|| format!("kan {} niet aanmaken", path.display()))?;
        output::write_solution(BufWriter::new(file), &outcome.colors)?;
        info!(path = %path.display(), "kleuring opgeslagen");
    }
    if let Some(path) = &cli.viz {
        std::fs::write(path, output::visualization(&graph, &outcome.colors))
            .with_context(|| format!("kan {} niet schrijven", path.display()))?;
        info!(path = %path.display(), "visualisatie opgeslagen (csacademy graph editor)");
    }
    if cli.output.is_none() && cli.viz.is_none() {
        output::print_solution(&outcome.colors);
    }

    if !cli.no_csv {
        let logger = ResultLogger::new(&cli.csv)
            .with_context(|| format!("kan {} niet openen", cli.csv.display()))?;
        let instance = cli
            .input
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        logger.log(&RunRecord {
            instance,
            p: params.p,
            q: params.q,
            algorithm: cli.algorithm.name().to_string(),
            alpha: outcome.alpha,
            iterations: outcome.iterations,
            block_size: outcome.block_size,
            seed: params.seed,
            time_s: elapsed,
            best_solution: best,
            best_alpha: outcome.best_alpha,
            average_solution: outcome.average,
        })?;
    }

    if !violations.is_empty() {
        error!(count = violations.len(), "ongeldige kleuring");
        bail!("kleuring schendt {} voorwaarde(n)", violations.len());
    }
    Ok(())
}
