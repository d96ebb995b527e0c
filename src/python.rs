// src/python.rs
//! Python-bindings (module `_native`), alleen met feature `python`.

use crate::error::Error;
use crate::{reader, GraspSolver, GreedySolver, Params, ReactiveGrasp};
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => PyErr::new::<PyIOError, _>(e.to_string()),
            Error::Parse { .. } | Error::InvalidVertex { .. } => {
                PyErr::new::<PyValueError, _>(err.to_string())
            }
            Error::ColorSearchExhausted { .. } => PyErr::new::<PyRuntimeError, _>(err.to_string()),
        }
    }
}

fn params_of(py_params: &Py<Params>) -> Params {
    Python::with_gil(|py| py_params.borrow(py).clone())
}

/// Greedy-kleuring; geeft `(grootste kleur, kleuren)` terug.
#[pyfunction]
#[pyo3(signature = (instance_path, py_params))]
fn solve_greedy_py(instance_path: String, py_params: Py<Params>) -> PyResult<(usize, Vec<usize>)> {
    let graph = reader::read_auto(&instance_path)?;
    let p = params_of(&py_params);
    let colors = GreedySolver::from_params(&graph, &p).solve()?;
    Ok((crate::output::max_color(&colors), colors))
}

/// GRASP; geeft `(beste, gemiddelde, kleuren)` terug.
#[pyfunction]
#[pyo3(signature = (instance_path, py_params))]
fn solve_grasp_py(
    instance_path: String,
    py_params: Py<Params>,
) -> PyResult<(usize, f64, Vec<usize>)> {
    let graph = reader::read_auto(&instance_path)?;
    let p = params_of(&py_params);
    let mut solver = GraspSolver::from_params(&graph, &p);
    let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
    let colors = solver.solve(&mut rng)?;
    Ok((
        solver.best_objective().unwrap_or(0),
        solver.average_objective(),
        colors,
    ))
}

/// Reactieve GRASP; geeft `(beste, beste alpha, gemiddelde, kleuren)` terug.
#[pyfunction]
#[pyo3(signature = (instance_path, py_params))]
fn solve_reactive_py(
    instance_path: String,
    py_params: Py<Params>,
) -> PyResult<(usize, f64, f64, Vec<usize>)> {
    let graph = reader::read_auto(&instance_path)?;
    let p = params_of(&py_params);
    let mut solver = ReactiveGrasp::from_params(&graph, &p);
    let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
    let colors = solver.solve(&mut rng)?;
    Ok((
        solver.best_objective().unwrap_or(0),
        solver.best_alpha(),
        solver.average_objective(),
        colors,
    ))
}

/// Leest een graafbestand en geeft `(n, m)` terug.
#[pyfunction]
fn parse_graph_py(instance_path: String) -> PyResult<(usize, usize)> {
    let graph = reader::read_auto(&instance_path)?;
    Ok((graph.n(), graph.m()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Params>()?;
    m.add_function(wrap_pyfunction!(solve_greedy_py, m)?)?;
    m.add_function(wrap_pyfunction!(solve_grasp_py, m)?)?;
    m.add_function(wrap_pyfunction!(solve_reactive_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_graph_py, m)?)?;
    Ok(())
}
