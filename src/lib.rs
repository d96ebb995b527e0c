// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod alpha;
pub mod construct;
pub mod error;
pub mod graph;
pub mod grasp;
pub mod greedy;
pub mod neighbour;
pub mod output;
pub mod params;
pub mod reactive;
pub mod reader;
pub mod results;
pub mod solution;
pub mod validate;

#[cfg(feature = "parallel_grasp")]
pub mod parallel;

#[cfg(feature = "python")]
mod python;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use error::{Error, Result};
pub use graph::Graph;
pub use grasp::GraspSolver;
pub use greedy::GreedySolver;
pub use params::Params;
pub use reactive::{Phase, ReactiveGrasp};
