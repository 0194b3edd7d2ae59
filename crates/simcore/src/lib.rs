//! Core data model for the tyre compound simulation
//!
//! This crate provides:
//! - Compound and race configuration inputs
//! - Per-compound simulation output series
//! - The model traits implemented by lap-stepping simulators

pub mod traits;

pub use traits::*;
