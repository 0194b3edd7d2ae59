//! Chart output for simulation results
//!
//! Draws the collected per-compound series as two stacked line charts
//! (grip vs lap, temperature vs lap) in a single PNG.

pub mod chart;

pub use chart::*;
