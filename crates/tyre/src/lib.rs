//! Tyre compound simulation
//!
//! This crate provides:
//! - A per-lap grip degradation and temperature model for one compound
//! - Batch simulation of a compound list over a race distance

pub mod compound;

pub use compound::*;
