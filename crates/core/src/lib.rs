//! Core traits and types for the windpower crates.
//!
//! This crate defines the shared abstractions that models and host adapters
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`constraint`]: numeric invariants checked once at construction

pub mod constraint;
mod model;

pub use model::Model;
