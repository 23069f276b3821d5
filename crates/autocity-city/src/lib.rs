//! City metrics, bounds, and daily context generation for the Autocity simulation.
//!
//! This crate models the shared city: the bounded aggregate metrics that
//! citizens' actions feed into, and the exogenous conditions (weather and
//! random events) drawn at the start of every day.
//!
//! # Modules
//!
//! - [`bounds`] -- Inclusive numeric ranges and clamping.
//! - [`city`] -- [`CityState`]: the day counter plus economy, safety, and
//!   happiness scores, updated once per day from aggregated effects.
//! - [`environment`] -- [`ContextGenerator`]: weighted weather and event
//!   draws from an explicit, seedable random source.
//! - [`error`] -- Error types for city construction.

pub mod bounds;
pub mod city;
pub mod environment;
pub mod error;

// Re-export primary types at crate root.
pub use bounds::{Bounds, CityBounds};
pub use city::CityState;
pub use environment::{ContextGenerator, ContextWeights};
pub use error::CityError;
