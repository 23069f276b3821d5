//! Shared type definitions for the Autocity simulation.
//!
//! This crate is the single source of truth for the data that flows between
//! the city, the citizens, and the daily workflow engine. Nothing here holds
//! behavior beyond small constructors and accessors.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier newtypes for citizens and simulation runs
//! - [`enums`] -- Roles, weather, city events, and action types
//! - [`structs`] -- Plans, effects, day context, snapshots, and day reports

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActionType, CityEvent, Role, Weather};
pub use ids::{CitizenId, RunId};
pub use structs::{
    ActionOutcome, ActionTally, CitizenDay, CitizenVitals, CitySnapshot, DayContext, DayReport,
    Effect, Plan,
};
