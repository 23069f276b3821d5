//! Citizen state, role-based planning, and action resolution for the Autocity simulation.
//!
//! This crate is the logic layer for citizens -- everything that turns a
//! role and a day's context into a plan, and a plan into a change of the
//! citizen's own state plus an effect on the city. It performs no I/O and
//! never mutates the city directly; effects are handed back to the caller.
//!
//! # Modules
//!
//! - [`actions`] -- Resolution formulas for each action type ([`Resolution`])
//! - [`citizen`] -- The [`Citizen`] agent: `plan` and `act`
//! - [`config`] -- Tunable constants for action formulas ([`ActionRules`])
//!   and citizen state ranges ([`CitizenBounds`])
//! - [`error`] -- Error types for citizen construction ([`CitizenError`])
//! - [`role`] -- The [`RoleBehavior`] capability with one rule per role

pub mod actions;
pub mod citizen;
pub mod config;
pub mod error;
pub mod role;

// Re-export primary types at crate root for convenience.
pub use actions::Resolution;
pub use citizen::Citizen;
pub use config::{ActionRules, CitizenBounds};
pub use error::CitizenError;
pub use role::{GuardRule, ResidentRule, RoleBehavior, ShopkeeperRule, WorkerRule, behavior_for};
