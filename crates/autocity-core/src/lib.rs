//! Daily workflow, configuration, and reporting for the Autocity simulation.
//!
//! This crate owns the 5-phase day cycle that drives the simulation:
//! Day Start, Planning, Action, City Update, and Reporting.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `autocity-config.yaml` into
//!   strongly-typed structs, with validation.
//! - [`error`] -- [`ConfigurationError`], the only error a run can raise.
//! - [`sink`] -- [`DayReportSink`] trait, [`NoOpSink`], and [`CollectingSink`].
//! - [`workflow`] -- [`SimulationWorkflow`], the day cycle and run state
//!   machine.

pub mod config;
pub mod error;
pub mod sink;
pub mod workflow;

pub use config::{ConfigError, SimulationConfig};
pub use error::ConfigurationError;
pub use sink::{CollectingSink, DayReportSink, NoOpSink};
pub use workflow::{SimulationWorkflow, WorkflowPhase};
