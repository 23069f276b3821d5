//! Configuration errors raised before a simulation runs.
//!
//! Every per-day operation is total over valid state, so this is the only
//! error a [`SimulationWorkflow`] can return. Each variant names the
//! offending field or citizen.
//!
//! [`SimulationWorkflow`]: crate::SimulationWorkflow

use autocity_citizens::CitizenError;
use autocity_city::CityError;
use autocity_types::CitizenId;

/// Invalid configuration detected before any state was mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The requested number of days was zero.
    #[error("simulation.days must be at least 1, got {days}")]
    InvalidDays {
        /// The rejected day count.
        days: u32,
    },

    /// Two roster entries share an id.
    #[error("citizen id {citizen} appears more than once in the roster")]
    DuplicateCitizen {
        /// The repeated id.
        citizen: CitizenId,
    },

    /// A roster entry has a blank name.
    #[error("citizen {citizen} has an empty name")]
    EmptyCitizenName {
        /// The offending citizen.
        citizen: CitizenId,
    },

    /// A roster entry's initial vitals lie outside the citizen bounds.
    #[error("citizen {citizen} starts with {field} outside its bounds")]
    CitizenStateOutOfBounds {
        /// The offending citizen.
        citizen: CitizenId,
        /// The out-of-range vital.
        field: &'static str,
    },

    /// A range has its minimum above its maximum.
    #[error("{field} has min greater than max")]
    InvalidBounds {
        /// The misconfigured range.
        field: &'static str,
    },

    /// An initial city metric lies outside its bounds.
    #[error("{field} starts outside its bounds")]
    InitialCityOutOfBounds {
        /// The out-of-range metric.
        field: &'static str,
    },

    /// The event chance is not a percentage.
    #[error("environment.event_chance_pct must be within 0..=100, got {pct}")]
    InvalidEventChance {
        /// The rejected percentage.
        pct: u32,
    },

    /// `run` was called on a workflow that has already finished.
    #[error("simulation has already finished")]
    AlreadyFinished,
}

impl ConfigurationError {
    /// Translate a city construction error.
    pub const fn from_city(err: &CityError) -> Self {
        match *err {
            CityError::InvalidBounds { field, .. } => Self::InvalidBounds { field },
            CityError::OutOfBounds { field, .. } => Self::InitialCityOutOfBounds { field },
        }
    }

    /// Translate a citizen construction error.
    pub const fn from_citizen(err: &CitizenError) -> Self {
        match *err {
            CitizenError::EmptyName { citizen } => Self::EmptyCitizenName { citizen },
            CitizenError::InvalidState {
                source: CityError::InvalidBounds { field, .. },
                ..
            } => Self::InvalidBounds { field },
            CitizenError::InvalidState {
                citizen,
                source: CityError::OutOfBounds { field, .. },
            } => Self::CitizenStateOutOfBounds { citizen, field },
        }
    }
}
