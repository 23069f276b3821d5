//! Error types for the autocity-citizens crate.
//!
//! Only construction can fail. Planning and acting are total: values that
//! would leave their range are clamped instead.

use autocity_city::CityError;
use autocity_types::CitizenId;

/// Errors that can occur when creating a citizen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CitizenError {
    /// The citizen was given an empty or whitespace-only name.
    #[error("citizen {citizen} has an empty name")]
    EmptyName {
        /// The offending citizen.
        citizen: CitizenId,
    },

    /// The citizen's bounds or initial vitals are invalid.
    #[error("citizen {citizen} has invalid state: {source}")]
    InvalidState {
        /// The offending citizen.
        citizen: CitizenId,
        /// Which range check failed.
        source: CityError,
    },
}
