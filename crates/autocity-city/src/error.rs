//! Error types for the `autocity-city` crate.
//!
//! Only construction can fail. Once a [`CityState`] exists every update is
//! total: out-of-range values are clamped, never rejected.
//!
//! [`CityState`]: crate::CityState

use rust_decimal::Decimal;

/// Errors that can occur when building city state or bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CityError {
    /// A range has its minimum above its maximum.
    #[error("invalid bounds for {field}: min {min} is greater than max {max}")]
    InvalidBounds {
        /// The bounded field.
        field: &'static str,
        /// Configured minimum.
        min: Decimal,
        /// Configured maximum.
        max: Decimal,
    },

    /// An initial value lies outside its bounds.
    #[error("initial {field} {value} is outside [{min}, {max}]")]
    OutOfBounds {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },
}
