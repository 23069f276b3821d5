//! Inclusive numeric ranges used for every bounded score in the simulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CityError;

/// An inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest permitted value.
    pub min: Decimal,
    /// Highest permitted value.
    pub max: Decimal,
}

impl Bounds {
    /// The `[0, 100]` range used for scores by default.
    pub const PERCENT: Self = Self {
        min: Decimal::ZERO,
        max: Decimal::ONE_HUNDRED,
    };

    /// Build a range, rejecting `min > max`.
    pub fn new(field: &'static str, min: Decimal, max: Decimal) -> Result<Self, CityError> {
        let bounds = Self { min, max };
        bounds.validate(field)?;
        Ok(bounds)
    }

    /// Check that `min <= max`.
    pub fn validate(&self, field: &'static str) -> Result<(), CityError> {
        if self.min > self.max {
            return Err(CityError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Clamp `value` into the range.
    ///
    /// Never panics, even on an inverted range (the minimum wins).
    pub fn clamp(&self, value: Decimal) -> Decimal {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check that `value` lies inside the range, naming `field` on failure.
    pub fn check(&self, field: &'static str, value: Decimal) -> Result<(), CityError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(CityError::OutOfBounds {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::PERCENT
    }
}

/// Bounds for each city metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityBounds {
    /// Range of the economy score.
    #[serde(default)]
    pub economy: Bounds,
    /// Range of the safety score.
    #[serde(default)]
    pub safety: Bounds,
    /// Range of the happiness score.
    #[serde(default)]
    pub happiness: Bounds,
}

impl CityBounds {
    /// Validate every range.
    pub fn validate(&self) -> Result<(), CityError> {
        self.economy.validate("city.bounds.economy")?;
        self.safety.validate("city.bounds.safety")?;
        self.happiness.validate("city.bounds.happiness")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn clamp_keeps_values_inside() {
        let b = Bounds::PERCENT;
        assert_eq!(b.clamp(dec!(-5)), dec!(0));
        assert_eq!(b.clamp(dec!(42.5)), dec!(42.5));
        assert_eq!(b.clamp(dec!(120)), dec!(100));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let result = Bounds::new("energy", dec!(10), dec!(5));
        assert!(matches!(
            result,
            Err(CityError::InvalidBounds { field: "energy", .. })
        ));
    }

    #[test]
    fn inverted_bounds_clamp_without_panicking() {
        let b = Bounds {
            min: dec!(10),
            max: dec!(5),
        };
        assert_eq!(b.clamp(dec!(7)), dec!(10));
    }

    #[test]
    fn check_names_the_field() {
        let err = Bounds::PERCENT.check("safety", dec!(101));
        assert!(matches!(err, Err(CityError::OutOfBounds { field: "safety", .. })));
        assert!(Bounds::PERCENT.check("safety", dec!(100)).is_ok());
    }

    #[test]
    fn city_bounds_deserialize_with_defaults() {
        let bounds: CityBounds =
            serde_json::from_str(r#"{"economy":{"min":"0","max":"500"}}"#).unwrap_or_default();
        assert_eq!(bounds.economy.max, dec!(500));
        assert_eq!(bounds.safety, Bounds::PERCENT);
    }
}
