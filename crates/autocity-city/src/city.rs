//! Global city metrics.
//!
//! [`CityState`] holds the day counter and the three bounded scores. The
//! scores change only through [`CityState::apply_effects`], which the
//! workflow calls exactly once per day with every citizen's effect. Each
//! channel is summed first and the total applied in a single step, so the
//! result does not depend on the order citizens acted in.

use autocity_types::{CitySnapshot, Effect};
use rust_decimal::Decimal;
use tracing::debug;

use crate::bounds::CityBounds;
use crate::error::CityError;

/// The shared, mutable state of the city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityState {
    /// Completed-or-current day counter. Starts at 0.
    day: u64,
    /// Economy score.
    economy: Decimal,
    /// Safety score.
    safety: Decimal,
    /// Happiness score.
    happiness: Decimal,
    /// Range of each score.
    bounds: CityBounds,
}

impl CityState {
    /// Create a city at day 0 with the given initial scores.
    ///
    /// # Errors
    ///
    /// Returns [`CityError::InvalidBounds`] if any range is inverted, or
    /// [`CityError::OutOfBounds`] if an initial score lies outside its range.
    pub fn new(
        economy: Decimal,
        safety: Decimal,
        happiness: Decimal,
        bounds: CityBounds,
    ) -> Result<Self, CityError> {
        bounds.validate()?;
        bounds.economy.check("city.economy", economy)?;
        bounds.safety.check("city.safety", safety)?;
        bounds.happiness.check("city.happiness", happiness)?;
        Ok(Self {
            day: 0,
            economy,
            safety,
            happiness,
            bounds,
        })
    }

    /// Current day counter.
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Economy score.
    pub const fn economy(&self) -> Decimal {
        self.economy
    }

    /// Safety score.
    pub const fn safety(&self) -> Decimal {
        self.safety
    }

    /// Happiness score.
    pub const fn happiness(&self) -> Decimal {
        self.happiness
    }

    /// The configured ranges.
    pub const fn bounds(&self) -> &CityBounds {
        &self.bounds
    }

    /// Advance the day counter by one and return the new day.
    pub const fn advance_day(&mut self) -> u64 {
        self.day = self.day.saturating_add(1);
        self.day
    }

    /// Read-only copy of the current state.
    pub const fn snapshot(&self) -> CitySnapshot {
        CitySnapshot {
            day: self.day,
            economy: self.economy,
            safety: self.safety,
            happiness: self.happiness,
        }
    }

    /// Fold a collection of effects into the metrics.
    ///
    /// Sums each delta channel across all effects, adds the sums to the
    /// matching score, then clamps every score to its bounds. An empty
    /// collection leaves the state unchanged.
    pub fn apply_effects<'a, I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = &'a Effect>,
    {
        let total = Effect::sum(effects);
        if total.is_zero() {
            return;
        }

        self.economy = self
            .bounds
            .economy
            .clamp(self.economy.saturating_add(total.economy_delta));
        self.safety = self
            .bounds
            .safety
            .clamp(self.safety.saturating_add(total.safety_delta));
        self.happiness = self
            .bounds
            .happiness
            .clamp(self.happiness.saturating_add(total.happiness_delta));

        debug!(
            day = self.day,
            economy = %self.economy,
            safety = %self.safety,
            happiness = %self.happiness,
            "City metrics updated"
        );
    }
}

impl Default for CityState {
    fn default() -> Self {
        let half = Decimal::new(50, 0);
        Self {
            day: 0,
            economy: half,
            safety: half,
            happiness: half,
            bounds: CityBounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::bounds::Bounds;

    fn effect(economy: Decimal, safety: Decimal, happiness: Decimal) -> Effect {
        Effect {
            economy_delta: economy,
            safety_delta: safety,
            happiness_delta: happiness,
        }
    }

    #[test]
    fn new_rejects_out_of_range_initial_values() {
        let result = CityState::new(dec!(150), dec!(50), dec!(50), CityBounds::default());
        assert!(matches!(
            result,
            Err(CityError::OutOfBounds { field: "city.economy", .. })
        ));
    }

    #[test]
    fn empty_effects_are_a_no_op() {
        let mut city = CityState::default();
        let before = city.clone();
        let none: Vec<Effect> = Vec::new();
        city.apply_effects(&none);
        assert_eq!(city, before);
    }

    #[test]
    fn effects_are_summed_then_applied() {
        let mut city = CityState::default();
        city.apply_effects(&[
            effect(dec!(2), dec!(0), dec!(0)),
            effect(dec!(1.5), dec!(1), dec!(0.5)),
        ]);
        assert_eq!(city.economy(), dec!(53.5));
        assert_eq!(city.safety(), dec!(51));
        assert_eq!(city.happiness(), dec!(50.5));
    }

    #[test]
    fn metrics_clamp_to_bounds() {
        let mut city = CityState::default();
        city.apply_effects(&[effect(dec!(80), dec!(-75), dec!(0))]);
        assert_eq!(city.economy(), dec!(100));
        assert_eq!(city.safety(), dec!(0));
        assert_eq!(city.happiness(), dec!(50));
    }

    #[test]
    fn clamping_happens_after_summing() {
        // +60 then -30 would clamp at 100 first if applied one by one.
        let mut city = CityState::default();
        city.apply_effects(&[
            effect(dec!(60), dec!(0), dec!(0)),
            effect(dec!(-30), dec!(0), dec!(0)),
        ]);
        assert_eq!(city.economy(), dec!(80));
    }

    #[test]
    fn every_permutation_gives_the_same_state() {
        let effects = [
            effect(dec!(2), dec!(0), dec!(0.5)),
            effect(dec!(1.5), dec!(1.5), dec!(0)),
            effect(dec!(-0.3), dec!(0), dec!(1)),
            effect(dec!(0), dec!(-2), dec!(0.5)),
        ];
        let mut expected = CityState::default();
        expected.apply_effects(&effects);

        let orders: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [3, 2, 1, 0],
            [1, 3, 0, 2],
            [2, 0, 3, 1],
            [3, 0, 1, 2],
            [1, 2, 3, 0],
        ];
        for order in orders {
            let permuted: Vec<Effect> = order
                .iter()
                .filter_map(|&i| effects.get(i).copied())
                .collect();
            let mut city = CityState::default();
            city.apply_effects(&permuted);
            assert_eq!(city, expected, "order {order:?} diverged");
        }
    }

    #[test]
    fn custom_bounds_are_respected() {
        let bounds = CityBounds {
            economy: Bounds {
                min: dec!(0),
                max: dec!(1000),
            },
            ..CityBounds::default()
        };
        let mut city = CityState::new(dec!(900), dec!(50), dec!(50), bounds).unwrap_or_default();
        city.apply_effects(&[effect(dec!(200), dec!(0), dec!(0))]);
        assert_eq!(city.economy(), dec!(1000));
    }

    #[test]
    fn advance_day_increments_by_one() {
        let mut city = CityState::default();
        assert_eq!(city.advance_day(), 1);
        assert_eq!(city.advance_day(), 2);
        assert_eq!(city.snapshot().day, 2);
    }
}
