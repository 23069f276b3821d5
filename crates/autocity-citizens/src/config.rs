//! Tunable constants for citizen actions and state ranges.
//!
//! [`ActionRules`] bundles every number used by the planning threshold and
//! the action formulas so that callers (workflow, tests) can override
//! defaults from configuration. All amounts are per unit of plan intensity.
//!
//! | Action    | Own state                                  | City effect            |
//! |-----------|--------------------------------------------|------------------------|
//! | Work      | money +10, energy -20, satisfaction +5     | economy +2             |
//! | Shop      | money -5 (required), energy -10, sat. +10  | economy +1.5           |
//! | Patrol    | energy -20                                 | safety +1 (x1.5 if safety < 50) |
//! | Rest      | energy +40, satisfaction +5                | happiness +0.5         |
//! | Socialize | energy -10, satisfaction +10               | happiness +1           |

use autocity_city::{Bounds, CityError};
use autocity_types::CitizenVitals;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Configuration for planning thresholds and action formulas.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionRules {
    /// Energy below which every citizen rests (default: 30).
    #[serde(default = "default_low_energy_threshold")]
    pub low_energy_threshold: Decimal,

    /// Money earned by working (default: 10).
    #[serde(default = "default_work_income")]
    pub work_income: Decimal,
    /// Energy spent working (default: 20).
    #[serde(default = "default_heavy_energy_cost")]
    pub work_energy_cost: Decimal,
    /// Satisfaction gained from working (default: 5).
    #[serde(default = "default_small_satisfaction_gain")]
    pub work_satisfaction_gain: Decimal,
    /// Economy contributed by working (default: 2).
    #[serde(default = "default_work_economy")]
    pub work_economy: Decimal,

    /// Money required and spent when shopping (default: 5).
    #[serde(default = "default_shop_cost")]
    pub shop_cost: Decimal,
    /// Energy spent shopping (default: 10).
    #[serde(default = "default_light_energy_cost")]
    pub shop_energy_cost: Decimal,
    /// Satisfaction gained from shopping (default: 10).
    #[serde(default = "default_large_satisfaction_gain")]
    pub shop_satisfaction_gain: Decimal,
    /// Economy contributed by shopping (default: 1.5).
    #[serde(default = "default_shop_economy")]
    pub shop_economy: Decimal,

    /// Energy spent patrolling (default: 20).
    #[serde(default = "default_heavy_energy_cost")]
    pub patrol_energy_cost: Decimal,
    /// Safety contributed by a patrol (default: 1).
    #[serde(default = "default_patrol_safety")]
    pub patrol_safety: Decimal,
    /// City safety below which patrols count extra (default: 50).
    #[serde(default = "default_patrol_low_safety_threshold")]
    pub patrol_low_safety_threshold: Decimal,
    /// Multiplier applied to patrol safety in an unsafe city (default: 1.5).
    #[serde(default = "default_patrol_low_safety_multiplier")]
    pub patrol_low_safety_multiplier: Decimal,

    /// Energy recovered by resting (default: 40).
    #[serde(default = "default_rest_energy_gain")]
    pub rest_energy_gain: Decimal,
    /// Satisfaction gained from resting (default: 5).
    #[serde(default = "default_small_satisfaction_gain")]
    pub rest_satisfaction_gain: Decimal,
    /// Happiness contributed by resting (default: 0.5).
    #[serde(default = "default_rest_happiness")]
    pub rest_happiness: Decimal,

    /// Energy spent socializing (default: 10).
    #[serde(default = "default_light_energy_cost")]
    pub socialize_energy_cost: Decimal,
    /// Satisfaction gained from socializing (default: 10).
    #[serde(default = "default_large_satisfaction_gain")]
    pub socialize_satisfaction_gain: Decimal,
    /// Happiness contributed by socializing (default: 1).
    #[serde(default = "default_socialize_happiness")]
    pub socialize_happiness: Decimal,
}

impl Default for ActionRules {
    fn default() -> Self {
        Self {
            low_energy_threshold: default_low_energy_threshold(),
            work_income: default_work_income(),
            work_energy_cost: default_heavy_energy_cost(),
            work_satisfaction_gain: default_small_satisfaction_gain(),
            work_economy: default_work_economy(),
            shop_cost: default_shop_cost(),
            shop_energy_cost: default_light_energy_cost(),
            shop_satisfaction_gain: default_large_satisfaction_gain(),
            shop_economy: default_shop_economy(),
            patrol_energy_cost: default_heavy_energy_cost(),
            patrol_safety: default_patrol_safety(),
            patrol_low_safety_threshold: default_patrol_low_safety_threshold(),
            patrol_low_safety_multiplier: default_patrol_low_safety_multiplier(),
            rest_energy_gain: default_rest_energy_gain(),
            rest_satisfaction_gain: default_small_satisfaction_gain(),
            rest_happiness: default_rest_happiness(),
            socialize_energy_cost: default_light_energy_cost(),
            socialize_satisfaction_gain: default_large_satisfaction_gain(),
            socialize_happiness: default_socialize_happiness(),
        }
    }
}

/// Ranges for a citizen's bounded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CitizenBounds {
    /// Range of energy (default: 0--100).
    #[serde(default)]
    pub energy: Bounds,
    /// Range of satisfaction (default: 0--100).
    #[serde(default)]
    pub satisfaction: Bounds,
    /// Range of money (default: 0--1000).
    #[serde(default = "default_money_bounds")]
    pub money: Bounds,
}

impl Default for CitizenBounds {
    fn default() -> Self {
        Self {
            energy: Bounds::PERCENT,
            satisfaction: Bounds::PERCENT,
            money: default_money_bounds(),
        }
    }
}

impl CitizenBounds {
    /// Validate every range.
    pub fn validate(&self) -> Result<(), CityError> {
        self.energy.validate("citizens.bounds.energy")?;
        self.satisfaction.validate("citizens.bounds.satisfaction")?;
        self.money.validate("citizens.bounds.money")
    }

    /// Check that every vital lies inside its range.
    pub fn check(&self, vitals: &CitizenVitals) -> Result<(), CityError> {
        self.energy.check("energy", vitals.energy)?;
        self.satisfaction.check("satisfaction", vitals.satisfaction)?;
        self.money.check("money", vitals.money)
    }

    /// Clamp every vital into its range.
    pub fn clamp(&self, vitals: &CitizenVitals) -> CitizenVitals {
        CitizenVitals {
            energy: self.energy.clamp(vitals.energy),
            satisfaction: self.satisfaction.clamp(vitals.satisfaction),
            money: self.money.clamp(vitals.money),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_low_energy_threshold() -> Decimal {
    Decimal::from_parts(30, 0, 0, false, 0)
}

const fn default_work_income() -> Decimal {
    Decimal::TEN
}

const fn default_heavy_energy_cost() -> Decimal {
    Decimal::from_parts(20, 0, 0, false, 0)
}

const fn default_light_energy_cost() -> Decimal {
    Decimal::TEN
}

const fn default_small_satisfaction_gain() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 0)
}

const fn default_large_satisfaction_gain() -> Decimal {
    Decimal::TEN
}

const fn default_work_economy() -> Decimal {
    Decimal::TWO
}

const fn default_shop_cost() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 0)
}

const fn default_shop_economy() -> Decimal {
    Decimal::from_parts(15, 0, 0, false, 1)
}

const fn default_patrol_safety() -> Decimal {
    Decimal::ONE
}

const fn default_patrol_low_safety_threshold() -> Decimal {
    Decimal::from_parts(50, 0, 0, false, 0)
}

const fn default_patrol_low_safety_multiplier() -> Decimal {
    Decimal::from_parts(15, 0, 0, false, 1)
}

const fn default_rest_energy_gain() -> Decimal {
    Decimal::from_parts(40, 0, 0, false, 0)
}

const fn default_rest_happiness() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 1)
}

const fn default_socialize_happiness() -> Decimal {
    Decimal::ONE
}

const fn default_money_bounds() -> Bounds {
    Bounds {
        min: Decimal::ZERO,
        max: Decimal::ONE_THOUSAND,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let rules = ActionRules::default();
        assert_eq!(rules.low_energy_threshold, dec!(30));
        assert_eq!(rules.work_income, dec!(10));
        assert_eq!(rules.work_energy_cost, dec!(20));
        assert_eq!(rules.shop_economy, dec!(1.5));
        assert_eq!(rules.patrol_low_safety_multiplier, dec!(1.5));
        assert_eq!(rules.rest_happiness, dec!(0.5));
        assert_eq!(rules.socialize_happiness, dec!(1));
    }

    #[test]
    fn every_default_rule_value() {
        let rules = ActionRules::default();
        let expected = [
            (rules.low_energy_threshold, dec!(30)),
            (rules.work_income, dec!(10)),
            (rules.work_energy_cost, dec!(20)),
            (rules.work_satisfaction_gain, dec!(5)),
            (rules.work_economy, dec!(2)),
            (rules.shop_cost, dec!(5)),
            (rules.shop_energy_cost, dec!(10)),
            (rules.shop_satisfaction_gain, dec!(10)),
            (rules.shop_economy, dec!(1.5)),
            (rules.patrol_energy_cost, dec!(20)),
            (rules.patrol_safety, dec!(1)),
            (rules.patrol_low_safety_threshold, dec!(50)),
            (rules.patrol_low_safety_multiplier, dec!(1.5)),
            (rules.rest_energy_gain, dec!(40)),
            (rules.rest_satisfaction_gain, dec!(5)),
            (rules.rest_happiness, dec!(0.5)),
            (rules.socialize_energy_cost, dec!(10)),
            (rules.socialize_satisfaction_gain, dec!(10)),
            (rules.socialize_happiness, dec!(1)),
        ];
        for (actual, want) in expected {
            assert_eq!(actual, want);
        }
    }

    #[test]
    fn partial_rules_keep_defaults() {
        let rules: ActionRules = serde_json::from_str(r#"{"work_income":"25"}"#)
            .unwrap_or_default();
        assert_eq!(rules.work_income, dec!(25));
        assert_eq!(rules.shop_cost, dec!(5));
    }

    #[test]
    fn default_bounds_cover_default_vitals() {
        let bounds = CitizenBounds::default();
        assert!(bounds.validate().is_ok());
        assert!(bounds.check(&CitizenVitals::default()).is_ok());
        assert_eq!(bounds.money.max, dec!(1000));
    }

    #[test]
    fn clamp_pulls_every_vital_into_range() {
        let bounds = CitizenBounds::default();
        let wild = CitizenVitals {
            energy: dec!(-20),
            satisfaction: dec!(140),
            money: dec!(5000),
        };
        let clamped = bounds.clamp(&wild);
        assert_eq!(clamped.energy, dec!(0));
        assert_eq!(clamped.satisfaction, dec!(100));
        assert_eq!(clamped.money, dec!(1000));
    }
}
