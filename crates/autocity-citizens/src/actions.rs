//! Action resolution: turning a plan into a state change and a city effect.
//!
//! [`resolve`] is a pure function of the plan, the citizen's current vitals,
//! the pre-update city snapshot, and the [`ActionRules`]. It returns the
//! change to apply to the citizen's own vitals together with the
//! [`Resolution`] (effect and outcome) reported back to the workflow. The
//! caller applies the change and clamps; nothing here mutates state.

use autocity_types::{ActionOutcome, ActionType, CitizenVitals, CitySnapshot, Effect, Plan};
use rust_decimal::Decimal;

use crate::config::ActionRules;

/// What one executed plan produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Contribution to the city metrics.
    pub effect: Effect,
    /// Whether the plan was carried out.
    pub outcome: ActionOutcome,
}

impl Resolution {
    /// A plan that could not be carried out: no effect.
    fn failed(reason: String) -> Self {
        Self {
            effect: Effect::ZERO,
            outcome: ActionOutcome::Failed { reason },
        }
    }
}

/// Change to a citizen's own vitals, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VitalsDelta {
    /// Energy change.
    pub energy: Decimal,
    /// Satisfaction change.
    pub satisfaction: Decimal,
    /// Money change.
    pub money: Decimal,
}

impl VitalsDelta {
    /// Add this delta to `vitals` (unclamped).
    pub fn apply_to(&self, vitals: &CitizenVitals) -> CitizenVitals {
        CitizenVitals {
            energy: vitals.energy.saturating_add(self.energy),
            satisfaction: vitals.satisfaction.saturating_add(self.satisfaction),
            money: vitals.money.saturating_add(self.money),
        }
    }
}

/// Resolve `plan` for a citizen with the given vitals.
///
/// Every amount in [`ActionRules`] is scaled by the plan's intensity
/// (negative intensities count as zero). A shop plan whose cost exceeds the
/// citizen's money fails without changing anything.
pub fn resolve(
    plan: &Plan,
    vitals: &CitizenVitals,
    city: &CitySnapshot,
    rules: &ActionRules,
) -> (VitalsDelta, Resolution) {
    let intensity = plan.intensity.max(Decimal::ZERO);
    let scaled = |amount: Decimal| amount.saturating_mul(intensity);

    match plan.action {
        ActionType::Work => (
            VitalsDelta {
                energy: scaled(rules.work_energy_cost).saturating_mul(Decimal::NEGATIVE_ONE),
                satisfaction: scaled(rules.work_satisfaction_gain),
                money: scaled(rules.work_income),
            },
            completed(Effect {
                economy_delta: scaled(rules.work_economy),
                ..Effect::ZERO
            }),
        ),
        ActionType::Shop => {
            let cost = scaled(rules.shop_cost);
            if vitals.money < cost {
                return (
                    VitalsDelta::default(),
                    Resolution::failed(format!(
                        "needed {cost} to shop but only had {}",
                        vitals.money
                    )),
                );
            }
            (
                VitalsDelta {
                    energy: scaled(rules.shop_energy_cost).saturating_mul(Decimal::NEGATIVE_ONE),
                    satisfaction: scaled(rules.shop_satisfaction_gain),
                    money: cost.saturating_mul(Decimal::NEGATIVE_ONE),
                },
                completed(Effect {
                    economy_delta: scaled(rules.shop_economy),
                    ..Effect::ZERO
                }),
            )
        }
        ActionType::Patrol => {
            let mut safety = scaled(rules.patrol_safety);
            if city.safety < rules.patrol_low_safety_threshold {
                safety = safety.saturating_mul(rules.patrol_low_safety_multiplier);
            }
            (
                VitalsDelta {
                    energy: scaled(rules.patrol_energy_cost).saturating_mul(Decimal::NEGATIVE_ONE),
                    ..VitalsDelta::default()
                },
                completed(Effect {
                    safety_delta: safety,
                    ..Effect::ZERO
                }),
            )
        }
        ActionType::Rest => (
            VitalsDelta {
                energy: scaled(rules.rest_energy_gain),
                satisfaction: scaled(rules.rest_satisfaction_gain),
                money: Decimal::ZERO,
            },
            completed(Effect {
                happiness_delta: scaled(rules.rest_happiness),
                ..Effect::ZERO
            }),
        ),
        ActionType::Socialize => (
            VitalsDelta {
                energy: scaled(rules.socialize_energy_cost)
                    .saturating_mul(Decimal::NEGATIVE_ONE),
                satisfaction: scaled(rules.socialize_satisfaction_gain),
                money: Decimal::ZERO,
            },
            completed(Effect {
                happiness_delta: scaled(rules.socialize_happiness),
                ..Effect::ZERO
            }),
        ),
    }
}

const fn completed(effect: Effect) -> Resolution {
    Resolution {
        effect,
        outcome: ActionOutcome::Completed,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn city(safety: Decimal) -> CitySnapshot {
        CitySnapshot {
            day: 1,
            economy: dec!(50),
            safety,
            happiness: dec!(50),
        }
    }

    fn vitals(energy: Decimal, money: Decimal) -> CitizenVitals {
        CitizenVitals {
            energy,
            satisfaction: dec!(50),
            money,
        }
    }

    #[test]
    fn work_earns_money_and_grows_economy() {
        let (delta, res) = resolve(
            &Plan::new(ActionType::Work),
            &vitals(dec!(50), dec!(10)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta.money, dec!(10));
        assert_eq!(delta.energy, dec!(-20));
        assert_eq!(delta.satisfaction, dec!(5));
        assert_eq!(res.effect.economy_delta, dec!(2));
        assert!(res.effect.safety_delta.is_zero());
        assert!(res.effect.happiness_delta.is_zero());
        assert!(res.outcome.is_completed());
    }

    #[test]
    fn intensity_scales_every_amount() {
        let plan = Plan::new(ActionType::Work).with_intensity(dec!(0.5));
        let (delta, res) = resolve(
            &plan,
            &vitals(dec!(80), dec!(0)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta.money, dec!(5));
        assert_eq!(delta.energy, dec!(-10));
        assert_eq!(res.effect.economy_delta, dec!(1));
    }

    #[test]
    fn negative_intensity_counts_as_zero() {
        let plan = Plan::new(ActionType::Socialize).with_intensity(dec!(-3));
        let (delta, res) = resolve(
            &plan,
            &vitals(dec!(80), dec!(0)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta, VitalsDelta::default());
        assert!(res.effect.is_zero());
    }

    #[test]
    fn shop_without_money_fails_cleanly() {
        let (delta, res) = resolve(
            &Plan::new(ActionType::Shop),
            &vitals(dec!(80), dec!(4.99)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta, VitalsDelta::default());
        assert!(res.effect.is_zero());
        assert!(matches!(res.outcome, ActionOutcome::Failed { .. }));
    }

    #[test]
    fn shop_spends_money_and_grows_economy() {
        let (delta, res) = resolve(
            &Plan::new(ActionType::Shop),
            &vitals(dec!(80), dec!(5)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta.money, dec!(-5));
        assert_eq!(delta.satisfaction, dec!(10));
        assert_eq!(res.effect.economy_delta, dec!(1.5));
    }

    #[test]
    fn patrol_counts_extra_in_an_unsafe_city() {
        let rules = ActionRules::default();
        let plan = Plan::new(ActionType::Patrol);
        let (_, safe) = resolve(&plan, &vitals(dec!(80), dec!(0)), &city(dec!(50)), &rules);
        let (_, unsafe_city) =
            resolve(&plan, &vitals(dec!(80), dec!(0)), &city(dec!(49.9)), &rules);
        assert_eq!(safe.effect.safety_delta, dec!(1));
        assert_eq!(unsafe_city.effect.safety_delta, dec!(1.5));
    }

    #[test]
    fn rest_restores_energy_and_lifts_happiness_only() {
        let (delta, res) = resolve(
            &Plan::new(ActionType::Rest),
            &vitals(dec!(10), dec!(0)),
            &city(dec!(50)),
            &ActionRules::default(),
        );
        assert_eq!(delta.energy, dec!(40));
        assert!(res.effect.economy_delta.is_zero());
        assert!(res.effect.safety_delta.is_zero());
        assert_eq!(res.effect.happiness_delta, dec!(0.5));
    }

    #[test]
    fn delta_application_is_unclamped() {
        let delta = VitalsDelta {
            energy: dec!(-30),
            satisfaction: dec!(0),
            money: dec!(0),
        };
        let after = delta.apply_to(&vitals(dec!(10), dec!(0)));
        assert_eq!(after.energy, dec!(-20));
    }
}
