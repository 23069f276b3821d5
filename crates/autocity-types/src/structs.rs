//! Core data structs for the Autocity simulation.
//!
//! Covers the per-day ephemeral values (`DayContext`, `Plan`, `Effect`),
//! the citizen and city state snapshots, and the immutable `DayReport`
//! handed to the reporting collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionType, CityEvent, Role, Weather};
use crate::ids::CitizenId;

// ---------------------------------------------------------------------------
// Day context
// ---------------------------------------------------------------------------

/// Exogenous conditions for one simulated day.
///
/// Produced fresh each day by the context generator and read by every
/// citizen during planning. Never retained in the city state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContext {
    /// The day this context belongs to (1-indexed).
    pub day: u64,
    /// The day's weather.
    pub weather: Weather,
    /// The day's random event, if one fired.
    pub event: Option<CityEvent>,
}

impl DayContext {
    /// The event, with [`CityEvent::Unrecognized`] folded into `None`.
    pub fn known_event(&self) -> Option<CityEvent> {
        self.event.filter(|e| *e != CityEvent::Unrecognized)
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// A citizen's chosen action for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// What the citizen will do.
    pub action: ActionType,
    /// Effort multiplier; 1 is a normal day's effort.
    pub intensity: Decimal,
    /// Short explanation of why this plan was chosen.
    pub note: String,
}

impl Plan {
    /// A plan at normal intensity with no note.
    pub const fn new(action: ActionType) -> Self {
        Self {
            action,
            intensity: Decimal::ONE,
            note: String::new(),
        }
    }

    /// Replace the intensity.
    #[must_use]
    pub const fn with_intensity(mut self, intensity: Decimal) -> Self {
        self.intensity = intensity;
        self
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: &str) -> Self {
        note.clone_into(&mut self.note);
        self
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// The net contribution of one citizen's action to the city metrics.
///
/// Deltas are exact decimals, so summing a collection of effects gives the
/// same result in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Effect {
    /// Change to the economy score.
    pub economy_delta: Decimal,
    /// Change to the safety score.
    pub safety_delta: Decimal,
    /// Change to the happiness score.
    pub happiness_delta: Decimal,
}

impl Effect {
    /// An effect that changes nothing.
    pub const ZERO: Self = Self {
        economy_delta: Decimal::ZERO,
        safety_delta: Decimal::ZERO,
        happiness_delta: Decimal::ZERO,
    };

    /// Channel-wise sum of two effects.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            economy_delta: self.economy_delta.saturating_add(other.economy_delta),
            safety_delta: self.safety_delta.saturating_add(other.safety_delta),
            happiness_delta: self.happiness_delta.saturating_add(other.happiness_delta),
        }
    }

    /// Channel-wise sum of any number of effects. Empty input sums to
    /// [`Effect::ZERO`].
    pub fn sum<'a, I>(effects: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        effects
            .into_iter()
            .fold(Self::ZERO, |acc, effect| acc.combine(effect))
    }

    /// Whether every channel is zero.
    pub fn is_zero(&self) -> bool {
        self.economy_delta.is_zero() && self.safety_delta.is_zero() && self.happiness_delta.is_zero()
    }
}

// ---------------------------------------------------------------------------
// Citizen and city state
// ---------------------------------------------------------------------------

/// A citizen's bounded mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenVitals {
    /// Physical energy; low energy forces rest.
    pub energy: Decimal,
    /// Personal contentment.
    pub satisfaction: Decimal,
    /// Cash on hand.
    pub money: Decimal,
}

impl Default for CitizenVitals {
    fn default() -> Self {
        Self {
            energy: Decimal::ONE_HUNDRED,
            satisfaction: Decimal::new(50, 0),
            money: Decimal::new(50, 0),
        }
    }
}

/// Read-only copy of the city state at one instant.
///
/// Citizens act against the snapshot taken before the day's update, and the
/// day report embeds the snapshot taken after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    /// Day counter at the time of the snapshot.
    pub day: u64,
    /// Economy score.
    pub economy: Decimal,
    /// Safety score.
    pub safety: Decimal,
    /// Happiness score.
    pub happiness: Decimal,
}

// ---------------------------------------------------------------------------
// Outcomes and reports
// ---------------------------------------------------------------------------

/// Whether a plan was carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The plan was executed.
    Completed,
    /// The plan could not be executed; nothing changed.
    Failed {
        /// Why the plan failed.
        reason: String,
    },
}

impl ActionOutcome {
    /// Whether the plan was executed.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Everything one citizen did on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenDay {
    /// The citizen.
    pub citizen_id: CitizenId,
    /// Display name.
    pub name: String,
    /// The citizen's role.
    pub role: Role,
    /// The plan made during the Planning phase.
    pub plan: Plan,
    /// The effect contributed to the city.
    pub effect: Effect,
    /// Whether the plan was carried out.
    pub outcome: ActionOutcome,
    /// The citizen's vitals after acting.
    pub vitals_after: CitizenVitals,
}

/// Per-day counts of completed actions by type, plus failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionTally {
    /// Completed work actions.
    pub work: u32,
    /// Completed shop actions.
    pub shop: u32,
    /// Completed patrols.
    pub patrol: u32,
    /// Completed rests.
    pub rest: u32,
    /// Completed social outings.
    pub socialize: u32,
    /// Plans that could not be carried out.
    pub failed: u32,
}

impl ActionTally {
    /// Count one action outcome.
    pub fn record(&mut self, action: ActionType, outcome: &ActionOutcome) {
        let slot = if outcome.is_completed() {
            match action {
                ActionType::Work => &mut self.work,
                ActionType::Shop => &mut self.shop,
                ActionType::Patrol => &mut self.patrol,
                ActionType::Rest => &mut self.rest,
                ActionType::Socialize => &mut self.socialize,
            }
        } else {
            &mut self.failed
        };
        *slot = slot.saturating_add(1);
    }

    /// Total number of recorded outcomes.
    pub const fn total(&self) -> u32 {
        self.work
            .saturating_add(self.shop)
            .saturating_add(self.patrol)
            .saturating_add(self.rest)
            .saturating_add(self.socialize)
            .saturating_add(self.failed)
    }
}

/// Immutable summary of one simulated day.
///
/// The only artifact handed to the reporting collaborator. Citizens appear
/// in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// The day number (1-indexed).
    pub day: u64,
    /// The day's exogenous conditions.
    pub context: DayContext,
    /// Per-citizen plans, effects, and outcomes in roster order.
    pub citizens: Vec<CitizenDay>,
    /// Counts of completed and failed actions.
    pub tally: ActionTally,
    /// City metrics after the day's update.
    pub city: CitySnapshot,
}

impl DayReport {
    /// Per-citizen plans keyed by citizen id, in roster order.
    pub fn plans(&self) -> impl Iterator<Item = (CitizenId, &Plan)> {
        self.citizens.iter().map(|c| (c.citizen_id, &c.plan))
    }

    /// Per-citizen effects keyed by citizen id, in roster order.
    pub fn effects(&self) -> impl Iterator<Item = (CitizenId, &Effect)> {
        self.citizens.iter().map(|c| (c.citizen_id, &c.effect))
    }

    /// The plan made by one citizen, if they are in the report.
    pub fn plan_for(&self, id: CitizenId) -> Option<&Plan> {
        self.citizens
            .iter()
            .find(|c| c.citizen_id == id)
            .map(|c| &c.plan)
    }

    /// The effect contributed by one citizen, if they are in the report.
    pub fn effect_for(&self, id: CitizenId) -> Option<&Effect> {
        self.citizens
            .iter()
            .find(|c| c.citizen_id == id)
            .map(|c| &c.effect)
    }

    /// Sum of every citizen's effect for the day.
    pub fn total_effect(&self) -> Effect {
        Effect::sum(self.citizens.iter().map(|c| &c.effect))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn effect(economy: Decimal, safety: Decimal, happiness: Decimal) -> Effect {
        Effect {
            economy_delta: economy,
            safety_delta: safety,
            happiness_delta: happiness,
        }
    }

    #[test]
    fn empty_sum_is_zero() {
        let none: [Effect; 0] = [];
        assert_eq!(Effect::sum(&none), Effect::ZERO);
        assert!(Effect::sum(&none).is_zero());
    }

    #[test]
    fn sum_adds_each_channel() {
        let effects = [
            effect(dec!(2), dec!(0), dec!(0.5)),
            effect(dec!(1.5), dec!(1), dec!(0)),
            effect(dec!(0), dec!(-0.25), dec!(1)),
        ];
        let total = Effect::sum(&effects);
        assert_eq!(total, effect(dec!(3.5), dec!(0.75), dec!(1.5)));
    }

    #[test]
    fn sum_ignores_order() {
        let a = effect(dec!(0.1), dec!(0.2), dec!(0.3));
        let b = effect(dec!(1.7), dec!(-0.9), dec!(0.05));
        let c = effect(dec!(-3.3), dec!(2.2), dec!(0));
        assert_eq!(Effect::sum(&[a, b, c]), Effect::sum(&[c, a, b]));
        assert_eq!(Effect::sum(&[a, b, c]), Effect::sum(&[b, c, a]));
    }

    #[test]
    fn tally_counts_failures_separately() {
        let mut tally = ActionTally::default();
        tally.record(ActionType::Work, &ActionOutcome::Completed);
        tally.record(ActionType::Shop, &ActionOutcome::Completed);
        tally.record(
            ActionType::Shop,
            &ActionOutcome::Failed {
                reason: String::from("no money"),
            },
        );
        assert_eq!(tally.work, 1);
        assert_eq!(tally.shop, 1);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn unrecognized_event_is_not_a_known_event() {
        let ctx = DayContext {
            day: 1,
            weather: Weather::Sunny,
            event: Some(CityEvent::Unrecognized),
        };
        assert_eq!(ctx.known_event(), None);
    }

    #[test]
    fn report_lookups_by_citizen() {
        let plan = Plan::new(ActionType::Work).with_note("office");
        let report = DayReport {
            day: 1,
            context: DayContext {
                day: 1,
                weather: Weather::Cloudy,
                event: None,
            },
            citizens: vec![CitizenDay {
                citizen_id: CitizenId::new(4),
                name: String::from("Daniel"),
                role: Role::Resident,
                plan: plan.clone(),
                effect: effect(dec!(2), dec!(0), dec!(0)),
                outcome: ActionOutcome::Completed,
                vitals_after: CitizenVitals::default(),
            }],
            tally: ActionTally::default(),
            city: CitySnapshot {
                day: 1,
                economy: dec!(52),
                safety: dec!(50),
                happiness: dec!(50),
            },
        };
        assert_eq!(report.plan_for(CitizenId::new(4)), Some(&plan));
        assert!(report.effect_for(CitizenId::new(5)).is_none());
        assert_eq!(report.plans().count(), 1);
        assert_eq!(report.total_effect().economy_delta, dec!(2));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&ActionOutcome::Failed {
            reason: String::from("closed"),
        })
        .unwrap_or_default();
        assert_eq!(json, r#"{"status":"failed","reason":"closed"}"#);
    }
}
