//! The citizen agent.
//!
//! A [`Citizen`] owns its identity, its role, and its bounded vitals. Each
//! day the workflow calls [`Citizen::plan`] once and then [`Citizen::act`]
//! once with the plan it produced. Planning reads the day's context and
//! draws one roll from the shared RNG. Acting mutates only the citizen's own
//! vitals and returns the effect it would have on the city.

use autocity_types::{ActionType, CitizenId, CitizenVitals, CitySnapshot, DayContext, Plan, Role};
use rand::Rng;
use tracing::{debug, warn};

use crate::actions::{Resolution, resolve};
use crate::config::{ActionRules, CitizenBounds};
use crate::error::CitizenError;
use crate::role::behavior_for;

/// Exclusive upper end of the daily planning roll.
const ROLL_RANGE: u32 = 100;

/// An autonomous city resident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citizen {
    id: CitizenId,
    name: String,
    role: Role,
    vitals: CitizenVitals,
    bounds: CitizenBounds,
}

impl Citizen {
    /// Create a citizen, validating its name, bounds, and initial vitals.
    pub fn new(
        id: CitizenId,
        name: impl Into<String>,
        role: Role,
        vitals: CitizenVitals,
        bounds: CitizenBounds,
    ) -> Result<Self, CitizenError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CitizenError::EmptyName { citizen: id });
        }
        bounds
            .validate()
            .and_then(|()| bounds.check(&vitals))
            .map_err(|source| CitizenError::InvalidState {
                citizen: id,
                source,
            })?;

        Ok(Self {
            id,
            name,
            role,
            vitals,
            bounds,
        })
    }

    /// Roster identifier.
    pub const fn id(&self) -> CitizenId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Behavioural role.
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Current vitals.
    pub const fn vitals(&self) -> &CitizenVitals {
        &self.vitals
    }

    /// The ranges the vitals are clamped to.
    pub const fn bounds(&self) -> &CitizenBounds {
        &self.bounds
    }

    /// Decide what to do today.
    ///
    /// Draws exactly one roll in `0..100` from `rng`, even when the
    /// outcome does not depend on it, so that the RNG stream stays aligned
    /// across citizens. A citizen whose energy is below
    /// [`ActionRules::low_energy_threshold`] always rests; otherwise the
    /// role's rule decides.
    pub fn plan(&self, context: &DayContext, rules: &ActionRules, rng: &mut impl Rng) -> Plan {
        let roll = rng.random_range(0..ROLL_RANGE);

        let plan = if self.vitals.energy < rules.low_energy_threshold {
            Plan::new(ActionType::Rest).with_note("too tired")
        } else {
            behavior_for(self.role).decide(context, roll)
        };

        debug!(
            citizen = %self.id,
            name = %self.name,
            role = %self.role,
            roll,
            action = %plan.action,
            intensity = %plan.intensity,
            "Citizen planned"
        );
        plan
    }

    /// Carry out `plan` against the pre-update city snapshot.
    ///
    /// Updates this citizen's vitals in place, clamped to its bounds, and
    /// returns the effect on the city. Calling it twice applies the plan
    /// twice.
    pub fn act(&mut self, plan: &Plan, city: &CitySnapshot, rules: &ActionRules) -> Resolution {
        let (delta, resolution) = resolve(plan, &self.vitals, city, rules);
        self.vitals = self.bounds.clamp(&delta.apply_to(&self.vitals));

        if resolution.outcome.is_completed() {
            debug!(
                citizen = %self.id,
                action = %plan.action,
                energy = %self.vitals.energy,
                satisfaction = %self.vitals.satisfaction,
                money = %self.vitals.money,
                economy_delta = %resolution.effect.economy_delta,
                safety_delta = %resolution.effect.safety_delta,
                happiness_delta = %resolution.effect.happiness_delta,
                "Citizen acted"
            );
        } else {
            warn!(
                citizen = %self.id,
                action = %plan.action,
                outcome = ?resolution.outcome,
                "Citizen action failed"
            );
        }
        resolution
    }
}
