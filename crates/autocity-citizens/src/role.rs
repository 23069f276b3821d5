//! Role-specific planning rules.
//!
//! Each [`Role`] maps to one zero-sized rule type implementing
//! [`RoleBehavior`]. A rule sees the day's context and a planning roll in
//! `0..100` drawn by the caller; it never touches the RNG itself, so every
//! citizen consumes exactly one draw per day regardless of role.
//!
//! The low-energy override (rest when exhausted) is applied by
//! [`Citizen::plan`] before the rule runs, so rules only describe what a
//! rested citizen of that role would do.
//!
//! [`Citizen::plan`]: crate::Citizen::plan

use autocity_types::{ActionType, CityEvent, DayContext, Plan, Role, Weather};
use rust_decimal::Decimal;

/// Intensity of a short or half day.
const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
/// Intensity of a storm patrol.
const STORM_PATROL: Decimal = Decimal::from_parts(125, 0, 0, false, 2);
/// Intensity of a festival shop day or a crime-wave patrol.
const SURGE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The planning capability of a role.
pub trait RoleBehavior: Sync {
    /// The role this rule belongs to.
    fn role(&self) -> Role;

    /// Choose the day's plan.
    ///
    /// `roll` is uniform in `0..100`. Unrecognized events are treated as a
    /// day with no event.
    fn decide(&self, context: &DayContext, roll: u32) -> Plan;
}

/// Planning rule for [`Role::Worker`].
///
/// Works by default. A storm means a half day whatever else is going on.
/// Otherwise a festival tempts 40% of workers out to socialize and a
/// downturn shortens hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerRule;

impl RoleBehavior for WorkerRule {
    fn role(&self) -> Role {
        Role::Worker
    }

    fn decide(&self, context: &DayContext, roll: u32) -> Plan {
        match (context.weather, context.known_event()) {
            (Weather::Stormy, _) => Plan::new(ActionType::Work)
                .with_intensity(HALF_DAY)
                .with_note("half day because of the storm"),
            (_, Some(CityEvent::Festival)) if roll < 40 => {
                Plan::new(ActionType::Socialize).with_note("skipping work for the festival")
            }
            (_, Some(CityEvent::EconomicDownturn)) => Plan::new(ActionType::Work)
                .with_intensity(HALF_DAY)
                .with_note("short hours in the downturn"),
            _ => Plan::new(ActionType::Work).with_note("heading to the office"),
        }
    }
}

/// Planning rule for [`Role::Shopkeeper`].
///
/// Stays closed in a storm and often in a downturn; opens at extra
/// intensity for a festival; otherwise opens 75% of days and socializes
/// at the market on the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShopkeeperRule;

impl RoleBehavior for ShopkeeperRule {
    fn role(&self) -> Role {
        Role::Shopkeeper
    }

    fn decide(&self, context: &DayContext, roll: u32) -> Plan {
        if context.weather == Weather::Stormy {
            return Plan::new(ActionType::Rest).with_note("no custom in a storm");
        }
        match context.known_event() {
            Some(CityEvent::EconomicDownturn) if roll < 30 => {
                Plan::new(ActionType::Rest).with_note("economy looks bad")
            }
            Some(CityEvent::Festival) => Plan::new(ActionType::Shop)
                .with_intensity(SURGE)
                .with_note("festival crowds"),
            _ if roll < 75 => Plan::new(ActionType::Shop).with_note("opening the store"),
            _ => Plan::new(ActionType::Socialize).with_note("chatting at the market"),
        }
    }
}

/// Planning rule for [`Role::Guard`].
///
/// Always patrols during a crime wave or a storm, at raised intensity;
/// otherwise patrols 80% of days.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardRule;

impl RoleBehavior for GuardRule {
    fn role(&self) -> Role {
        Role::Guard
    }

    fn decide(&self, context: &DayContext, roll: u32) -> Plan {
        if context.known_event() == Some(CityEvent::CrimeWave) {
            return Plan::new(ActionType::Patrol)
                .with_intensity(SURGE)
                .with_note("cracking down on the crime wave");
        }
        if context.weather == Weather::Stormy {
            return Plan::new(ActionType::Patrol)
                .with_intensity(STORM_PATROL)
                .with_note("storm watch");
        }
        match roll {
            0..80 => Plan::new(ActionType::Patrol).with_note("walking the beat"),
            80..95 => Plan::new(ActionType::Socialize).with_note("at the station"),
            _ => Plan::new(ActionType::Rest).with_note("day off"),
        }
    }
}

/// Planning rule for [`Role::Resident`].
///
/// Always joins a festival. Wet weather keeps 60% at home. Otherwise shops,
/// socializes, or rests in a 40/30/30 split.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidentRule;

impl RoleBehavior for ResidentRule {
    fn role(&self) -> Role {
        Role::Resident
    }

    fn decide(&self, context: &DayContext, roll: u32) -> Plan {
        if context.known_event() == Some(CityEvent::Festival) {
            return Plan::new(ActionType::Socialize).with_note("off to the festival");
        }
        if context.weather.is_wet() && roll < 60 {
            return Plan::new(ActionType::Rest).with_note("staying in out of the weather");
        }
        match roll {
            0..40 => Plan::new(ActionType::Shop).with_note("running errands"),
            40..70 => Plan::new(ActionType::Socialize).with_note("meeting friends in the square"),
            _ => Plan::new(ActionType::Rest).with_note("a quiet day at home"),
        }
    }
}

/// The planning rule for a role.
pub fn behavior_for(role: Role) -> &'static dyn RoleBehavior {
    match role {
        Role::Worker => &WorkerRule,
        Role::Shopkeeper => &ShopkeeperRule,
        Role::Guard => &GuardRule,
        Role::Resident => &ResidentRule,
    }
}
