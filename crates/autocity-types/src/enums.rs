//! Enumeration types for the Autocity simulation.
//!
//! Every enum serializes in `snake_case` so configuration files and JSON
//! reports read naturally (`role: shopkeeper`, `weather: stormy`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Behavioral category of a citizen.
///
/// The role is fixed for the citizen's lifetime and selects the planning
/// rule applied each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Goes to work most days and earns money.
    Worker,
    /// Runs a shop; sensitive to bad weather and downturns.
    Shopkeeper,
    /// Patrols the streets to keep the city safe.
    Guard,
    /// A generic resident who shops, socializes, or rests.
    Resident,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Self; 4] = [Self::Worker, Self::Shopkeeper, Self::Guard, Self::Resident];

    /// Lowercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Shopkeeper => "shopkeeper",
            Self::Guard => "guard",
            Self::Resident => "resident",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// The day's weather, drawn once per day by the context generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    /// Clear skies.
    Sunny,
    /// Overcast but dry.
    Cloudy,
    /// Steady rain.
    Rainy,
    /// Strong wind.
    Windy,
    /// Severe storm; keeps customers at home.
    Stormy,
}

impl Weather {
    /// All weather variants, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rainy,
        Self::Windy,
        Self::Stormy,
    ];

    /// Lowercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Windy => "windy",
            Self::Stormy => "stormy",
        }
    }

    /// Whether the weather keeps people indoors.
    pub const fn is_wet(self) -> bool {
        matches!(self, Self::Rainy | Self::Stormy)
    }
}

impl core::fmt::Display for Weather {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// City events
// ---------------------------------------------------------------------------

/// A random city-wide event that may occur on a given day.
///
/// Deserialization is lenient: any name that is not a known event becomes
/// [`CityEvent::Unrecognized`], which planning treats the same as a quiet
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum CityEvent {
    /// A festival draws people out to celebrate.
    Festival,
    /// A minor economic downturn dampens trade.
    EconomicDownturn,
    /// A wave of petty crime.
    CrimeWave,
    /// An event name this build does not know about.
    Unrecognized,
}

impl CityEvent {
    /// The events that carry a planning rule.
    pub const KNOWN: [Self; 3] = [Self::Festival, Self::EconomicDownturn, Self::CrimeWave];

    /// Lowercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Festival => "festival",
            Self::EconomicDownturn => "economic_downturn",
            Self::CrimeWave => "crime_wave",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for CityEvent {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "festival" | "city_festival" => Self::Festival,
            "economic_downturn" | "minor_economic_downturn" => Self::EconomicDownturn,
            "crime_wave" => Self::CrimeWave,
            _ => Self::Unrecognized,
        }
    }
}

impl core::fmt::Display for CityEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The kind of action a citizen plans for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Paid work; grows the economy.
    Work,
    /// Buying or selling goods; grows the economy at a cost in money.
    Shop,
    /// Walking the streets; raises safety.
    Patrol,
    /// Staying home to recover energy.
    Rest,
    /// Meeting people; raises happiness.
    Socialize,
}

impl ActionType {
    /// Lowercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Shop => "shop",
            Self::Patrol => "patrol",
            Self::Rest => "rest",
            Self::Socialize => "socialize",
        }
    }
}

impl core::fmt::Display for ActionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_deserialize_from_snake_case() {
        let role: Role = serde_json::from_str("\"shopkeeper\"").unwrap_or(Role::Worker);
        assert_eq!(role, Role::Shopkeeper);
    }

    #[test]
    fn known_events_round_trip_by_name() {
        for event in CityEvent::KNOWN {
            assert_eq!(CityEvent::from(event.as_str().to_owned()), event);
        }
    }

    #[test]
    fn unknown_event_names_become_unrecognized() {
        let event: Result<CityEvent, _> = serde_json::from_str("\"alien_invasion\"");
        assert!(matches!(event, Ok(CityEvent::Unrecognized)));
    }

    #[test]
    fn legacy_event_names_are_accepted() {
        assert_eq!(CityEvent::from(String::from("city_festival")), CityEvent::Festival);
        assert_eq!(
            CityEvent::from(String::from("minor_economic_downturn")),
            CityEvent::EconomicDownturn
        );
    }

    #[test]
    fn wet_weather() {
        assert!(Weather::Rainy.is_wet());
        assert!(Weather::Stormy.is_wet());
        assert!(!Weather::Windy.is_wet());
    }
}
