//! Configuration loading and typed config structures for the Autocity simulation.
//!
//! The canonical configuration lives in `autocity-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, and [`SimulationConfig::validate`]
//! which checks everything the workflow needs before any state is built.
//!
//! Every section and field is optional; an empty document yields the default
//! six-citizen city.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use autocity_citizens::{ActionRules, Citizen, CitizenBounds};
use autocity_city::{CityBounds, CityState, ContextGenerator, ContextWeights};
use autocity_types::{CitizenId, CitizenVitals, CityEvent, Role, Weather};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfigurationError;

/// Environment variable overriding `world.seed`.
pub const SEED_ENV: &str = "AUTOCITY_SEED";
/// Environment variable overriding `simulation.days`.
pub const DAYS_ENV: &str = "AUTOCITY_DAYS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The parsed configuration is not valid.
    #[error("invalid configuration: {source}")]
    Invalid {
        /// The validation failure.
        #[from]
        source: ConfigurationError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `autocity-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed).
    #[serde(default)]
    pub world: WorldConfig,

    /// Run length.
    #[serde(default)]
    pub simulation: RunConfig,

    /// Initial city metrics and their bounds.
    #[serde(default)]
    pub city: CityConfig,

    /// Roster and citizen state ranges.
    #[serde(default)]
    pub citizens: CitizensConfig,

    /// Planning threshold and action formulas.
    #[serde(default)]
    pub rules: ActionRules,

    /// Weather and event tables.
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Logging and report output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `AUTOCITY_SEED` overrides `world.seed`
    /// - `AUTOCITY_DAYS` overrides `simulation.days`
    ///
    /// The result is not validated; call [`validate`](Self::validate) or
    /// build a workflow from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, applying environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override values from `AUTOCITY_SEED` and `AUTOCITY_DAYS`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SEED_ENV) {
            match val.trim().parse() {
                Ok(seed) => self.world.seed = seed,
                Err(_) => tracing::warn!(var = SEED_ENV, value = %val, "Ignoring invalid override"),
            }
        }
        if let Ok(val) = std::env::var(DAYS_ENV) {
            match val.trim().parse() {
                Ok(days) => self.simulation.days = days,
                Err(_) => tracing::warn!(var = DAYS_ENV, value = %val, "Ignoring invalid override"),
            }
        }
    }

    /// Check the whole configuration without building a workflow.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found, checking the day
    /// count, the environment tables, the city, and then the roster.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.simulation.days == 0 {
            return Err(ConfigurationError::InvalidDays {
                days: self.simulation.days,
            });
        }
        self.context_generator()?;
        self.build_city()?;
        self.build_roster()?;
        Ok(())
    }

    /// Build the initial city from the `city` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidBounds`] or
    /// [`ConfigurationError::InitialCityOutOfBounds`].
    pub fn build_city(&self) -> Result<CityState, ConfigurationError> {
        CityState::new(
            self.city.economy,
            self.city.safety,
            self.city.happiness,
            self.city.bounds,
        )
        .map_err(|err| ConfigurationError::from_city(&err))
    }

    /// Build the roster from the `citizens` section, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateCitizen`] for a repeated id,
    /// or the translated [`CitizenError`](autocity_citizens::CitizenError)
    /// of the first invalid entry.
    pub fn build_roster(&self) -> Result<Vec<Citizen>, ConfigurationError> {
        let mut seen = BTreeSet::new();
        self.citizens
            .roster
            .iter()
            .map(|entry| {
                if !seen.insert(entry.id) {
                    return Err(ConfigurationError::DuplicateCitizen { citizen: entry.id });
                }
                entry
                    .build(self.citizens.bounds)
                    .map_err(|err| ConfigurationError::from_citizen(&err))
            })
            .collect()
    }

    /// Build the daily context generator from the `environment` section.
    ///
    /// A configured `fixed_weather` yields the same context every day.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidEventChance`] when the event
    /// chance exceeds 100.
    pub fn context_generator(&self) -> Result<ContextGenerator, ConfigurationError> {
        let env = &self.environment;
        if env.event_chance_pct > 100 {
            return Err(ConfigurationError::InvalidEventChance {
                pct: env.event_chance_pct,
            });
        }
        if let Some(weather) = env.fixed_weather {
            return Ok(ContextGenerator::fixed(weather, env.fixed_event));
        }
        Ok(ContextGenerator::new(ContextWeights {
            weather: env.weather_weights.clone(),
            events: env.event_weights.clone(),
            event_chance_pct: env.event_chance_pct,
        }))
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
        }
    }
}

/// Run-length configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of days to simulate (must be at least 1).
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

/// Initial city metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CityConfig {
    /// Initial economy score.
    #[serde(default = "default_metric")]
    pub economy: Decimal,

    /// Initial safety score.
    #[serde(default = "default_metric")]
    pub safety: Decimal,

    /// Initial happiness score.
    #[serde(default = "default_metric")]
    pub happiness: Decimal,

    /// Metric ranges.
    #[serde(default)]
    pub bounds: CityBounds,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            economy: default_metric(),
            safety: default_metric(),
            happiness: default_metric(),
            bounds: CityBounds::default(),
        }
    }
}

/// Roster and citizen ranges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitizensConfig {
    /// Ranges shared by every citizen.
    #[serde(default)]
    pub bounds: CitizenBounds,

    /// The citizens, in planning order. An empty roster is allowed.
    #[serde(default = "default_roster")]
    pub roster: Vec<RosterEntry>,
}

impl Default for CitizensConfig {
    fn default() -> Self {
        Self {
            bounds: CitizenBounds::default(),
            roster: default_roster(),
        }
    }
}

/// One citizen in the roster. Omitted vitals take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    /// Unique roster id.
    pub id: CitizenId,
    /// Display name.
    pub name: String,
    /// Behavioural role.
    pub role: Role,
    /// Initial energy (default: 100).
    #[serde(default)]
    pub energy: Option<Decimal>,
    /// Initial satisfaction (default: 50).
    #[serde(default)]
    pub satisfaction: Option<Decimal>,
    /// Initial money (default: 50).
    #[serde(default)]
    pub money: Option<Decimal>,
}

impl RosterEntry {
    /// An entry with default vitals.
    pub fn new(id: u32, name: &str, role: Role) -> Self {
        Self {
            id: CitizenId::new(id),
            name: name.to_owned(),
            role,
            energy: None,
            satisfaction: None,
            money: None,
        }
    }

    /// Initial vitals with defaults filled in.
    pub fn vitals(&self) -> CitizenVitals {
        let defaults = CitizenVitals::default();
        CitizenVitals {
            energy: self.energy.unwrap_or(defaults.energy),
            satisfaction: self.satisfaction.unwrap_or(defaults.satisfaction),
            money: self.money.unwrap_or(defaults.money),
        }
    }

    fn build(&self, bounds: CitizenBounds) -> Result<Citizen, autocity_citizens::CitizenError> {
        Citizen::new(self.id, self.name.as_str(), self.role, self.vitals(), bounds)
    }
}

/// Weather and event configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentConfig {
    /// Relative weight of each weather variant.
    #[serde(default = "default_weather_weights")]
    pub weather_weights: BTreeMap<Weather, u32>,

    /// Relative weight of each event, once one fires.
    #[serde(default = "default_event_weights")]
    pub event_weights: BTreeMap<CityEvent, u32>,

    /// Percentage chance (0--100) that an event fires on a given day.
    #[serde(default = "default_event_chance_pct")]
    pub event_chance_pct: u32,

    /// Force the same weather every day, bypassing the tables.
    #[serde(default)]
    pub fixed_weather: Option<Weather>,

    /// Event paired with `fixed_weather`; ignored without it.
    #[serde(default)]
    pub fixed_event: Option<CityEvent>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            weather_weights: default_weather_weights(),
            event_weights: default_event_weights(),
            event_chance_pct: default_event_chance_pct(),
            fixed_weather: None,
            fixed_event: None,
        }
    }
}

/// How day reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per day.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,

    /// Format of the daily report on stdout.
    #[serde(default)]
    pub report_format: ReportFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            report_format: ReportFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Autocity".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_days() -> u32 {
    5
}

const fn default_metric() -> Decimal {
    Decimal::from_parts(50, 0, 0, false, 0)
}

fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(1, "Alice", Role::Worker),
        RosterEntry::new(2, "Bob", Role::Worker),
        RosterEntry::new(3, "Carla", Role::Shopkeeper),
        RosterEntry::new(4, "Daniel", Role::Resident),
        RosterEntry::new(5, "Eva", Role::Guard),
        RosterEntry::new(6, "Frank", Role::Resident),
    ]
}

fn default_weather_weights() -> BTreeMap<Weather, u32> {
    ContextWeights::default().weather
}

fn default_event_weights() -> BTreeMap<CityEvent, u32> {
    ContextWeights::default().events
}

fn default_event_chance_pct() -> u32 {
    ContextWeights::default().event_chance_pct
}

fn default_log_level() -> String {
    "info".to_owned()
}
