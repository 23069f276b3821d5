//! Daily context generation: weather and random city events.
//!
//! # Weather
//!
//! Weather is drawn once per day from a weighted table. Default weights:
//!
//! | Weather | Weight |
//! |---------|--------|
//! | Sunny   | 35     |
//! | Cloudy  | 25     |
//! | Rainy   | 20     |
//! | Windy   | 12     |
//! | Stormy  | 8      |
//!
//! # Events
//!
//! Independently of the weather, an event fires with probability
//! `event_chance_pct` (default 25%). When it fires, the event is drawn from
//! a second weighted table (default Festival 40, `EconomicDownturn` 32,
//! `CrimeWave` 28, i.e. 10% / 8% / 7% of all days).
//!
//! # Determinism
//!
//! The generator holds no random state of its own. Each call to
//! [`ContextGenerator::next`] takes the simulation's shared RNG and draws,
//! in this order: one weather roll, one event-chance roll, and one event
//! roll only when the event fires. The same seed therefore always yields the
//! same sequence of contexts.

use std::collections::BTreeMap;

use autocity_types::{CityEvent, DayContext, Weather};
use rand::Rng;
use serde::Deserialize;

/// Weighted tables for weather and events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContextWeights {
    /// Relative weight of each weather variant.
    #[serde(default = "default_weather_weights")]
    pub weather: BTreeMap<Weather, u32>,

    /// Relative weight of each event, used once an event has fired.
    #[serde(default = "default_event_weights")]
    pub events: BTreeMap<CityEvent, u32>,

    /// Percentage chance (0--100) that any event fires on a given day.
    #[serde(default = "default_event_chance_pct")]
    pub event_chance_pct: u32,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            weather: default_weather_weights(),
            events: default_event_weights(),
            event_chance_pct: default_event_chance_pct(),
        }
    }
}

impl ContextWeights {
    /// Sum of the weather weights.
    fn weather_total(&self) -> u32 {
        total_weight(&self.weather)
    }

    /// Sum of the event weights.
    fn event_total(&self) -> u32 {
        total_weight(&self.events)
    }
}

/// How the generator produces contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Draw from weighted tables.
    Random(ContextWeights),
    /// Always return the same conditions without touching the RNG.
    Fixed {
        /// Forced weather.
        weather: Weather,
        /// Forced event.
        event: Option<CityEvent>,
    },
}

/// Produces one [`DayContext`] per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextGenerator {
    /// Random or fixed.
    mode: Mode,
}

impl ContextGenerator {
    /// A generator drawing from the given tables.
    pub const fn new(weights: ContextWeights) -> Self {
        Self {
            mode: Mode::Random(weights),
        }
    }

    /// A generator that always returns the given weather and event.
    ///
    /// Fixed generators draw nothing from the RNG.
    pub const fn fixed(weather: Weather, event: Option<CityEvent>) -> Self {
        Self {
            mode: Mode::Fixed { weather, event },
        }
    }

    /// Produce the context for `day`, advancing `rng`.
    pub fn next(&self, day: u64, rng: &mut impl Rng) -> DayContext {
        match &self.mode {
            Mode::Fixed { weather, event } => DayContext {
                day,
                weather: *weather,
                event: *event,
            },
            Mode::Random(weights) => {
                let weather_roll = roll(rng, weights.weather_total());
                let weather = select(&weights.weather, weather_roll).unwrap_or(Weather::Sunny);

                let chance_roll: u32 = rng.random_range(0..100);
                let event = if chance_roll < weights.event_chance_pct {
                    let event_roll = roll(rng, weights.event_total());
                    select(&weights.events, event_roll)
                } else {
                    None
                };

                DayContext {
                    day,
                    weather,
                    event,
                }
            }
        }
    }
}

impl Default for ContextGenerator {
    fn default() -> Self {
        Self::new(ContextWeights::default())
    }
}

/// Draw a value in `[0, total)`; a zero total still consumes one draw.
fn roll(rng: &mut impl Rng, total: u32) -> u32 {
    rng.random_range(0..total.max(1))
}

/// Pick the entry whose cumulative weight first exceeds `random_value`.
///
/// Returns `None` if the table is empty or all weights are zero.
fn select<K: Copy>(table: &BTreeMap<K, u32>, random_value: u32) -> Option<K> {
    let mut cumulative: u32 = 0;
    for (&key, &weight) in table {
        cumulative = cumulative.saturating_add(weight);
        if random_value < cumulative {
            return Some(key);
        }
    }
    None
}

/// Sum of all weights in a table.
fn total_weight<K>(table: &BTreeMap<K, u32>) -> u32 {
    table
        .values()
        .fold(0_u32, |acc, &weight| acc.saturating_add(weight))
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_weather_weights() -> BTreeMap<Weather, u32> {
    BTreeMap::from([
        (Weather::Sunny, 35),
        (Weather::Cloudy, 25),
        (Weather::Rainy, 20),
        (Weather::Windy, 12),
        (Weather::Stormy, 8),
    ])
}

fn default_event_weights() -> BTreeMap<CityEvent, u32> {
    BTreeMap::from([
        (CityEvent::Festival, 40),
        (CityEvent::EconomicDownturn, 32),
        (CityEvent::CrimeWave, 28),
    ])
}

const fn default_event_chance_pct() -> u32 {
    25
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn default_weights_total_100() {
        let weights = ContextWeights::default();
        assert_eq!(weights.weather_total(), 100);
        assert_eq!(weights.event_total(), 100);
    }

    #[test]
    fn same_seed_gives_same_contexts() {
        let generator = ContextGenerator::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for day in 1..=200 {
            assert_eq!(
                generator.next(day, &mut rng_a),
                generator.next(day, &mut rng_b),
                "contexts diverged on day {day}"
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let generator = ContextGenerator::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a: Vec<DayContext> = (1..=100).map(|d| generator.next(d, &mut rng_a)).collect();
        let b: Vec<DayContext> = (1..=100).map(|d| generator.next(d, &mut rng_b)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_generator_ignores_rng() {
        let generator = ContextGenerator::fixed(Weather::Stormy, Some(CityEvent::CrimeWave));
        let mut rng = StdRng::seed_from_u64(7);
        let mut untouched = StdRng::seed_from_u64(7);
        let ctx = generator.next(3, &mut rng);
        assert_eq!(ctx.day, 3);
        assert_eq!(ctx.weather, Weather::Stormy);
        assert_eq!(ctx.event, Some(CityEvent::CrimeWave));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    /// Replay `draws` rolls of the default tables' sizes on `reference`.
    fn advance(reference: &mut StdRng, draws: usize) {
        for _ in 0..draws {
            let _: u32 = reference.random_range(0..100);
        }
    }

    #[test]
    fn quiet_day_draws_weather_and_event_chance_only() {
        let generator = ContextGenerator::new(ContextWeights {
            event_chance_pct: 0,
            ..ContextWeights::default()
        });
        let mut rng = StdRng::seed_from_u64(21);
        let mut reference = StdRng::seed_from_u64(21);
        for day in 1..=50 {
            assert!(generator.next(day, &mut rng).event.is_none());
            advance(&mut reference, 2);
            assert_eq!(rng.clone().random::<u64>(), reference.clone().random::<u64>());
        }
    }

    #[test]
    fn eventful_day_draws_one_extra_roll() {
        let generator = ContextGenerator::new(ContextWeights {
            event_chance_pct: 100,
            ..ContextWeights::default()
        });
        let mut rng = StdRng::seed_from_u64(21);
        let mut reference = StdRng::seed_from_u64(21);
        for day in 1..=50 {
            assert!(generator.next(day, &mut rng).event.is_some());
            advance(&mut reference, 3);
            assert_eq!(rng.clone().random::<u64>(), reference.clone().random::<u64>());
        }
    }

    #[test]
    fn zero_event_chance_never_fires() {
        let weights = ContextWeights {
            event_chance_pct: 0,
            ..ContextWeights::default()
        };
        let generator = ContextGenerator::new(weights);
        let mut rng = StdRng::seed_from_u64(1);
        for day in 1..=500 {
            assert!(generator.next(day, &mut rng).event.is_none());
        }
    }

    #[test]
    fn certain_event_chance_always_fires() {
        let weights = ContextWeights {
            event_chance_pct: 100,
            ..ContextWeights::default()
        };
        let generator = ContextGenerator::new(weights);
        let mut rng = StdRng::seed_from_u64(1);
        for day in 1..=500 {
            assert!(generator.next(day, &mut rng).event.is_some());
        }
    }

    #[test]
    fn zero_weight_weather_never_appears() {
        let mut weights = ContextWeights::default();
        weights.weather.insert(Weather::Stormy, 0);
        let generator = ContextGenerator::new(weights);
        let mut rng = StdRng::seed_from_u64(5);
        for day in 1..=1000 {
            assert_ne!(generator.next(day, &mut rng).weather, Weather::Stormy);
        }
    }

    #[test]
    fn empty_tables_fall_back_to_sunny_and_no_event() {
        let weights = ContextWeights {
            weather: BTreeMap::new(),
            events: BTreeMap::new(),
            event_chance_pct: 100,
        };
        let generator = ContextGenerator::new(weights);
        let mut rng = StdRng::seed_from_u64(11);
        let ctx = generator.next(1, &mut rng);
        assert_eq!(ctx.weather, Weather::Sunny);
        assert_eq!(ctx.event, None);
    }

    #[test]
    fn distribution_roughly_matches_weights() {
        let generator = ContextGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut sunny: u32 = 0;
        let mut events: u32 = 0;
        for day in 1..=10_000 {
            let ctx = generator.next(day, &mut rng);
            if ctx.weather == Weather::Sunny {
                sunny = sunny.saturating_add(1);
            }
            if ctx.event.is_some() {
                events = events.saturating_add(1);
            }
        }
        // 35% sunny, 25% eventful.
        assert!((3000..4000).contains(&sunny), "sunny days: {sunny}");
        assert!((2000..3000).contains(&events), "event days: {events}");
    }

    #[test]
    fn weights_parse_with_unknown_event_names() {
        let weights: ContextWeights = serde_json::from_str(
            r#"{"events":{"festival":1,"meteor_shower":3},"event_chance_pct":50}"#,
        )
        .unwrap();
        assert_eq!(weights.events.get(&CityEvent::Festival), Some(&1));
        assert_eq!(weights.events.get(&CityEvent::Unrecognized), Some(&3));
        assert_eq!(weights.weather, default_weather_weights());
    }
}
