//! The daily workflow: the 5-phase day cycle and the run state machine.
//!
//! Each day runs through these phases in order:
//!
//! 1. **Day Start** -- advance the day counter and draw the day's
//!    [`DayContext`] (weather, optional event).
//!
//! 2. **Planning** -- every citizen, in roster order, produces a [`Plan`].
//!
//! 3. **Action** -- every citizen executes its plan against the same
//!    pre-update [`CitySnapshot`], updating its own vitals and producing an
//!    [`Effect`].
//!
//! 4. **City Update** -- all effects are folded into the city in a single
//!    [`CityState::apply_effects`] call.
//!
//! 5. **Reporting** -- a [`DayReport`] is assembled and handed to the
//!    [`DayReportSink`].
//!
//! A workflow moves `NotStarted -> Running -> Finished` exactly once. All
//! randomness comes from one [`StdRng`] seeded at construction: per day the
//! context draws come first, then one planning roll per citizen in roster
//! order. Two workflows built from the same configuration and seed produce
//! identical report sequences.
//!
//! [`DayContext`]: autocity_types::DayContext
//! [`Plan`]: autocity_types::Plan
//! [`CitySnapshot`]: autocity_types::CitySnapshot
//! [`Effect`]: autocity_types::Effect

use std::collections::BTreeSet;

use autocity_citizens::{ActionRules, Citizen};
use autocity_city::{CityState, ContextGenerator};
use autocity_types::{ActionTally, CitizenDay, DayReport, RunId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::ConfigurationError;
use crate::sink::DayReportSink;

/// Lifecycle of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// Built but `run` has not been called.
    NotStarted,
    /// Days are being simulated.
    Running,
    /// The requested days have all been simulated.
    Finished,
}

/// Drives the city and its citizens through a sequence of days.
#[derive(Debug)]
pub struct SimulationWorkflow {
    run_id: RunId,
    phase: WorkflowPhase,
    city: CityState,
    citizens: Vec<Citizen>,
    generator: ContextGenerator,
    rules: ActionRules,
    rng: StdRng,
}

impl SimulationWorkflow {
    /// Assemble a workflow from already-built parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateCitizen`] if two citizens share
    /// an id.
    pub fn new(
        city: CityState,
        citizens: Vec<Citizen>,
        generator: ContextGenerator,
        rules: ActionRules,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        let mut seen = BTreeSet::new();
        if let Some(dup) = citizens.iter().find(|c| !seen.insert(c.id())) {
            return Err(ConfigurationError::DuplicateCitizen { citizen: dup.id() });
        }

        let run_id = RunId::new();
        info!(
            %run_id,
            seed,
            citizens = citizens.len(),
            economy = %city.economy(),
            safety = %city.safety(),
            happiness = %city.happiness(),
            "Workflow created"
        );

        Ok(Self {
            run_id,
            phase: WorkflowPhase::NotStarted,
            city,
            citizens,
            generator,
            rules,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Build a workflow from a configuration.
    ///
    /// Validation of the city, roster, and environment completes before the
    /// workflow exists. The configured day count is not checked here; it is
    /// passed to [`run`](Self::run).
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigurationError> {
        let generator = config.context_generator()?;
        let city = config.build_city()?;
        let citizens = config.build_roster()?;
        Self::new(
            city,
            citizens,
            generator,
            config.rules.clone(),
            config.world.seed,
        )
    }

    /// Log correlation id of this workflow.
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// The city as it stands now.
    pub const fn city(&self) -> &CityState {
        &self.city
    }

    /// The roster, in planning order.
    pub fn citizens(&self) -> &[Citizen] {
        &self.citizens
    }

    /// Simulate `days` days, handing each report to `sink` as it completes.
    ///
    /// Returns every report in day order. The day counter equals `days` when
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::AlreadyFinished`] if the workflow has
    /// already run, or [`ConfigurationError::InvalidDays`] if `days` is
    /// zero. Neither mutates any state.
    pub fn run(
        &mut self,
        days: u32,
        sink: &mut dyn DayReportSink,
    ) -> Result<Vec<DayReport>, ConfigurationError> {
        if self.phase != WorkflowPhase::NotStarted {
            return Err(ConfigurationError::AlreadyFinished);
        }
        if days == 0 {
            return Err(ConfigurationError::InvalidDays { days });
        }

        self.phase = WorkflowPhase::Running;
        info!(run_id = %self.run_id, days, "Simulation starting");

        let target = u64::from(days);
        let mut reports = Vec::new();
        while self.city.day() < target {
            let report = self.run_day();
            sink.on_day(&report);
            reports.push(report);
        }

        self.phase = WorkflowPhase::Finished;
        info!(
            run_id = %self.run_id,
            days = self.city.day(),
            economy = %self.city.economy(),
            safety = %self.city.safety(),
            happiness = %self.city.happiness(),
            "Simulation finished"
        );
        Ok(reports)
    }

    /// Execute one complete day.
    fn run_day(&mut self) -> DayReport {
        // --- Phase 1: Day Start ---
        let day = self.city.advance_day();
        let context = self.generator.next(day, &mut self.rng);
        info!(
            run_id = %self.run_id,
            day,
            weather = %context.weather,
            event = ?context.event,
            "Day started"
        );

        // --- Phase 2: Planning ---
        let plans: Vec<_> = self
            .citizens
            .iter()
            .map(|citizen| citizen.plan(&context, &self.rules, &mut self.rng))
            .collect();

        // --- Phase 3: Action ---
        let before = self.city.snapshot();
        let mut tally = ActionTally::default();
        let mut entries = Vec::with_capacity(self.citizens.len());
        for (citizen, plan) in self.citizens.iter_mut().zip(plans) {
            let resolution = citizen.act(&plan, &before, &self.rules);
            tally.record(plan.action, &resolution.outcome);
            entries.push(CitizenDay {
                citizen_id: citizen.id(),
                name: citizen.name().to_owned(),
                role: citizen.role(),
                plan,
                effect: resolution.effect,
                outcome: resolution.outcome,
                vitals_after: *citizen.vitals(),
            });
        }

        // --- Phase 4: City Update ---
        self.city.apply_effects(entries.iter().map(|entry| &entry.effect));
        let after = self.city.snapshot();

        // --- Phase 5: Reporting ---
        debug!(
            run_id = %self.run_id,
            day,
            work = tally.work,
            shop = tally.shop,
            patrol = tally.patrol,
            rest = tally.rest,
            socialize = tally.socialize,
            failed = tally.failed,
            "Day tally"
        );
        info!(
            run_id = %self.run_id,
            day,
            economy = %after.economy,
            safety = %after.safety,
            happiness = %after.happiness,
            "Day complete"
        );

        DayReport {
            day,
            context,
            citizens: entries,
            tally,
            city: after,
        }
    }
}
