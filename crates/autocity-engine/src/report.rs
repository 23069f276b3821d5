//! Console rendering of day reports.
//!
//! [`ConsoleReporter`] is the engine's [`DayReportSink`]. It writes each day
//! either as a human-readable block or as one JSON object per line. Write
//! failures do not interrupt the simulation; the first one is kept and
//! surfaced by [`ConsoleReporter::finish`].

use std::fmt;
use std::io::{self, Write};

use autocity_core::DayReportSink;
use autocity_core::config::ReportFormat;
use autocity_types::{ActionOutcome, DayReport};
use tracing::warn;

/// Width of the banner rule above and below each day heading.
const RULE_WIDTH: usize = 60;

/// Writes day reports to an output stream.
pub struct ConsoleReporter<W: Write> {
    out: W,
    format: ReportFormat,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing `format` to `out`.
    pub const fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Flush the output and return the first write error, if any.
    pub fn finish(mut self) -> Result<W, io::Error> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, report: &DayReport) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => write!(self.out, "{}", TextReport(report)),
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)
            }
        }
    }
}

impl<W: Write> DayReportSink for ConsoleReporter<W> {
    fn on_day(&mut self, report: &DayReport) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write(report) {
            warn!(day = report.day, error = %err, "Failed to write day report");
            self.error = Some(err);
        }
    }
}

/// Human-readable rendering of one day.
struct TextReport<'a>(&'a DayReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);
        let event = report
            .context
            .event
            .map_or_else(|| "none".to_owned(), |e| e.to_string());

        writeln!(f, "{rule}")?;
        writeln!(f, " Day {} begins in Autocity", report.day)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "[Planning] Weather: {}. Event: {event}", report.context.weather)?;
        for entry in &report.citizens {
            writeln!(
                f,
                "  - {} ({}) plans to {} x{} ({})",
                entry.name, entry.role, entry.plan.action, entry.plan.intensity, entry.plan.note
            )?;
        }

        writeln!(f)?;
        writeln!(f, "[Actions]")?;
        for entry in &report.citizens {
            let vitals = &entry.vitals_after;
            match &entry.outcome {
                ActionOutcome::Completed => writeln!(
                    f,
                    "  - {} did {}: energy {:.1}, satisfaction {:.1}, money {:.2}",
                    entry.name, entry.plan.action, vitals.energy, vitals.satisfaction, vitals.money
                )?,
                ActionOutcome::Failed { reason } => writeln!(
                    f,
                    "  - {} could not {}: {reason}",
                    entry.name, entry.plan.action
                )?,
            }
        }

        writeln!(f)?;
        writeln!(f, "[City Update]")?;
        writeln!(f, "  Economy:   {:.2}", report.city.economy)?;
        writeln!(f, "  Safety:    {:.2}", report.city.safety)?;
        writeln!(f, "  Happiness: {:.2}", report.city.happiness)?;

        let tally = &report.tally;
        writeln!(f)?;
        writeln!(f, "[Daily Stats]")?;
        writeln!(
            f,
            "  work: {}, shop: {}, patrol: {}, rest: {}, socialize: {}, failed: {}",
            tally.work, tally.shop, tally.patrol, tally.rest, tally.socialize, tally.failed
        )?;
        writeln!(f)
    }
}
