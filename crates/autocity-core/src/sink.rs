//! Reporting collaborators that receive each finished day.
//!
//! The workflow has no knowledge of output formats or destinations. It hands
//! every [`DayReport`] to a [`DayReportSink`] as soon as the day completes;
//! the engine binary supplies a console renderer, tests use
//! [`CollectingSink`] or [`NoOpSink`].

use autocity_types::DayReport;

/// Callback invoked after each day completes.
pub trait DayReportSink {
    /// Called once per day, in day order, after the city update.
    fn on_day(&mut self, report: &DayReport);
}

/// A sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DayReportSink for NoOpSink {
    fn on_day(&mut self, _report: &DayReport) {}
}

/// A sink that keeps a copy of every report it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    reports: Vec<DayReport>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Reports received so far, in day order.
    pub fn reports(&self) -> &[DayReport] {
        &self.reports
    }

    /// Consume the sink, returning the collected reports.
    pub fn into_reports(self) -> Vec<DayReport> {
        self.reports
    }
}

impl DayReportSink for CollectingSink {
    fn on_day(&mut self, report: &DayReport) {
        self.reports.push(report.clone());
    }
}
