//! Report formats for a finished run: colored console text and JSON.

pub mod console;
pub mod json;

use graph_dls_core::SearchOutcome;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::instrument::SearchStats;

/// Everything a reporter needs: the search outcome plus measurements.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl RunReport {
    pub fn new(outcome: SearchOutcome, stats: SearchStats) -> Self {
        Self { outcome, stats }
    }
}

/// Trait for all report generators.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &RunReport) -> Result<String, String>;
}

pub fn reporter_for(format: OutputFormat, use_color: bool) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Console => Box::new(console::ConsoleReporter::new(use_color)),
        OutputFormat::Json => Box::new(json::JsonReporter),
    }
}

/// Cost as shown to humans: whole numbers without decimals, "inf" when unreachable.
pub fn format_cost(cost: f64) -> String {
    if cost.is_infinite() {
        "inf".to_string()
    } else if cost.fract() == 0.0 {
        format!("{:.0}", cost)
    } else {
        format!("{}", cost)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::time::Duration;

    use graph_dls_core::{run, Graph, SearchRequest};

    use super::RunReport;
    use crate::instrument::SearchStats;

    pub fn sample_report(start: &str, goal: &str, limit: i64) -> RunReport {
        let outcome = run(&Graph::sample(), &SearchRequest::new(start, goal, limit)).unwrap();
        RunReport::new(
            outcome,
            SearchStats {
                elapsed: Duration::from_nanos(4_200),
                peak_memory_bytes: 768,
            },
        )
    }
}
