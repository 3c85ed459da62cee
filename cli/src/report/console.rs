//! Console reporter — human-readable output with color codes.

use super::{format_cost, RunReport, Reporter};
use crate::instrument::format_duration;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.paint("\x1b[32m", text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint("\x1b[33m", text)
    }

    fn red(&self, text: &str) -> String {
        self.paint("\x1b[31m", text)
    }

    fn bold(&self, text: &str) -> String {
        self.paint("\x1b[1m", text)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        let outcome = &report.outcome;
        let stats = &report.stats;
        let mut output = String::new();

        output.push('\n');
        match &outcome.path {
            Some(path) => {
                output.push_str(&format!("Path found: {}\n", self.green(&path.join(" → "))));
            }
            None => {
                output.push_str(&self.yellow(&format!(
                    "No path found from {} to {} within depth limit {}.",
                    outcome.request.start, outcome.request.goal, outcome.request.limit
                )));
                output.push('\n');
            }
        }

        let verdict = if outcome.optimal {
            self.green("yes")
        } else {
            self.red("no")
        };
        let optimal_route = outcome
            .optimal_path
            .as_ref()
            .map(|p| p.join(" → "))
            .unwrap_or_else(|| "none".to_string());

        output.push('\n');
        output.push_str(&self.bold("Statistics"));
        output.push('\n');
        let rows = [
            ("Visited nodes", outcome.visited_count.to_string()),
            ("Explored nodes", outcome.explored_count.to_string()),
            ("Explored order", outcome.explored.join(", ")),
            ("Execution time", format_duration(stats.elapsed)),
            ("Peak memory", format!("{} bytes", stats.peak_memory_bytes)),
            ("Optimal solution", verdict),
            ("DLS cost", format_cost(outcome.dls_cost)),
            ("Optimal cost", format_cost(outcome.optimal_cost)),
            ("Optimal route", optimal_route),
        ];
        for (label, value) in rows {
            output.push_str(&format!("  {:<18}{}\n", format!("{label}:"), value));
        }

        Ok(output.trim_end().to_string())
    }
}
