//! JSON reporter — machine-readable run report.

use super::{RunReport, Reporter};

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn test_fields() {
        let text = JsonReporter.generate(&sample_report("A", "D", 3)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let outcome = &value["outcome"];
        assert_eq!(outcome["path"], serde_json::json!(["A", "B", "C", "D"]));
        assert_eq!(outcome["dls_cost"], 12.0);
        assert_eq!(outcome["optimal_cost"], 5.0);
        assert_eq!(outcome["optimal"], false);
        assert_eq!(value["stats"]["elapsed_ns"], 4200);
        assert_eq!(value["stats"]["peak_memory_bytes"], 768);
    }

    #[test]
    fn test_not_found_costs_are_null() {
        let text = JsonReporter.generate(&sample_report("D", "A", 5)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["outcome"]["path"].is_null());
        assert!(value["outcome"]["dls_cost"].is_null());
        assert!(value["outcome"]["optimal_cost"].is_null());
        assert_eq!(value["outcome"]["explored"], serde_json::json!(["D"]));
    }
}
