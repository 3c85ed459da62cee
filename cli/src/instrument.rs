use std::time::{Duration, Instant};

use graph_dls_core::SearchProbe;
use serde::Serialize;

use crate::alloc::PeakAlloc;

/// Wall-clock time and heap high-water mark of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    pub peak_memory_bytes: usize,
}

fn serialize_nanos<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

/// Probe that measures the search window reported by the core.
pub struct Instrumentation<'a> {
    alloc: &'a PeakAlloc,
    started: Option<Instant>,
    baseline: usize,
    stats: SearchStats,
}

impl<'a> Instrumentation<'a> {
    pub fn new(alloc: &'a PeakAlloc) -> Self {
        Self {
            alloc,
            started: None,
            baseline: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl SearchProbe for Instrumentation<'_> {
    fn search_started(&mut self) {
        self.baseline = self.alloc.reset_peak();
        self.started = Some(Instant::now());
    }

    fn search_finished(&mut self) {
        if let Some(started) = self.started.take() {
            self.stats.elapsed = started.elapsed();
        }
        self.stats.peak_memory_bytes = self.alloc.peak().saturating_sub(self.baseline);
    }
}

/// Render a duration in the largest unit that keeps the value at or above 1.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else if secs >= 1e-6 {
        format!("{:.3} µs", secs * 1e6)
    } else {
        format!("{} ns", d.as_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_dls_core::{run_with_probe, Graph, SearchRequest};

    #[test]
    fn test_format_units() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.500 s");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.500 ms");
        assert_eq!(format_duration(Duration::from_nanos(12_345)), "12.345 µs");
        assert_eq!(format_duration(Duration::from_nanos(999)), "999 ns");
        assert_eq!(format_duration(Duration::ZERO), "0 ns");
    }

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1.000 s");
        assert_eq!(format_duration(Duration::from_millis(1)), "1.000 ms");
        assert_eq!(format_duration(Duration::from_micros(1)), "1.000 µs");
    }

    #[test]
    fn test_probe_records_search() {
        let graph = Graph::sample();
        let mut probe = Instrumentation::new(&crate::ALLOC);
        run_with_probe(&graph, &SearchRequest::new("A", "D", 3), &mut probe).unwrap();
        // Peak bytes are shared with concurrent tests, so only the window is checked
        assert!(probe.started.is_none());
        assert!(probe.baseline > 0);
        assert!(probe.stats().elapsed < Duration::from_secs(60));
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = SearchStats {
            elapsed: Duration::from_nanos(1234),
            peak_memory_bytes: 512,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["elapsed_ns"], 1234);
        assert_eq!(json["peak_memory_bytes"], 512);
    }
}
