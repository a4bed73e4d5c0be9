//! Shortest job first (non-preemptive).

use crate::config::SimulationConfig;
use crate::models::{ProcessSpec, ScheduleResult};

use super::selection::run_to_completion_by_key;

/// At each decision point run the arrived process with the smallest burst.
///
/// This is not shortest-remaining-time-first: a shorter job arriving while
/// another runs waits until the CPU is free.
pub fn sjf(processes: &[ProcessSpec], config: &SimulationConfig) -> ScheduleResult {
    run_to_completion_by_key(
        processes,
        config.verbosity,
        |p| p.burst_time,
        |p, burst| {
            format!(
                "{} has the shortest burst time ({}) among arrived processes",
                p.id, burst
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(result: &ScheduleResult) -> Vec<(&str, u64, u64)> {
        result
            .intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
            .collect()
    }

    #[test]
    fn test_running_job_is_not_interrupted() {
        let processes = vec![
            ProcessSpec::simple("P1", 0, 6),
            ProcessSpec::simple("P2", 1, 2),
            ProcessSpec::simple("P3", 2, 8),
        ];
        let result = sjf(&processes, &SimulationConfig::default());
        assert_eq!(
            order(&result),
            vec![("P1", 0, 6), ("P2", 6, 8), ("P3", 8, 16)]
        );
    }

    #[test]
    fn test_picks_shortest_among_arrived() {
        let processes = vec![
            ProcessSpec::simple("P1", 0, 3),
            ProcessSpec::simple("P2", 1, 7),
            ProcessSpec::simple("P3", 2, 4),
            ProcessSpec::simple("P4", 2, 1),
        ];
        let result = sjf(&processes, &SimulationConfig::default());
        assert_eq!(
            order(&result),
            vec![("P1", 0, 3), ("P4", 3, 4), ("P3", 4, 8), ("P2", 8, 15)]
        );
        // results are in completion order
        let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P4", "P3", "P2"]);
        assert!((result.avg_waiting_time - (0.0 + 1.0 + 2.0 + 7.0) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_bursts_keep_input_order() {
        let processes = vec![
            ProcessSpec::simple("B", 0, 2),
            ProcessSpec::simple("A", 0, 2),
        ];
        let result = sjf(&processes, &SimulationConfig::default());
        assert_eq!(result.intervals[0].process_id, "B");
    }

    #[test]
    fn test_rationale_mentions_burst() {
        let processes = vec![ProcessSpec::simple("P1", 0, 4)];
        let result = sjf(&processes, &SimulationConfig::default());
        assert_eq!(result.steps[0].action, "Execute P1");
        assert!(result.steps[0].description.contains("shortest burst time (4)"));
    }
}
