//! Non-preemptive priority scheduling.

use crate::config::SimulationConfig;
use crate::models::{ProcessSpec, ScheduleResult};

use super::selection::run_to_completion_by_key;

/// At each decision point run the arrived process with the lowest priority
/// number (1 beats 2).
///
/// Processes without a priority use `config.default_priority`. Static input
/// means no process can starve, so there is no aging.
pub fn priority(processes: &[ProcessSpec], config: &SimulationConfig) -> ScheduleResult {
    let default_priority = config.default_priority;
    run_to_completion_by_key(
        processes,
        config.verbosity,
        |p| p.priority.unwrap_or(default_priority),
        |p, level| {
            format!(
                "{} has the highest priority ({}) among arrived processes",
                p.id, level
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_number_runs_first() {
        let processes = vec![
            ProcessSpec::with_priority("P1", 0, 4, 2),
            ProcessSpec::with_priority("P2", 0, 3, 1),
        ];
        let result = priority(&processes, &SimulationConfig::default());
        let spans: Vec<(&str, u64, u64)> = result
            .intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
            .collect();
        assert_eq!(spans, vec![("P2", 0, 3), ("P1", 3, 7)]);
    }

    #[test]
    fn test_non_preemptive() {
        let processes = vec![
            ProcessSpec::with_priority("low", 0, 5, 9),
            ProcessSpec::with_priority("urgent", 1, 1, 1),
        ];
        let result = priority(&processes, &SimulationConfig::default());
        assert_eq!(result.intervals[0].process_id, "low");
        assert_eq!(result.intervals[0].end_time, 5);
        assert_eq!(result.result_for("urgent").unwrap().waiting_time, 4);
    }

    #[test]
    fn test_missing_priority_uses_default() {
        let processes = vec![
            ProcessSpec::simple("unset", 0, 2),
            ProcessSpec::with_priority("set", 0, 2, 5),
        ];
        // Default is least urgent
        let result = priority(&processes, &SimulationConfig::default());
        assert_eq!(result.intervals[0].process_id, "set");

        let config = SimulationConfig {
            default_priority: 0,
            ..SimulationConfig::default()
        };
        let result = priority(&processes, &config);
        assert_eq!(result.intervals[0].process_id, "unset");
    }

    #[test]
    fn test_equal_priorities_keep_input_order() {
        let processes = vec![
            ProcessSpec::with_priority("X", 0, 1, 3),
            ProcessSpec::with_priority("Y", 0, 1, 3),
        ];
        let result = priority(&processes, &SimulationConfig::default());
        assert_eq!(result.intervals[0].process_id, "X");
    }
}
