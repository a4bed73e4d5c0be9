//! First come, first served.

use crate::config::SimulationConfig;
use crate::models::{ProcessSpec, ScheduleResult};

use super::state::ArrivalQueue;
use super::trace::TraceBuilder;

/// Run processes to completion in arrival order.
///
/// Equal arrival times keep input order. The CPU idles whenever the next
/// process in line has not arrived yet.
pub fn fcfs(processes: &[ProcessSpec], config: &SimulationConfig) -> ScheduleResult {
    let mut arrivals = ArrivalQueue::new(processes);
    let mut trace = TraceBuilder::new(processes.len(), config.verbosity);
    let mut current_time = 0;

    while let Some(idx) = arrivals.pop_next() {
        let spec = &processes[idx];

        if spec.arrival_time > current_time {
            trace.idle(current_time, spec.arrival_time);
            current_time = spec.arrival_time;
        }

        let end = current_time + spec.burst_time;
        let reason = format!(
            "{} arrived at {}, earliest among waiting processes (first come, first served)",
            spec.id, spec.arrival_time
        );
        trace.execute(
            spec,
            current_time,
            end,
            reason,
            arrivals.arrived_ids(current_time),
        );

        current_time = end;
        trace.complete(spec, current_time, arrivals.arrived_ids(current_time));
    }

    trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepKind;

    fn spans(result: &ScheduleResult) -> Vec<(&str, u64, u64)> {
        result
            .intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
            .collect()
    }

    #[test]
    fn test_textbook_example() {
        let processes = vec![
            ProcessSpec::simple("P1", 0, 5),
            ProcessSpec::simple("P2", 1, 3),
            ProcessSpec::simple("P3", 2, 8),
        ];
        let result = fcfs(&processes, &SimulationConfig::default());

        assert_eq!(
            spans(&result),
            vec![("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 16)]
        );
        let completions: Vec<u64> = result.results.iter().map(|r| r.completion_time).collect();
        assert_eq!(completions, vec![5, 8, 16]);
        let waits: Vec<u64> = result.results.iter().map(|r| r.waiting_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((result.avg_waiting_time - 10.0 / 3.0).abs() < 1e-9);
        assert!((result.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsorted_input_and_ties() {
        let processes = vec![
            ProcessSpec::simple("late", 4, 1),
            ProcessSpec::simple("a", 0, 2),
            ProcessSpec::simple("b", 0, 1),
        ];
        let result = fcfs(&processes, &SimulationConfig::default());
        assert_eq!(
            spans(&result),
            vec![("a", 0, 2), ("b", 2, 3), ("late", 4, 5)]
        );
    }

    #[test]
    fn test_idle_gap_is_logged() {
        let processes = vec![
            ProcessSpec::simple("P1", 2, 2),
            ProcessSpec::simple("P2", 10, 1),
        ];
        let result = fcfs(&processes, &SimulationConfig::default());

        let kinds: Vec<StepKind> = result.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Idle,
                StepKind::Execute,
                StepKind::Completed,
                StepKind::Idle,
                StepKind::Execute,
                StepKind::Completed,
            ]
        );
        assert_eq!(result.steps[0].time, 0);
        assert_eq!(result.steps[3].time, 4);
        assert_eq!(result.idle_gaps(), vec![(0, 2), (4, 10)]);
    }

    #[test]
    fn test_ready_queue_snapshots() {
        let processes = vec![
            ProcessSpec::simple("P1", 0, 5),
            ProcessSpec::simple("P2", 1, 3),
            ProcessSpec::simple("P3", 2, 8),
        ];
        let result = fcfs(&processes, &SimulationConfig::default());

        // P1 dispatched alone, completes with both others waiting
        assert!(result.steps[0].ready_queue.is_empty());
        assert_eq!(result.steps[1].ready_queue, vec!["P2", "P3"]);
        // P2 dispatch excludes itself
        assert_eq!(result.steps[2].process_id.as_deref(), Some("P2"));
        assert_eq!(result.steps[2].ready_queue, vec!["P3"]);
    }
}
