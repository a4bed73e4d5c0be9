//! Shared driver for the non-preemptive "best arrived process" policies.

use crate::models::{ProcessSpec, ScheduleResult};
use crate::{log_checks, log_debug};

use super::state::ArrivalQueue;
use super::trace::TraceBuilder;

/// Repeatedly pick the arrived process with the smallest `key` and run it to
/// completion.
///
/// Equal keys fall back to input order. `explain` produces the narrated
/// reason for each dispatch from the chosen process and its key.
pub fn run_to_completion_by_key<K, F, E>(
    processes: &[ProcessSpec],
    verbosity: u8,
    key: F,
    explain: E,
) -> ScheduleResult
where
    K: Ord + Copy + std::fmt::Debug,
    F: Fn(&ProcessSpec) -> K,
    E: Fn(&ProcessSpec, K) -> String,
{
    let mut arrivals = ArrivalQueue::new(processes);
    let mut trace = TraceBuilder::new(processes.len(), verbosity);
    let mut current_time = 0;
    let mut ready: Vec<usize> = arrivals.admit_until(current_time);

    loop {
        let best = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &idx)| (key(&processes[idx]), idx))
            .map(|(pos, _)| pos);

        let Some(pos) = best else {
            match arrivals.next_arrival() {
                Some(next) => {
                    trace.idle(current_time, next);
                    current_time = next;
                    ready.extend(arrivals.admit_until(current_time));
                    continue;
                }
                None => break,
            }
        };

        let idx = ready.remove(pos);
        let spec = &processes[idx];
        let chosen_key = key(spec);
        log_checks!(
            verbosity,
            "t={}: chose {} (key={:?}) over {} candidates",
            current_time,
            spec.id,
            chosen_key,
            ready.len()
        );

        let end = current_time + spec.burst_time;
        trace.execute(
            spec,
            current_time,
            end,
            explain(spec, chosen_key),
            ready_ids(processes, &ready),
        );

        current_time = end;
        ready.extend(arrivals.admit_until(current_time));
        log_debug!(
            verbosity,
            "t={}: ready={:?}",
            current_time,
            ready_ids(processes, &ready)
        );
        trace.complete(spec, current_time, ready_ids(processes, &ready));
    }

    trace.finish()
}

fn ready_ids(processes: &[ProcessSpec], ready: &[usize]) -> Vec<String> {
    ready.iter().map(|&idx| processes[idx].id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_resolve_to_input_order() {
        let processes = vec![
            ProcessSpec::simple("second", 0, 3),
            ProcessSpec::simple("first", 0, 3),
        ];
        let result = run_to_completion_by_key(&processes, 0, |p| p.burst_time, |p, _| p.id.clone());
        let order: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["second", "first"]);
    }

    #[test]
    fn test_only_arrived_processes_are_candidates() {
        let processes = vec![
            ProcessSpec::simple("long", 0, 10),
            ProcessSpec::simple("short", 1, 1),
        ];
        let result = run_to_completion_by_key(&processes, 0, |p| p.burst_time, |p, _| p.id.clone());
        assert_eq!(result.intervals[0].process_id, "long");
        assert_eq!(result.intervals[1].start_time, 10);
    }

    #[test]
    fn test_empty_input() {
        let result = run_to_completion_by_key(&[], 0, |p| p.burst_time, |p, _| p.id.clone());
        assert!(result.steps.is_empty());
        assert_eq!(result.avg_waiting_time, 0.0);
    }
}
