//! Round robin with a fixed time quantum.

use std::collections::VecDeque;

use crate::config::SimulationConfig;
use crate::log_debug;
use crate::models::{ProcessSpec, ScheduleResult};

use super::core::SchedulerError;
use super::state::{ArrivalQueue, RunState};
use super::trace::TraceBuilder;

/// Cycle through a FIFO ready queue, giving each process at most
/// `config.quantum` units per dispatch.
///
/// After each slice, processes that arrived by the end of the slice are
/// enqueued before the preempted process goes to the back of the queue.
///
/// # Errors
/// * `SchedulerError::InvalidQuantum` if the quantum is zero
pub fn round_robin(
    processes: &[ProcessSpec],
    config: &SimulationConfig,
) -> Result<ScheduleResult, SchedulerError> {
    let quantum = config.quantum;
    if quantum == 0 {
        return Err(SchedulerError::InvalidQuantum(quantum));
    }
    let verbosity = config.verbosity;

    let mut arrivals = ArrivalQueue::new(processes);
    let mut trace = TraceBuilder::new(processes.len(), verbosity);
    let mut current_time = 0;
    let mut queue: VecDeque<RunState> = arrivals
        .admit_until(current_time)
        .into_iter()
        .map(|idx| RunState::new(idx, processes[idx].burst_time))
        .collect();

    loop {
        let Some(mut run) = queue.pop_front() else {
            match arrivals.next_arrival() {
                Some(next) => {
                    trace.idle(current_time, next);
                    current_time = next;
                    queue.extend(
                        arrivals
                            .admit_until(current_time)
                            .into_iter()
                            .map(|idx| RunState::new(idx, processes[idx].burst_time)),
                    );
                    continue;
                }
                None => break,
            }
        };

        let spec = &processes[run.index];
        let slice = quantum.min(run.remaining);
        let reason = format!(
            "{} is at the head of the ready queue; runs {} of its {} remaining units (quantum {})",
            spec.id, slice, run.remaining, quantum
        );
        trace.execute(
            spec,
            current_time,
            current_time + slice,
            reason,
            queue_ids(processes, &queue),
        );

        current_time += slice;
        run.remaining -= slice;

        // Arrivals during the slice go ahead of the process that just ran
        queue.extend(
            arrivals
                .admit_until(current_time)
                .into_iter()
                .map(|idx| RunState::new(idx, processes[idx].burst_time)),
        );

        if run.remaining == 0 {
            trace.complete(spec, current_time, queue_ids(processes, &queue));
        } else {
            trace.preempt(spec, current_time, run.remaining, queue_ids(processes, &queue));
            queue.push_back(run);
        }

        log_debug!(
            verbosity,
            "t={}: ready={:?}",
            current_time,
            queue_ids(processes, &queue)
        );
    }

    Ok(trace.finish())
}

fn queue_ids(processes: &[ProcessSpec], queue: &VecDeque<RunState>) -> Vec<String> {
    queue
        .iter()
        .map(|run| processes[run.index].id.clone())
        .collect()
}
