//! Recording of intervals, results and narrated steps.

use crate::log_changes;
use crate::models::{
    ExecutionInterval, ExecutionStep, ProcessResult, ProcessSpec, ScheduleResult, StepKind,
};

/// Append-only recorder shared by every policy.
///
/// Callers drive it in simulation-time order; it never reorders anything.
pub struct TraceBuilder {
    verbosity: u8,
    intervals: Vec<ExecutionInterval>,
    results: Vec<ProcessResult>,
    steps: Vec<ExecutionStep>,
}

impl TraceBuilder {
    pub fn new(process_count: usize, verbosity: u8) -> Self {
        Self {
            verbosity,
            intervals: Vec::with_capacity(process_count),
            results: Vec::with_capacity(process_count),
            steps: Vec::with_capacity(process_count * 2),
        }
    }

    /// CPU has nothing to run between `from` and `until`.
    pub fn idle(&mut self, from: u64, until: u64) {
        log_changes!(self.verbosity, "t={}: CPU idle until {}", from, until);
        self.steps.push(ExecutionStep::new(
            from,
            StepKind::Idle,
            None,
            format!(
                "No process is ready; CPU idles from {} until the next arrival at {}",
                from, until
            ),
            Vec::new(),
        ));
    }

    /// Dispatch `spec` onto the CPU for `[start, end)`.
    pub fn execute(
        &mut self,
        spec: &ProcessSpec,
        start: u64,
        end: u64,
        reason: String,
        ready_queue: Vec<String>,
    ) {
        log_changes!(
            self.verbosity,
            "t={}: run {} until {} ({})",
            start,
            spec.id,
            end,
            reason
        );
        self.steps.push(ExecutionStep::new(
            start,
            StepKind::Execute,
            Some(spec.id.as_str()),
            reason,
            ready_queue,
        ));
        self.intervals.push(ExecutionInterval {
            process_id: spec.id.clone(),
            start_time: start,
            end_time: end,
            color: spec.color.clone(),
        });
    }

    /// `spec` finished its last unit of work at `time`.
    pub fn complete(&mut self, spec: &ProcessSpec, time: u64, ready_queue: Vec<String>) {
        let result = ProcessResult::from_spec(spec, time);
        log_changes!(
            self.verbosity,
            "t={}: {} completed (turnaround={}, waiting={})",
            time,
            spec.id,
            result.turnaround_time,
            result.waiting_time
        );
        self.steps.push(ExecutionStep::new(
            time,
            StepKind::Completed,
            Some(spec.id.as_str()),
            format!(
                "{} finished at {} (turnaround {}, waiting {})",
                spec.id, time, result.turnaround_time, result.waiting_time
            ),
            ready_queue,
        ));
        self.results.push(result);
    }

    /// `spec` used up its slice at `time` with `remaining` units left.
    pub fn preempt(
        &mut self,
        spec: &ProcessSpec,
        time: u64,
        remaining: u64,
        ready_queue: Vec<String>,
    ) {
        log_changes!(
            self.verbosity,
            "t={}: {} preempted ({} remaining)",
            time,
            spec.id,
            remaining
        );
        self.steps.push(ExecutionStep::new(
            time,
            StepKind::Preempted,
            Some(spec.id.as_str()),
            format!(
                "{} used its full time quantum with {} units remaining; moved to the back of the ready queue",
                spec.id, remaining
            ),
            ready_queue,
        ));
    }

    /// Compute the averages and hand back the finished result.
    pub fn finish(self) -> ScheduleResult {
        let avg_waiting_time = mean(self.results.iter().map(|r| r.waiting_time));
        let avg_turnaround_time = mean(self.results.iter().map(|r| r.turnaround_time));
        ScheduleResult {
            intervals: self.intervals,
            results: self.results,
            avg_waiting_time,
            avg_turnaround_time,
            steps: self.steps,
        }
    }
}

/// Arithmetic mean, 0.0 for an empty sequence.
fn mean(values: impl ExactSizeIterator<Item = u64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<u64>() as f64 / count as f64
}
