//! Core data types for the scheduling simulation.

use pyo3::prelude::*;
use std::fmt;

/// A process submitted to the simulator.
///
/// `color` is a display token carried through to the Gantt chart and never
/// read by any policy.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSpec {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub arrival_time: u64,
    #[pyo3(get, set)]
    pub burst_time: u64,
    /// Lower number = more urgent. Only the priority policy reads it.
    #[pyo3(get, set)]
    pub priority: Option<i32>,
    #[pyo3(get, set)]
    pub color: String,
}

impl ProcessSpec {
    /// Convenience constructor for callers that don't care about priority or color.
    pub fn simple(id: impl Into<String>, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
            color: String::new(),
        }
    }

    /// Same as `simple`, with an explicit priority.
    pub fn with_priority(
        id: impl Into<String>,
        arrival_time: u64,
        burst_time: u64,
        priority: i32,
    ) -> Self {
        Self {
            priority: Some(priority),
            ..Self::simple(id, arrival_time, burst_time)
        }
    }
}

#[pymethods]
impl ProcessSpec {
    #[new]
    #[pyo3(signature = (id, arrival_time, burst_time, priority=None, color=String::new()))]
    fn new(
        id: String,
        arrival_time: u64,
        burst_time: u64,
        priority: Option<i32>,
        color: String,
    ) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            color,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ProcessSpec(id={:?}, arrival_time={}, burst_time={}, priority={:?})",
            self.id, self.arrival_time, self.burst_time, self.priority
        )
    }
}

/// A finished process with its timing metrics.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessResult {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub arrival_time: u64,
    #[pyo3(get)]
    pub burst_time: u64,
    #[pyo3(get)]
    pub priority: Option<i32>,
    #[pyo3(get)]
    pub color: String,
    #[pyo3(get)]
    pub completion_time: u64,
    /// completion - arrival
    #[pyo3(get)]
    pub turnaround_time: u64,
    /// turnaround - burst
    #[pyo3(get)]
    pub waiting_time: u64,
}

impl ProcessResult {
    /// Derive the metrics for a process that finished at `completion_time`.
    ///
    /// Saturating arithmetic keeps malformed input (completion before
    /// arrival + burst) from panicking; well-formed schedules never hit it.
    pub fn from_spec(spec: &ProcessSpec, completion_time: u64) -> Self {
        let turnaround_time = completion_time.saturating_sub(spec.arrival_time);
        let waiting_time = turnaround_time.saturating_sub(spec.burst_time);
        Self {
            id: spec.id.clone(),
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            color: spec.color.clone(),
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }
}

#[pymethods]
impl ProcessResult {
    fn __repr__(&self) -> String {
        format!(
            "ProcessResult(id={:?}, completion={}, turnaround={}, waiting={})",
            self.id, self.completion_time, self.turnaround_time, self.waiting_time
        )
    }
}

/// One Gantt block: `[start_time, end_time)` on the CPU.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionInterval {
    #[pyo3(get)]
    pub process_id: String,
    #[pyo3(get)]
    pub start_time: u64,
    #[pyo3(get)]
    pub end_time: u64,
    #[pyo3(get)]
    pub color: String,
}

#[pymethods]
impl ExecutionInterval {
    pub fn duration(&self) -> u64 {
        self.end_time - self.start_time
    }

    fn __repr__(&self) -> String {
        format!(
            "ExecutionInterval({}, [{}, {}))",
            self.process_id, self.start_time, self.end_time
        )
    }
}

/// What happened at a logged step.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    Execute,
    Completed,
    Preempted,
    Idle,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Execute => "Execute",
            StepKind::Completed => "Completed",
            StepKind::Preempted => "Preempted",
            StepKind::Idle => "CPU Idle",
        })
    }
}

/// One narrated decision in the playback log.
///
/// Every step carries its own ready-queue snapshot so a consumer can render
/// it without looking at its neighbours.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionStep {
    #[pyo3(get)]
    pub time: u64,
    #[pyo3(get)]
    pub kind: StepKind,
    /// Short tag such as "Execute P1" or "CPU Idle".
    #[pyo3(get)]
    pub action: String,
    /// None for idle steps.
    #[pyo3(get)]
    pub process_id: Option<String>,
    #[pyo3(get)]
    pub description: String,
    /// Ready processes at this instant, excluding `process_id`.
    #[pyo3(get)]
    pub ready_queue: Vec<String>,
}

impl ExecutionStep {
    pub fn new(
        time: u64,
        kind: StepKind,
        process_id: Option<&str>,
        description: String,
        ready_queue: Vec<String>,
    ) -> Self {
        // "Execute P1" leads with the verb, the other tags trail it
        let action = match (kind, process_id) {
            (StepKind::Execute, Some(id)) => format!("{} {}", kind, id),
            (StepKind::Completed | StepKind::Preempted, Some(id)) => format!("{} {}", id, kind),
            _ => StepKind::Idle.to_string(),
        };
        Self {
            time,
            kind,
            action,
            process_id: process_id.map(str::to_string),
            description,
            ready_queue,
        }
    }
}

impl fmt::Display for ExecutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}: {} - {}", self.time, self.action, self.description)
    }
}

#[pymethods]
impl ExecutionStep {
    fn __repr__(&self) -> String {
        format!("ExecutionStep({})", self)
    }
}

/// Complete output of one simulation run.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleResult {
    /// Chronological, non-overlapping CPU allocations.
    #[pyo3(get)]
    pub intervals: Vec<ExecutionInterval>,
    /// In completion order, not input order.
    #[pyo3(get)]
    pub results: Vec<ProcessResult>,
    #[pyo3(get)]
    pub avg_waiting_time: f64,
    #[pyo3(get)]
    pub avg_turnaround_time: f64,
    #[pyo3(get)]
    pub steps: Vec<ExecutionStep>,
}

impl ScheduleResult {
    /// Look up the result for a process id.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }
}

#[pymethods]
impl ScheduleResult {
    /// Time of the last completion (0 when nothing ran).
    pub fn makespan(&self) -> u64 {
        self.intervals.last().map_or(0, |i| i.end_time)
    }

    /// Total time the CPU was occupied.
    pub fn busy_time(&self) -> u64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    pub fn idle_time(&self) -> u64 {
        self.makespan().saturating_sub(self.busy_time())
    }

    /// Spans in `[0, makespan)` where no process held the CPU.
    pub fn idle_gaps(&self) -> Vec<(u64, u64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start_time > cursor {
                gaps.push((cursor, interval.start_time));
            }
            cursor = cursor.max(interval.end_time);
        }
        gaps
    }

    /// Fraction of the makespan the CPU was busy, in `[0, 1]`.
    pub fn cpu_utilization(&self) -> f64 {
        match self.makespan() {
            0 => 0.0,
            makespan => self.busy_time() as f64 / makespan as f64,
        }
    }

    /// Completed processes per time unit.
    pub fn throughput(&self) -> f64 {
        match self.makespan() {
            0 => 0.0,
            makespan => self.results.len() as f64 / makespan as f64,
        }
    }

    /// Number of times the CPU switched from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }

    #[pyo3(name = "result_for")]
    fn py_result_for(&self, id: &str) -> Option<ProcessResult> {
        self.result_for(id).cloned()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(intervals={}, results={}, avg_waiting_time={:.2}, avg_turnaround_time={:.2})",
            self.intervals.len(),
            self.results.len(),
            self.avg_waiting_time,
            self.avg_turnaround_time
        )
    }
}
