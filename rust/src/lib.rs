//! CPU scheduling simulation engine with Python bindings.
//!
//! Computes deterministic execution traces (Gantt intervals, per-process
//! timing metrics and a narrated step log) for FCFS, SJF, round robin and
//! priority scheduling.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod logging;
mod models;
pub mod scheduler;

pub use config::{Policy, SimulationConfig};
pub use models::{
    ExecutionInterval, ExecutionStep, ProcessResult, ProcessSpec, ScheduleResult, StepKind,
};
pub use scheduler::{
    compare_policies, fcfs, priority, round_robin, schedule, sjf, validate_processes,
    SchedulerError,
};

fn to_py_err(err: SchedulerError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Run first-come-first-served scheduling.
///
/// The engine does not validate here; use `run_schedule` for checked input.
#[pyfunction]
#[pyo3(signature = (processes, config=None))]
fn run_fcfs(processes: Vec<ProcessSpec>, config: Option<SimulationConfig>) -> ScheduleResult {
    fcfs(&processes, &config.unwrap_or_default())
}

/// Run non-preemptive shortest-job-first scheduling.
#[pyfunction]
#[pyo3(signature = (processes, config=None))]
fn run_sjf(processes: Vec<ProcessSpec>, config: Option<SimulationConfig>) -> ScheduleResult {
    sjf(&processes, &config.unwrap_or_default())
}

/// Run non-preemptive priority scheduling (lower number = more urgent).
#[pyfunction]
#[pyo3(signature = (processes, config=None))]
fn run_priority(processes: Vec<ProcessSpec>, config: Option<SimulationConfig>) -> ScheduleResult {
    priority(&processes, &config.unwrap_or_default())
}

/// Run round robin scheduling.
///
/// # Arguments
/// * `processes` - Processes to schedule
/// * `quantum` - Time slice per dispatch; overrides `config.quantum`
/// * `config` - Remaining simulation options
///
/// # Raises
/// * ValueError if the quantum is zero
#[pyfunction]
#[pyo3(signature = (processes, quantum, config=None))]
fn run_round_robin(
    processes: Vec<ProcessSpec>,
    quantum: u64,
    config: Option<SimulationConfig>,
) -> PyResult<ScheduleResult> {
    let config = SimulationConfig {
        quantum,
        ..config.unwrap_or_default()
    };
    round_robin(&processes, &config).map_err(to_py_err)
}

/// Run the named policy ("fcfs", "sjf", "rr"/"round_robin", "priority").
///
/// Validates input first unless `config.validate` is false.
///
/// # Raises
/// * ValueError on an unknown policy, invalid input or a zero quantum
#[pyfunction]
#[pyo3(signature = (policy, processes, config=None))]
fn run_schedule(
    policy: &str,
    processes: Vec<ProcessSpec>,
    config: Option<SimulationConfig>,
) -> PyResult<ScheduleResult> {
    let policy: Policy = policy.parse().map_err(to_py_err)?;
    schedule(policy, &processes, &config.unwrap_or_default()).map_err(to_py_err)
}

/// Run all four policies on the same input for side-by-side comparison.
///
/// # Returns
/// * List of (policy name, ScheduleResult) pairs
#[pyfunction]
#[pyo3(signature = (processes, config=None))]
fn run_compare_policies(
    processes: Vec<ProcessSpec>,
    config: Option<SimulationConfig>,
) -> PyResult<Vec<(String, ScheduleResult)>> {
    let runs = compare_policies(&processes, &config.unwrap_or_default()).map_err(to_py_err)?;
    Ok(runs
        .into_iter()
        .map(|(policy, result)| (policy.as_str().to_string(), result))
        .collect())
}

/// The schedsim.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<ProcessSpec>()?;
    m.add_class::<ProcessResult>()?;
    m.add_class::<ExecutionInterval>()?;
    m.add_class::<StepKind>()?;
    m.add_class::<ExecutionStep>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<SimulationConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_fcfs, m)?)?;
    m.add_function(wrap_pyfunction!(run_sjf, m)?)?;
    m.add_function(wrap_pyfunction!(run_priority, m)?)?;
    m.add_function(wrap_pyfunction!(run_round_robin, m)?)?;
    m.add_function(wrap_pyfunction!(run_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(run_compare_policies, m)?)?;

    Ok(())
}
