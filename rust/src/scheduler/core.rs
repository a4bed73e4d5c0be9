//! Policy dispatch, input validation and errors.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::{Policy, SimulationConfig};
use crate::log_changes;
use crate::models::{ProcessSpec, ScheduleResult};

use super::fcfs::fcfs;
use super::priority::priority;
use super::round_robin::round_robin;
use super::sjf::sjf;

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Time quantum must be positive, got {0}")]
    InvalidQuantum(u64),
    #[error("Duplicate process id: {0}")]
    DuplicateProcessId(String),
    #[error("Process {0} has zero burst time")]
    ZeroBurstTime(String),
    #[error("Process {0} has no priority (required by the priority policy)")]
    MissingPriority(String),
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

/// Check the preconditions every policy assumes.
///
/// The engine itself never validates: duplicate ids or zero bursts produce
/// an unspecified (but terminating) schedule. Callers that collect input from
/// users should run this first, or let `schedule` do it via
/// `SimulationConfig::validate`.
pub fn validate_processes(processes: &[ProcessSpec], policy: Policy) -> Result<(), SchedulerError> {
    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(processes.len(), Default::default());

    for process in processes {
        if !seen.insert(process.id.as_str()) {
            return Err(SchedulerError::DuplicateProcessId(process.id.clone()));
        }
        if process.burst_time == 0 {
            return Err(SchedulerError::ZeroBurstTime(process.id.clone()));
        }
        if policy == Policy::Priority && process.priority.is_none() {
            return Err(SchedulerError::MissingPriority(process.id.clone()));
        }
    }

    Ok(())
}

/// Run a single policy over `processes`.
///
/// # Errors
/// * Any validation error when `config.validate` is set
/// * `SchedulerError::InvalidQuantum` for round robin with a zero quantum
pub fn schedule(
    policy: Policy,
    processes: &[ProcessSpec],
    config: &SimulationConfig,
) -> Result<ScheduleResult, SchedulerError> {
    if config.validate {
        validate_processes(processes, policy)?;
    }

    log_changes!(
        config.verbosity,
        "Scheduling {} processes with {}",
        processes.len(),
        policy
    );

    match policy {
        Policy::Fcfs => Ok(fcfs(processes, config)),
        Policy::Sjf => Ok(sjf(processes, config)),
        Policy::RoundRobin => round_robin(processes, config),
        Policy::Priority => Ok(priority(processes, config)),
    }
}

/// Run every policy over the same input, in `Policy::ALL` order.
///
/// Runs are independent; the first failing policy aborts the comparison.
pub fn compare_policies(
    processes: &[ProcessSpec],
    config: &SimulationConfig,
) -> Result<Vec<(Policy, ScheduleResult)>, SchedulerError> {
    Policy::ALL
        .iter()
        .map(|&policy| schedule(policy, processes, config).map(|result| (policy, result)))
        .collect()
}
