//! Configuration types for the scheduling simulation.

use pyo3::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::scheduler::SchedulerError;

/// CPU scheduling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First come, first served (non-preemptive)
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Round robin with a fixed time quantum (preemptive)
    RoundRobin,
    /// Lowest priority number first (non-preemptive)
    Priority,
}

impl Policy {
    /// All policies, in the order comparison views list them.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::RoundRobin,
        Policy::Priority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::RoundRobin => "round_robin",
            Policy::Priority => "priority",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "rr" | "round_robin" | "round-robin" => Ok(Policy::RoundRobin),
            "priority" => Ok(Policy::Priority),
            _ => Err(SchedulerError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Knobs shared by every policy.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Round robin time slice (ignored by other policies)
    #[pyo3(get, set)]
    pub quantum: u64,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Reject duplicate ids, zero bursts and missing priorities before running
    #[pyo3(get, set)]
    pub validate: bool,
    /// Priority used for processes without one when validation is off
    #[pyo3(get, set)]
    pub default_priority: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: 2,
            verbosity: 0,
            validate: true,
            default_priority: i32::MAX,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a specific round robin quantum.
    pub fn with_quantum(quantum: u64) -> Self {
        Self {
            quantum,
            ..Self::default()
        }
    }
}

#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (quantum=None, verbosity=None, validate=None, default_priority=None))]
    fn new(
        quantum: Option<u64>,
        verbosity: Option<u8>,
        validate: Option<bool>,
        default_priority: Option<i32>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            quantum: quantum.unwrap_or(defaults.quantum),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            validate: validate.unwrap_or(defaults.validate),
            default_priority: default_priority.unwrap_or(defaults.default_priority),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(quantum={}, verbosity={}, validate={})",
            self.quantum, self.verbosity, self.validate
        )
    }
}
