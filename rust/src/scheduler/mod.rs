//! CPU scheduling simulation engine.
//!
//! Each policy takes a slice of process descriptors and returns a complete,
//! deterministic trace: Gantt intervals, per-process metrics and a narrated
//! step log for playback. All working state is local to one call.

mod core;
mod fcfs;
mod priority;
mod round_robin;
mod selection;
mod sjf;
mod state;
mod trace;

pub use self::core::{compare_policies, schedule, validate_processes, SchedulerError};
pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;
