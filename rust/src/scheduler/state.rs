//! Working state local to a single simulation run.

use std::collections::VecDeque;

use crate::models::ProcessSpec;

/// Processes that have not arrived yet, ordered by arrival time.
///
/// Ties keep input order (stable sort), which is the tie-break every policy
/// relies on. Holds indices into the caller's slice; the slice itself is never
/// modified.
pub struct ArrivalQueue<'a> {
    processes: &'a [ProcessSpec],
    pending: VecDeque<usize>,
}

impl<'a> ArrivalQueue<'a> {
    pub fn new(processes: &'a [ProcessSpec]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&idx| processes[idx].arrival_time);
        Self {
            processes,
            pending: order.into(),
        }
    }

    /// Earliest arrival time among pending processes.
    pub fn next_arrival(&self) -> Option<u64> {
        self.pending
            .front()
            .map(|&idx| self.processes[idx].arrival_time)
    }

    /// Remove and return the next process in arrival order, arrived or not.
    pub fn pop_next(&mut self) -> Option<usize> {
        self.pending.pop_front()
    }

    /// Remove every pending process with `arrival_time <= time`, in arrival order.
    pub fn admit_until(&mut self, time: u64) -> Vec<usize> {
        let arrived = self
            .pending
            .iter()
            .take_while(|&&idx| self.processes[idx].arrival_time <= time)
            .count();
        self.pending.drain(..arrived).collect()
    }

    /// Ids of pending processes that have arrived by `time`, without removing them.
    pub fn arrived_ids(&self, time: u64) -> Vec<String> {
        self.pending
            .iter()
            .take_while(|&&idx| self.processes[idx].arrival_time <= time)
            .map(|&idx| self.processes[idx].id.clone())
            .collect()
    }
}

/// Round robin bookkeeping for a process that is in the ready queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunState {
    /// Index into the input slice
    pub index: usize,
    /// CPU time still owed
    pub remaining: u64,
}

impl RunState {
    pub fn new(index: usize, remaining: u64) -> Self {
        Self { index, remaining }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::simple("late", 5, 1),
            ProcessSpec::simple("first", 0, 1),
            ProcessSpec::simple("tie_a", 2, 1),
            ProcessSpec::simple("tie_b", 2, 1),
        ]
    }

    #[test]
    fn test_orders_by_arrival_stably() {
        let processes = procs();
        let mut queue = ArrivalQueue::new(&processes);
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop_next()).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_admit_until_stops_at_future_arrivals() {
        let processes = procs();
        let mut queue = ArrivalQueue::new(&processes);

        assert_eq!(queue.admit_until(0), vec![1]);
        assert_eq!(queue.next_arrival(), Some(2));
        assert_eq!(queue.arrived_ids(4), vec!["tie_a", "tie_b"]);
        assert_eq!(queue.admit_until(4), vec![2, 3]);
        assert_eq!(queue.next_arrival(), Some(5));
        assert!(queue.arrived_ids(4).is_empty());
        assert_eq!(queue.admit_until(5), vec![0]);
        assert_eq!(queue.next_arrival(), None);
        assert_eq!(queue.pop_next(), None);
    }

    #[test]
    fn test_input_is_not_modified() {
        let processes = procs();
        let before = processes.clone();
        let mut queue = ArrivalQueue::new(&processes);
        assert_eq!(queue.admit_until(10).len(), 4);
        assert_eq!(processes, before);
    }
}
