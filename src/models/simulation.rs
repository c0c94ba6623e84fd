//! Simulation (solution) model.
//!
//! A simulation is the complete outcome of one FCFS run: per-process
//! results in dispatch order plus the Gantt data of the CPU timeline.
//! Each run produces a fresh value; nothing is shared between runs.

use serde::Serialize;

use super::{GanttData, ProcessResult};

/// Outcome of one FCFS run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Simulation {
    /// Per-process results, in dispatch order.
    pub results: Vec<ProcessResult>,
    /// CPU timeline.
    pub gantt: GanttData,
}

impl Simulation {
    /// Creates a simulation from its parts.
    pub fn new(results: Vec<ProcessResult>, gantt: GanttData) -> Self {
        Self { results, gantt }
    }

    /// Process ids in the order they were dispatched.
    pub fn execution_order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.id.as_str()).collect()
    }

    /// Results sorted by process id, as shown in the metrics table.
    pub fn results_by_id(&self) -> Vec<&ProcessResult> {
        let mut sorted: Vec<&ProcessResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }

    /// Finds the result for a process.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }

    /// Total simulated time.
    pub fn total_time(&self) -> i64 {
        self.gantt.total_time
    }
}
