//! Simulation quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Turnaround | Mean of `completion - arrival` |
//! | Makespan | Last timeline boundary |
//! | Busy / Idle | Time the CPU ran a process / sat idle |
//! | Utilization | `busy / makespan` |
//! | Throughput | Processes completed per time unit |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::Serialize;

use crate::models::Simulation;

/// Aggregate indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU spent idle.
    pub idle_time: i64,
    /// `busy_time / makespan` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes per time unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation.
    pub fn calculate(sim: &Simulation) -> Self {
        let n = sim.results.len();
        let (total_waiting, total_turnaround) = sim
            .results
            .iter()
            .fold((0i64, 0i64), |(w, t), r| (w + r.waiting, t + r.turnaround));

        let mean = |total: i64| if n == 0 { 0.0 } else { total as f64 / n as f64 };

        let makespan = sim.gantt.total_time;
        let busy_time = sim.gantt.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting: mean(total_waiting),
            avg_turnaround: mean(total_turnaround),
            makespan,
            busy_time,
            idle_time: sim.gantt.idle_time(),
            cpu_utilization,
            throughput,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
