//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival, id)`; the id tie-break fixes dispatch
//!    order for simultaneous arrivals.
//! 2. Walk the sorted list with a CPU clock starting at 0. If the next
//!    process has not arrived yet, the CPU idles until it does.
//! 3. Each process runs to completion once dispatched (non-preemptive).
//! 4. Each idle gap and each burst is appended as one run; equal runs that
//!    touch merge, giving the same blocks as compressing the unit timeline.
//!
//! # Complexity
//! O(n log n) time and O(n) space, independent of the simulated time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use tracing::{debug, info};

use crate::models::{push_run, GanttBlock, GanttData, Occupant, ProcessRecord, ProcessResult, Simulation};

/// Non-preemptive, arrival-order CPU scheduler.
///
/// # Example
///
/// ```
/// use u_fcfs::models::ProcessRecord;
/// use u_fcfs::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     ProcessRecord::new("P1", 0, 5),
///     ProcessRecord::new("P2", 1, 3),
/// ];
/// let sim = FcfsScheduler::new().schedule(&processes);
/// assert_eq!(sim.result_for("P2").unwrap().waiting, 4);
/// assert_eq!(sim.total_time(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs FCFS over `processes`.
    ///
    /// Total over well-formed records: an empty slice yields an empty
    /// simulation.
    pub fn schedule(&self, processes: &[ProcessRecord]) -> Simulation {
        let (results, blocks) = self.dispatch(processes);
        let gantt = GanttData::from_blocks(blocks);

        info!(
            processes = results.len(),
            blocks = gantt.gantt_blocks.len(),
            total_time = gantt.total_time,
            "fcfs simulation complete"
        );

        Simulation::new(results, gantt)
    }

    /// Dispatches processes and records the compressed timeline.
    ///
    /// Results are returned in dispatch order.
    pub fn dispatch(&self, processes: &[ProcessRecord]) -> (Vec<ProcessResult>, Vec<GanttBlock>) {
        let mut queue: Vec<&ProcessRecord> = processes.iter().collect();
        queue.sort_by(|a, b| a.arrival.cmp(&b.arrival).then_with(|| a.id.cmp(&b.id)));

        let mut results = Vec::with_capacity(queue.len());
        let mut blocks: Vec<GanttBlock> = Vec::with_capacity(2 * queue.len());
        let mut time: i64 = 0;

        for process in queue {
            if process.arrival > time {
                push_run(&mut blocks, Occupant::Idle, time, process.arrival);
                time = process.arrival;
            }

            let result = ProcessResult::dispatched(process, time);
            push_run(
                &mut blocks,
                Occupant::Process(process.id.clone()),
                result.start,
                result.completion,
            );
            debug!(
                process_id = %result.id,
                start = result.start,
                completion = result.completion,
                waiting = result.waiting,
                "dispatched"
            );
            time = result.completion;
            results.push(result);
        }

        (results, blocks)
    }
}
