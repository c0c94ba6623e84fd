//! Gantt chart model.
//!
//! A run is described either unit by unit (`TimelineUnit`) or as runs of
//! equal occupants appended with [`push_run`]. Both collapse into the same
//! maximal constant-occupant blocks, from which the time markers that label
//! block boundaries are derived.
//!
//! # Invariants
//! - Blocks are ordered, non-empty (`end > start`) and tile `[0, total_time)`.
//! - Adjacent blocks never share an occupant.
//! - `time_markers` is strictly increasing, starts at 0 (when non-empty) and
//!   ends at `total_time`.

use serde::{Serialize, Serializer};

/// Label used for idle CPU time.
pub const IDLE_LABEL: &str = "IDLE";

/// What occupies the CPU during a time unit or block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// No process has arrived yet.
    Idle,
    /// The process with this id is running.
    Process(String),
}

impl Occupant {
    /// Display label: the process id, or `IDLE`.
    pub fn label(&self) -> &str {
        match self {
            Occupant::Idle => IDLE_LABEL,
            Occupant::Process(id) => id,
        }
    }

    /// Whether this is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }
}

impl Serialize for Occupant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One simulated time unit.
pub type TimelineUnit = Occupant;

/// A maximal interval during which the CPU has a single occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttBlock {
    /// Occupant of the interval.
    pub process: Occupant,
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end.
    pub end: i64,
}

impl GanttBlock {
    /// Creates a block.
    pub fn new(process: Occupant, start: i64, end: i64) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Length of the block.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Appends the interval `[start, end)` occupied by `occupant`.
///
/// Empty intervals are dropped. An interval that continues the last block
/// with the same occupant extends it, so the list stays maximal exactly as
/// if it had been compressed from unit steps.
pub fn push_run(blocks: &mut Vec<GanttBlock>, occupant: Occupant, start: i64, end: i64) {
    if end <= start {
        return;
    }
    match blocks.last_mut() {
        Some(last) if last.end == start && last.process == occupant => last.end = end,
        _ => blocks.push(GanttBlock::new(occupant, start, end)),
    }
}

/// Renderable Gantt representation of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttData {
    /// Blocks in time order.
    pub gantt_blocks: Vec<GanttBlock>,
    /// Distinct block boundaries, ascending.
    pub time_markers: Vec<i64>,
    /// Largest boundary (0 if there are no blocks).
    pub total_time: i64,
}

impl GanttData {
    /// Compresses a unit-by-unit timeline.
    ///
    /// A new block starts whenever the occupant changes, including
    /// idle/busy transitions.
    pub fn from_timeline(timeline: &[TimelineUnit]) -> Self {
        let mut blocks: Vec<GanttBlock> = Vec::new();
        let mut block_start = 0usize;

        for t in 0..timeline.len() {
            let last = t + 1 == timeline.len();
            if last || timeline[t + 1] != timeline[t] {
                blocks.push(GanttBlock::new(
                    timeline[t].clone(),
                    block_start as i64,
                    (t + 1) as i64,
                ));
                block_start = t + 1;
            }
        }

        Self::from_blocks(blocks)
    }

    /// Builds markers and total time for an already-compressed block list.
    pub fn from_blocks(blocks: Vec<GanttBlock>) -> Self {
        let mut markers: Vec<i64> = blocks.iter().flat_map(|b| [b.start, b.end]).collect();
        markers.sort_unstable();
        markers.dedup();
        let total_time = markers.last().copied().unwrap_or(0);

        Self {
            gantt_blocks: blocks,
            time_markers: markers,
            total_time,
        }
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.gantt_blocks.is_empty()
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.gantt_blocks
            .iter()
            .filter(|b| !b.process.is_idle())
            .map(GanttBlock::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.gantt_blocks
            .iter()
            .filter(|b| b.process.is_idle())
            .map(GanttBlock::duration)
            .sum()
    }

    /// Idle blocks only.
    pub fn idle_blocks(&self) -> Vec<&GanttBlock> {
        self.gantt_blocks
            .iter()
            .filter(|b| b.process.is_idle())
            .collect()
    }
}
