//! FCFS domain models.
//!
//! Provides the data types that flow through one simulation run.
//!
//! # Lifecycle
//!
//! | Stage | Type |
//! |-------|------|
//! | Form row | `ProcessInput` |
//! | Validated | `ProcessRecord` |
//! | Scheduled | `ProcessResult` |
//! | Timeline | `TimelineUnit` → `GanttBlock` → `GanttData` |
//! | Run outcome | `Simulation` |

mod gantt;
mod process;
mod simulation;

pub use gantt::{push_run, GanttBlock, GanttData, Occupant, TimelineUnit, IDLE_LABEL};
pub use process::{ProcessInput, ProcessRecord, ProcessResult};
pub use simulation::Simulation;
