//! First-Come-First-Served CPU scheduling simulator.
//!
//! Validates a small table of user-entered processes, schedules them under
//! non-preemptive FCFS, and derives a compressed Gantt timeline together
//! with per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessInput`, `ProcessRecord`,
//!   `ProcessResult`, `GanttBlock`, `GanttData`, `Simulation`
//! - **`validation`**: Fail-fast checks on raw process rows
//! - **`scheduler`**: `FcfsScheduler`, the validate-then-run pipeline, KPIs
//! - **`session`**: The editable process table (add/remove/reset/run, focus)
//! - **`render`**: Text report and JSON output
//! - **`config`**, **`error`**, **`logging`**: Settings, error type, tracing
//!
//! # Example
//!
//! ```
//! use u_fcfs::config::SimulatorConfig;
//! use u_fcfs::models::ProcessInput;
//! use u_fcfs::scheduler;
//!
//! let rows = vec![ProcessInput::new("P1", 0, 2), ProcessInput::new("P2", 5, 3)];
//! let sim = scheduler::simulate(&rows, &SimulatorConfig::default()).unwrap();
//! assert_eq!(sim.gantt.time_markers, vec![0, 2, 5, 8]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use config::{SimulatorConfig, MAX_TIME_UNIT, MAX_TIME_UNIT_CEILING};
pub use error::{Error, Result};
pub use models::{GanttBlock, GanttData, ProcessInput, ProcessRecord, ProcessResult, Simulation};
pub use scheduler::{FcfsScheduler, SimulationKpi};
pub use session::ProcessTable;
pub use validation::{ValidationError, ValidationErrorKind};
