//! FCFS scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` dispatches processes in `(arrival, id)` order and runs
//! each to completion. The CPU idles only while no process has arrived.
//!
//! # KPI
//!
//! `SimulationKpi` computes average waiting and turnaround time, makespan,
//! idle time and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;

pub use fcfs::FcfsScheduler;
pub use kpi::SimulationKpi;

use crate::config::SimulatorConfig;
use crate::models::{ProcessInput, Simulation};
use crate::validation::{validate_processes_with_limit, ValidationError};

/// Validates raw rows and, on success, runs FCFS over them.
///
/// This is the whole "run simulation" pipeline: nothing is computed unless
/// every row passes validation.
pub fn simulate(
    inputs: &[ProcessInput],
    config: &SimulatorConfig,
) -> Result<Simulation, ValidationError> {
    let records = validate_processes_with_limit(inputs, config.max_time_unit)?;
    Ok(FcfsScheduler::new().schedule(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_simulate_pipeline() {
        let inputs = vec![
            ProcessInput::new("P1", 0, 2),
            ProcessInput::blank("P2"),
            ProcessInput::new("P3", 5, 3),
        ];
        let sim = simulate(&inputs, &SimulatorConfig::default()).unwrap();
        assert_eq!(sim.execution_order(), vec!["P1", "P3"]);
        assert_eq!(sim.total_time(), 8);
    }

    #[test]
    fn test_simulate_rejects_invalid() {
        let inputs = vec![ProcessInput::blank("P1").with_burst("5")];
        let err = simulate(&inputs, &SimulatorConfig::default()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IncompleteFields);
    }

    #[test]
    fn test_simulate_uses_configured_limit() {
        let inputs = vec![ProcessInput::new("P1", 501, 1)];
        let err = simulate(&inputs, &SimulatorConfig::default()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooLarge);

        let relaxed = SimulatorConfig::default().with_max_time_unit(1000);
        assert!(simulate(&inputs, &relaxed).is_ok());
    }
}
