//! Interactive process table.
//!
//! Holds the editable rows and the last run's outcome. Every action
//! replaces state wholesale, so a session never exposes a half-updated
//! result: a run either stores a fresh `Simulation` or an error, and add,
//! remove and reset discard whatever the previous run produced.

use tracing::{debug, info};

use crate::config::SimulatorConfig;
use crate::models::{ProcessInput, Simulation};
use crate::scheduler::{self, SimulationKpi};
use crate::validation::ValidationError;

/// An editable column of the process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Process id (free text).
    Id,
    /// Arrival time (digits only).
    Arrival,
    /// Burst time (digits only).
    Burst,
}

/// Where keyboard focus moves after Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Arrival field of a row.
    Arrival(usize),
    /// Burst field of a row.
    Burst(usize),
    /// The run button.
    RunButton,
}

/// Working set of process rows plus the last run's outcome.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    config: SimulatorConfig,
    rows: Vec<ProcessInput>,
    simulation: Option<Simulation>,
    error: Option<ValidationError>,
}

impl ProcessTable {
    /// Creates a table with the configured number of blank rows.
    pub fn new(config: SimulatorConfig) -> Self {
        let rows = default_rows(&config);
        Self {
            config,
            rows,
            simulation: None,
            error: None,
        }
    }

    /// Creates a table pre-filled with `rows`.
    pub fn with_rows(config: SimulatorConfig, rows: Vec<ProcessInput>) -> Self {
        Self {
            config,
            rows,
            simulation: None,
            error: None,
        }
    }

    /// Current rows.
    pub fn rows(&self) -> &[ProcessInput] {
        &self.rows
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Result of the last successful run, if it has not been cleared.
    pub fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    /// KPIs of the last successful run.
    pub fn kpi(&self) -> Option<SimulationKpi> {
        self.simulation.as_ref().map(SimulationKpi::calculate)
    }

    /// Error of the last failed run, if it has not been cleared.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether a row may be removed (at least one row always remains).
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Edits one field of a row.
    ///
    /// Time fields accept only ASCII digits, at most as many as the limit
    /// has. Returns `false` when the edit is rejected or the row does not
    /// exist; the row is then unchanged.
    pub fn update_field(&mut self, row: usize, field: Field, value: &str) -> bool {
        let max_len = self.config.max_field_len();
        let Some(input) = self.rows.get_mut(row) else {
            return false;
        };
        self.error = None;

        match field {
            Field::Id => input.id = value.to_string(),
            Field::Arrival | Field::Burst => {
                if !value.bytes().all(|b| b.is_ascii_digit()) || value.len() > max_len {
                    debug!(row, ?field, "rejected non-digit time input");
                    return false;
                }
                let target = if field == Field::Arrival {
                    &mut input.arrival
                } else {
                    &mut input.burst
                };
                *target = value.to_string();
            }
        }
        true
    }

    /// Appends a blank row with the next generated id.
    pub fn add_process(&mut self) {
        let id = self.config.process_id(self.rows.len());
        self.rows.push(ProcessInput::blank(id));
        self.simulation = None;
    }

    /// Removes a row and renumbers the rest `P1..Pn`.
    ///
    /// Refused (returns `false`) for the last remaining row or an
    /// out-of-range index.
    pub fn remove_process(&mut self, row: usize) -> bool {
        if row >= self.rows.len() || !self.can_remove() {
            return false;
        }
        self.rows.remove(row);
        for (i, input) in self.rows.iter_mut().enumerate() {
            input.id = self.config.process_id(i);
        }
        self.simulation = None;
        self.error = None;
        true
    }

    /// Restores the default blank rows.
    pub fn reset(&mut self) {
        self.rows = default_rows(&self.config);
        self.simulation = None;
        self.error = None;
    }

    /// Validates the rows and runs FCFS.
    ///
    /// Clears the previous outcome first. On failure the error is kept for
    /// display and the rows are left untouched.
    pub fn run(&mut self) -> Result<&Simulation, ValidationError> {
        self.simulation = None;
        self.error = None;

        match scheduler::simulate(&self.rows, &self.config) {
            Ok(sim) => {
                info!(processes = sim.process_count(), "simulation stored");
                Ok(&*self.simulation.insert(sim))
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Focus target after pressing Enter in `field` of `row`.
    ///
    /// Returns `None` for the id column or a row that does not exist.
    pub fn next_focus(&self, row: usize, field: Field) -> Option<FocusTarget> {
        if row >= self.rows.len() {
            return None;
        }
        match field {
            Field::Id => None,
            Field::Arrival => Some(FocusTarget::Burst(row)),
            Field::Burst if row + 1 < self.rows.len() => Some(FocusTarget::Arrival(row + 1)),
            Field::Burst => Some(FocusTarget::RunButton),
        }
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

fn default_rows(config: &SimulatorConfig) -> Vec<ProcessInput> {
    (0..config.default_rows)
        .map(|i| ProcessInput::blank(config.process_id(i)))
        .collect()
}
