//! Plain-text and JSON rendering of a simulation.
//!
//! The Gantt chart is drawn as one labelled cell per block with the time
//! markers printed under the cell boundaries. Cell widths are proportional
//! to block durations over a chart of about [`CHART_COLUMNS`] columns; a
//! cell too short for its label or start marker is widened to fit them.
//!
//! ```text
//! |      P1       |         IDLE         |          P2          |
//! 0               2                      5                      8
//! ```

use serde::Serialize;

use crate::models::{GanttBlock, GanttData, ProcessResult, Simulation};
use crate::scheduler::SimulationKpi;

/// Columns shared out among the blocks in proportion to their duration.
pub const CHART_COLUMNS: usize = 60;

/// Draws the Gantt chart. Returns an empty string when there are no blocks.
pub fn render_gantt(gantt: &GanttData) -> String {
    if gantt.is_empty() {
        return String::new();
    }

    let mut cells = Vec::with_capacity(gantt.gantt_blocks.len());
    let mut axis = String::new();

    for block in &gantt.gantt_blocks {
        let width = cell_width(block, gantt.total_time);
        let label = format!(" {} ", block.process.label());
        cells.push(format!("{label:^width$}"));
        axis.push_str(&format!("{:<w$}", block.start, w = width + 1));
    }
    axis.push_str(&gantt.total_time.to_string());

    format!("|{}|\n{axis}", cells.join("|"))
}

/// Cell width: the block's share of the chart, but never less than the
/// padded label or the start marker.
fn cell_width(block: &GanttBlock, total_time: i64) -> usize {
    let label = block.process.label().chars().count() + 2;
    let marker = block.start.to_string().len() + 1;
    label.max(marker).max(scaled_width(block.duration(), total_time))
}

fn scaled_width(duration: i64, total_time: i64) -> usize {
    if total_time <= 0 {
        return 0;
    }
    let share = i128::from(duration) * CHART_COLUMNS as i128 / i128::from(total_time);
    usize::try_from(share).unwrap_or(0)
}

/// Dispatch order, e.g. `P1 -> P2 -> P3`.
pub fn render_execution_order(sim: &Simulation) -> String {
    sim.execution_order().join(" -> ")
}

/// Per-process metrics table sorted by id, followed by the averages.
pub fn render_metrics(sim: &Simulation, kpi: &SimulationKpi) -> String {
    const HEADERS: [&str; 6] = ["P", "Arrival", "Burst", "Completion", "Turnaround", "Waiting"];

    let rows: Vec<[String; 6]> = sim.results_by_id().into_iter().map(metric_row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = vec![table_line(&header, &widths), table_line(&rule, &widths)];
    lines.extend(rows.iter().map(|row| table_line(row, &widths)));
    lines.push(String::new());
    lines.push(format!("Avg Waiting Time: {:.2}", kpi.avg_waiting));
    lines.push(format!("Avg Turnaround Time: {:.2}", kpi.avg_turnaround));
    lines.join("\n")
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{c:>w$}", w = *w))
        .collect();
    format!("| {} |", parts.join(" | "))
}

fn metric_row(r: &ProcessResult) -> [String; 6] {
    [
        r.id.clone(),
        r.arrival.to_string(),
        r.burst.to_string(),
        r.completion.to_string(),
        r.turnaround.to_string(),
        r.waiting.to_string(),
    ]
}

/// Full text report: chart, execution order, metrics, utilization.
pub fn render_report(sim: &Simulation) -> String {
    let kpi = SimulationKpi::calculate(sim);
    let mut lines = Vec::new();

    if !sim.gantt.is_empty() {
        lines.push("Gantt Chart (CPU Timeline)".to_string());
        lines.push(render_gantt(&sim.gantt));
        lines.push(String::new());
        lines.push(format!("Execution Order: {}", render_execution_order(sim)));
        lines.push(String::new());
    }

    lines.push("Process Metrics".to_string());
    lines.push(render_metrics(sim, &kpi));
    lines.push(format!(
        "CPU Utilization: {:.2}% ({} busy, {} idle)",
        kpi.cpu_utilization * 100.0,
        kpi.busy_time,
        kpi.idle_time
    ));
    lines.join("\n")
}

/// JSON view of a simulation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutput<'a> {
    /// Results sorted by id.
    pub results: Vec<&'a ProcessResult>,
    /// Gantt data, flattened into the top level.
    #[serde(flatten)]
    pub gantt: &'a GanttData,
    /// Aggregate metrics.
    pub kpi: SimulationKpi,
}

impl<'a> SimulationOutput<'a> {
    /// Builds the JSON view.
    pub fn new(sim: &'a Simulation) -> Self {
        Self {
            results: sim.results_by_id(),
            gantt: &sim.gantt,
            kpi: SimulationKpi::calculate(sim),
        }
    }
}

/// Serializes a simulation as pretty-printed JSON.
pub fn render_json(sim: &Simulation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SimulationOutput::new(sim))
}
