//! Canonical column names of the production table.

pub const TIMESTAMP: &str = "timestamp";
pub const OPERATOR: &str = "operator";
pub const DATE: &str = "date";
pub const MATERIAL_CODE: &str = "material-code";
pub const DESCRIPTION: &str = "description";
pub const CYCLE_NUMBER: &str = "cycle-number";
pub const MACHINE: &str = "machine";
pub const PROGRAM_NUMBER: &str = "program-number";
pub const MACHINE_FOLDER: &str = "machine-folder";
pub const PHASE: &str = "phase";
/// Phase duration. Historically stored as `H:MM:SS` text despite the name.
pub const TIME_IN_PHASE_MINUTES: &str = "time-in-phase-minutes";

/// Derived display column added by the read view.
pub const TIME_IN_PHASE_DISPLAY: &str = "time-in-phase (hh:mm)";

/// Columns of the split-duration layout used by older tables.
pub const HOURS: &str = "hours";
pub const MINUTES: &str = "minutes";

/// Creation-time column order.
pub fn preferred() -> Vec<String> {
    [
        TIMESTAMP,
        OPERATOR,
        DATE,
        MATERIAL_CODE,
        DESCRIPTION,
        CYCLE_NUMBER,
        MACHINE,
        PROGRAM_NUMBER,
        MACHINE_FOLDER,
        PHASE,
        TIME_IN_PHASE_MINUTES,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

/// Display order: the creation order followed by the derived display column.
pub fn display_order() -> Vec<String> {
    let mut cols = preferred();
    cols.push(TIME_IN_PHASE_DISPLAY.to_string());
    cols
}
