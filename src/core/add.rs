use crate::config::Config;
use crate::core::append::{AppendLogic, AppendOutcome};
use crate::core::sequence::SequenceLogic;
use crate::errors::{AppError, AppResult};
use crate::models::columns;
use crate::models::record::Record;
use crate::remote::RemoteStore;
use crate::utils::date::{DATE_FMT, format_timestamp};
use crate::utils::formatting::normalize_spaces;
use crate::utils::time::{clock_text, hours_and_minutes, to_minutes_safe};
use chrono::{NaiveDate, NaiveDateTime};

/// Phase duration as typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseDuration {
    Minutes(String),
    HoursMinutes { hours: String, minutes: String },
}

impl PhaseDuration {
    /// Whole minutes; unparseable parts count as 0.
    pub fn total_minutes(&self) -> i64 {
        match self {
            PhaseDuration::Minutes(m) => to_minutes_safe(m),
            PhaseDuration::HoursMinutes { hours, minutes } => hours_and_minutes(hours, minutes),
        }
    }
}

/// Raw form data for one work-log entry.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub operator: String,
    pub date: NaiveDate,
    pub material_code: String,
    pub description: String,
    pub machine: String,
    pub program_number: String,
    pub machine_folder: String,
    pub phase: String,
    pub duration: PhaseDuration,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

fn check_choice(field: &str, value: &str, allowed: &[String]) -> AppResult<()> {
    if allowed.is_empty() || allowed.iter().any(|a| a == value) {
        return Ok(());
    }
    Err(AppError::InvalidChoice {
        field: field.to_string(),
        value: value.to_string(),
        allowed: allowed.join(", "),
    })
}

impl AddLogic {
    /// Validate the input and turn it into a record.
    ///
    /// Text is whitespace-normalized, the material code upper-cased and the
    /// duration stored as `H:MM:SS`.
    pub fn build_record(
        input: &EntryInput,
        cfg: &Config,
        cycle_number: u64,
        now: &NaiveDateTime,
    ) -> AppResult<Record> {
        let operator = normalize_spaces(&input.operator);
        let material_code = normalize_spaces(&input.material_code).to_uppercase();
        let description = normalize_spaces(&input.description);
        let machine = normalize_spaces(&input.machine);
        let program_number = normalize_spaces(&input.program_number);
        let machine_folder = normalize_spaces(&input.machine_folder);
        let phase = normalize_spaces(&input.phase);

        let mut missing = Vec::new();
        if material_code.is_empty() {
            missing.push("material code".to_string());
        }
        if description.is_empty() {
            missing.push("description".to_string());
        }
        if phase.is_empty() {
            missing.push("phase".to_string());
        }
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        check_choice("operator", &operator, &cfg.operators)?;
        check_choice("machine", &machine, &cfg.machines)?;
        check_choice("phase", &phase, &cfg.phases)?;
        if !machine_folder.is_empty() {
            check_choice("machine folder", &machine_folder, &cfg.machine_folders)?;
        }

        Ok(Record::new()
            .with(columns::TIMESTAMP, format_timestamp(now))
            .with(columns::OPERATOR, operator)
            .with(columns::DATE, input.date.format(DATE_FMT).to_string())
            .with(columns::MATERIAL_CODE, material_code)
            .with(columns::DESCRIPTION, description)
            .with(columns::CYCLE_NUMBER, cycle_number)
            .with(columns::MACHINE, machine)
            .with(columns::PROGRAM_NUMBER, program_number)
            .with(columns::MACHINE_FOLDER, machine_folder)
            .with(columns::PHASE, phase)
            .with(
                columns::TIME_IN_PHASE_MINUTES,
                clock_text(input.duration.total_minutes()),
            ))
    }

    /// Enter the configured directory, allocate the cycle number and append the entry.
    pub fn apply(
        store: &mut dyn RemoteStore,
        cfg: &Config,
        input: &EntryInput,
        now: &NaiveDateTime,
    ) -> AppResult<AppendOutcome> {
        store.change_directory(&cfg.remote_dir)?;

        let cycle = SequenceLogic::next_id(store, &cfg.table_name);
        let record = Self::build_record(input, cfg, cycle, now)?;

        let preferred = columns::preferred();
        AppendLogic::append_row_safe_at(store, &cfg.table_name, record, Some(&preferred), now)
    }
}
