use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput, PhaseDuration};
use crate::core::append::AppendOutcome;
use crate::errors::{AppError, AppResult};
use crate::remote::{LocalStore, RemoteStore};
use crate::ui::messages::{info, success};
use crate::utils::date;

fn or_first(value: &Option<String>, choices: &[String]) -> String {
    value
        .clone()
        .or_else(|| choices.first().cloned())
        .unwrap_or_default()
}

/// Append a work record to the shared table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        operator,
        date: day,
        code,
        description,
        machine,
        program,
        folder,
        phase,
        minutes,
        hours,
        mins,
    } = cmd
    {
        //
        // 1. Working day (default: today)
        //
        let day = match day {
            Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::today(),
        };

        //
        // 2. Duration: minutes, or hours + minutes
        //
        let duration = match minutes {
            Some(m) => PhaseDuration::Minutes(m.clone()),
            None if hours.is_some() || mins.is_some() => PhaseDuration::HoursMinutes {
                hours: hours.clone().unwrap_or_default(),
                minutes: mins.clone().unwrap_or_default(),
            },
            None => PhaseDuration::Minutes("0".to_string()),
        };

        let input = EntryInput {
            operator: or_first(operator, &cfg.operators),
            date: day,
            material_code: code.clone().unwrap_or_default(),
            description: description.clone().unwrap_or_default(),
            machine: or_first(machine, &cfg.machines),
            program_number: program.clone().unwrap_or_default(),
            machine_folder: or_first(folder, &cfg.machine_folders),
            phase: or_first(phase, &cfg.phases),
            duration,
        };

        //
        // 3. Connect and append
        //
        let mut store = LocalStore::open(cfg.store_root_path())?;
        let outcome = AddLogic::apply(&mut store, cfg, &input, &date::now())?;

        match outcome {
            AppendOutcome::Created { .. } => info("Table was empty: header written."),
            AppendOutcome::Appended { backup: Some(b), .. } => info(format!("Backup: {b}")),
            AppendOutcome::Appended { backup: None, .. } => {}
        }
        success(format!(
            "Saved in: {}/{}",
            store.current_dir().trim_end_matches('/'),
            cfg.table_name
        ));
    }

    Ok(())
}
