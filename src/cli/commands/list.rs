use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ProductionView;
use crate::errors::AppResult;
use crate::models::columns as col;
use crate::ui::messages::{header, info};
use crate::utils::colors::chip;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::time::render;

/// List the records of the shared table, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, table } = cmd {
        let filter = filter.to_filter()?;

        let Some(view) = super::load_view(cfg)? else {
            return Ok(());
        };

        let selected = view.filtered(&filter);
        if selected.is_empty() {
            info("No records match the filters.");
            return Ok(());
        }

        header(format!("{}/{}", cfg.remote_dir, cfg.table_name));
        if *table {
            print!("{}", Table::auto(&selected.columns, selected.rows.clone(), 24).render());
        } else {
            print_cards(&selected);
        }

        println!(
            "\nRecords: {} | Total time: {}",
            selected.len(),
            render(Some(selected.total_minutes()))
        );
    }
    Ok(())
}

fn print_cards(view: &ProductionView) {
    for row in &view.rows {
        let c = |name: &str| view.cell(row, name);

        println!(
            "🔩 {} — {}",
            bold(c(col::MATERIAL_CODE)),
            c(col::DESCRIPTION)
        );
        println!(
            "   📅 {}  •  👤 {}  •  🏭 {}  •  🚦 {}",
            c(col::DATE),
            c(col::OPERATOR),
            c(col::MACHINE),
            c(col::PHASE),
        );
        println!(
            "   {} {} {} {}",
            chip("CYCLE", c(col::CYCLE_NUMBER)),
            chip("PRG", c(col::PROGRAM_NUMBER)),
            chip("FOLDER", c(col::MACHINE_FOLDER)),
            chip("TIME", c(col::TIME_IN_PHASE_DISPLAY)),
        );
        println!("   Timestamp: {}\n", c(col::TIMESTAMP));
    }
}
