use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for prdlog
/// CLI application to log production phases into a shared CSV table
#[derive(Parser)]
#[command(
    name = "prdlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log production work phases into a shared remote CSV and review them",
    long_about = None
)]
pub struct Cli {
    /// Override the store root (mount point of the shared folder)
    #[arg(global = true, long = "root")]
    pub root: Option<String>,

    /// Raise diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "operator", help = "Only records of this operator (exact match)")]
    pub operator: Option<String>,

    #[arg(long = "code", help = "Material code contains (case-insensitive)")]
    pub code: Option<String>,

    #[arg(long = "description", help = "Description contains (case-insensitive)")]
    pub description: Option<String>,

    #[arg(long = "folder", help = "Machine folder contains (case-insensitive)")]
    pub folder: Option<String>,

    #[arg(long = "date", help = "Only this working day (YYYY-MM-DD)")]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the store directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Append a work record to the shared table
    Add {
        #[arg(long = "operator", help = "Operator (default: first configured operator)")]
        operator: Option<String>,

        #[arg(long = "date", help = "Working day YYYY-MM-DD (default: today)")]
        date: Option<String>,

        #[arg(long = "code", help = "Material code")]
        code: Option<String>,

        #[arg(long = "description", help = "Material description")]
        description: Option<String>,

        #[arg(long = "machine", help = "Machine (default: first configured machine)")]
        machine: Option<String>,

        #[arg(long = "program", help = "Program number")]
        program: Option<String>,

        #[arg(long = "folder", help = "Machine folder (default: first configured folder)")]
        folder: Option<String>,

        #[arg(long = "phase", help = "Phase (default: first configured phase)")]
        phase: Option<String>,

        #[arg(
            long = "minutes",
            conflicts_with_all = ["hours", "mins"],
            help = "Time spent in the phase, in minutes"
        )]
        minutes: Option<String>,

        #[arg(long = "hours", help = "Time spent in the phase: hours part")]
        hours: Option<String>,

        #[arg(long = "mins", help = "Time spent in the phase: minutes part")]
        mins: Option<String>,
    },

    /// List records, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "table", help = "Aligned table instead of cards")]
        table: bool,
    },

    /// Export the (filtered) records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the next cycle number
    NextId,

    /// Verify access to the store, the directory and the table
    Check,
}
