use crate::core::backup::ArchiveFormat;
use crate::export::ExportFormat;
use crate::models::TimeView;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for fitdash
/// Personal fitness dashboard backed by a workout sheet
#[derive(Parser)]
#[command(
    name = "fitdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sparta fitness dashboard: log daily workouts in a sheet and track totals and body trends",
    long_about = None
)]
pub struct Cli {
    /// Override the sheet path (CSV file)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Override the audit database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Dashboard password (prompted when missing)
    #[arg(global = true, long = "password", env = "FITDASH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selectors shared by `dashboard` and `export`.
#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    /// Relative time window
    #[arg(long, value_enum)]
    pub view: Option<TimeView>,

    /// Drill into one cardio type ("All" for every type)
    #[arg(long, default_value = "All")]
    pub cardio: String,

    #[arg(
        long,
        value_name = "RANGE",
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
    )]
    pub range: Option<String>,

    /// Reference date for the relative window (YYYY-MM-DD, default: today)
    #[arg(long, hide = true)]
    pub today: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the sheet and the audit database
    Init {
        /// Shared password stored in the configuration file
        #[arg(long = "secret")]
        secret: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Show totals, period summary and body trends
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Also print the history log
        #[arg(long)]
        history: bool,
    },

    /// Add a daily log
    Add {
        /// Date of the log (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, default_value_t = 0)]
        pullups: u32,

        #[arg(long, default_value_t = 0)]
        pushups: u32,

        #[arg(long, default_value_t = 0)]
        squats: u32,

        #[arg(long, default_value_t = 0)]
        burpees: u32,

        #[arg(long = "abs")]
        abs: bool,

        #[arg(long = "weights")]
        weights: bool,

        #[arg(long = "stretched")]
        stretched: bool,

        /// Cardio type (None, Kickboxing, Run, Skip, Other by default)
        #[arg(long = "cardio-type")]
        cardio_type: Option<String>,

        /// Cardio minutes or reps
        #[arg(long = "cardio-min", default_value_t = 0)]
        cardio_min: u32,

        /// Body weight in kg
        #[arg(long = "weight", default_value_t = 0.0)]
        weight: f64,

        /// Body fat percentage
        #[arg(long = "fat", default_value_t = 0.0)]
        fat: f64,

        /// Waist in cm
        #[arg(long = "waist", default_value_t = 0.0)]
        waist: f64,

        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Delete the most recently added log (last sheet row)
    Del {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export the history log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the sheet
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum)]
        compress: Option<ArchiveFormat>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
