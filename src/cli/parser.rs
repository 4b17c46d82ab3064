use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Timesheets with derived week/month/year date records, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a timesheet; its date record is derived from --start/--end
    Add {
        #[arg(long = "employee", short = 'e', help = "Employee the timesheet belongs to")]
        employee: String,

        #[arg(long = "start", help = "First day covered (YYYY-MM-DD)")]
        start: String,

        #[arg(long = "end", help = "Last day covered (YYYY-MM-DD)")]
        end: String,

        #[arg(long = "hours", help = "Hours worked (default from config)")]
        hours: Option<f64>,

        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,
    },

    /// Delete a timesheet and its date record
    Del {
        /// Timesheet id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List timesheets
    List {
        #[arg(long, help = "Filter by year of the start date")]
        year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Filter by month (1-12)")]
        month: Option<u32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=54), help = "Filter by week number")]
        week: Option<u32>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
