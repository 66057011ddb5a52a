use crate::config::RosterBackend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: keep a student roster, mark sessions and summarize attendance",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override database path (internal log and sqlite roster)
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Override roster file path (csv backend)
    #[arg(global = true, long = "roster", value_name = "FILE")]
    pub roster: Option<String>,

    /// Override attendance log path
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Override the roster storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<RosterBackend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Table,
    Csv,
    Json,
}

impl SummaryFormat {
    /// File format for `--file`; a table is exported as CSV.
    pub fn export_format(&self) -> ExportFormat {
        match self {
            SummaryFormat::Json => ExportFormat::Json,
            SummaryFormat::Table | SummaryFormat::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, database, roster and attendance log
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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a student
    Add {
        /// Student index (unique)
        index: String,

        /// Student name
        name: String,
    },

    /// Remove a student from the roster
    Del {
        /// Student index
        index: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Import students from a CSV file of `index,name` rows
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long = "header", help = "Skip the first row of the file")]
        header: bool,
    },

    /// List registered students
    List {
        #[arg(long, short, help = "Only students whose index or name contains this text")]
        search: Option<String>,
    },

    /// Mark attendance for a session and append it to the attendance log
    Mark {
        #[arg(long = "course-name")]
        course_name: String,

        #[arg(long = "course-code")]
        course_code: String,

        #[arg(long)]
        lecturer: Option<String>,

        #[arg(long, help = "Duration in hours")]
        duration: Option<String>,

        #[arg(long, help = "Session date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Session time (HH:MM), default now")]
        time: Option<String>,

        #[arg(long, value_delimiter = ',', help = "Indexes marked present")]
        present: Vec<String>,

        #[arg(long, value_delimiter = ',', help = "Indexes marked absent")]
        absent: Vec<String>,

        #[arg(
            long,
            short,
            conflicts_with_all = ["present", "absent"],
            help = "Only prompt for students whose index or name contains this text"
        )]
        search: Option<String>,

        #[arg(long, short = 'f', help = "Save even if some students are unmarked")]
        force: bool,
    },

    /// Show attendance statistics per student
    Summary {
        #[arg(long, value_enum, default_value = "table")]
        format: SummaryFormat,

        #[arg(long, value_name = "FILE", help = "Write the summary to a file")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Create a backup copy of the attendance log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },
}
