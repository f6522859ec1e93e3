//! CLI argument definitions for `cgpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_calc::config::ConfigOverrides;
use cgpa_calc::core::models::Grade;
use cgpa_calc::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a `CODE=GRADE` pair such as `MA2122=A+`
pub fn parse_grade_entry(raw: &str) -> Result<(String, Grade), String> {
    let (code, grade) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected CODE=GRADE, got '{raw}'"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("Missing subject code in '{raw}'"));
    }
    Ok((code.to_uppercase(), grade.parse()?))
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `data_file`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Student subcommands
#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Create a new student record (personal details only).
    Register {
        /// Full name
        #[arg(long)]
        name: String,
        /// Register number (case-insensitive)
        #[arg(long = "register-no", value_name = "REGNO")]
        register_no: String,
        /// Class section
        #[arg(long)]
        section: String,
        /// Number of semesters to enter (1-8)
        #[arg(long = "semesters", value_name = "N")]
        total_semesters: u8,
    },
    /// Enter grades for one semester of an existing record.
    ///
    /// Every curriculum subject of the semester needs a grade.
    Grades {
        /// Register number of the student
        #[arg(value_name = "REGNO")]
        register_no: String,
        /// Semester number
        #[arg(long, value_name = "N")]
        semester: u8,
        /// Grades as CODE=GRADE (repeatable)
        #[arg(
            short,
            long = "grade",
            value_name = "CODE=GRADE",
            value_parser = parse_grade_entry,
            num_args = 1..,
            required = true
        )]
        grades: Vec<(String, Grade)>,
    },
    /// Show the result summary for a student.
    Show {
        /// Register number of the student
        #[arg(value_name = "REGNO")]
        register_no: String,
    },
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminSubcommand {
    /// List every stored student with CGPA and arrears.
    List,
    /// Show cohort statistics.
    Stats,
    /// Delete a student record with all its semesters.
    Delete {
        /// Register number of the student
        #[arg(value_name = "REGNO")]
        register_no: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Store the demo student record (REG2024001).
    Seed,
    /// Export the admin report.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,
        /// Output file path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Heading printed at the top of the report
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,
    },
}

/// Top-level subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print the curriculum subjects and the grade table.
    Curriculum {
        /// Only show this semester
        #[arg(short, long, value_name = "N")]
        semester: Option<u8>,
    },
    /// Register students and enter grades.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Import grade-sheet CSV files into the store.
    Import {
        /// Paths to grade-sheet CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1.., required = true)]
        input_files: Vec<PathBuf>,
    },
    /// Administer stored records.
    Admin {
        #[command(subcommand)]
        subcommand: AdminSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpacalc",
    about = "SGPA/CGPA calculator and student records CLI",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Use a different student data file for this run
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Use a different reports directory for this run
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that value.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
        }
    }
}
