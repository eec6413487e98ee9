//! Administrative entry point for a StaffDB store.
//!
//! # Responsibility
//! - Initialize a store file with the employee schema.
//! - Expose the read-only ad-hoc query surface and print rows as JSON.
//!
//! # Invariants
//! - `query` only ever opens the store read-only.
//! - Handled failures print one line to stderr and exit non-zero; no panics.

use clap::{Parser, Subcommand};
use staffdb_core::{
    core_version, db_path_from_env, default_log_level, ensure_schema, init_logging,
    ReadOnlyQueryExecutor, DEFAULT_DB_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "staffdb")]
#[command(version)]
#[command(about = "Employee record store administration")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store file and its tables if missing
    Init {
        /// Store file; defaults to $SQLITE_DB_PATH, then `employees.db`
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Run one read-only SQL statement against $SQLITE_DB_PATH
    Query {
        /// Statement text, executed verbatim
        sql: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the core library version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Init { database } => {
            let path = database
                .or_else(|| db_path_from_env().ok())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
            let db = ensure_schema(&path).map_err(|err| err.to_string())?;
            let tables = db.table_names().map_err(|err| err.to_string())?;
            println!("initialized {} tables={}", path.display(), tables.join(","));
        }
        Commands::Query { sql, pretty } => {
            let executor = ReadOnlyQueryExecutor::from_env().map_err(|err| err.to_string())?;
            let rows = executor
                .execute_read_only(&sql)
                .map_err(|err| err.to_string())?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&rows)
            } else {
                serde_json::to_string(&rows)
            }
            .map_err(|err| err.to_string())?;
            println!("{rendered}");
        }
        Commands::Version => {
            println!("staffdb_core version={}", core_version());
        }
    }

    Ok(())
}
