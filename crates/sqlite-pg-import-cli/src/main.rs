//! sqlite-pg-import CLI - Generate PostgreSQL foreign table DDL from a SQLite schema.

use clap::{Parser, Subcommand};
use sqlite_pg_import::{Config, ImportError, ImportSession};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "sqlite-pg-import")]
#[command(about = "Generate PostgreSQL foreign table DDL from a SQLite schema")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "import.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate creation statements for every table in scope
    Generate {
        /// Write the generated script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the target schema
        #[arg(long)]
        target_schema: Option<String>,

        /// Override the foreign server name
        #[arg(long)]
        server: Option<String>,
    },

    /// List candidate tables and their include/exclude decision
    ListTables,

    /// Open the source database and report what an import would cover
    Check,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ImportError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    match cli.command {
        Commands::Generate {
            output,
            target_schema,
            server,
        } => {
            // Apply overrides
            if let Some(schema) = target_schema {
                config.target.schema = schema;
            }
            if let Some(server) = server {
                config.target.server = server;
            }

            let session = ImportSession::open(&config)?;
            let outcome = session.run()?;

            if cli.output_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome).map_err(json_error)?
                );
                return Ok(());
            }

            let mut script = String::new();
            for statement in &outcome.statements {
                script.push_str(&statement.sql);
                script.push_str(";\n\n");
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, &script)?;
                    info!("Wrote {} statements to {:?}", outcome.statements.len(), path);
                }
                None => print!("{}", script),
            }
        }

        Commands::ListTables => {
            let session = ImportSession::open(&config)?;
            let tables = session.candidate_tables()?;

            if cli.output_json {
                let rows: Vec<_> = tables
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "table": t,
                            "included": session.scope().includes(t),
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rows).map_err(json_error)?
                );
                return Ok(());
            }

            for table in &tables {
                let decision = if session.scope().includes(table) {
                    "include"
                } else {
                    "exclude"
                };
                println!("{:<8} {}", decision, table);
            }
        }

        Commands::Check => {
            let session = ImportSession::open(&config)?;
            let tables = session.candidate_tables()?;
            let included = tables
                .iter()
                .filter(|t| session.scope().includes(t))
                .count();

            println!("Source database: {}", config.source.database);
            println!("  Tables: {} ({} in scope)", tables.len(), included);
            println!("\n  Overall: OK");
        }
    }

    Ok(())
}

fn json_error(e: serde_json::Error) -> ImportError {
    ImportError::Io(std::io::Error::other(e))
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries only the generated script.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
