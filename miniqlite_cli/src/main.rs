mod meta;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use miniqlite_core::{Database, DatabaseConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use meta::{MetaAction, handle_meta};

const DEFAULT_DB_FILE: &str = "miniqlite.db";
const LOG_ENV: &str = "MINIQLITE_LOG";

/// Settings read from `--config <file>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct CliConfig {
    database: PathBuf,
    #[serde(flatten)]
    db: DatabaseConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DB_FILE),
            db: DatabaseConfig::default(),
        }
    }
}

impl CliConfig {
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Embedded table store with a small SQL shell
#[derive(Parser, Debug)]
#[command(name = "miniqlite", version)]
struct Args {
    /// Database file, opened at start and saved on exit [default: miniqlite.db]
    #[arg(value_name = "DB_FILE")]
    db_file: Option<PathBuf>,

    /// JSON config file with `database`, `layout` and `format`
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<CliConfig> {
    let mut config = match &args.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(path) = &args.db_file {
        config.database = path.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();
    let config = load_config(&args)?;
    let db_path = config.database.clone();

    // A file that fails to load is not overwritten on exit.
    let (mut db, autosave) = match Database::open(&db_path, config.db) {
        Ok(db) => (db, true),
        Err(e) => {
            warn!(path = %db_path.display(), error = %e, "could not open database, starting empty");
            eprintln!("Error loading '{}': {e}", db_path.display());
            eprintln!("Changes will not be saved to it automatically; use .save <file>.");
            (Database::with_config(config.db), false)
        }
    };
    info!(path = %db_path.display(), tables = db.tables().count(), "session started");

    println!("miniqlite (type .help for usage, .exit to quit)");
    let loads_ok = run_repl(&mut db, &db_path, io::stdin().lock(), io::stdout())?;
    if !loads_ok {
        eprintln!(
            "A .load failed during this session; not saving over '{}'.",
            db_path.display()
        );
    }

    if autosave && loads_ok {
        db.save(&db_path)
            .with_context(|| format!("Failed to save '{}'", db_path.display()))?;
        println!("Saved to '{}'.", db_path.display());
    }
    Ok(())
}

/// Reads commands until `.exit` or EOF. Returns false if a `.load` failed,
/// since that leaves the database empty.
fn run_repl(db: &mut Database, db_path: &Path, input: impl BufRead, mut out: impl Write) -> Result<bool> {
    let mut loads_ok = true;
    let mut lines = input.lines();
    loop {
        write!(out, "miniqlite> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(loads_ok);
        };
        let line = line.context("Failed to read input")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.starts_with('.') {
            match handle_meta(input, db, db_path) {
                MetaAction::Print(msg) => writeln!(out, "{msg}")?,
                MetaAction::LoadFailed(msg) => {
                    loads_ok = false;
                    writeln!(out, "{msg}")?;
                }
                MetaAction::Exit => return Ok(loads_ok),
            }
            continue;
        }

        match db.execute(input) {
            Ok(outcome) => writeln!(out, "{outcome}")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
}
