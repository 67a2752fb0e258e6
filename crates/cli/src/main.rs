// restock CLI - edit and inspect the inventory reorder grid

mod exit_codes;
mod tui;
mod util;

use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;

use restock_config::settings::Settings;
use restock_engine::editor::GridEditor;
use restock_io::store::{LocalStore, StoreError};
use restock_io::TABLE_DATA_KEY;

use exit_codes::{EXIT_ERROR, EXIT_STORE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "restock")]
#[command(about = "Inventory reorder grid (terminal editor)")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the saved grid in the interactive editor
    #[command(after_help = "\
Examples:
  restock edit
  restock edit --store /tmp/demo.db
  restock edit --fresh")]
    Edit {
        /// Store file (defaults to the per-user data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Skip the saved grid and start with one blank row
        #[arg(long)]
        fresh: bool,
    },

    /// Print the saved grid without opening the editor
    #[command(after_help = "\
Examples:
  restock show
  restock show --json
  restock show --max-rows 20 --store /tmp/demo.db")]
    Show {
        /// Store file (defaults to the per-user data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Print the raw stored JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Limit table output to the first N rows (0 = all)
        #[arg(long, default_value_t = 0, value_name = "N")]
        max_rows: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand = open the editor on the default store
        None => cmd_edit(None, false),
        Some(Commands::Edit { store, fresh }) => cmd_edit(store, fresh),
        Some(Commands::Show {
            store,
            json,
            max_rows,
        }) => cmd_show(store, json, max_rows),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

// ============================================================================
// edit
// ============================================================================

fn cmd_edit(store_arg: Option<PathBuf>, fresh: bool) -> Result<(), CliError> {
    let settings = Settings::load();
    let path = resolve_store_path(store_arg, &settings)?;
    let store = open_store(&path)?;

    let editor = if fresh {
        GridEditor::new()
    } else {
        let loaded = match restock_io::load_grid(&store) {
            Ok(loaded) => loaded,
            Err(e @ StoreError::Decode(_)) => {
                return Err(CliError::store(e)
                    .with_hint("the saved grid is unreadable; run with --fresh to start over"))
            }
            Err(e) => return Err(CliError::store(e)),
        };
        match loaded {
            Some(grid) => GridEditor::with_grid(grid),
            None => GridEditor::new(),
        }
    };

    // Not a terminal: print the table instead of launching the editor
    if !stdout().is_tty() {
        return tui::print_plain(editor.grid(), &settings, 0).map_err(CliError::error);
    }

    let store_name = path.display().to_string();
    tui::run(editor, store, store_name, settings).map_err(CliError::error)
}

// ============================================================================
// show
// ============================================================================

fn cmd_show(store_arg: Option<PathBuf>, json: bool, max_rows: usize) -> Result<(), CliError> {
    let settings = Settings::load();
    let path = resolve_store_path(store_arg, &settings)?;
    if !path.exists() {
        return Err(
            CliError::error(format!("no saved grid at {}", path.display()))
                .with_hint("open the editor and save with w first"),
        );
    }

    let store = LocalStore::open(&path).map_err(CliError::store)?;
    let raw = store
        .get(TABLE_DATA_KEY)
        .map_err(CliError::store)?
        .ok_or_else(|| {
            CliError::error(format!("no saved grid in {}", path.display()))
                .with_hint("open the editor and save with w first")
        })?;

    if json {
        println!("{}", raw);
        return Ok(());
    }

    let grid = restock_io::json::decode(&raw).map_err(CliError::store)?;
    tui::print_plain(&grid, &settings, max_rows).map_err(CliError::error)
}

// ============================================================================
// Store location
// ============================================================================

// --store beats file.storePath in settings, which beats the per-user
// data directory.
fn resolve_store_path(
    store_arg: Option<PathBuf>,
    settings: &Settings,
) -> Result<PathBuf, CliError> {
    let path = match store_arg {
        Some(p) => p,
        None => match &settings.store_path {
            Some(p) => PathBuf::from(p),
            None => LocalStore::default_path().ok_or_else(|| {
                CliError::error("no user data directory available")
                    .with_hint("pass --store PATH or set file.storePath in settings.json")
            })?,
        },
    };
    if path.is_dir() {
        return Err(CliError::args(format!(
            "store path {} is a directory",
            path.display()
        )));
    }
    Ok(path)
}

fn open_store(path: &Path) -> Result<LocalStore, CliError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| CliError::store(StoreError::Io(e)))?;
        }
    }
    LocalStore::open(path).map_err(CliError::store)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from a store error with the store exit code.
    pub fn store(err: StoreError) -> Self {
        Self { code: EXIT_STORE, message: err.to_string(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
