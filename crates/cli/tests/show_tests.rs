// Integration tests for `restock show` and the non-TTY editor fallback.
// Run with: cargo test -p restock-cli --test show_tests -- --nocapture
//
// Manual smoke test (needs a real TTY, cannot be automated):
//   restock edit --store /tmp/demo.db
//   Verify: editor launches, a adds a row, space marks, d opens the
//   confirm prompt, w saves, q exits with the terminal restored.

use std::path::Path;
use std::process::Command;

use restock_engine::grid::{Grid, Row};
use restock_io::store::LocalStore;

fn restock(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_restock"));
    // Isolate settings and the default store from the real user dirs
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env("XDG_DATA_HOME", home.join(".local/share"));
    cmd
}

fn seed_grid(rows: &[[&str; 8]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|cells| Row::from_cells(cells.iter().map(|s| s.to_string()).collect()))
            .collect(),
    )
}

fn seed_store(path: &Path, rows: &[[&str; 8]]) {
    let store = LocalStore::open(path).expect("open seed store");
    restock_io::save_grid(&store, &seed_grid(rows)).expect("seed grid");
}

// dirs honors XDG_CONFIG_HOME on Linux only, so settings-file tests are gated
#[cfg(target_os = "linux")]
fn write_settings(home: &Path, contents: &str) {
    let config_dir = home.join(".config/restock");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(config_dir.join("settings.json"), contents).expect("write settings");
}

// ---------------------------------------------------------------------------
// show prints a table with headers and seeded data
// ---------------------------------------------------------------------------

#[test]
fn show_table_prints_seeded_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    seed_store(
        &db,
        &[
            ["Acme", "A-100", "120", "4", "30", "50", "200", "18"],
            ["Globex", "B-7", "80", "2", "10", "25", "90", "0"],
        ],
    );

    let output = restock(dir.path())
        .args(["show", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Supplier name"), "should print headers, got: {}", stdout);
    assert!(stdout.contains("Reorder Qty"), "should print headers, got: {}", stdout);
    assert!(stdout.contains("Acme"), "should print first row, got: {}", stdout);
    assert!(stdout.contains("Globex"), "should print second row, got: {}", stdout);
}

// ---------------------------------------------------------------------------
// show --json prints the stored value verbatim
// ---------------------------------------------------------------------------

#[test]
fn show_json_prints_raw_stored_value() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");

    // Non-canonical spacing proves --json does not re-encode
    let raw = r#"[[ "Acme","A-100","12","3","4","5","20","8" ]]"#;
    let store = LocalStore::open(&db).expect("open seed store");
    store.set("tableData", raw).expect("seed raw value");

    let output = restock(dir.path())
        .args(["show", "--json", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show --json");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("{}\n", raw));
}

// ---------------------------------------------------------------------------
// show with no store file errors with a hint
// ---------------------------------------------------------------------------

#[test]
fn show_without_saved_grid_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("absent.db");

    let output = restock(dir.path())
        .args(["show", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show (absent store)");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no saved grid"), "got: {}", stderr);
    assert!(stderr.contains("hint:"), "should print a hint, got: {}", stderr);
}

// ---------------------------------------------------------------------------
// show with a store file but no saved grid errors
// ---------------------------------------------------------------------------

#[test]
fn show_empty_store_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    LocalStore::open(&db).expect("create empty store");

    let output = restock(dir.path())
        .args(["show", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show (empty store)");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no saved grid"), "got: {}", stderr);
}

// ---------------------------------------------------------------------------
// show --max-rows truncates and reports the remainder
// ---------------------------------------------------------------------------

#[test]
fn show_max_rows_truncates() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    let blank = ["", "", "", "", "", "", "", ""];
    seed_store(
        &db,
        &[
            ["one", "", "", "", "", "", "", ""],
            ["two", "", "", "", "", "", "", ""],
            blank,
            blank,
            blank,
        ],
    );

    let output = restock(dir.path())
        .args(["show", "--max-rows", "2", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show --max-rows 2");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("one"), "first row should print, got: {}", stdout);
    assert!(stdout.contains("two"), "second row should print, got: {}", stdout);
    assert!(stdout.contains("... (3 more rows)"), "got: {}", stdout);
}

// ---------------------------------------------------------------------------
// show marks rows whose min value is not a whole number
// ---------------------------------------------------------------------------

#[test]
fn show_flags_invalid_min_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");

    // A stored snapshot can hold an invalid min (e.g. written by hand);
    // loading recomputes the error flags.
    let raw = r#"[["Acme","","","","","3.5","",""],["Globex","","","","","7","",""]]"#;
    let store = LocalStore::open(&db).expect("open seed store");
    store.set("tableData", raw).expect("seed raw value");

    let output = restock(dir.path())
        .args(["show", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show (invalid min)");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1!"), "row 1 should carry the error mark, got: {}", stdout);
    assert!(!stdout.contains("2!"), "row 2 should not be marked, got: {}", stdout);
}

// ---------------------------------------------------------------------------
// --store pointing at a directory is a usage error
// ---------------------------------------------------------------------------

#[test]
fn show_store_path_directory_is_usage_error() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let output = restock(dir.path())
        .args(["show", "--store", dir.path().to_str().unwrap()])
        .output()
        .expect("restock show --store <dir>");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory"), "got: {}", stderr);
}

// ---------------------------------------------------------------------------
// Non-TTY fallback: edit prints the table when stdout is piped
// ---------------------------------------------------------------------------

#[test]
fn edit_non_tty_falls_back_to_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    seed_store(&db, &[["Acme", "A-100", "120", "4", "30", "50", "200", "18"]]);

    // Command::output() captures stdout, so the editor cannot start
    let output = restock(dir.path())
        .args(["edit", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock edit (non-TTY)");

    assert!(output.status.success(), "edit should exit 0 in non-TTY mode\nstderr: {}",
        String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme"), "should print the saved grid, got: {}", stdout);
    assert!(!stdout.contains("raw mode"), "should not mention raw mode errors");
}

// ---------------------------------------------------------------------------
// edit --fresh ignores the saved grid
// ---------------------------------------------------------------------------

#[test]
fn edit_fresh_skips_saved_grid() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    seed_store(&db, &[["Acme", "A-100", "120", "4", "30", "50", "200", "18"]]);

    let output = restock(dir.path())
        .args(["edit", "--fresh", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock edit --fresh (non-TTY)");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Acme"), "saved rows should be skipped, got: {}", stdout);
    assert!(stdout.contains("Supplier name"), "headers still print, got: {}", stdout);
}

// ---------------------------------------------------------------------------
// A max column width below the min must not break rendering
// ---------------------------------------------------------------------------

#[test]
#[cfg(target_os = "linux")]
fn inverted_width_band_still_renders() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    // A single overridden key, below the default min of 3
    write_settings(dir.path(), r#"{"grid.maxColumnWidth": 2}"#);

    let output = restock(dir.path())
        .args(["edit", "--fresh", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock edit (inverted band)");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    // The band collapses to the min, so headers truncate to 3 cells
    assert!(stdout.contains("S.."), "headers should truncate, got: {}", stdout);
    assert!(stdout.contains("Min"), "the Min header fits at width 3, got: {}", stdout);
}

// ---------------------------------------------------------------------------
// Malformed settings.json falls back to defaults and names the file
// ---------------------------------------------------------------------------

#[test]
#[cfg(target_os = "linux")]
fn malformed_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("store.db");
    seed_store(&db, &[["Acme", "A-100", "120", "4", "30", "50", "200", "18"]]);
    write_settings(dir.path(), "{ not json");

    let output = restock(dir.path())
        .args(["show", "--store", db.to_str().unwrap()])
        .output()
        .expect("restock show (malformed settings)");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme"), "table should print with defaults, got: {}", stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing"), "got: {}", stderr);
    assert!(stderr.contains("settings.json"), "warning should name the file, got: {}", stderr);
}

// ---------------------------------------------------------------------------
// Bare invocation resolves the per-user default store
// ---------------------------------------------------------------------------

#[test]
#[cfg(target_os = "linux")]
fn bare_invocation_creates_default_store() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let output = restock(dir.path()).output().expect("restock (non-TTY)");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));

    let store = dir.path().join(".local/share/restock/store.db");
    assert!(store.exists(), "default store should be created at {}", store.display());
}
