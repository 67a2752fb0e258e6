// Application settings
// Loaded from ~/.config/restock/settings.json

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::theme::ThemeVariant;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Grid appearance
    #[serde(rename = "grid.minColumnWidth")]
    pub min_column_width: u16,

    #[serde(rename = "grid.maxColumnWidth")]
    pub max_column_width: u16,

    // Editor
    #[serde(rename = "editor.vimKeys")]
    pub vim_keys: bool,

    // File
    #[serde(rename = "file.storePath")]
    pub store_path: Option<String>,  // None = per-user default location

    // UI
    #[serde(rename = "ui.showStatusBar")]
    pub show_status_bar: bool,

    // Theme
    #[serde(rename = "theme.variant")]
    pub theme_variant: ThemeVariant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Grid
            min_column_width: 3,
            max_column_width: 40,
            // Editor
            vim_keys: false,
            // File
            store_path: None,
            // UI
            show_status_bar: true,
            // Theme
            theme_variant: ThemeVariant::Dark,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("restock");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file();
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&Self::strip_comments(&contents)) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Strip comments (lines starting with //)
    fn strip_comments(contents: &str) -> String {
        contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create default settings file with comments
    fn create_default_file(&self) {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Grid appearance (column width band, in terminal cells)
    "grid.minColumnWidth": 3,
    "grid.maxColumnWidth": 40,

    // Editor (hjkl movement in addition to arrow keys)
    "editor.vimKeys": false,

    // File handling (null = per-user default store location)
    "file.storePath": null,

    // UI elements
    "ui.showStatusBar": true,

    // Theme options: "dark", "light"
    "theme.variant": "dark"
}
"#;

        if let Err(e) = fs::write(&path, default_config) {
            eprintln!("Error writing default settings.json: {}", e);
        }
    }
}
