use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::datatable::{ACTION_COLUMN_WIDTH, DEFAULT_COLUMN_WIDTH};
use crate::ui::layout_sequencer::PIN_GUTTER_WIDTH;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use Unicode glyphs for icons
    pub use_glyphs: bool,

    /// Icons for row and column states (can be overridden)
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub pin: String,
    pub frozen: String,
    pub unpin: String,
    pub menu: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rows per page
    pub page_size: usize,

    /// Width of data columns in pixels
    pub default_column_width: u32,

    /// Width of the trailing actions column
    pub action_column_width: u32,

    /// Width of the leading pin gutter, drawn while any row is pinned
    pub pin_gutter_width: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_glyphs: true,
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            pin: "📌".to_string(),
            frozen: "❄".to_string(),
            unpin: "⊗".to_string(),
            menu: "⋯".to_string(),
        }
    }
}

impl IconConfig {
    /// Get simple ASCII alternatives for terminals without glyph support
    pub fn simple() -> Self {
        Self {
            pin: "[P]".to_string(),
            frozen: "[F]".to_string(),
            unpin: "[x]".to_string(),
            menu: "...".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            action_column_width: ACTION_COLUMN_WIDTH,
            pin_gutter_width: PIN_GUTTER_WIDTH,
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        // Apply simple mode if glyphs are disabled
        if !config.display.use_glyphs {
            config.display.icons = IconConfig::simple();
        }

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("sticky-grid").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Sticky Grid Configuration File
# Location: ~/.config/sticky-grid/config.toml (Linux)
#           ~/Library/Application Support/sticky-grid/config.toml (macOS)
#           %APPDATA%\sticky-grid\config.toml (Windows)

[display]
# Use Unicode glyphs for icons
# Set to false for ASCII-only mode (better compatibility)
use_glyphs = true

# Icon configuration
# These are automatically set to ASCII when use_glyphs = false
[display.icons]
pin = "📌"
frozen = "❄"
unpin = "⊗"
menu = "⋯"

[layout]
# Rows shown per page
page_size = 12

# Column widths in pixels, used for sticky column offsets
default_column_width = 240
action_column_width = 60

# Leading gutter shown while any row is pinned
pin_gutter_width = 40
"#
        .to_string()
    }
}
