//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menukit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::ConfigError;
use crate::core::layout::{Columns, DEFAULT_COLUMN_WIDTH, LayoutStrategy, Scrolling, SkinId};
use crate::core::menu::MenuFlags;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenukitConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub skin: Option<SkinId>,
    pub caseless_tags: Option<bool>,
    pub double_tap: Option<bool>,
    pub tags: Option<TagSource>,
    pub column_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub title: Option<String>,
    pub prompt: Option<String>,
}

/// Where menus take their tag characters from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    None,
    /// Tags follow screen positions.
    View,
    /// Tags come from the rows themselves (or a selections string).
    #[default]
    Row,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "menukit";
pub const DEFAULT_PROMPT: &str = "Choose an entry";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub skin: SkinId,
    pub caseless_tags: bool,
    pub double_tap: bool,
    pub tags: TagSource,
    pub column_width: u16,
    pub title: String,
    pub prompt: String,
}

impl ResolvedConfig {
    pub fn flags(&self) -> MenuFlags {
        let mut flags = match self.tags {
            TagSource::None => MenuFlags::NO_TAGS,
            TagSource::View => MenuFlags::VIEW_TAGS,
            TagSource::Row => MenuFlags::empty(),
        };
        flags.set(MenuFlags::CASELESS_TAGS, self.caseless_tags);
        flags.set(MenuFlags::DOUBLE_TAP, self.double_tap);
        flags
    }

    /// The configured layout, with the configured column width.
    pub fn layout(&self) -> Box<dyn LayoutStrategy> {
        match self.skin {
            SkinId::Scroll => Box::new(Scrolling),
            SkinId::Columns => Box::new(Columns::with_max_width(self.column_width)),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menukit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menukit").join("config.toml"))
}

/// Load config from `~/.menukit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenukitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenukitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenukitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenukitConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: MenukitConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# menukit configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [menu]
# skin = "scroll"            # "scroll" or "columns" (or set MENUKIT_SKIN)
# caseless_tags = false      # "a" also picks the row tagged "A"
# double_tap = false         # first tap moves, second tap selects
# tags = "row"               # "none", "view" or "row"
# column_width = 23          # widest column in the columns skin

# [demo]
# title = "menukit"
# prompt = "Choose an entry"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_skin` is from the `--skin` flag (None = not specified).
pub fn resolve(config: &MenukitConfig, cli_skin: Option<SkinId>) -> ResolvedConfig {
    // Skin: CLI → env → config → default
    let skin = cli_skin
        .or_else(env_skin)
        .or(config.menu.skin)
        .unwrap_or_default();

    ResolvedConfig {
        skin,
        caseless_tags: config.menu.caseless_tags.unwrap_or(false),
        double_tap: config.menu.double_tap.unwrap_or(false),
        tags: config.menu.tags.unwrap_or_default(),
        column_width: config
            .menu
            .column_width
            .unwrap_or(DEFAULT_COLUMN_WIDTH),
        title: config
            .demo
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        prompt: config
            .demo
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
    }
}

fn env_skin() -> Option<SkinId> {
    let value = std::env::var("MENUKIT_SKIN").ok()?;
    match value.parse() {
        Ok(skin) => Some(skin),
        Err(e) => {
            warn!("Ignoring MENUKIT_SKIN: {}", e);
            None
        }
    }
}
