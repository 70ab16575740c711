//! Session configuration for the prompt segment.
//!
//! Loaded once per process from `<config dir>/vcsprompt/config.toml` and
//! held read-only afterwards. A missing or malformed file falls back to
//! the compiled-in defaults so a config typo can never break the prompt.

use config::ConfigError;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Indicator glyphs, one per status dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Glyphs {
    pub untracked: String,
    pub changed: String,
    pub staged: String,
    pub clean: String,
    pub ahead: String,
    pub behind: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            untracked: "?".to_string(),
            changed: "*".to_string(),
            staged: "+".to_string(),
            clean: "✓".to_string(),
            ahead: "↑".to_string(),
            behind: "↓".to_string(),
        }
    }
}

/// Color names for the backend and error cues.
///
/// Values are ANSI color names ("green", "bright-magenta", ...) resolved
/// by [`crate::styling::parse_color`]; unknown names keep the default for
/// that slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Colors {
    pub git: String,
    pub hg: String,
    pub svn: String,
    pub error: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            git: "green".to_string(),
            hg: "cyan".to_string(),
            svn: "magenta".to_string(),
            error: "red".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PromptConfig {
    /// Master switch for ANSI color output. When false, no escape
    /// sequences or prompt-ignore markers are emitted at all and a
    /// literal backend tag stands in for the color cue.
    pub color: bool,
    pub glyphs: Glyphs,
    pub colors: Colors,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            color: true,
            glyphs: Glyphs::default(),
            colors: Colors::default(),
        }
    }
}

impl PromptConfig {
    /// Load the configuration file, if present.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Message(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::Message(format!("Failed to parse TOML: {}", e)))
    }

    /// Loaded-once view used by the zero-argument prompt entry point.
    /// Never fails; load errors degrade to the defaults.
    pub fn get() -> &'static Self {
        static CONFIG: Lazy<PromptConfig> = Lazy::new(|| {
            PromptConfig::load().unwrap_or_else(|e| {
                log::debug!("config load failed, using defaults: {e}");
                PromptConfig::default()
            })
        });
        &CONFIG
    }
}

fn config_path() -> Option<PathBuf> {
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("vcsprompt").join("config.toml"))
}
