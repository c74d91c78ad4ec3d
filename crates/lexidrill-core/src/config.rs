//! Drill configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{DrillSettings, DEFAULT_QUESTION_COUNT};
use crate::model::{DirectionMode, LanguagePair};

/// Top-level lexidrill configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Word list path or URL.
    #[serde(default = "default_source")]
    pub source: String,
    /// Requested questions per session.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default)]
    pub mode: DirectionMode,
    /// Display name of the term side.
    #[serde(default = "default_native_language")]
    pub native_language: String,
    /// Display name of the meaning side.
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_source() -> String {
    "words.txt".to_string()
}
fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}
fn default_native_language() -> String {
    LanguagePair::default().native
}
fn default_target_language() -> String {
    LanguagePair::default().target
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            question_count: default_question_count(),
            mode: DirectionMode::default(),
            native_language: default_native_language(),
            target_language: default_target_language(),
        }
    }
}

impl DrillConfig {
    pub fn settings(&self) -> DrillSettings {
        DrillSettings {
            mode: self.mode,
            question_count: self.question_count,
        }
    }

    pub fn languages(&self) -> LanguagePair {
        LanguagePair {
            native: self.native_language.clone(),
            target: self.target_language.clone(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lexidrill.toml` in the current directory
/// 2. `~/.config/lexidrill/config.toml`
///
/// Environment variable override: `LEXIDRILL_SOURCE`.
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lexidrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<DrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => DrillConfig::default(),
    };

    if let Ok(source) = std::env::var("LEXIDRILL_SOURCE") {
        if !source.trim().is_empty() {
            config.source = source;
        }
    }

    anyhow::ensure!(
        config.question_count >= 1,
        "question_count must be at least 1"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lexidrill"))
}
