//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use lexidrill_core::config::{load_config_from, DrillConfig};
use lexidrill_core::source::{load_corpus, source_for};
use lexidrill_core::TermCorpus;

pub mod init;
pub mod run;
pub mod validate;

/// A loaded word list plus the settings it was loaded under.
pub struct Loaded {
    pub config: DrillConfig,
    pub source: String,
    pub corpus: TermCorpus,
}

/// Resolve config and source, then fetch and parse the word list.
///
/// Load failures carry the remediation hint in their message.
pub async fn load(source: Option<String>, config_path: Option<PathBuf>) -> Result<Loaded> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or_else(|| config.source.clone());

    let corpus = load_corpus(source_for(&source).as_ref())
        .await
        .map_err(|e| anyhow::anyhow!(e.with_hint()))?;

    Ok(Loaded {
        config,
        source,
        corpus,
    })
}
