//! The `lexidrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use lexidrill_core::selector::effective_question_count;

pub async fn execute(source: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let loaded = super::load(source, config_path).await?;
    let corpus = &loaded.corpus;

    println!("Word list: {} ({} entries)", loaded.source, corpus.len());

    let dropped = corpus.dropped_lines();
    if dropped > 0 {
        println!("  {dropped} line(s) ignored: missing tab or empty term/meaning");
    }

    println!(
        "Questions per session: {}",
        effective_question_count(loaded.config.question_count, corpus.len())
    );

    if dropped == 0 {
        println!("All lines valid.");
    }

    Ok(())
}
