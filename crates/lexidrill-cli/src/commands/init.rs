//! The `lexidrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("lexidrill.toml").exists() {
        println!("lexidrill.toml already exists, skipping.");
    } else {
        std::fs::write("lexidrill.toml", SAMPLE_CONFIG)?;
        println!("Created lexidrill.toml");
    }

    if std::path::Path::new("words.txt").exists() {
        println!("words.txt already exists, skipping.");
    } else {
        std::fs::write("words.txt", SAMPLE_WORDS)?;
        println!("Created words.txt");
    }

    println!("\nNext steps:");
    println!("  1. Add your own <term><TAB><meaning> lines to words.txt");
    println!("  2. Run: lexidrill validate");
    println!("  3. Run: lexidrill run --mode mixed");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lexidrill configuration

# Word list: a local path or an http(s) URL, one "<term><TAB><meaning>" per line
source = "words.txt"

# Questions per session (capped to the number of entries)
question_count = 15

# native-to-target, target-to-native or mixed
mode = "native-to-target"

native_language = "Italian"
target_language = "English"
"#;

const SAMPLE_WORDS: &str = include_str!("../../../../data/words.txt");
