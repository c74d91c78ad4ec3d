//! lexidrill CLI: the terminal front end for the vocabulary drill.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lexidrill", version, about = "Multiple-choice vocabulary drill")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a drill session
    Run {
        /// Word list path or http(s) URL (default from config: words.txt)
        #[arg(long)]
        source: Option<String>,

        /// Direction: native-to-target, target-to-native, mixed
        #[arg(long)]
        mode: Option<String>,

        /// Number of questions (capped to the word list size)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Write the session report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the session summary as HTML
        #[arg(long)]
        html: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that a word list loads and report dropped lines
    Validate {
        /// Word list path or http(s) URL
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and sample word list
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexidrill=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            source,
            mode,
            count,
            seed,
            json,
            html,
            config,
        } => commands::run::execute(source, mode, count, seed, json, html, config).await,
        Commands::Validate { source, config } => commands::validate::execute(source, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
