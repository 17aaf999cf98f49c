//! Command-line front end for the spam classifier
//!
//! # Usage
//!
//! ```bash
//! # Train with the first 1000 messages of the corpus
//! head -1000 corpus/SMSSpamCollection.txt | spam-bayes --train -
//!
//! # Test with the remaining ones
//! tail -4574 corpus/SMSSpamCollection.txt | spam-bayes --test -
//!
//! # Classify a single message
//! spam-bayes -c "WINNER! Claim your prize now"
//! ```

use anyhow::Context;
use clap::{CommandFactory, Parser};
use spam_bayes::commands::{classify_command, test_command, train_command};
use spam_bayes::config::{Config, LoggingConfig, DEFAULT_CONFIG_FILE};
use spam_bayes::corpus::CorpusSource;
use spam_bayes::storage::{JsonFileStore, ModelStore};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spam-bayes")]
#[command(about = "Spam bayes classifier", version, long_about = None)]
struct Cli {
    /// Train a new model from FILE
    #[arg(long)]
    train: bool,

    /// Measure accuracy of the stored model against FILE
    #[arg(long)]
    test: bool,

    /// Classify a single text and print spam or ham
    #[arg(short = 'c', long = "classify-text", value_name = "TEXT")]
    classify_text: Option<String>,

    /// Labeled corpus to read. Use - for stdin. Don't use the same file for
    /// training and testing
    file: Option<String>,

    /// Model file (overrides the config file)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_note) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging);
    match config_note {
        ConfigNote::Loaded(path) => info!("Configuration loaded from {}", path.display()),
        ConfigNote::Defaults => warn!("No config file found, using defaults"),
    }

    let mut store = JsonFileStore::new(model_path(&cli, &config));
    run(&cli, &config, &mut store, io::stdin().lock(), &mut io::stdout().lock())
}

/// Execute the selected mode. `-c` wins over `--train`/`--test`; training
/// always runs before testing.
fn run<S, R, W>(cli: &Cli, config: &Config, store: &mut S, stdin: R, out: &mut W) -> anyhow::Result<()>
where
    S: ModelStore,
    R: Read,
    W: Write,
{
    if let Some(text) = &cli.classify_text {
        let label = classify_command(text, &*store)?;
        writeln!(out, "{}", label)?;
        return Ok(());
    }

    if !cli.train && !cli.test {
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    }

    let corpus_arg = cli
        .file
        .clone()
        .unwrap_or_else(|| config.corpus.default_path.clone());
    let source = CorpusSource::from_arg(&corpus_arg);
    // Stdin is buffered once so --train --test both see every line
    let corpus = source
        .load(stdin)
        .with_context(|| format!("Reading {} failed", source.describe()))?;

    if cli.train {
        info!("Training from {}", source.describe());
        train_command(corpus.reader()?, store)
            .with_context(|| format!("Training from {} failed", source.describe()))?;
    }

    if cli.test {
        info!("Testing against {}", source.describe());
        let report = test_command(corpus.reader()?, &*store)
            .with_context(|| format!("Testing against {} failed", source.describe()))?;
        writeln!(out, "{}", report)?;
    }

    Ok(())
}

/// `--model` takes precedence over `model.path` from the config
fn model_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.model
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.model.path))
}

enum ConfigNote {
    Loaded(PathBuf),
    Defaults,
}

/// Explicit `--config` must exist; the default file is optional
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigNote)> {
    if let Some(path) = explicit {
        let config = Config::from_file(path)?;
        return Ok((config, ConfigNote::Loaded(path.to_path_buf())));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        let config = Config::from_file(default_path)?;
        Ok((config, ConfigNote::Loaded(default_path.to_path_buf())))
    } else {
        Ok((Config::default(), ConfigNote::Defaults))
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}
