//! Keystroke Entropy CLI
//!
//! Interactive mnemonic seed phrase generation: mash the keyboard
//! until the estimator is satisfied, get a phrase on stdout.

use clap::Parser;
use keystroke_entropy::{
    collector::{CollectError, Collector, MonotonicClock},
    conditioning::{DigestAlgorithm, EntropyBytes},
    config::FileConfig,
    keys::{KeySource, TerminalKeys},
    mnemonic::{Dictionary, MnemonicEncoder},
    progress::ProgressBar,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "keystroke-entropy",
    version,
    about = "Generate a mnemonic seed phrase from keystroke entropy"
)]
struct Cli {
    /// Entropy length in bits (multiple of 32, 160-256; default 160)
    #[arg(long)]
    entropy_bits: Option<usize>,

    /// Estimated keystroke bits to collect before stopping (default 256)
    #[arg(long)]
    target_bits: Option<f64>,

    /// Digest algorithm: blake3 or sha512 (default blake3)
    #[arg(long)]
    hash: Option<DigestAlgorithm>,

    /// Discard keystrokes whose 3-symbol window repeats
    #[arg(long)]
    dedup: bool,

    /// Word list file with exactly 2048 lines; defaults to the
    /// embedded BIP-39 English list
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// TOML configuration file (command-line flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Maps the verbosity count to the default tracing directive.
/// `RUST_LOG` still takes precedence via the env filter.
fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(cli.verbose).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Runs the session loop behind the progress bar.
///
/// The progress line is terminated on both the success and the error
/// path, so later stderr output starts on a fresh line.
fn collect_entropy<S: KeySource>(
    collector: Collector,
    source: &mut S,
    bar: &ProgressBar,
) -> Result<EntropyBytes, CollectError> {
    let mut clock = MonotonicClock::new();
    let result = collector.collect(source, &mut clock, |bits, target| bar.draw(bits, target));
    bar.finish();
    result
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut config = file.collector;
    if let Some(bits) = cli.entropy_bits {
        config.entropy_bits = bits;
    }
    if let Some(target) = cli.target_bits {
        config.target_bits = target;
    }
    if let Some(algorithm) = cli.hash {
        config.algorithm = algorithm;
    }
    config.dedup |= cli.dedup;

    // Everything that can fail from configuration fails here, before
    // the terminal is touched.
    let dictionary = match cli.wordlist.as_ref().or(file.wordlist.as_ref()) {
        Some(path) => Dictionary::from_file(path)?,
        None => Dictionary::english(),
    };
    let collector = Collector::new(config)?;

    info!(
        version = keystroke_entropy::VERSION,
        config = ?collector.config(),
        "Starting collection session"
    );
    eprintln!(
        "Type randomly until the bar fills ({} bits estimated):",
        collector.config().target_bits
    );

    let bar = ProgressBar::default();
    let entropy = {
        let mut keys = TerminalKeys::acquire()?;
        collect_entropy(collector, &mut keys, &bar)?
    };

    let phrase = MnemonicEncoder::new(dictionary).encode(&entropy);
    println!("{phrase}");
    Ok(())
}
