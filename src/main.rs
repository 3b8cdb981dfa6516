//! spamlens CLI
//!
//! Usage:
//!   spamlens --text "your message here"     # Single evaluation
//!   spamlens --interactive                  # One message per line
//!   spamlens --serve                        # HTTP API server
//!   spamlens --text "text" --json           # JSON output

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spamlens::config::AppConfig;
use spamlens::core::{measure, run_server, LinearModel, SpamDetector};
use spamlens::types::Verdict;
use spamlens::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "spamlens",
    version = VERSION,
    about = "Classify messages as spam or ham and explain spam verdicts",
    long_about = "spamlens classifies short text messages with a trained linear model.\n\n\
                  When a message is flagged as spam it lists the likely reasons:\n  \
                  spam keywords, uppercase rate, exclamation marks, URLs, length.\n\n\
                  Modes:\n  \
                  --text         Evaluate one message\n  \
                  --interactive  One message per line from stdin\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Message to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read messages from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides config)
    #[arg(long)]
    addr: Option<String>,

    /// Path to the model artifact (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signal breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spamlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = match args.config {
        Some(ref path) => {
            info!("Loading configuration from {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::development(),
    };
    if let Some(ref addr) = args.addr {
        config.server.listen_addr = addr.clone();
    }
    if let Some(ref model) = args.model {
        config.model.path = model.clone();
    }
    config.validate()?;

    let model = LinearModel::load(&config.model.path).with_context(|| {
        format!("Failed to load model from {}", config.model.path.display())
    })?;
    let detector = SpamDetector::new(Arc::new(model));

    if args.serve {
        run_server(&config.server.listen_addr, detector).await
    } else if let Some(ref text) = args.text {
        run_single(text, &detector, &args)
    } else {
        run_interactive(&detector, &args)
    }
}

/// Run single message evaluation
fn run_single(text: &str, detector: &SpamDetector, args: &Args) -> anyhow::Result<()> {
    let verdict = detector.evaluate(text)?;
    print_verdict(text, &verdict, args)
}

/// Run interactive mode
fn run_interactive(detector: &SpamDetector, args: &Args) -> anyhow::Result<()> {
    print_header(args.no_color);
    println!("Type a message and press Enter. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut evaluated = 0usize;

    loop {
        print!("> ");
        stdout.flush()?;

        let line = match read_message(&mut stdin.lock())? {
            Some(line) => line,
            None => break,
        };

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Messages: {}", evaluated);
            break;
        }
        if line.is_empty() {
            continue;
        }

        let verdict = detector.evaluate(line)?;
        evaluated += 1;
        print_verdict(line, &verdict, args)?;
    }

    Ok(())
}

/// Next line of input; None at end of input
fn read_message<R: BufRead>(reader: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if reader
        .read_line(&mut line)
        .context("Failed to read message from stdin")?
        == 0
    {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Verdict as JSON, with the measured signals when verbose
fn verdict_json(text: &str, verdict: &Verdict, verbose: bool) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(verdict)?;
    if verbose {
        value["signals"] = serde_json::to_value(measure(text))?;
    }
    Ok(value)
}

fn print_verdict(text: &str, verdict: &Verdict, args: &Args) -> anyhow::Result<()> {
    if args.json {
        let value = verdict_json(text, verdict, args.verbose)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if args.no_color {
        println!("{}", verdict.to_parseable_string());
    } else {
        println!("{}", verdict.to_terminal_string());
    }

    if args.verbose {
        print_signals(text);
    }
    Ok(())
}

/// Print the raw signal measurements
fn print_signals(text: &str) {
    let signals = measure(text);
    let ratio = signals
        .uppercase_ratio
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "n/a".to_string());
    let keywords = if signals.keyword_hits.is_empty() {
        "-".to_string()
    } else {
        signals.keyword_hits.join(",")
    };

    println!("  {}", "signals".bold());
    println!("    keywords     = {}", keywords);
    println!("    uppercase    = {}", ratio);
    println!("    exclamations = {}", signals.exclamations);
    println!("    url          = {}", signals.has_url);
    println!("    length       = {}", signals.length);
}

fn print_header(no_color: bool) {
    let title = format!("spamlens v{} - Interactive Mode", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "========================================".bold());
        println!("  {}", title.bold());
        println!("{}", "========================================".bold());
    }
    println!();
}
