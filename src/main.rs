//! # tweetpack CLI
//!
//! Command-line interface for the tweetpack library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tweetpack::TweetpackError;
use tweetpack::archive;
use tweetpack::cli::{Args, LogLevel};
use tweetpack::core::{process_tweets, write_json};
use tweetpack::parsing::load_tweets;

fn main() {
    let args = match <Args as ClapParser>::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout with exit 0; usage errors exit 1.
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    setup_logging(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides `--log-level`.
fn setup_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

macro_rules! progress {
    ($quiet:expr) => {
        if !$quiet {
            println!();
        }
    };
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            println!($($arg)*);
        }
    };
}

fn run(args: &Args) -> Result<(), TweetpackError> {
    let total_start = Instant::now();
    let quiet = args.quiet;
    let config = args.report_config();
    let filter = args.filter_config()?;

    // Print header
    progress!(quiet, "🐦 tweetpack v{}", env!("CARGO_PKG_VERSION"));
    progress!(quiet, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    progress!(quiet, "📂 Input:   {}", args.input);
    progress!(quiet, "💾 Output:  {}", args.output);
    if let Some(ref after) = args.after {
        progress!(quiet, "📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        progress!(quiet, "📅 Before:  {}", before);
    }
    progress!(quiet);

    // Step 1: Locate tweets.js
    progress!(quiet, "🔎 Locating {}...", config.records_file);
    let source = archive::locate(Path::new(&args.input), &config.records_file)?;
    if source.is_extracted() {
        progress!(quiet, "   Extracted archive to a temporary directory");
    }
    progress!(quiet, "   Found {}", source.records_path().display());

    // Step 2: Load records; the extracted tree is removed right after
    progress!(quiet, "⏳ Loading tweets...");
    let load_start = Instant::now();
    let raw = load_tweets(&source.records_path())?;
    drop(source);
    progress!(
        quiet,
        "   Loaded {} tweets ({:.2}s)",
        format_count(raw.len() as u64),
        load_start.elapsed().as_secs_f64()
    );

    // Step 3: Aggregate
    progress!(quiet, "📊 Aggregating...");
    let aggregate_start = Instant::now();
    let (report, stats) = process_tweets(raw, &config, &filter)?;
    if filter.is_active() {
        progress!(
            quiet,
            "   {} tweets outside the date range",
            format_count(stats.filtered_out() as u64)
        );
    }
    progress!(
        quiet,
        "   Aggregated in {:.2}s",
        aggregate_start.elapsed().as_secs_f64()
    );

    // Step 4: Write JSON
    progress!(quiet, "💾 Writing JSON...");
    write_json(&report, &args.output)?;
    let size = fs::metadata(&args.output)?.len();

    progress!(quiet);
    progress!(
        quiet,
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    // Summary
    let date_range = report
        .date_range
        .as_ref()
        .map(|range| format!("{} to {}", range.start, range.end))
        .unwrap_or_else(|| "n/a".to_string());

    println!();
    println!("Wrote {}", args.output);
    println!("  Tweets:     {}", format_count(report.total_tweets));
    println!("  Date range: {}", date_range);
    println!("  Hashtags:   {} unique", format_count(report.unique_hashtags));
    println!("  Mentions:   {} unique", format_count(report.unique_mentions));
    println!("  JSON size:  {} bytes", format_count(size));

    Ok(())
}

/// Formats `n` with comma thousands separators.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
