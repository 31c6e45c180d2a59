//! # chatwrap CLI
//!
//! Command-line interface for the chatwrap library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use chatwrap::ChatwrapError;
use chatwrap::cli::Args;
use chatwrap::core::output::{write_report_json, write_table_csv};
use chatwrap::core::report::AnalysisReport;
use chatwrap::session::ChatSession;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatwrap=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), ChatwrapError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.to_config()?;

    // Print header
    println!("📊 chatwrap v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📱 Device:  {}", args.device);
    println!("📂 Input:   {}", args.input.display());
    if let Some(after) = config.date_range.after {
        println!("📅 After:   {}", after);
    }
    if let Some(before) = config.date_range.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    println!("⏳ Parsing {} export...", args.device);
    let parse_start = Instant::now();
    let stopwords = config.load_stopwords()?;
    let session = ChatSession::open(&args.input, config.device_format, stopwords)?
        .restrict(&config.date_range);
    println!(
        "   Found {} messages ({:.2}s)",
        session.table().len(),
        parse_start.elapsed().as_secs_f64()
    );

    if args.list_senders {
        println!();
        println!("👥 Senders:");
        for option in session.sender_options() {
            println!("   {}", option);
        }
        return Ok(());
    }

    let filter = config.filter();
    println!("🔍 Analyzing {}...", filter);
    let report = session.report(&filter);

    println!("💾 Writing report...");
    write_report_json(&report, &args.output)?;
    if let Some(table_path) = &args.table {
        write_table_csv(session.table(), table_path)?;
        println!("   Table saved to {}", table_path.display());
    }

    println!();
    println!("✅ Done! Report saved to {}", args.output.display());

    print_summary(&report);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!();
    println!("📈 Summary ({}):", report.selection);
    println!("   Messages:  {}", report.stats.total_messages);
    println!("   Words:     {}", report.stats.total_words);
    println!("   Media:     {}", report.stats.total_media);

    if let Some(active) = &report.active_users {
        if let Some(top) = active.top.first() {
            println!("   Busiest:   {} ({} messages)", top.sender, top.count);
        }
    }
    if let Some((word, count)) = report.top_words.first() {
        println!("   Top word:  {} ({})", word, count);
    }
    if let Some(emoji) = report.emojis.first() {
        println!("   Top emoji: {} ({})", emoji.emoji, emoji.count);
    }
}
