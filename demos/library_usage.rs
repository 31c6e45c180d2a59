//! Example: Using chatwrap as a library
//!
//! This example demonstrates how to use chatwrap in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatwrap::prelude::*;

const EXPORT: &str = "\
12/1/23, 10:15 PM - Messages and calls are end-to-end encrypted.
12/1/23, 10:15 PM - Alice: Hello there 👋
12/1/23, 10:16 PM - Bob: Hi Alice! kal milte hai?
and this line continues Bob's message
13/1/23, 8:02 AM - Alice: haan party tonight 🎉🎉
13/1/23, 8:05 AM - Carol: <Media omitted>
2/2/23, 9:30 PM - Bob: party was great 😂
2/2/23, 9:31 PM - Alice: 😂😂";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatwrap Library Usage Examples ===\n");

    // Example 1: Parse lines
    println!("1. Parsing an Android export line by line:");
    let parser = LineParser::new(DeviceFormat::Android)?;
    let outcome = parser.parse_str(EXPORT);
    println!(
        "   {} lines matched, {} did not",
        outcome.matched(),
        outcome.unmatched
    );

    // Example 2: Build the table
    println!("\n2. Building the chat table:");
    let table = ChatTable::build(outcome.lines, DeviceFormat::Android)?;
    for record in &table {
        println!(
            "   {} {} | {:<5} | {}",
            record.day_name, record.hour_with_ampm, record.sender, record.message
        );
    }

    // Example 3: Per-sender statistics
    println!("\n3. Statistics per selection:");
    let session = ChatSession::new(table, ["hai", "kal"].into_iter().collect());
    for option in session.sender_options() {
        let stats = fetch_stats(session.table(), &SenderFilter::from_selection(option));
        println!(
            "   {:<12} {} messages, {} words, {} media",
            option, stats.total_messages, stats.total_words, stats.total_media
        );
    }

    // Example 4: Full report
    println!("\n4. Whole-group report:");
    let report = session.report(&SenderFilter::WholeGroup);
    if let Some(active) = &report.active_users {
        for share in &active.table {
            println!("   {:<6} {:>6.2}%", share.sender, share.percentage);
        }
    }
    println!("   Top words: {:?}", &report.top_words[..report.top_words.len().min(3)]);
    for emoji in &report.emojis {
        println!("   {} x{}", emoji.emoji, emoji.count);
    }

    // Example 5: One-shot pipeline from configuration
    println!("\n5. Using AnalysisConfig:");
    let config = AnalysisConfig::new(DeviceFormat::Android)
        .with_selection("Bob")
        .with_date_from("2023-02-01")?;
    let bob = analyze(EXPORT, &config)?;
    println!(
        "   {} sent {} message(s) since {}",
        bob.selection,
        bob.stats.total_messages,
        config.date_range.after.map(|d| d.to_string()).unwrap_or_default()
    );

    // Example 6: Serialize to JSON
    println!("\n6. Report as JSON:");
    let json = to_report_json(&bob)?;
    for line in json.lines().take(8) {
        println!("   {}", line);
    }
    println!("   ...");

    println!("\n=== Done ===");
    Ok(())
}
