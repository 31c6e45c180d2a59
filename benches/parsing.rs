//! Benchmarks for chatwrap parsing and analysis operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- android`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatwrap::ChatTable;
use chatwrap::core::emoji::emoji_analysis;
use chatwrap::core::filter::SenderFilter;
use chatwrap::core::output::{to_report_json, to_table_csv};
use chatwrap::core::report::AnalysisReport;
use chatwrap::core::stats::{activity_heatmap, fetch_stats, most_active_user};
use chatwrap::core::text::{StopWords, generate_wc};
use chatwrap::parser::{DeviceFormat, LineParser};

const SENDERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

const SIZES: [usize; 4] = [100, 1_000, 10_000, 50_000];

// =============================================================================
// Test Data Generators
// =============================================================================

fn message(i: usize) -> String {
    match i % 7 {
        0 => "<Media omitted>".to_string(),
        1 => format!("haha 😂😂 number {}", i),
        _ => format!("Message number {} about the party tonight", i),
    }
}

fn generate_android_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let day = (i / 500) % 28 + 1;
        let month = (i / 14_000) % 12 + 1;
        let hour = i % 12 + 1;
        let meridiem = if (i / 12) % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "{}/{}/24, {}:{:02} {} - {}: {}",
            day,
            month,
            hour,
            i % 60,
            meridiem,
            SENDERS[i % SENDERS.len()],
            message(i)
        ));
    }
    lines.join("\n")
}

fn generate_ios_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let day = (i / 500) % 28 + 1;
        let hour = i % 12 + 1;
        lines.push(format!(
            "[{:02}/03/2024, {:02}:{:02}:{:02} PM] {}: {}",
            day,
            hour,
            i % 60,
            (i * 7) % 60,
            SENDERS[i % SENDERS.len()],
            message(i)
        ));
    }
    lines.join("\n")
}

fn generate_table(count: usize) -> ChatTable {
    ChatTable::from_export(&generate_android_txt(count), DeviceFormat::Android).unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_android_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("android_parsing");
    let parser = LineParser::new(DeviceFormat::Android).unwrap();

    for size in SIZES {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let outcome = parser.parse_str(black_box(txt));
                black_box(outcome)
            });
        });
    }
    group.finish();
}

fn bench_ios_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ios_parsing");
    let parser = LineParser::new(DeviceFormat::Ios).unwrap();

    for size in SIZES {
        let txt = generate_ios_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let outcome = parser.parse_str(black_box(txt));
                black_box(outcome)
            });
        });
    }
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    let parser = LineParser::new(DeviceFormat::Android).unwrap();

    for size in SIZES {
        let lines = parser.parse_str(&generate_android_txt(size)).lines;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let table = ChatTable::build(black_box(lines.clone()), DeviceFormat::Android).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregations");
    let table = generate_table(10_000);
    let whole = SenderFilter::WholeGroup;
    let alice = SenderFilter::sender("Alice");
    group.throughput(Throughput::Elements(table.len() as u64));

    group.bench_function("fetch_stats", |b| {
        b.iter(|| black_box(fetch_stats(black_box(&table), &whole)));
    });
    group.bench_function("fetch_stats_sender", |b| {
        b.iter(|| black_box(fetch_stats(black_box(&table), &alice)));
    });
    group.bench_function("most_active_user", |b| {
        b.iter(|| black_box(most_active_user(black_box(&table), &whole)));
    });
    group.bench_function("activity_heatmap", |b| {
        b.iter(|| black_box(activity_heatmap(black_box(&table), &whole)));
    });
    group.finish();
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let table = generate_table(10_000);
    let stopwords: StopWords = ["the", "about"].into_iter().collect();
    let whole = SenderFilter::WholeGroup;
    group.throughput(Throughput::Elements(table.len() as u64));

    group.bench_function("generate_wc", |b| {
        b.iter(|| black_box(generate_wc(black_box(&table), &whole, &stopwords)));
    });
    group.bench_function("emoji_analysis", |b| {
        b.iter(|| black_box(emoji_analysis(black_box(&table), &whole)));
    });
    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let stopwords = StopWords::empty();

    for size in [1_000_usize, 10_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| {
                let report = AnalysisReport::build(black_box(table), &SenderFilter::WholeGroup, &stopwords);
                black_box(report)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let table = generate_table(10_000);
    let report = AnalysisReport::build(&table, &SenderFilter::WholeGroup, &StopWords::empty());

    group.bench_function("to_table_csv", |b| {
        b.iter(|| black_box(to_table_csv(black_box(&table)).unwrap()));
    });
    group.bench_function("to_report_json", |b| {
        b.iter(|| black_box(to_report_json(black_box(&report)).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_android_parsing,
    bench_ios_parsing,
    bench_table_build,
    bench_aggregations,
    bench_text_analysis,
    bench_full_report,
    bench_output,
);

criterion_main!(benches);
