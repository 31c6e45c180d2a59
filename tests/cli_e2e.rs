//! End-to-end CLI tests for chatwrap.
//!
//! These tests run the actual binary with various arguments and check the
//! console output and the files it writes.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Both device grammars work via CLI
//! - **Outputs**: JSON report and CSV table
//! - **Selection**: Sender and date restrictions
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with exports for both devices.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let android = "\
12/1/23, 10:15 PM - Messages and calls are end-to-end encrypted.
12/1/23, 10:15 PM - Alice: Hello there 👋
12/1/23, 10:16 PM - Bob: Hi Alice! How are you?
continuation of Bob's message
13/1/23, 9:05 AM - Alice: <Media omitted>
2/2/23, 8:30 PM - Carol: party tonight? 🎉
2/2/23, 8:45 PM - Alice: yes party tonight
";
    fs::write(dir.path().join("android.txt"), android).unwrap();

    let ios = "\
[12/01/2023, 10:15:30 PM] Alice: Hello there
[12/01/2023, 10:16:02 PM] Bob: Hi! What time: 8 or 9?
\u{200e}[13/01/2023, 09:00:00 AM] Alice: \u{200e}image omitted
";
    fs::write(dir.path().join("ios.txt"), ios).unwrap();

    fs::write(dir.path().join("stop.txt"), "hi\nyou\nare\n").unwrap();

    // Day 31 of February only fails after a line matches
    fs::write(
        dir.path().join("impossible.txt"),
        "31/2/23, 8:00 AM - Alice: never\n",
    )
    .unwrap();

    dir
}

fn chatwrap_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatwrap"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn read_report(path: &PathBuf) -> serde_json::Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_android_basic() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 5 messages"))
            .stdout(predicate::str::contains("Done"));

        let report = read_report(&output);
        assert_eq!(report["selection"], "Whole Group");
        assert_eq!(report["stats"]["total_messages"], 5);
        assert_eq!(report["stats"]["total_media"], 1);
        assert_eq!(report["active_users"]["top"][0]["sender"], "Alice");
    }

    #[test]
    fn test_ios_basic() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("ios.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args(["ios", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let report = read_report(&output);
        assert_eq!(report["stats"]["total_messages"], 3);
        assert_eq!(report["daily_timeline"][0]["date"], "2023-01-12");
    }

    #[test]
    fn test_device_aliases() {
        let fixtures = setup_fixtures();

        for (alias, file) in [("aos", "android.txt"), ("iphone", "ios.txt")] {
            let input = fixtures.path().join(file);
            let output = output_path(&fixtures, &format!("out_{}.json", alias));
            chatwrap_cmd()
                .args([alias, input.to_str().unwrap(), "-o", output.to_str().unwrap()])
                .assert()
                .success();
            assert!(output.exists());
        }
    }

    #[test]
    fn test_wrong_device_finds_nothing() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("ios.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 0 messages"));

        assert_eq!(read_report(&output)["stats"]["total_messages"], 0);
    }
}

// ============================================================================
// Output Tests
// ============================================================================

mod outputs {
    use super::*;

    #[test]
    fn test_table_csv_written() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");
        let table = output_path(&fixtures, "table.csv");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--table",
                table.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Table saved"));

        let content = fs::read_to_string(&table).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date;Time;Sender;Message;month;day;day_name;year;hour_with_ampm;minute"
        );
        assert_eq!(lines.count(), 5);
        assert!(!content.contains("end-to-end encrypted"));
    }

    #[test]
    fn test_stopwords_applied() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");
        let stop = fixtures.path().join("stop.txt");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-s",
                stop.to_str().unwrap(),
            ])
            .assert()
            .success();

        let report = read_report(&output);
        let words: Vec<(&str, u64)> = report["top_words"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| (pair[0].as_str().unwrap(), pair[1].as_u64().unwrap()))
            .collect();
        assert!(words.contains(&("party", 2)));
        assert!(words.iter().all(|(w, _)| !["hi", "are"].contains(w)));
        // Only the bare token is a stopword; "you?" survives as "you"
        assert!(words.contains(&("you", 1)));
    }

    #[test]
    fn test_missing_stopword_file_still_succeeds() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-s",
                "/nonexistent/stopwords.txt",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("stopword file not found"));

        assert!(output.exists());
    }

    #[test]
    fn test_summary_printed() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Summary (Whole Group)"))
            .stdout(predicate::str::contains("Busiest:   Alice (3 messages)"));
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

mod selection {
    use super::*;

    #[test]
    fn test_single_user() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--user",
                "Bob",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Analyzing Bob"));

        let report = read_report(&output);
        assert_eq!(report["selection"], "Bob");
        assert_eq!(report["stats"]["total_messages"], 1);
        assert!(report.get("active_users").is_none());
    }

    #[test]
    fn test_list_senders() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--list-senders",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Whole Group"))
            .stdout(predicate::str::contains("Carol"));

        assert!(!output.exists());
    }

    #[test]
    fn test_date_range() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--after",
                "2023-01-13",
                "--before",
                "2023-01-31",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("After:   2023-01-13"))
            .stdout(predicate::str::contains("Found 1 messages"));

        let report = read_report(&output);
        assert_eq!(report["stats"]["total_messages"], 1);
        assert_eq!(report["stats"]["total_media"], 1);
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        chatwrap_cmd()
            .args(["android", "/nonexistent/chat.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_device() {
        chatwrap_cmd()
            .args(["blackberry", "chat.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_invalid_date_argument() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("android.txt");

        chatwrap_cmd()
            .args(["android", input.to_str().unwrap(), "--after", "13/01/2023"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn test_impossible_timestamp() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("impossible.txt");
        let output = output_path(&fixtures, "report.json");

        chatwrap_cmd()
            .args([
                "android",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid timestamp '31/2/23'"));

        assert!(!output.exists());
    }

    #[test]
    fn test_help_lists_examples() {
        chatwrap_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("--list-senders"));
    }
}
