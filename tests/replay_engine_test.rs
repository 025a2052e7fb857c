//! Integration tests for the date-range replay engine
//!
//! These tests cover the ordering precondition, environment validation,
//! per-date failure isolation, the counter partition invariant, and
//! cooperative shutdown.

use herald::core::replay::{ReplayEngine, ReplaySummary, CONFIG_FILE_NAME};
use herald::domain::date::{DateRange, ReportDate};
use herald::domain::errors::HeraldError;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;
use test_case::test_case;
use tokio::sync::watch;

fn date(s: &str) -> ReportDate {
    ReportDate::from_str(s).unwrap()
}

/// Report directory containing the required configuration artifact
fn replay_environment() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[application]\n").unwrap();
    dir
}

#[test_case("2025-01-01", "2025-01-01", 1)]
#[test_case("2025-01-01", "2025-01-31", 31)]
#[test_case("2025-02-01", "2025-03-01", 29)]
#[test_case("2024-02-27", "2024-03-01", 4; "leap year february")]
fn date_sequence_length(start: &str, end: &str, expected: usize) {
    let range = DateRange::new(date(start), date(end));
    assert_eq!(range.len(), expected);
    assert_eq!(range.count(), expected);
}

#[tokio::test]
async fn inverted_range_fails_before_environment_validation() {
    // Deliberately nonexistent directory: the ordering check must fire
    // first, so the environment is never touched
    let engine = ReplayEngine::new("/definitely/not/a/real/path");

    let result = engine
        .reprocess(
            date("2025-01-15"),
            date("2025-01-14"),
            false,
            None,
            |_| async { Ok(()) },
        )
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Start date must be <= end date"));
}

#[test]
fn validate_environment_missing_directory() {
    let engine = ReplayEngine::new("/definitely/not/a/real/path");
    let err = engine.validate_environment().unwrap_err();
    assert!(matches!(err, HeraldError::Pipeline(_)));
    assert!(err.to_string().contains("Report path not found"));
}

#[test]
fn validate_environment_missing_config() {
    let dir = TempDir::new().unwrap();
    let engine = ReplayEngine::new(dir.path());
    let err = engine.validate_environment().unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn validate_environment_success() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());
    assert!(engine.validate_environment().is_ok());
}

#[tokio::test]
async fn reprocess_missing_environment_propagates() {
    let dir = TempDir::new().unwrap();
    let engine = ReplayEngine::new(dir.path());

    let calls = AtomicUsize::new(0);
    let result = engine
        .reprocess(date("2025-01-01"), date("2025-01-03"), false, None, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn all_dates_attempted_in_ascending_order() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let seen: Mutex<Vec<ReportDate>> = Mutex::new(Vec::new());
    let summary = engine
        .reprocess(date("2025-01-30"), date("2025-02-02"), false, None, |d| {
            seen.lock().unwrap().push(d);
            async { Ok(()) }
        })
        .await
        .unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.successful, 4);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 0);

    let seen = seen.into_inner().unwrap();
    assert_eq!(seen.first(), Some(&date("2025-01-30")));
    assert_eq!(seen.last(), Some(&date("2025-02-02")));
    for pair in seen.windows(2) {
        assert_eq!(pair[0].days_until(&pair[1]), 1);
    }
}

#[tokio::test]
async fn one_failing_date_never_aborts_the_range() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let failing = date("2025-01-02");
    let attempted = AtomicUsize::new(0);
    let summary = engine
        .reprocess(date("2025-01-01"), date("2025-01-03"), false, None, |d| {
            attempted.fetch_add(1, Ordering::SeqCst);
            async move {
                if d == failing {
                    Err(HeraldError::Pipeline("second date blew up".to_string()))
                } else {
                    Ok(())
                }
            }
        })
        .await
        .unwrap();

    // All three dates were still attempted
    assert_eq!(attempted.load(Ordering::SeqCst), 3);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 0);
}

#[tokio::test]
async fn dry_run_skips_every_date() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let calls = AtomicUsize::new(0);
    let summary = engine
        .reprocess(date("2025-01-01"), date("2025-01-03"), true, None, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.successful, 0);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn counters_partition_total() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let summary = engine
        .reprocess(date("2025-01-01"), date("2025-01-10"), false, None, |d| {
            async move {
                // Every third day fails
                if d.file_stamp().ends_with('3') || d.file_stamp().ends_with('6') {
                    Err(HeraldError::Pipeline("bad day".to_string()))
                } else {
                    Ok(())
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(summary.total, 10);
    assert_eq!(
        summary.total,
        summary.successful + summary.failed + summary.skipped
    );
}

#[tokio::test]
async fn single_day_range_runs_once() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let calls = AtomicUsize::new(0);
    let summary = engine
        .reprocess(date("2025-01-15"), date("2025-01-15"), false, None, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.successful, 1);
}

#[tokio::test]
async fn shutdown_skips_remaining_dates() {
    let dir = replay_environment();
    let engine = ReplayEngine::new(dir.path());

    let (tx, rx) = watch::channel(false);
    tx.send(true).unwrap();

    let calls = AtomicUsize::new(0);
    let summary = engine
        .reprocess(
            date("2025-01-01"),
            date("2025-01-05"),
            false,
            Some(rx),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }
            },
        )
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(summary.interrupted);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.skipped, 5);
    assert_eq!(
        summary.total,
        summary.successful + summary.failed + summary.skipped
    );
}

#[test]
fn success_rate_examples() {
    let mut summary = ReplaySummary::new();
    summary.total = 10;
    summary.successful = 8;
    summary.failed = 2;
    assert_eq!(summary.success_rate(), 80.0);

    let empty = ReplaySummary::new();
    assert_eq!(empty.success_rate(), 0.0);
}
