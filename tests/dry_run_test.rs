//! Integration tests for dry-run mode
//!
//! Dry-run is a constructor-time setting: the pipeline still performs the
//! read-only existence check but stops before extraction, rendering,
//! distribution, and the success notification.

mod common;

use common::{sample_rows, MockNotifier, MockRenderer, MockSource, MockTransfer};
use herald::core::pipeline::{ProcessorSettings, ReportProcessor, RunOptions};
use herald::domain::date::ReportDate;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn date() -> ReportDate {
    ReportDate::from_str("2025-01-15").unwrap()
}

fn output() -> PathBuf {
    PathBuf::from("reports/daily_report_20250115.xlsx")
}

fn dry_run_settings() -> ProcessorSettings {
    ProcessorSettings {
        dry_run: true,
        ..ProcessorSettings::default()
    }
}

struct Harness {
    source: Arc<MockSource>,
    renderer: Arc<MockRenderer>,
    transfer: Arc<MockTransfer>,
    notifier: Arc<MockNotifier>,
    processor: ReportProcessor,
}

fn dry_run_harness(source: MockSource) -> Harness {
    let source = Arc::new(source);
    let renderer = Arc::new(MockRenderer::default());
    let transfer = Arc::new(MockTransfer::default());
    let notifier = Arc::new(MockNotifier::default());

    let processor = ReportProcessor::new(
        source.clone(),
        renderer.clone(),
        Some(transfer.clone()),
        notifier.clone(),
        dry_run_settings(),
    );

    Harness {
        source,
        renderer,
        transfer,
        notifier,
        processor,
    }
}

#[test]
fn dry_run_defaults_off() {
    assert!(!ProcessorSettings::default().dry_run);
    let options = RunOptions::default();
    assert!(options.transfer);
    assert!(options.notify);
}

#[tokio::test]
async fn dry_run_stops_after_existence_check() {
    let h = dry_run_harness(MockSource::with_rows(sample_rows()));

    let result = h
        .processor
        .process(date(), &output(), &RunOptions::default())
        .await;

    assert!(result.success);
    assert_eq!(result.records_processed, 0);
    assert_eq!(result.file_generated, None);
    assert_eq!(result.error, None);

    // The existence check ran; nothing with side effects did
    assert_eq!(h.source.exists_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.source.fetch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.transfer.connect_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.notifier.success_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dry_run_no_data_still_reports_no_data() {
    let h = dry_run_harness(MockSource::no_data());

    let result = h
        .processor
        .process(date(), &output(), &RunOptions::default())
        .await;

    // The dry-run gate sits after the existence check, so the no-data
    // terminal state (and its notification) behaves exactly as in a real
    // run
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("No data available"));
    assert_eq!(h.notifier.no_data_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dry_run_reports_dry_run_state() {
    let h = dry_run_harness(MockSource::with_rows(sample_rows()));
    assert!(h.processor.is_dry_run());
}

#[tokio::test]
async fn live_processor_alongside_dry_run() {
    // Dry-run is per-processor state, not ambient: a live processor built
    // next to a dry-run one behaves normally
    let dry = dry_run_harness(MockSource::with_rows(sample_rows()));

    let live_source = Arc::new(MockSource::with_rows(sample_rows()));
    let live_renderer = Arc::new(MockRenderer::default());
    let live_notifier = Arc::new(MockNotifier::default());
    let live = ReportProcessor::new(
        live_source,
        live_renderer.clone(),
        None,
        live_notifier.clone(),
        ProcessorSettings::default(),
    );

    let dry_result = dry
        .processor
        .process(date(), &output(), &RunOptions::default())
        .await;
    let live_result = live
        .process(date(), &output(), &RunOptions::default())
        .await;

    assert_eq!(dry_result.records_processed, 0);
    assert_eq!(dry.renderer.calls.load(Ordering::SeqCst), 0);

    assert_eq!(live_result.records_processed, 2);
    assert_eq!(live_renderer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(live_notifier.success_calls.load(Ordering::SeqCst), 1);
}
