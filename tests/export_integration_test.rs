//! Integration tests for the export pipeline
//!
//! Notes come from JSON snapshot files and the clock is frozen, so every
//! run is reproducible.

use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use notes_today::adapters::notes::{RawField, RawNote, SnapshotNotesStore};
use notes_today::core::export::ExportCoordinator;
use notes_today::core::render::Renderer;
use notes_today::core::window::FixedClock;
use notes_today::domain::NotesTodayError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_case::test_case;

const NOW: &str = "2026-10-18T17:30:00+00:00";
const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("todays_notes.txt")
    }

    fn snapshot(&self, notes: &[RawNote]) -> PathBuf {
        let path = self.dir.path().join("notes.json");
        fs::write(&path, serde_json::to_string_pretty(notes).unwrap()).unwrap();
        path
    }

    fn coordinator(&self, snapshot: &Path) -> ExportCoordinator<SnapshotNotesStore, FixedClock> {
        ExportCoordinator::new(
            SnapshotNotesStore::new(snapshot),
            FixedClock::new(ts(NOW)),
            Renderer::new(FORMAT).unwrap(),
            self.output(),
        )
    }

    fn read_output(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }
}

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn local(ts: &DateTime<FixedOffset>) -> String {
    ts.with_timezone(&Local).format(FORMAT).to_string()
}

fn note(id: &str, title: &str, body: &str, modified: &str) -> RawNote {
    RawNote::readable(id, title, body, modified)
}

#[test]
fn test_grocery_list_block() {
    let fx = Fixture::new();
    let modified = "2026-10-18T09:15:00+00:00";
    let snapshot = fx.snapshot(&[note("n1", "Grocery List", "milk\neggs", modified)]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.exported, 1);

    let expected = format!(
        "=== Note 1 ===\nModified: {}\nTitle: Grocery List\n---\nmilk\neggs\n\n\n",
        local(&ts(modified))
    );
    assert_eq!(fx.read_output(), expected);
}

#[test]
fn test_notes_sorted_and_numbered() {
    let fx = Fixture::new();
    let snapshot = fx.snapshot(&[
        note("c", "Third", "3", "2026-10-18T16:00:00+00:00"),
        note("a", "First", "1", "2026-10-18T06:00:00+00:00"),
        note("old", "Last week", "x", "2026-10-11T06:00:00+00:00"),
        note("b", "Second", "2", "2026-10-18T11:00:00+00:00"),
    ]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.total_notes, 4);
    assert_eq!(summary.exported, 3);

    let output = fx.read_output();
    let headers: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("Title: "))
        .collect();
    assert_eq!(headers, vec!["Title: First", "Title: Second", "Title: Third"]);
    assert!(output.contains("=== Note 3 ===\n"));
    assert!(!output.contains("=== Note 4 ==="));
    assert!(!output.contains("Last week"));
}

#[test_case(0, true ; "exactly midnight")]
#[test_case(-1, false ; "one millisecond before midnight")]
#[test_case(63_000_000, true ; "current instant")]
fn test_today_boundary(offset_ms: i64, included: bool) {
    let fx = Fixture::new();
    // NOW is 17:30 UTC, i.e. 63_000_000 ms after midnight
    let midnight = ts("2026-10-18T00:00:00+00:00");
    let modified = midnight + TimeDelta::milliseconds(offset_ms);
    let snapshot = fx.snapshot(&[note("n1", "Edge", "", &modified.to_rfc3339())]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.exported, usize::from(included));
}

#[test]
fn test_unreadable_note_is_skipped() {
    let fx = Fixture::new();
    let mut locked = note("n2", "Locked", "", "2026-10-18T10:00:00+00:00");
    locked.body = Some(RawField::Error("Error: note is password protected".to_string()));
    let snapshot = fx.snapshot(&[
        note("n1", "One", "1", "2026-10-18T09:00:00+00:00"),
        locked,
        note("n3", "Three", "3", "2026-10-18T11:00:00+00:00"),
    ]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.exported, 2);
    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.skipped[0].note_id.as_str(), "n2");

    let output = fx.read_output();
    assert!(output.contains("=== Note 2 ===\nModified: "));
    assert!(output.contains("Title: Three"));
    assert!(!output.contains("Locked"));
}

#[test]
fn test_bad_timestamp_is_skipped() {
    let fx = Fixture::new();
    let snapshot = fx.snapshot(&[
        note("n1", "Fine", "", "2026-10-18T09:00:00+00:00"),
        note("n2", "Garbled", "", "missing value"),
    ]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.exported, 1);
    assert_eq!(summary.skipped_count(), 1);
}

#[test]
fn test_no_notes_today_writes_empty_file() {
    let fx = Fixture::new();
    fs::write(fx.output(), "yesterday's export").unwrap();
    let snapshot = fx.snapshot(&[note("n1", "Old", "", "2026-10-17T23:59:59+00:00")]);

    let summary = fx.coordinator(&snapshot).run().unwrap();
    assert_eq!(summary.exported, 0);
    assert_eq!(summary.output_path.as_deref(), Some(fx.output().as_path()));
    assert_eq!(fx.read_output(), "");
}

#[test]
fn test_second_run_replaces_first() {
    let fx = Fixture::new();

    let first = fx.snapshot(&[
        note("n1", "Morning standup", "long long body ".repeat(20).as_str(), "2026-10-18T08:00:00+00:00"),
        note("n2", "Lunch", "tacos", "2026-10-18T12:00:00+00:00"),
    ]);
    fx.coordinator(&first).run().unwrap();
    assert!(fx.read_output().contains("Morning standup"));

    let second = fx.snapshot(&[note("n9", "Evening", "done", "2026-10-18T17:00:00+00:00")]);
    fx.coordinator(&second).run().unwrap();

    let output = fx.read_output();
    assert!(output.starts_with("=== Note 1 ===\n"));
    assert!(output.contains("Title: Evening\n---\ndone\n\n\n"));
    assert!(!output.contains("Morning standup"));
    assert!(!output.contains("Lunch"));
    assert!(output.ends_with("done\n\n\n"));
}

#[test]
fn test_missing_snapshot_is_fatal() {
    let fx = Fixture::new();
    fs::write(fx.output(), "keep me").unwrap();

    let err = fx
        .coordinator(&fx.dir.path().join("absent.json"))
        .run()
        .unwrap_err();
    assert!(matches!(err, NotesTodayError::StoreAccess(_)));
    assert_eq!(fx.read_output(), "keep me");
}

#[test]
fn test_unwritable_output_is_fatal() {
    let fx = Fixture::new();
    let snapshot = fx.snapshot(&[note("n1", "One", "1", "2026-10-18T09:00:00+00:00")]);

    let coordinator = ExportCoordinator::new(
        SnapshotNotesStore::new(&snapshot),
        FixedClock::new(ts(NOW)),
        Renderer::new(FORMAT).unwrap(),
        fx.dir.path().join("no-such-dir").join("todays_notes.txt"),
    );

    let err = coordinator.run().unwrap_err();
    assert!(matches!(err, NotesTodayError::Write { .. }));
}

#[test]
fn test_prepare_does_not_write() {
    let fx = Fixture::new();
    let snapshot = fx.snapshot(&[note("n1", "One", "1", "2026-10-18T09:00:00+00:00")]);

    let prepared = fx.coordinator(&snapshot).prepare().unwrap();
    assert_eq!(prepared.summary.exported, 1);
    assert!(prepared.text.contains("Title: One"));
    assert!(prepared.summary.output_path.is_none());
    assert!(!fx.output().exists());
}
