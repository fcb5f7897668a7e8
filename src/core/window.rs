//! The "today" window
//!
//! A note belongs to today when it was modified at or after local midnight.
//! There is no upper bound: anything up to the moment of the run counts.

use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeZone};

/// Source of the current time
pub trait Clock {
    /// Window for the current instant
    fn window(&self) -> TodayWindow;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn window(&self) -> TodayWindow {
        TodayWindow::at(&Local::now())
    }
}

/// A clock frozen at one instant, interpreted in that instant's offset
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn window(&self) -> TodayWindow {
        TodayWindow::at(&self.now)
    }
}

/// `[midnight today, now]` in some time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayWindow {
    start: DateTime<FixedOffset>,
    now: DateTime<FixedOffset>,
}

impl TodayWindow {
    /// Window for `now`, with midnight taken in `now`'s time zone
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use notes_today::core::window::TodayWindow;
    ///
    /// let now = DateTime::parse_from_rfc3339("2026-10-18T15:42:00+02:00").unwrap();
    /// let window = TodayWindow::at(&now);
    /// assert_eq!(
    ///     window.start(),
    ///     DateTime::parse_from_rfc3339("2026-10-18T00:00:00+02:00").unwrap()
    /// );
    /// ```
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            start: midnight_of(now),
            now: now.fixed_offset(),
        }
    }

    /// Local midnight of the current day
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Instant the window was computed at
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    /// Whether `ts` falls on or after the start of today
    pub fn contains(&self, ts: &DateTime<FixedOffset>) -> bool {
        *ts >= self.start
    }
}

fn midnight_of<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<FixedOffset> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.fixed_offset(),
        // midnight skipped by a DST change; fall back to the current offset
        None => now.fixed_offset() - (now.naive_local() - midnight),
    }
}
