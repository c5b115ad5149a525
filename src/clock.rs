//! Time sources and day-boundary helpers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Environment variable that pins "now" for tests, like `CAL_TEST_TIME` in `cal`.
pub const TEST_TIME_VAR: &str = "DATEPICK_TEST_TIME";

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Get the clock to use, respecting DATEPICK_TEST_TIME for testing.
///
/// Accepts `%Y-%m-%dT%H:%M:%S` or a bare `%Y-%m-%d` (midnight).
pub fn clock_from_env() -> Box<dyn Clock> {
    if let Ok(test_time) = std::env::var(TEST_TIME_VAR) {
        if let Some(now) = parse_test_time(&test_time) {
            return Box::new(FixedClock(now));
        }
        tracing::warn!(value = %test_time, "ignoring unparsable {}", TEST_TIME_VAR);
    }
    Box::new(SystemClock)
}

fn parse_test_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(start_of_day))
}

/// 00:00:00.000 on `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// 23:59:59.999 on `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // Constant components, always a valid time
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Whether two instants fall on the same calendar day.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
