//! Shortcut range resolution.

use std::fmt;
use std::str::FromStr;

use crate::clock::{Clock, end_of_day, same_day, start_of_day};
use crate::error::Error;
use crate::types::{CalendarMonth, DateRange, DateValue, RangeKind};

impl RangeKind {
    /// Shortcut order as listed in the picker.
    pub const ALL: [RangeKind; 7] = [
        RangeKind::AllTime,
        RangeKind::Today,
        RangeKind::Yesterday,
        RangeKind::Last7Days,
        RangeKind::Last30Days,
        RangeKind::ThisMonth,
        RangeKind::LastMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RangeKind::AllTime => "all_time",
            RangeKind::Today => "today",
            RangeKind::Yesterday => "yesterday",
            RangeKind::Last7Days => "last_7_days",
            RangeKind::Last30Days => "last_30_days",
            RangeKind::ThisMonth => "this_month",
            RangeKind::LastMonth => "last_month",
        }
    }

    /// Tag with underscores as spaces and the first letter capitalized.
    pub fn humanize(self) -> String {
        let spaced = self.as_str().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn resolve(self, clock: &impl Clock) -> Option<DateRange> {
        resolve_range(self, clock)
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RangeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("Unknown range: {}", s)))
    }
}

/// Concrete range for `kind` as of `clock.now()`; `None` for `AllTime`.
///
/// Starts are at 00:00:00.000 and ends at 23:59:59.999 local time.
pub fn resolve_range(kind: RangeKind, clock: &impl Clock) -> Option<DateRange> {
    let today = clock.today();

    let (start, end) = match kind {
        RangeKind::AllTime => return None,
        RangeKind::Today => (today, today),
        RangeKind::Yesterday => {
            let yesterday = today.pred_opt()?;
            (yesterday, yesterday)
        }
        RangeKind::Last7Days => (today.checked_sub_days(chrono::Days::new(6))?, today),
        RangeKind::Last30Days => (today.checked_sub_days(chrono::Days::new(29))?, today),
        RangeKind::ThisMonth => {
            let month = CalendarMonth::from_date(today);
            (month.first_day()?, month.last_day()?)
        }
        RangeKind::LastMonth => {
            let month = CalendarMonth::from_date(today).previous();
            (month.first_day()?, month.last_day()?)
        }
    };

    Some(DateRange::new(start_of_day(start), end_of_day(end)))
}

/// Whether `value` is exactly the range `kind` resolves to, compared by day.
///
/// An absent value matches only `AllTime`.
pub fn range_equals(value: Option<&DateValue>, kind: RangeKind, clock: &impl Clock) -> bool {
    let Some(value) = value else {
        return kind == RangeKind::AllTime;
    };

    let Some(DateRange {
        start_date: Some(start),
        end_date: Some(end),
    }) = value.as_range().copied()
    else {
        return false;
    };

    match resolve_range(kind, clock) {
        Some(DateRange {
            start_date: Some(expected_start),
            end_date: Some(expected_end),
        }) => same_day(start, expected_start) && same_day(end, expected_end),
        _ => false,
    }
}

/// The first shortcut whose range equals `value`, used to highlight the active shortcut.
pub fn matching_range_kind(value: Option<&DateValue>, clock: &impl Clock) -> Option<RangeKind> {
    RangeKind::ALL
        .into_iter()
        .find(|&kind| range_equals(value, kind, clock))
}
