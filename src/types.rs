//! Type definitions and constants for the date picker.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use clap::ValueEnum;

use crate::error::{Error, Result};

/// Which kind of value the picker holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PickerType {
    /// One date.
    Single,
    /// Any number of independently picked dates.
    Multiple,
    /// A start and an end date.
    Range,
}

impl fmt::Display for PickerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PickerType::Single => "single",
            PickerType::Multiple => "multiple",
            PickerType::Range => "range",
        };
        f.pad(name)
    }
}

/// Text direction of the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Canned date ranges offered as shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RangeKind {
    AllTime,
    Today,
    Yesterday,
    #[value(name = "last_7_days")]
    Last7Days,
    #[value(name = "last_30_days")]
    Last30Days,
    ThisMonth,
    LastMonth,
}

/// Shortcut panel setting: off, on with default labels, or on with custom labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Shortcuts {
    Disabled,
    #[default]
    Enabled,
    /// Labels override the humanized tag for the kinds they name.
    Labeled(BTreeMap<RangeKind, String>),
}

impl Shortcuts {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Shortcuts::Disabled)
    }

    pub fn label(&self, kind: RangeKind) -> Option<&str> {
        match self {
            Shortcuts::Labeled(labels) => labels.get(&kind).map(String::as_str),
            _ => None,
        }
    }
}

/// Picker configuration, supplied by the caller on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub picker_type: PickerType,
    /// Locale tag such as `en-US` or `de_DE`.
    pub locale: String,
    pub weeks_start_on_monday: bool,
    pub dir: Direction,
    pub shortcuts: Shortcuts,
    /// Whether range selection is staged behind an Apply footer.
    pub footer: bool,
    pub placeholder: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            picker_type: PickerType::Single,
            locale: DEFAULT_LOCALE.to_string(),
            weeks_start_on_monday: false,
            dir: Direction::Ltr,
            shortcuts: Shortcuts::Enabled,
            footer: false,
            placeholder: None,
        }
    }
}

/// A displayed month. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
}

/// A pair of optional endpoints.
///
/// `start_date <= end_date` is not enforced; inverted ranges are passed through as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        DateRange {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(s), Some(e)) if s > e)
    }
}

/// The picker's value. An absent value is modelled as `Option<DateValue>::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Single(NaiveDateTime),
    Multiple(Vec<NaiveDateTime>),
    Range(DateRange),
}

impl DateValue {
    pub fn picker_type(&self) -> PickerType {
        match self {
            DateValue::Single(_) => PickerType::Single,
            DateValue::Multiple(_) => PickerType::Multiple,
            DateValue::Range(_) => PickerType::Range,
        }
    }

    /// Check that the value fits the configured picker type.
    pub fn ensure_type(&self, config: &Config) -> Result<()> {
        let found = self.picker_type();
        if found == config.picker_type {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: config.picker_type,
                found,
            })
        }
    }

    pub fn as_range(&self) -> Option<&DateRange> {
        match self {
            DateValue::Range(range) => Some(range),
            _ => None,
        }
    }
}

impl From<DateRange> for DateValue {
    fn from(range: DateRange) -> Self {
        DateValue::Range(range)
    }
}

/// Six displayed weeks of seven days, including overflow days from adjacent months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    pub(crate) weeks: [[chrono::NaiveDate; DAYS_PER_WEEK]; WEEKS_PER_GRID],
}

/// Date display style, matching the platform's `short` and `medium` styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Medium,
}

// Grid dimensions
pub const WEEKS_PER_GRID: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const CELLS_PER_GRID: usize = 42; // 6 weeks × 7 days

pub const DEFAULT_PLACEHOLDER: &str = "Pick a date";
pub const DEFAULT_LOCALE: &str = "en-US";

// Terminal rendering
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH: usize = 3;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
