//! Command-line argument parsing using clap.
//!
//! Positional arguments follow `cal`: `[month] year` or a lone month or year.

use std::collections::BTreeMap;
use std::io::IsTerminal;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Parser, ValueHint};

use crate::clock::{Clock, end_of_day, start_of_day};
use crate::error::{Error, Result};
use crate::formatter::RenderContext;
use crate::types::{
    CalendarMonth, Config, DateRange, DateValue, Direction, PickerType, RangeKind, Shortcuts,
};

#[derive(Parser, Debug)]
#[command(name = "datepick")]
#[command(about = "Date picker calendar, range shortcuts and value labels", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default; kept for `cal` compatibility).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options", conflicts_with = "sunday")]
    pub monday: bool,

    /// Lay out weeks right to left.
    #[arg(long, help_heading = "Calendar options")]
    pub rtl: bool,

    /// Locale for month names and dates (e.g. en-US, de_DE).
    #[arg(short = 'l', long, help_heading = "Calendar options", value_name = "tag")]
    pub locale: Option<String>,

    /// Display two months side by side, as the expanded picker does.
    #[arg(short = '2', long = "two", help_heading = "Display options")]
    pub two_months: bool,

    /// List the shortcut ranges with their labels.
    #[arg(long, help_heading = "Display options")]
    pub shortcuts: bool,

    /// Override a shortcut label (kind=label, repeatable).
    #[arg(long = "label", help_heading = "Display options", value_name = "kind=label")]
    pub labels: Vec<String>,

    /// Print the dates of one shortcut range.
    #[arg(short = 'r', long, help_heading = "Display options", value_name = "kind")]
    pub range: Option<RangeKind>,

    /// Picker type used to interpret --value.
    #[arg(
        short = 't',
        long = "type",
        default_value = "single",
        help_heading = "Value options",
        value_name = "type"
    )]
    pub picker_type: PickerType,

    /// Value to label: a date, comma-separated dates, or start..end.
    #[arg(long, help_heading = "Value options", value_name = "dates")]
    pub value: Option<String>,

    /// Render the calendar with --value highlighted instead of printing its label.
    #[arg(short = 'c', long, help_heading = "Value options", requires = "value")]
    pub calendar: bool,

    /// Label shown when there is no value.
    #[arg(long, help_heading = "Value options", value_name = "text")]
    pub placeholder: Option<String>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year.
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a date picker calendar, or the pieces of its input.

Without any arguments, display the current month.

Examples:
  datepick                         Display current month
  datepick -2 -m                   Two months, weeks starting on Monday
  datepick 2 2026                  Display February 2026
  datepick --shortcuts             List shortcut ranges
  datepick -r last_7_days          Print the last seven days as a range
  datepick -t range --value 2024-03-01..2024-03-15
                                   Print the label of a range value
  datepick -c -t range --value 2024-03-01..2024-03-15 3 2024
                                   Highlight the range in March 2024

Environment:
  DATEPICK_TEST_TIME   Fixed current time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
  DATEPICK_LOG         Log filter (e.g. debug)";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let shortcuts = if args.labels.is_empty() {
            Shortcuts::Enabled
        } else {
            Shortcuts::Labeled(parse_labels(&args.labels)?)
        };

        Ok(Config {
            picker_type: args.picker_type,
            locale: args.locale.clone().unwrap_or_else(get_system_locale),
            weeks_start_on_monday: args.monday && !args.sunday,
            dir: if args.rtl {
                Direction::Rtl
            } else {
                Direction::Ltr
            },
            shortcuts,
            footer: false,
            placeholder: args.placeholder.clone(),
        })
    }
}

impl RenderContext {
    pub fn new(args: &Args, clock: &impl Clock) -> Self {
        RenderContext {
            today: clock.today(),
            color: !args.color && std::io::stdout().is_terminal(),
        }
    }
}

fn parse_labels(labels: &[String]) -> Result<BTreeMap<RangeKind, String>> {
    labels
        .iter()
        .map(|entry| {
            let (kind, label) = entry
                .split_once('=')
                .ok_or_else(|| Error::InvalidArgument(format!("Invalid label: {}", entry)))?;
            Ok((kind.trim().parse::<RangeKind>()?, label.to_string()))
        })
        .collect()
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty() && v != "C" && v != "POSIX")
        .unwrap_or_else(|| "en_US.UTF-8".to_string())
}

/// Parse month from string (numeric 1-12 or English name). Returns 1-12.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let s_lower = s.to_lowercase();
    if s_lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&s_lower))
        .map(|i| i as u32 + 1)
}

fn parse_year(s: &str) -> Result<i32> {
    let year: i32 = s
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("Invalid year value: {}", s)))?;
    if !(1..=9999).contains(&year) {
        return Err(Error::InvalidArgument(format!(
            "Invalid year value: {} (must be 1-9999)",
            year
        )));
    }
    Ok(year)
}

/// Calculate the displayed month from positional arguments.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) or month (number or name)
/// - 2 args: month year
pub fn get_display_month(args: &Args, clock: &impl Clock) -> Result<CalendarMonth> {
    let today = clock.today();

    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => Ok(CalendarMonth::from_date(today)),
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                return Ok(CalendarMonth::new(today.month0(), num));
            }
            parse_month(val)
                .map(|m| CalendarMonth::new(m - 1, today.year()))
                .ok_or_else(|| Error::InvalidArgument(format!("Invalid argument: {}", val)))
        }
        (Some(month), Some(year)) => {
            let month = parse_month(month)
                .ok_or_else(|| Error::InvalidArgument(format!("Invalid month: {}", month)))?;
            Ok(CalendarMonth::new(month - 1, parse_year(year)?))
        }
        (None, Some(_)) => Err(Error::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidArgument(format!("Invalid date: {}", s.trim())))
}

fn parse_endpoint(
    s: &str,
    to_datetime: fn(NaiveDate) -> NaiveDateTime,
) -> Result<Option<NaiveDateTime>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(s).map(to_datetime).map(Some)
    }
}

/// Parse a --value argument for the given picker type.
///
/// `single`: `YYYY-MM-DD`; `multiple`: comma-separated dates (may be empty);
/// `range`: `start..end` with either side optional.
pub fn parse_value(s: &str, picker_type: PickerType) -> Result<DateValue> {
    match picker_type {
        PickerType::Single => Ok(DateValue::Single(start_of_day(parse_date(s)?))),
        PickerType::Multiple => s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| parse_date(part).map(start_of_day))
            .collect::<Result<Vec<_>>>()
            .map(DateValue::Multiple),
        PickerType::Range => {
            let (start, end) = s.split_once("..").ok_or_else(|| {
                Error::InvalidArgument(format!("Invalid range: {} (expected start..end)", s))
            })?;
            Ok(DateValue::Range(DateRange {
                start_date: parse_endpoint(start, start_of_day)?,
                end_date: parse_endpoint(end, end_of_day)?,
            }))
        }
    }
}
