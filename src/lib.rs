//! Date picker core with calendar grids, month navigation and range shortcuts.
//!
//! Features:
//! - Six-week calendar grids with Sunday or Monday week start and RTL layout
//! - Shortcut ranges ("Today", "Last 7 days", ...) resolved against an injectable clock
//! - Locale-aware labels for single, multiple and range values
//! - Expanded picker state with two months and a staged Apply footer

pub mod args;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod formatter;
pub mod picker;
pub mod range;
pub mod types;

pub use calendar::{generate_grid, next_month, previous_month};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use formatter::{
    display_placeholder, display_range_endpoints, display_range_kind_label, display_value,
    format_date, resolve_value_type,
};
pub use range::{range_equals, resolve_range};
pub use types::{
    CalendarGrid, CalendarMonth, Config, DateRange, DateStyle, DateValue, Direction, PickerType,
    RangeKind, Shortcuts,
};
