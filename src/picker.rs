//! State of the expanded picker: two side-by-side months, optional shortcut
//! panel, and an Apply footer that stages range selections.

use crate::clock::Clock;
use crate::formatter::display_range_kind_label;
use crate::range::{range_equals, resolve_range};
use crate::types::{CalendarMonth, Config, DateValue, PickerType, RangeKind};

/// One entry of the shortcut panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutOption {
    pub kind: RangeKind,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedView {
    /// Committed value, as reported to the caller.
    value: Option<DateValue>,
    /// Staged value while a footer is shown.
    pending: Option<DateValue>,
    /// Left-hand month; the right-hand calendar shows the month after it.
    month: CalendarMonth,
}

/// The footer is only shown for range pickers that ask for it.
pub fn has_footer(config: &Config) -> bool {
    config.footer && config.picker_type == PickerType::Range
}

pub fn has_shortcuts(config: &Config) -> bool {
    config.shortcuts.is_enabled() && config.picker_type == PickerType::Range
}

impl ExpandedView {
    /// Open the view on the current month.
    pub fn new(value: Option<DateValue>, clock: &impl Clock) -> Self {
        ExpandedView {
            pending: value.clone(),
            value,
            month: CalendarMonth::from_date(clock.today()),
        }
    }

    pub fn value(&self) -> Option<&DateValue> {
        self.value.as_ref()
    }

    /// Value the calendars should highlight: the staged one when a footer is shown.
    pub fn visible_value(&self, config: &Config) -> Option<&DateValue> {
        if has_footer(config) {
            self.pending.as_ref()
        } else {
            self.value.as_ref()
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn displayed_months(&self) -> [CalendarMonth; 2] {
        [self.month, self.month.next()]
    }

    pub fn set_month(&mut self, month: CalendarMonth) {
        self.month = month;
    }

    /// Navigation from the right-hand calendar, which always trails the left by one month.
    pub fn set_second_month(&mut self, month: CalendarMonth) {
        self.month = month.previous();
    }

    /// Record a selection. With a footer the selection waits for `apply`.
    pub fn select(&mut self, value: Option<DateValue>, config: &Config) {
        if has_footer(config) {
            self.pending = value;
        } else {
            self.value = value;
        }
    }

    /// Commit the staged range. Only complete ranges on range pickers are committed.
    pub fn apply(&mut self, config: &Config) -> Option<&DateValue> {
        if config.picker_type != PickerType::Range {
            return None;
        }
        match &self.pending {
            Some(DateValue::Range(range)) if range.is_complete() => {
                self.value = self.pending.clone();
                self.value.as_ref()
            }
            _ => None,
        }
    }

    /// Pick a shortcut; moves the view to the month where its range starts.
    pub fn select_shortcut(&mut self, kind: RangeKind, config: &Config, clock: &impl Clock) {
        let range = resolve_range(kind, clock);
        if let Some(start) = range.and_then(|r| r.start_date) {
            self.month = CalendarMonth::from_date(start.date());
        }
        self.select(range.map(DateValue::Range), config);
    }

    /// Entries of the shortcut panel, empty when the panel is hidden.
    pub fn shortcut_options(&self, config: &Config, clock: &impl Clock) -> Vec<ShortcutOption> {
        if !has_shortcuts(config) {
            return Vec::new();
        }
        let current = self.visible_value(config);
        RangeKind::ALL
            .into_iter()
            .map(|kind| ShortcutOption {
                kind,
                label: display_range_kind_label(kind, config),
                selected: range_equals(current, kind, clock),
            })
            .collect()
    }
}
