//! Value labels, locale-aware date formatting and terminal rendering of month grids.

use chrono::{Datelike, Locale, NaiveDate, NaiveDateTime, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::calendar::generate_grid;
use crate::error::Result;
use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarMonth, Config,
    DEFAULT_PLACEHOLDER, DateRange, DateStyle, DateValue, Direction, GUTTER_WIDTH, MONTH_WIDTH,
    PickerType, RangeKind,
};

/// Label and value pair shown in the picker's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue<'a> {
    pub label: String,
    pub value: Option<&'a DateValue>,
}

/// Short-formatted endpoints of a range value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeEndpoints {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Map a locale tag (`en-US`, `de_DE.UTF-8`, `fr`) to a chrono locale.
///
/// A bare language is tried as `xx_XX`; anything unknown falls back to `en_US`.
pub fn parse_locale(tag: &str) -> Locale {
    let tag = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    if let Ok(locale) = tag.parse::<Locale>() {
        return locale;
    }
    if !tag.is_empty()
        && !tag.contains('_')
        && let Ok(locale) = format!("{}_{}", tag, tag.to_uppercase()).parse::<Locale>()
    {
        return locale;
    }

    tracing::debug!(locale = %tag, "unknown locale, falling back to en_US");
    Locale::en_US
}

fn medium_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::en_US | Locale::en_CA | Locale::en_PH => "%b %-d, %Y",
        // Year-first locales already spell the date out in their own format
        Locale::ja_JP
        | Locale::ko_KR
        | Locale::zh_CN
        | Locale::zh_TW
        | Locale::zh_HK
        | Locale::zh_SG => "%x",
        _ => "%-d %b %Y",
    }
}

/// Format a date in the configured locale.
///
/// `Short` uses the locale's numeric date format, `Medium` spells out the abbreviated month.
pub fn format_date(date: NaiveDate, config: &Config, style: DateStyle) -> String {
    let locale = parse_locale(&config.locale);
    let pattern = match style {
        DateStyle::Short => "%x",
        DateStyle::Medium => medium_pattern(locale),
    };
    date.format_localized(pattern, locale).to_string()
}

fn format_datetime(d: NaiveDateTime, config: &Config, style: DateStyle) -> String {
    format_date(d.date(), config, style)
}

pub fn display_placeholder(config: &Config) -> String {
    match config.placeholder.as_deref() {
        Some(placeholder) if !placeholder.is_empty() => placeholder.to_string(),
        _ => DEFAULT_PLACEHOLDER.to_string(),
    }
}

/// Short-formatted start and end of a range value. Both are `None` unless the
/// picker is a range picker holding a range value.
pub fn display_range_endpoints(value: Option<&DateValue>, config: &Config) -> RangeEndpoints {
    if config.picker_type != PickerType::Range {
        return RangeEndpoints::default();
    }
    let Some(range) = value.and_then(DateValue::as_range) else {
        return RangeEndpoints::default();
    };

    RangeEndpoints {
        start: range
            .start_date
            .map(|d| format_datetime(d, config, DateStyle::Short)),
        end: range
            .end_date
            .map(|d| format_datetime(d, config, DateStyle::Short)),
    }
}

/// Derive the input label for `value`. Anything that cannot be labelled falls
/// back to the placeholder with no value.
pub fn display_value<'a>(value: Option<&'a DateValue>, config: &Config) -> DisplayValue<'a> {
    let placeholder = || DisplayValue {
        label: display_placeholder(config),
        value: None,
    };

    let Some(v) = value else {
        return placeholder();
    };
    if resolve_value_type(value, config).is_none() {
        return placeholder();
    }

    let label = match v {
        DateValue::Single(d) => format_datetime(*d, config, DateStyle::Medium),
        DateValue::Multiple(dates) if !dates.is_empty() => dates
            .iter()
            .map(|&d| format_datetime(d, config, DateStyle::Medium))
            .collect::<Vec<_>>()
            .join(", "),
        DateValue::Multiple(_) => return placeholder(),
        DateValue::Range(range) => {
            if range.is_inverted() {
                tracing::debug!(?range, "labelling inverted range as given");
            }
            match (range.start_date, range.end_date) {
                (Some(start), Some(end)) => format!(
                    "{} - {}",
                    format_datetime(start, config, DateStyle::Medium),
                    format_datetime(end, config, DateStyle::Medium)
                ),
                (Some(d), None) | (None, Some(d)) => {
                    format!("{} -", format_datetime(d, config, DateStyle::Medium))
                }
                (None, None) => return placeholder(),
            }
        }
    };

    DisplayValue { label, value }
}

/// Label of a shortcut: the configured label if any, else the humanized tag.
pub fn display_range_kind_label(kind: RangeKind, config: &Config) -> String {
    config
        .shortcuts
        .label(kind)
        .map(str::to_string)
        .unwrap_or_else(|| kind.humanize())
}

/// Picker type of `value` under `config`.
///
/// An absent value takes the configured type; a value of another type yields `None`.
pub fn resolve_value_type(value: Option<&DateValue>, config: &Config) -> Option<PickerType> {
    let Some(v) = value else {
        return Some(config.picker_type);
    };
    let found = v.picker_type();
    if found == config.picker_type {
        Some(found)
    } else {
        tracing::debug!(expected = %config.picker_type, %found, "value does not match picker type");
        None
    }
}

/// Rendering options for terminal output.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub today: NaiveDate,
    pub color: bool,
}

/// Whether `date` is part of the picked value.
pub fn is_selected(value: Option<&DateValue>, date: NaiveDate) -> bool {
    match value {
        Some(DateValue::Single(d)) => d.date() == date,
        Some(DateValue::Multiple(dates)) => dates.iter().any(|d| d.date() == date),
        Some(DateValue::Range(DateRange {
            start_date,
            end_date,
        })) => match (start_date, end_date) {
            (Some(s), Some(e)) => (s.date()..=e.date()).contains(&date),
            (Some(d), None) | (None, Some(d)) => d.date() == date,
            (None, None) => false,
        },
        None => false,
    }
}

/// Localized month name and year, centered over a grid.
pub fn format_month_header(month: CalendarMonth, locale: Locale, ctx: &RenderContext) -> String {
    let name = month
        .first_day()
        .map(|d| d.format_localized("%B", locale).to_string())
        .unwrap_or_default();
    let header = format!("{} {}", name, month.year);
    let centered = center_text(&header, MONTH_WIDTH);
    if ctx.color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the final byte of the CSI sequence
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain.width()
}

/// Weekday order of one grid row.
pub fn get_weekday_order(config: &Config) -> [Weekday; 7] {
    let start = if config.weeks_start_on_monday {
        Weekday::Mon
    } else {
        Weekday::Sun
    };
    let mut order = [start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    if config.dir == Direction::Rtl {
        order.reverse();
    }
    order
}

/// Get 2-character weekday abbreviation for a locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-03 was a Monday
    let name = NaiveDate::from_ymd_opt(2000, 1, 3)
        .and_then(|monday| {
            monday.checked_add_days(chrono::Days::new(u64::from(weekday.num_days_from_monday())))
        })
        .map(|d| d.format_localized("%a", locale).to_string())
        .unwrap_or_default();
    name.chars().take(2).collect()
}

pub fn format_weekday_headers(config: &Config, locale: Locale, ctx: &RenderContext) -> String {
    let names = get_weekday_order(config)
        .iter()
        .map(|&w| format!("{:>2}", get_weekday_short_name(w, locale)))
        .collect::<Vec<_>>()
        .join(" ");
    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, names, COLOR_RESET)
    } else {
        names
    }
}

/// Format day cell.
///
/// Color priority: today > selected > overflow > regular. Without color,
/// overflow days are left blank.
fn format_day(
    date: NaiveDate,
    month: CalendarMonth,
    value: Option<&DateValue>,
    ctx: &RenderContext,
) -> String {
    let in_month = month.contains(date);
    let day_str = format!("{:>2}", date.day());

    if !ctx.color {
        return if in_month { day_str } else { "  ".to_string() };
    }

    if date == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if is_selected(value, date) {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if !in_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format one month as lines: header, weekday names, then six weeks.
pub fn format_grid(
    month: CalendarMonth,
    config: &Config,
    value: Option<&DateValue>,
    ctx: &RenderContext,
) -> Result<Vec<String>> {
    let grid = generate_grid(month, config)?;
    let locale = parse_locale(&config.locale);

    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(month, locale, ctx));
    lines.push(format_weekday_headers(config, locale, ctx));

    for week in grid.weeks() {
        let line = week
            .iter()
            .map(|&date| format_day(date, month, value, ctx))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line.trim_end().to_string());
    }

    Ok(lines)
}

/// Join month grids into rows of side-by-side text.
pub fn format_months_side_by_side(grids: &[Vec<String>]) -> Vec<String> {
    let max_height = grids.iter().map(Vec::len).max().unwrap_or(0);

    (0..max_height)
        .map(|row| {
            let mut line = String::new();
            for (i, grid) in grids.iter().enumerate() {
                let text = grid.get(row).map(String::as_str).unwrap_or_default();
                line.push_str(text);
                if i < grids.len() - 1 {
                    let padding = MONTH_WIDTH.saturating_sub(visible_width(text)) + GUTTER_WIDTH;
                    line.push_str(&" ".repeat(padding));
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
