//! Calendar grid generation and month arithmetic.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Error, Result};
use crate::types::{
    CELLS_PER_GRID, CalendarGrid, CalendarMonth, Config, DAYS_PER_WEEK, Direction, WEEKS_PER_GRID,
};

impl CalendarMonth {
    pub fn new(month: u32, year: i32) -> Self {
        CalendarMonth { month, year }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        CalendarMonth {
            month: date.month0(),
            year: date.year(),
        }
    }

    /// Month after this one. The year wraps at `i32::MAX`, where no grid exists anyway.
    pub fn next(self) -> Self {
        if self.month >= 11 {
            CalendarMonth {
                month: 0,
                year: self.year.wrapping_add(1),
            }
        } else {
            CalendarMonth {
                month: self.month + 1,
                year: self.year,
            }
        }
    }

    /// Month before this one. The year wraps at `i32::MIN`.
    pub fn previous(self) -> Self {
        if self.month == 0 {
            CalendarMonth {
                month: 11,
                year: self.year.wrapping_sub(1),
            }
        } else {
            CalendarMonth {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    /// First day of the month. A month past 11 carries into the following years.
    pub fn first_day(self) -> Option<NaiveDate> {
        let year = self.year.checked_add((self.month / 12) as i32)?;
        NaiveDate::from_ymd_opt(year, self.month % 12 + 1, 1)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        self.normalized()?.next().first_day()?.pred_opt()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self.normalized() == Some(CalendarMonth::from_date(date))
    }

    fn normalized(self) -> Option<Self> {
        Some(CalendarMonth {
            month: self.month % 12,
            year: self.year.checked_add((self.month / 12) as i32)?,
        })
    }
}

/// Month after `m`, rolling December into January of the next year.
pub fn next_month(m: CalendarMonth) -> CalendarMonth {
    m.next()
}

/// Month before `m`, rolling January into December of the previous year.
pub fn previous_month(m: CalendarMonth) -> CalendarMonth {
    m.previous()
}

/// Build the 6×7 grid of dates shown for `month`.
///
/// The first row starts on the configured first weekday on or before day 1, so
/// leading and trailing days of the neighbouring months fill the grid. With
/// `Direction::Rtl` each week is reversed; row order is unchanged.
pub fn generate_grid(month: CalendarMonth, config: &Config) -> Result<CalendarGrid> {
    let out_of_range = || Error::DateOutOfRange {
        month: month.month,
        year: month.year,
    };

    let first = month.first_day().ok_or_else(out_of_range)?;
    let week_shift = if config.weeks_start_on_monday { 6 } else { 0 };
    let offset = (first.weekday().num_days_from_sunday() + week_shift) % 7;
    let anchor = first
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(out_of_range)?;

    let mut weeks = [[anchor; DAYS_PER_WEEK]; WEEKS_PER_GRID];
    let mut current = anchor;
    for (i, week) in weeks.iter_mut().enumerate() {
        for (j, cell) in week.iter_mut().enumerate() {
            *cell = current;
            // The very last cell has no successor to compute
            if i * DAYS_PER_WEEK + j + 1 < CELLS_PER_GRID {
                current = current.succ_opt().ok_or_else(out_of_range)?;
            }
        }
        if config.dir == Direction::Rtl {
            week.reverse();
        }
    }

    Ok(CalendarGrid { weeks })
}

impl CalendarGrid {
    pub fn weeks(&self) -> &[[NaiveDate; DAYS_PER_WEEK]; WEEKS_PER_GRID] {
        &self.weeks
    }

    /// All 42 cells in display order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Row and column of `date`, if the grid shows it.
    pub fn position(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|&d| d == date)
                .map(|col| (row, col))
        })
    }
}
