//! Calendar months and reporting windows.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RevenueError;

/// Upper bound on either side of a reporting window, in months.
pub const MAX_WINDOW_MONTHS: i32 = 120;

/// One calendar month as an inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarMonth {
    /// Returns the month containing `date`.
    ///
    /// `None` only for the last month chrono can represent, whose end
    /// cannot be computed.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let start = date - Duration::days(i64::from(date.day0()));
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { start, end })
    }

    /// Returns the month for a year and 1-based month number.
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        Self::containing(NaiveDate::from_ymd_opt(year, month, 1)?)
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Number of days in the month.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the month `offset` months away; negative offsets go back.
    pub fn offset(&self, offset: i32) -> Option<Self> {
        let shifted = if offset >= 0 {
            self.start.checked_add_months(Months::new(offset.unsigned_abs()))?
        } else {
            self.start.checked_sub_months(Months::new(offset.unsigned_abs()))?
        };
        Self::containing(shifted)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Builds the chronological list of months around `reference`.
///
/// The result holds `months_before` months before the reference month, the
/// reference month itself, and `months_after` months after it. Negative
/// bounds and bounds above [`MAX_WINDOW_MONTHS`] are rejected, never clamped.
pub fn month_window(
    reference: NaiveDate,
    months_before: i32,
    months_after: i32,
) -> Result<Vec<CalendarMonth>, RevenueError> {
    for (field, value) in [("months_before", months_before), ("months_after", months_after)] {
        if value < 0 {
            return Err(RevenueError::invalid_window(field, value));
        }
        if value > MAX_WINDOW_MONTHS {
            return Err(RevenueError::WindowTooWide {
                field,
                value,
                max: MAX_WINDOW_MONTHS,
            });
        }
    }

    let out_of_range = || RevenueError::WindowOutOfRange { reference };
    let anchor = CalendarMonth::containing(reference).ok_or_else(out_of_range)?;

    (-months_before..=months_after)
        .map(|offset| anchor.offset(offset).ok_or_else(out_of_range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn containing_spans_whole_month() {
        let month = CalendarMonth::containing(date(2024, 1, 15)).unwrap();
        assert_eq!(month.start(), date(2024, 1, 1));
        assert_eq!(month.end(), date(2024, 1, 31));
        assert_eq!(month.days(), 31);
    }

    #[test]
    fn february_handles_leap_years() {
        assert_eq!(CalendarMonth::from_year_month(2024, 2).unwrap().days(), 29);
        assert_eq!(CalendarMonth::from_year_month(2023, 2).unwrap().days(), 28);
        assert_eq!(CalendarMonth::from_year_month(1900, 2).unwrap().days(), 28);
        assert_eq!(CalendarMonth::from_year_month(2000, 2).unwrap().days(), 29);
    }

    #[test]
    fn december_ends_on_the_31st() {
        let month = CalendarMonth::containing(date(2023, 12, 31)).unwrap();
        assert_eq!(month.end(), date(2023, 12, 31));
        assert_eq!(month.offset(1).unwrap().start(), date(2024, 1, 1));
    }

    #[test]
    fn displays_as_year_month() {
        let month = CalendarMonth::from_year_month(2024, 3).unwrap();
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn window_has_expected_length_and_order() {
        let months = month_window(date(2024, 6, 15), 5, 6).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].to_string(), "2024-01");
        assert_eq!(months[5].to_string(), "2024-06");
        assert_eq!(months[11].to_string(), "2024-12");
        assert!(months.windows(2).all(|pair| pair[0].end().succ_opt() == Some(pair[1].start())));
    }

    #[test]
    fn window_crosses_year_boundaries() {
        let months = month_window(date(2024, 1, 31), 6, 6).unwrap();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0].to_string(), "2023-07");
        assert_eq!(months[6].to_string(), "2024-01");
        assert_eq!(months[12].to_string(), "2024-07");
    }

    #[test]
    fn zero_sized_window_is_just_the_reference_month() {
        let months = month_window(date(2024, 2, 29), 0, 0).unwrap();
        assert_eq!(months, vec![CalendarMonth::from_year_month(2024, 2).unwrap()]);
    }

    #[test]
    fn window_is_idempotent() {
        let reference = date(2024, 5, 31);
        assert_eq!(month_window(reference, 6, 6), month_window(reference, 6, 6));
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert_eq!(
            month_window(date(2024, 1, 1), -1, 6),
            Err(RevenueError::invalid_window("months_before", -1))
        );
        assert_eq!(
            month_window(date(2024, 1, 1), 5, -3),
            Err(RevenueError::invalid_window("months_after", -3))
        );
    }

    #[test]
    fn oversized_bounds_are_rejected() {
        assert_eq!(
            month_window(date(2024, 1, 1), 0, 2_000_000),
            Err(RevenueError::WindowTooWide {
                field: "months_after",
                value: 2_000_000,
                max: MAX_WINDOW_MONTHS,
            })
        );
        assert!(matches!(
            month_window(date(2024, 1, 1), MAX_WINDOW_MONTHS + 1, 0),
            Err(RevenueError::WindowTooWide {
                field: "months_before",
                ..
            })
        ));
        assert_eq!(
            month_window(date(2024, 1, 1), MAX_WINDOW_MONTHS, MAX_WINDOW_MONTHS)
                .unwrap()
                .len(),
            241
        );
    }

    #[test]
    fn window_past_calendar_limit_is_rejected() {
        let result = month_window(NaiveDate::MAX, 0, 1);
        assert_eq!(
            result,
            Err(RevenueError::WindowOutOfRange {
                reference: NaiveDate::MAX
            })
        );
    }
}
