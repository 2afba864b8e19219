//! Calendar date handling for the almanac calculations.
//!
//! The sunrise/sunset algorithm only needs the ordinal day of the year, so a date is
//! kept as plain proleptic Gregorian year/month/day components.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Days preceding the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar date in the proleptic Gregorian calendar.
///
/// Carries no time of day and no timezone: sunrise and sunset are computed for the
/// calendar day itself.
///
/// # Example
/// ```
/// # use solar_info::time::CalendarDate;
/// let date = CalendarDate::new(2024, 3, 1).unwrap();
/// assert_eq!(date.day_of_year(), 61); // 2024 is a leap year
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from its components.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian, may be zero or negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-28/29/30/31 depending on month and year)
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in
    /// that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 {
            return Err(Error::invalid_date("day must be at least 1"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from any chrono date-like value.
    ///
    /// The value's own calendar fields are used, so a `DateTime<Tz>` contributes its
    /// local date in `Tz`, not the UTC date.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the ordinal day of the year (1 for January 1st, up to 366 in leap years).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_day
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::from_date_like(date)
    }
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
