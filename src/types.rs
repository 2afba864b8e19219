//! Result types for sunrise/sunset calculations.

use crate::math::{floor, normalize_hours_0_to_24, round};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: u32 = 86_400_000;

/// Hours after midnight of the calculation date, in local mean solar time.
///
/// Wraps the raw fractional-hour value produced by the almanac algorithm. The raw value
/// may fall outside [0, 24) or be non-finite; the reported time of day is always taken
/// relative to the calculation date and never rolls over to a neighbouring date.
///
/// Local mean time is not clock time: it carries no timezone or daylight saving
/// correction. Use [`TimeOfDay::to_universal`] to obtain universal time.
///
/// # Example
/// ```
/// # use solar_info::TimeOfDay;
/// let evening = TimeOfDay::from_hours(-3.5); // 20:30 on the calculation date
/// assert_eq!(evening.hms(), Some((20, 30, 0)));
/// assert_eq!(evening.to_string(), "20:30:00");
///
/// let undefined = TimeOfDay::from_hours(f64::NAN);
/// assert_eq!(undefined.hms(), None);
/// assert_eq!(undefined.to_string(), "--:--:--");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Creates a `TimeOfDay` from raw hours after midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative, ≥ 24.0, or non-finite.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whether the value denotes an actual event (false at polar day/night).
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Gets the time of day in fractional hours, wrapped into [0, 24).
    ///
    /// Non-finite values stay non-finite.
    #[must_use]
    pub fn hours_of_day(&self) -> f64 {
        normalize_hours_0_to_24(self.0)
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// The day offset says on which neighbouring date the raw value would land; it is
    /// informational only. Non-finite values yield `(0, value)`.
    ///
    /// # Example
    /// ```
    /// # use solar_info::TimeOfDay;
    /// let (day_offset, hours) = TimeOfDay::from_hours(-3.5).day_and_hours();
    /// assert_eq!(day_offset, -1);
    /// assert!((hours - 20.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let day_offset_raw = floor(hours / 24.0);
        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalize_hours_0_to_24(hours))
    }

    /// Gets the time of day as milliseconds since midnight.
    ///
    /// The raw hours are added to midnight at millisecond resolution and the time of
    /// day of the resulting instant is returned. `None` if the value is non-finite.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn millis_of_day(&self) -> Option<u32> {
        if !self.is_finite() {
            return None;
        }
        let millis = round(self.hours_of_day() * MILLIS_PER_HOUR) as u32;
        Some(millis % MILLIS_PER_DAY)
    }

    /// Gets the time of day as `(hour, minute, second)`, truncated to whole seconds.
    ///
    /// `None` if the value is non-finite.
    #[must_use]
    pub fn hms(&self) -> Option<(u32, u32, u32)> {
        let millis = self.millis_of_day()?;
        let seconds = millis / 1000;
        Some((seconds / 3600, seconds / 60 % 60, seconds % 60))
    }

    /// Gets the time of day as a chrono `NaiveTime` (millisecond resolution).
    ///
    /// `None` if the value is non-finite.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_time(&self) -> Option<chrono::NaiveTime> {
        let millis = self.millis_of_day()?;
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            millis / 1000,
            millis % 1000 * 1_000_000,
        )
    }

    /// Converts local mean time to universal time for the given longitude.
    ///
    /// Subtracts the longitude hour offset (`longitude / 15`). The result is still
    /// relative to the calculation date and may fall outside [0, 24).
    ///
    /// # Example
    /// ```
    /// # use solar_info::TimeOfDay;
    /// // 06:00 local mean time at 30° East is 04:00 UT
    /// let universal = TimeOfDay::from_hours(6.0).to_universal(30.0);
    /// assert!((universal.hours() - 4.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn to_universal(&self, longitude: f64) -> Self {
        Self(self.0 - longitude / 15.0)
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.hms() {
            Some((hour, minute, second)) => write!(f, "{hour:02}:{minute:02}:{second:02}"),
            None => f.write_str("--:--:--"),
        }
    }
}

/// Sunrise and sunset for one location and calendar date.
///
/// Both times are local mean time relative to midnight of the calculation date. At
/// polar latitudes around the solstices one or both times are non-finite; the retained
/// hour-angle cosines tell whether the sun stays up or down, see [`SolarInfo::daylight`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarInfo {
    sunrise: TimeOfDay,
    sunset: TimeOfDay,
    sunrise_hour_angle_cos: f64,
    sunset_hour_angle_cos: f64,
}

impl SolarInfo {
    pub(crate) const fn new(
        sunrise: TimeOfDay,
        sunrise_hour_angle_cos: f64,
        sunset: TimeOfDay,
        sunset_hour_angle_cos: f64,
    ) -> Self {
        Self {
            sunrise,
            sunset,
            sunrise_hour_angle_cos,
            sunset_hour_angle_cos,
        }
    }

    /// Gets the sunrise time of day.
    #[must_use]
    pub const fn sunrise(&self) -> TimeOfDay {
        self.sunrise
    }

    /// Gets the sunset time of day.
    #[must_use]
    pub const fn sunset(&self) -> TimeOfDay {
        self.sunset
    }

    /// Cosine of the local hour angle computed for sunrise.
    ///
    /// Values outside [-1, 1] mean there is no sunrise on this date.
    #[must_use]
    pub const fn sunrise_hour_angle_cos(&self) -> f64 {
        self.sunrise_hour_angle_cos
    }

    /// Cosine of the local hour angle computed for sunset.
    ///
    /// Values outside [-1, 1] mean there is no sunset on this date.
    #[must_use]
    pub const fn sunset_hour_angle_cos(&self) -> f64 {
        self.sunset_hour_angle_cos
    }

    /// Whether both sunrise and sunset are finite.
    #[must_use]
    pub const fn has_sunrise_and_sunset(&self) -> bool {
        self.sunrise.is_finite() && self.sunset.is_finite()
    }

    /// Gets the hours between sunrise and sunset, wrapped into [0, 24).
    ///
    /// `None` if either event is missing.
    #[must_use]
    pub fn daylight_hours(&self) -> Option<f64> {
        if !self.has_sunrise_and_sunset() {
            return None;
        }
        Some(normalize_hours_0_to_24(
            self.sunset.hours_of_day() - self.sunrise.hours_of_day(),
        ))
    }

    /// Classifies the day as a regular day, polar day or polar night.
    ///
    /// A hour-angle cosine below -1 means the sun stays above the horizon, one above 1
    /// means it stays below. Returns `None` when the cosines are themselves undefined,
    /// which only happens for non-finite or out-of-range inputs.
    ///
    /// # Example
    /// ```
    /// # use solar_info::{almanac, time::CalendarDate, DaylightResult};
    /// let midsummer = CalendarDate::new(2023, 6, 21).unwrap();
    /// let tromso = almanac::sunrise_sunset(midsummer, 69.65, 18.96);
    /// assert_eq!(tromso.daylight(), Some(DaylightResult::AllDay));
    /// ```
    #[must_use]
    pub fn daylight(&self) -> Option<DaylightResult> {
        if self.has_sunrise_and_sunset() {
            return Some(DaylightResult::RegularDay {
                sunrise: self.sunrise,
                sunset: self.sunset,
            });
        }

        let hour_angle_cos = if self.sunrise.is_finite() {
            self.sunset_hour_angle_cos
        } else {
            self.sunrise_hour_angle_cos
        };

        if hour_angle_cos < -1.0 {
            Some(DaylightResult::AllDay)
        } else if hour_angle_cos > 1.0 {
            Some(DaylightResult::AllNight)
        } else {
            None
        }
    }
}

/// Classification of a calendar day at a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaylightResult {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: TimeOfDay,
        /// Time of sunset
        sunset: TimeOfDay,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay,
    /// Polar night - sun remains below the horizon all day
    AllNight,
}

impl DaylightResult {
    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<TimeOfDay> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    #[must_use]
    pub const fn sunset(&self) -> Option<TimeOfDay> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }
}
