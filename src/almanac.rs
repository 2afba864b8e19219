//! Almanac sunrise/sunset algorithm implementation.
//!
//! This follows the sunrise/sunset algorithm published in the Almanac for Computers
//! (Nautical Almanac Office, United States Naval Observatory, 1990): a closed-form
//! approximation of the sun's position evaluated once for an approximate sunrise time
//! and once for an approximate sunset time.
//!
//! Accuracy is in the order of a few minutes for non-polar latitudes. Results are
//! local mean solar time, relative to midnight of the calculation date, with no
//! timezone or daylight saving correction. At polar latitudes around the solstices the
//! local hour angle is undefined and the affected times are NaN.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, sin, tan,
};
use crate::time::CalendarDate;
use crate::types::TimeOfDay;
use crate::{DaylightResult, Error, Result, SolarInfo};
#[cfg(feature = "chrono")]
use chrono::Datelike;
use log::{debug, trace};

/// Zenith angle of the sun at sunrise/sunset in degrees (refraction and solar radius).
const ZENITH: f64 = 90.83;

/// Sun's mean anomaly: degrees per day and offset.
const MEAN_ANOMALY_RATE: f64 = 0.9856;
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Sun's true longitude: longitude of perihelion and equation of center terms.
const PERIHELION_LONGITUDE: f64 = 282.634;
const CENTER_FIRST_TERM: f64 = 1.916;
const CENTER_SECOND_TERM: f64 = 0.020;

/// cos(ε) and sin(ε) of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;
const SIN_OBLIQUITY: f64 = 0.39782;

/// Local mean time: sidereal drift in hours per day and offset in hours.
const SIDEREAL_DRIFT: f64 = 0.06571;
const MEAN_TIME_OFFSET: f64 = 6.622;

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Rough local time of the event used to evaluate the sun's position.
    const fn approximate_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }

    /// Local hour angle in degrees for a given hour-angle cosine.
    fn local_hour_angle(self, hour_angle_cos: f64) -> f64 {
        let hour_angle = radians_to_degrees(acos(hour_angle_cos));
        match self {
            Self::Sunrise => 360.0 - hour_angle,
            Self::Sunset => hour_angle,
        }
    }
}

/// Outcome of a single event computation.
#[derive(Debug, Clone, Copy)]
struct EventTime {
    time: TimeOfDay,
    hour_angle_cos: f64,
}

/// Calculate sunrise and sunset for a location and calendar date.
///
/// Coordinates are not validated: out-of-range values give meaningless results and
/// non-finite values propagate. Where the sun does not rise or set on the given date,
/// the affected time is NaN; see [`SolarInfo::daylight`] to classify such days.
///
/// # Arguments
/// * `date` - Calendar date; only its day of the year is used
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Sunrise and sunset as local mean time relative to midnight of `date`
///
/// # Example
/// ```
/// use solar_info::{almanac, time::CalendarDate};
///
/// let date = CalendarDate::new(2023, 6, 21).unwrap();
/// let info = almanac::sunrise_sunset(date, 51.5074, -0.1278); // London
///
/// assert_eq!(info.sunrise().to_string(), "03:42:26");
/// assert_eq!(info.sunset().to_string(), "20:20:54");
/// ```
#[must_use]
pub fn sunrise_sunset(date: CalendarDate, latitude: f64, longitude: f64) -> SolarInfo {
    let sunrise = calculate(date, latitude, longitude, SolarEvent::Sunrise);
    let sunset = calculate(date, latitude, longitude, SolarEvent::Sunset);

    SolarInfo::new(
        sunrise.time,
        sunrise.hour_angle_cos,
        sunset.time,
        sunset.hour_angle_cos,
    )
}

/// Calculate sunrise and sunset after validating the coordinates.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°,
/// or non-finite values)
pub fn sunrise_sunset_checked(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
) -> Result<SolarInfo> {
    check_coordinates(latitude, longitude)?;
    Ok(sunrise_sunset(date, latitude, longitude))
}

/// Calculate sunrise and sunset from numeric date components.
///
/// # Arguments
/// * `year` - Year (proleptic Gregorian)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates or date components
///
/// # Example
/// ```
/// use solar_info::almanac;
///
/// let info = almanac::sunrise_sunset_ymd(2023, 12, 21, 51.5074, -0.1278).unwrap();
/// assert_eq!(info.sunrise().hms(), Some((8, 3, 8)));
///
/// assert!(almanac::sunrise_sunset_ymd(2023, 2, 29, 51.5074, -0.1278).is_err());
/// ```
pub fn sunrise_sunset_ymd(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<SolarInfo> {
    check_coordinates(latitude, longitude)?;
    let date = CalendarDate::new(year, month, day)?;
    Ok(sunrise_sunset(date, latitude, longitude))
}

/// Calculate sunrise and sunset for the calendar date of any chrono date-like value.
///
/// The value's own calendar date is used: for a `DateTime<Tz>` that is the local date
/// in `Tz`. The time-of-day part of the value is ignored. Coordinates are not
/// validated, as in [`sunrise_sunset`].
///
/// # Example
/// ```rust
/// use solar_info::almanac;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
/// let info = almanac::sunrise_sunset_for_date(date, 51.5074, -0.1278);
/// assert!(info.sunrise().hours() < info.sunset().hours_of_day());
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise_sunset_for_date<D: Datelike>(date: D, latitude: f64, longitude: f64) -> SolarInfo {
    sunrise_sunset(CalendarDate::from_date_like(date), latitude, longitude)
}

/// Classify a calendar day at a location as regular day, polar day or polar night.
///
/// # Errors
/// Returns error for invalid coordinates; `ComputationError` if the hour angle is
/// undefined for another reason.
///
/// # Example
/// ```
/// use solar_info::{almanac, time::CalendarDate, DaylightResult};
///
/// let date = CalendarDate::new(2023, 12, 21).unwrap();
/// let result = almanac::daylight(date, 78.22, 15.65).unwrap(); // Longyearbyen
/// assert_eq!(result, DaylightResult::AllNight);
/// ```
pub fn daylight(date: CalendarDate, latitude: f64, longitude: f64) -> Result<DaylightResult> {
    sunrise_sunset_checked(date, latitude, longitude)?
        .daylight()
        .ok_or(Error::computation_error("local hour angle is undefined"))
}

/// Computes one horizon crossing as fractional hours of local mean time.
fn calculate(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
) -> EventTime {
    let day = f64::from(date.day_of_year());

    // Longitude hour value and approximate time of the event in days
    let longitude_hours = longitude / 15.0;
    let t = day + (event.approximate_hour() - longitude_hours) / 24.0;

    let mean_anomaly = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let mean_anomaly_rad = degrees_to_radians(mean_anomaly);

    let true_longitude = normalize_degrees_0_to_360(
        mean_anomaly
            + PERIHELION_LONGITUDE
            + CENTER_FIRST_TERM * sin(mean_anomaly_rad)
            + CENTER_SECOND_TERM * sin(2.0 * mean_anomaly_rad),
    );
    let true_longitude_rad = degrees_to_radians(true_longitude);

    // Right ascension must lie in the same quadrant as the true longitude
    let mut right_ascension = normalize_degrees_0_to_360(radians_to_degrees(atan(
        COS_OBLIQUITY * tan(true_longitude_rad),
    )));
    right_ascension +=
        floor(true_longitude / 90.0) * 90.0 - floor(right_ascension / 90.0) * 90.0;
    let right_ascension_hours = right_ascension / 15.0;

    let sin_declination = SIN_OBLIQUITY * sin(true_longitude_rad);
    let cos_declination = cos(asin(sin_declination));

    let latitude_rad = degrees_to_radians(latitude);
    let hour_angle_cos = (cos(degrees_to_radians(ZENITH))
        - sin_declination * sin(latitude_rad))
        / (cos_declination * cos(latitude_rad));

    if !(-1.0..=1.0).contains(&hour_angle_cos) {
        debug!(
            "no {event:?} on day {day} at latitude {latitude}: hour angle cosine {hour_angle_cos}"
        );
    }

    let local_hours = event.local_hour_angle(hour_angle_cos) / 15.0;
    let mean_time = local_hours + right_ascension_hours - SIDEREAL_DRIFT * t - MEAN_TIME_OFFSET;

    trace!(
        "{event:?}: t={t} M={mean_anomaly} L={true_longitude} RA={right_ascension_hours}h \
         cosH={hour_angle_cos} T={mean_time}h"
    );

    EventTime {
        time: TimeOfDay::from_hours(mean_time),
        hour_angle_cos,
    }
}
