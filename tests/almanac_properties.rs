//! Behavioural properties of the almanac sunrise/sunset calculation.

use solar_info::{almanac, CalendarDate, DaylightResult, SolarInfo};

const LONDON: (f64, f64) = (51.5074, -0.1278);

/// Tolerance against almanac tables (the algorithm is good to a few minutes).
const ALMANAC_TOLERANCE_MINUTES: f64 = 5.0;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn minutes_of_day(hours: u32, minutes: u32) -> f64 {
    f64::from(hours * 60 + minutes)
}

fn assert_near_minutes(label: &str, actual_hours_of_day: f64, expected_minutes: f64) {
    let actual_minutes = actual_hours_of_day * 60.0;
    let diff = (actual_minutes - expected_minutes).abs();
    assert!(
        diff <= ALMANAC_TOLERANCE_MINUTES,
        "{label}: expected {expected_minutes} min after midnight, got {actual_minutes:.1} (diff {diff:.1})"
    );
}

fn sample_dates() -> impl Iterator<Item = CalendarDate> {
    (1..=12).flat_map(|month| [1, 15].map(move |day| date(2023, month, day)))
}

#[test]
fn london_summer_solstice_local_mean_time() {
    // Almanac (GMT): sunrise 03:43, sunset 20:21. Local mean time at -0.13° is
    // half a minute earlier; British Summer Time clocks show these plus one hour.
    let info = almanac::sunrise_sunset(date(2023, 6, 21), LONDON.0, LONDON.1);

    assert_near_minutes("sunrise", info.sunrise().hours_of_day(), minutes_of_day(3, 43));
    assert_near_minutes("sunset", info.sunset().hours_of_day(), minutes_of_day(20, 21));
    assert_eq!(info.sunrise().to_string(), "03:42:26");
    assert_eq!(info.sunset().to_string(), "20:20:54");
}

#[test]
fn london_winter_solstice_local_mean_time() {
    // Almanac (GMT): sunrise 08:04, sunset 15:53
    let info = almanac::sunrise_sunset(date(2023, 12, 21), LONDON.0, LONDON.1);

    assert_near_minutes("sunrise", info.sunrise().hours_of_day(), minutes_of_day(8, 4));
    assert_near_minutes("sunset", info.sunset().hours_of_day(), minutes_of_day(15, 53));
    assert_eq!(info.sunrise().to_string(), "08:03:08");
    assert_eq!(info.sunset().to_string(), "15:52:48");
}

#[test]
fn identical_inputs_give_identical_outputs() {
    for d in sample_dates() {
        let first = almanac::sunrise_sunset(d, 48.21, 16.37);
        let second = almanac::sunrise_sunset(d, 48.21, 16.37);
        assert_eq!(
            first.sunrise().hours().to_bits(),
            second.sunrise().hours().to_bits()
        );
        assert_eq!(
            first.sunset().hours().to_bits(),
            second.sunset().hours().to_bits()
        );
    }
}

#[test]
fn sunrise_precedes_sunset_away_from_poles() {
    for latitude in (-12..=12).map(|i| f64::from(i) * 5.0) {
        for longitude in [-170.0, -120.0, -75.0, -30.0, 0.0, 30.0, 75.0, 120.0, 165.0] {
            for d in sample_dates() {
                let info = almanac::sunrise_sunset(d, latitude, longitude);
                assert!(
                    info.sunrise().hours_of_day() < info.sunset().hours_of_day(),
                    "{d:?} at ({latitude}, {longitude}): sunrise {} not before sunset {}",
                    info.sunrise(),
                    info.sunset()
                );
            }
        }
    }
}

#[test]
fn longitude_shift_moves_universal_time_by_one_hour() {
    const TOLERANCE_HOURS: f64 = 2.0 / 60.0;

    for latitude in [-45.0, 0.0, 35.6762, 51.5074] {
        for longitude in [-165.0, -90.0, -0.1278, 45.0, 150.0] {
            for d in sample_dates() {
                let west = almanac::sunrise_sunset(d, latitude, longitude);
                let east = almanac::sunrise_sunset(d, latitude, longitude + 15.0);

                let sunrise_shift = east.sunrise().to_universal(longitude + 15.0).hours()
                    - west.sunrise().to_universal(longitude).hours();
                let sunset_shift = east.sunset().to_universal(longitude + 15.0).hours()
                    - west.sunset().to_universal(longitude).hours();

                assert!(
                    (sunrise_shift + 1.0).abs() < TOLERANCE_HOURS,
                    "sunrise shift {sunrise_shift} h at ({latitude}, {longitude}) on {d:?}"
                );
                assert!(
                    (sunset_shift + 1.0).abs() < TOLERANCE_HOURS,
                    "sunset shift {sunset_shift} h at ({latitude}, {longitude}) on {d:?}"
                );
            }
        }
    }
}

#[test]
fn local_mean_time_barely_depends_on_longitude() {
    let d = date(2023, 6, 21);
    let west = almanac::sunrise_sunset(d, LONDON.0, LONDON.1);
    let east = almanac::sunrise_sunset(d, LONDON.0, LONDON.1 + 15.0);

    // Longitude only moves the evaluation instant by an hour
    assert!((west.sunrise().hours() - east.sunrise().hours()).abs() < 1.0 / 60.0);
    assert!((west.sunset().hours() - east.sunset().hours()).abs() < 1.0 / 60.0);
}

#[test]
fn summer_days_are_longer_than_winter_days() {
    let summer = almanac::sunrise_sunset(date(2023, 6, 21), 51.5, 0.0);
    let winter = almanac::sunrise_sunset(date(2023, 12, 21), 51.5, 0.0);

    let summer_hours = summer.daylight_hours().unwrap();
    let winter_hours = winter.daylight_hours().unwrap();

    assert!((summer_hours - 16.64).abs() < 0.05, "summer {summer_hours}");
    assert!((winter_hours - 7.83).abs() < 0.05, "winter {winter_hours}");
    assert!(summer_hours - winter_hours > 8.0);

    // Seasons are reversed in the southern hemisphere
    let southern_june = almanac::sunrise_sunset(date(2023, 6, 21), -51.5, 0.0);
    assert!(southern_june.daylight_hours().unwrap() < winter_hours + 0.1);
}

#[test]
fn polar_solstices_are_detectable() {
    for latitude in [67.5, 70.0, 80.0, 89.0, -67.5, -70.0, -80.0, -89.0] {
        for d in [date(2023, 6, 21), date(2023, 12, 21)] {
            let info: SolarInfo = almanac::sunrise_sunset(d, latitude, 0.0);

            assert!(
                !info.sunrise().is_finite() && !info.sunset().is_finite(),
                "{d:?} at latitude {latitude} should have no sunrise/sunset, got {} / {}",
                info.sunrise(),
                info.sunset()
            );
            assert_eq!(info.sunrise().hms(), None);
            assert_eq!(info.daylight_hours(), None);

            let northern_summer = d.month() == 6;
            let expected = if (latitude > 0.0) == northern_summer {
                DaylightResult::AllDay
            } else {
                DaylightResult::AllNight
            };
            assert_eq!(info.daylight(), Some(expected));
        }
    }
}

#[test]
fn finite_times_only_inside_hour_angle_domain() {
    for latitude in (0..=250).map(|i| 60.0 + f64::from(i) * 0.1) {
        for d in [date(2023, 6, 21), date(2023, 12, 21), date(2024, 6, 20)] {
            let info = almanac::sunrise_sunset(d, latitude, 0.0);

            let sunrise_in_domain = (-1.0..=1.0).contains(&info.sunrise_hour_angle_cos());
            let sunset_in_domain = (-1.0..=1.0).contains(&info.sunset_hour_angle_cos());

            assert_eq!(info.sunrise().is_finite(), sunrise_in_domain);
            assert_eq!(info.sunset().is_finite(), sunset_in_domain);
        }
    }
}

#[test]
fn equator_has_roughly_twelve_hour_days() {
    for d in sample_dates() {
        let info = almanac::sunrise_sunset(d, 0.0, 0.0);
        let hours = info.daylight_hours().unwrap();
        assert!((hours - 12.1).abs() < 0.2, "{d:?}: {hours} h of daylight");
    }
}

#[test]
fn checked_entry_points_reject_invalid_input() {
    assert!(almanac::sunrise_sunset_checked(date(2023, 6, 21), 90.1, 0.0).is_err());
    assert!(almanac::sunrise_sunset_checked(date(2023, 6, 21), 0.0, f64::NAN).is_err());
    assert!(almanac::sunrise_sunset_ymd(2023, 6, 31, 0.0, 0.0).is_err());
    assert!(almanac::daylight(date(2023, 6, 21), -95.0, 0.0).is_err());
}
