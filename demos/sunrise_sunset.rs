//! Sunrise/sunset for a set of cities, or for a location given on the command line.
//!
//! ```text
//! cargo run --example sunrise_sunset
//! cargo run --example sunrise_sunset -- 51.5074 -0.1278 2023-06-21
//! ```

use solar_info::{DaylightResult, almanac, time::CalendarDate};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn parse_date(text: &str) -> Result<CalendarDate, Box<dyn std::error::Error>> {
    let mut parts = text.split('-');
    let mut next = || parts.next().ok_or("expected YYYY-MM-DD");
    let year = next()?.parse()?;
    let month = next()?.parse()?;
    let day = next()?.parse()?;
    Ok(CalendarDate::new(year, month, day)?)
}

fn print_result(name: &str, latitude: f64, longitude: f64, date: CalendarDate) {
    println!("=== {name} ===");
    println!("Coordinates: {latitude:.4}°N, {longitude:.4}°E");
    println!(
        "Date: {}-{:02}-{:02} (day {} of the year)",
        date.year(),
        date.month(),
        date.day(),
        date.day_of_year()
    );

    let info = almanac::sunrise_sunset(date, latitude, longitude);
    match info.daylight() {
        Some(DaylightResult::RegularDay { sunrise, sunset }) => {
            println!("  Sunrise: {sunrise} LMT ({} UT)", sunrise.to_universal(longitude));
            println!("  Sunset:  {sunset} LMT ({} UT)", sunset.to_universal(longitude));
            if let Some(hours) = info.daylight_hours() {
                println!("  Daylight: {hours:.2} hours");
            }
        }
        Some(DaylightResult::AllDay) => println!("  Polar day - sun never sets"),
        Some(DaylightResult::AllNight) => println!("  Polar night - sun never rises"),
        None => println!("  Undefined for these coordinates"),
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() >= 2 {
        let latitude: f64 = args[0].parse()?;
        let longitude: f64 = args[1].parse()?;
        let date = match args.get(2) {
            Some(text) => parse_date(text)?,
            None => CalendarDate::new(2023, 6, 21)?,
        };

        // Reject out-of-range input before printing anything
        almanac::sunrise_sunset_checked(date, latitude, longitude)?;
        print_result("Command line location", latitude, longitude, date);
        return Ok(());
    }

    let cities = [
        City {
            name: "London, United Kingdom",
            latitude: 51.5074,
            longitude: -0.1278,
        },
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
    ];

    for date in [CalendarDate::new(2023, 6, 21)?, CalendarDate::new(2023, 12, 21)?] {
        for city in &cities {
            print_result(city.name, city.latitude, city.longitude, date);
        }
    }

    println!("Times are local mean solar time (no timezone or daylight saving correction).");
    Ok(())
}
