//! # Solar Info
//!
//! Approximate sunrise and sunset times of day for a location and calendar date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements the closed-form sunrise/sunset algorithm from the Almanac for
//! Computers (1990). It trades sub-minute accuracy for a cheap, allocation-free
//! computation that needs no ephemeris data, which suits applications that look up
//! sunrise and sunset once a day or on demand.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: stateless functions over `Copy` values
//! - Polar days and nights are detectable instead of silently clamped
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Accept any `chrono::Datelike` as the date and return `NaiveTime`s
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-info = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-info = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Time scale
//!
//! Times are **local mean solar time** relative to midnight of the calculation date.
//! They carry no timezone or daylight saving correction, and a value computed for one
//! date is never moved to a neighbouring date. [`TimeOfDay::to_universal`] converts a
//! result to universal time when needed.
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use solar_info::{almanac, time::CalendarDate};
//!
//! let date = CalendarDate::new(2023, 6, 21).unwrap();
//! let info = almanac::sunrise_sunset_checked(date, 51.5074, -0.1278).unwrap(); // London
//!
//! println!("Sunrise: {}", info.sunrise()); // 03:42:26 local mean time
//! println!("Sunset:  {}", info.sunset()); // 20:20:54 local mean time
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_info::{almanac, DaylightResult};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
//! let info = almanac::sunrise_sunset_for_date(date, 69.65, 18.96); // Tromsø
//!
//! match info.daylight() {
//!     Some(DaylightResult::RegularDay { sunrise, sunset }) => {
//!         println!("Sunrise: {:?}", sunrise.to_naive_time());
//!         println!("Sunset: {:?}", sunset.to_naive_time());
//!     }
//!     Some(DaylightResult::AllNight) => println!("Polar night"),
//!     Some(DaylightResult::AllDay) => println!("Midnight sun"),
//!     None => println!("Invalid coordinates"),
//! }
//! # }
//! ```
//!
//! ## Limitations
//!
//! - Accuracy is a few minutes; refraction is folded into a fixed 90.83° zenith.
//! - Only the standard sunrise/sunset horizon is supported, no twilight variants.
//! - Near the polar circles the two events may disagree about whether the sun crosses
//!   the horizon at all.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reproducible results in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::CalendarDate;
pub use crate::types::{DaylightResult, SolarInfo, TimeOfDay};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
