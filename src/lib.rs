//! Conversion from Gregorian dates into the Chinese lunar calendar.
//!
//! This crate covers Gregorian 1901-01-01 through 2100-12-31 with
//! precomputed tables of lunar month lengths and leap months, so a
//! conversion is a table walk rather than an astronomical computation. On top
//! of the date itself it resolves lunar festivals, the 24 solar terms and the
//! sexagenary name of the year.
//!
//! Names are returned as indices (or enums with an `index()`); turning them
//! into text is left to the caller.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("2000-01-01", date.iso_gregorian());
//! ```
//!
//! Chinese lunar calendar (note the 0-based month):
//!
//! ```
//! use nongli::chinese::{self, Month::*};
//!
//! let days = chinese::day_offset(2024, 1, 10).unwrap();
//! let date = chinese::days_to_lunar_date(days).unwrap();
//!
//! assert_eq!((2024, Common(1), 1), (date.year(), date.month(), date.day()));
//! ```
//!
//! Everything about one day at once:
//!
//! ```
//! use nongli::chinese::{describe, SolarTerm};
//!
//! let info = describe(2024, 11, 21).unwrap();
//! assert_eq!(Some(SolarTerm::WinterSolstice), info.solar_term);
//! assert_eq!(23, SolarTerm::WinterSolstice.index());
//! ```
//!
//! # Diagnostics
//!
//! Out-of-range lookups are reported through [`tracing`] at `warn` level and
//! each resolved conversion at `trace` level. No subscriber is installed by
//! this crate.

pub mod chinese;
pub mod date;
pub mod error;

pub use chinese::LunarDate;
pub use date::{Date, YearType};
pub use error::LunarError;
