//! Error types.

/// Error type for all fallible operations in this crate.
///
/// Out-of-range input is the only failure mode: the conversion tables cover
/// Gregorian 1901 through 2100, and months and days are checked against the
/// calendar they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// The year is outside the range covered by the tables.
    #[error("invalid year: {year} (must be 1901..=2100)")]
    InvalidYear { year: i32 },

    /// The month is outside the valid range for its calendar.
    #[error("invalid month: {month}")]
    InvalidMonth { month: i32 },

    /// The day exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: i32, month: i32, max_day: i32 },

    /// A leap month was requested for a lunar year that does not have it.
    #[error("lunar year {year} has no leap month {month}")]
    NoSuchLeapMonth { year: i32, month: u32 },

    /// The day offset from 1901-01-01 is not covered by the tables.
    #[error("day offset {days} outside the supported range")]
    DayOffsetOutOfRange { days: i32 },
}
