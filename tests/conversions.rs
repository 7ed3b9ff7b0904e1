use nongli::chinese::{self, LunarDate, MAX_DAY_OFFSET, Month};
use nongli::{Date, LunarError};
use proptest::prelude::*;

#[test]
fn known_fixed_points() {
    let cases: &[((i32, i32, i32), (i32, Month, u32))] = &[
        ((1901, 1, 19), (1901, Month::Common(1), 1)),
        ((2024, 1, 10), (2024, Month::Common(1), 1)),
        ((1984, 1, 2), (1984, Month::Common(1), 1)),
        ((1995, 8, 25), (1995, Month::Leap(8), 1)),
        ((2057, 8, 28), (2057, Month::Common(9), 1)),
        ((2057, 9, 27), (2057, Month::Common(9), 30)),
    ];
    for &((y, m0, d), std) in cases {
        let date = chinese::days_to_lunar_date(chinese::day_offset(y, m0, d).unwrap()).unwrap();
        assert_eq!(
            std,
            (date.year(), date.month(), date.day()),
            "{y:04}-{:02}-{d:02}",
            m0 + 1
        );
    }
}

#[test]
fn decade_samples_round_trip() {
    let cases: &[(i32, (u32, u32, bool))] = &[
        (1905, (5, 13, false)),
        (1915, (5, 3, false)),
        (1925, (4, 25, true)),
        (1935, (5, 15, false)),
        (1945, (5, 6, false)),
        (1955, (4, 25, false)),
        (1965, (5, 16, false)),
        (1975, (5, 6, false)),
        (1985, (4, 27, false)),
        (1995, (5, 18, false)),
        (2005, (5, 9, false)),
        (2015, (4, 29, false)),
        (2025, (5, 20, false)),
        (2035, (5, 10, false)),
        (2045, (5, 1, false)),
        (2055, (5, 21, false)),
        (2065, (5, 12, false)),
        (2075, (5, 3, false)),
        (2085, (5, 24, false)),
        (2095, (5, 14, false)),
    ];
    for &(year, (month, day, leap)) in cases {
        let gregorian = Date::from_gregorian(year, 6, 15).unwrap();
        let lunar = LunarDate::from_date(gregorian).unwrap();
        assert_eq!(year, lunar.year());
        assert_eq!(
            (month, day, leap),
            (lunar.month().num(), lunar.day(), lunar.is_leap_month()),
            "{year}"
        );
        assert_eq!(gregorian, lunar.to_date(), "{year}");
    }
}

#[test]
fn range_bounds() {
    let first = LunarDate::from_date(Date::from_gregorian(1901, 1, 1).unwrap()).unwrap();
    assert!(first.is_before_table_origin());
    assert_eq!((1900, Month::Common(11), 11), (first.year(), first.month(), first.day()));

    let last = LunarDate::from_date(Date::from_gregorian(2100, 12, 31).unwrap()).unwrap();
    assert_eq!((2100, Month::Common(12), 1), (last.year(), last.month(), last.day()));

    assert_eq!(
        Err(LunarError::DayOffsetOutOfRange { days: -1 }),
        LunarDate::from_date(Date::from_gregorian(1900, 12, 31).unwrap())
    );
    assert_eq!(
        Err(LunarError::DayOffsetOutOfRange {
            days: MAX_DAY_OFFSET + 1
        }),
        LunarDate::from_date(Date::from_gregorian(2101, 1, 1).unwrap())
    );
}

#[test]
fn consecutive_days_advance_by_one() {
    let mut prev = chinese::days_to_lunar_date(0).unwrap();
    for days in 1..=MAX_DAY_OFFSET {
        let date = chinese::days_to_lunar_date(days).unwrap();
        if date.day() != 1 {
            assert_eq!(prev.month(), date.month(), "{days}");
            assert_eq!(prev.day() + 1, date.day(), "{days}");
        } else {
            assert!((29..=30).contains(&prev.day()), "{days}: {prev:?}");
        }
        prev = date;
    }
}

proptest! {
    #[test]
    fn gregorian_round_trip(days in 0..=MAX_DAY_OFFSET) {
        let gregorian = Date::from_jdn(chinese::EPOCH_JDN) + days;
        let lunar = LunarDate::from_date(gregorian).unwrap();
        prop_assert_eq!(gregorian, lunar.to_date());
        prop_assert_eq!(days, lunar.day_offset());
    }

    #[test]
    fn lunar_round_trip(days in 0..=MAX_DAY_OFFSET) {
        let lunar = chinese::days_to_lunar_date(days).unwrap();
        let rebuilt = LunarDate::new(lunar.year(), lunar.month(), lunar.day()).unwrap();
        prop_assert_eq!(lunar, rebuilt);
    }

    #[test]
    fn idempotent(days in 0..=MAX_DAY_OFFSET) {
        let (y, m, d) = (Date::from_jdn(chinese::EPOCH_JDN) + days).gregorian();
        let a = chinese::describe(y, m - 1, d).unwrap();
        let b = chinese::describe(y, m - 1, d).unwrap();
        prop_assert_eq!(a, b);
    }
}
