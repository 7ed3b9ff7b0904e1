//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊依預製的 1901–2100 年月份表換算農曆，見 [`tables`]。換算以距 1901 年 1 月 1 日的日數為中介：
//! [`day_offset`] 將公曆日期轉為日數，[`days_to_lunar_date`] 再將日數轉為農曆日期。
//! 節日、節氣及干支等只給出序號，文字由調用方自備。

use tracing::{trace, warn};

use crate::date::Date;
use crate::error::LunarError;

pub mod annotation;
pub mod festival;
pub mod names;
pub mod solar_term;
pub mod tables;

pub use annotation::{Annotation, DayInfo, describe};
pub use festival::{Festival, lunar_festival};
pub use names::{DayName, YearName, day_name, lunar_year_name, month_name_index};
pub use solar_term::{SolarTerm, solar_term};
pub use tables::{
    FIRST_YEAR, LAST_YEAR, LunarYear, MonthDays, days_in_lunar_month, days_in_lunar_year,
    leap_month_in_year,
};

/// 日數起點 1901 年 1 月 1 日的儒略日數
pub const EPOCH_JDN: u32 = 2415386;
/// 所支持的最大日數，即 2100 年 12 月 31 日
pub const MAX_DAY_OFFSET: i32 = 73048;

const EPOCH: Date = Date::from_jdn(EPOCH_JDN);
/// 1901 年正月初一（公曆 1901 年 2 月 19 日）的日數
const NEW_YEAR_OFFSET: i32 = 49;
/// 自 1901 年正月初一至 2009 年正月初一的日數
const FAST_FORWARD_DAYS: u32 = 39423;
const FAST_FORWARD_YEAR: i32 = 2009;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// 農曆日期
///
/// 由 [`days_to_lunar_date`] 換算而得，或由 [`LunarDate::new`] 依月份表校驗後構造。
///
/// 公曆 1901 年 2 月 19 日（1901 年正月初一）之前的日期不在表內，以固定規則推為 1900 年冬月或臘月，
/// 並以 [`LunarDate::is_before_table_origin`] 標記。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let date = LunarDate::from_date(Date::from_gregorian(2017, 7, 23).unwrap()).unwrap();
///
/// assert_eq!((2017, Leap(6), 1), (date.year(), date.month(), date.day()));
/// assert!(date.is_leap_month());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
    before_table_origin: bool,
}

impl LunarDate {
    /// 構造農曆日期，並依月份表校驗。
    ///
    /// 1900 年僅接受表前的冬月十一至廿九及臘月；其餘月份為 [`LunarError::InvalidMonth`]，
    /// 冬月初十及以前亦為 [`LunarError::InvalidDay`]（錯誤中 `max_day` 仍為廿九）。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarError;
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// assert!(LunarDate::new(2023, Leap(2), 29).is_ok());
    /// assert_eq!(
    ///     Err(LunarError::NoSuchLeapMonth { year: 2024, month: 2 }),
    ///     LunarDate::new(2024, Leap(2), 1)
    /// );
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, LunarError> {
        use Month::*;
        let num = month.num();
        if !(1..=12).contains(&num) {
            return Err(LunarError::InvalidMonth { month: num as i32 });
        }
        if year == FIRST_YEAR - 1 {
            let (first_day, max_day) = match month {
                Common(11) => (11, 29),
                Common(12) => (1, 30),
                Leap(_) => return Err(LunarError::NoSuchLeapMonth { year, month: num }),
                Common(_) => return Err(LunarError::InvalidMonth { month: num as i32 }),
            };
            if day < first_day {
                return Err(LunarError::InvalidDay {
                    day: day as i32,
                    month: num as i32,
                    max_day: max_day as i32,
                });
            }
            check_day(day, num, max_day)?;
            return Ok(Self {
                year,
                month,
                day,
                before_table_origin: true,
            });
        }

        let table = LunarYear::get(year).ok_or(LunarError::InvalidYear { year })?;
        let max_day = table
            .months()
            .find(|(m, _)| *m == month)
            .map(|(_, d)| d)
            .ok_or(LunarError::NoSuchLeapMonth { year, month: num })?;
        check_day(day, num, max_day)?;
        Ok(Self {
            year,
            month,
            day,
            before_table_origin: false,
        })
    }

    /// 依公曆日期換算。
    pub fn from_date(date: Date) -> Result<Self, LunarError> {
        days_to_lunar_date(date - EPOCH)
    }

    /// 年份（正月起算）
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 月名
    pub fn month(&self) -> Month {
        self.month
    }
    /// 日，`1..=30`
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否為閏月
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// 是否為表前（1901 年正月初一以前）以固定規則推得的日期
    pub fn is_before_table_origin(&self) -> bool {
        self.before_table_origin
    }

    /// 距 1901 年 1 月 1 日的日數，為 [`days_to_lunar_date`] 的逆運算。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{self, LunarDate, Month::*};
    ///
    /// let date = LunarDate::new(2024, Common(1), 1).unwrap();
    /// assert_eq!(chinese::day_offset(2024, 1, 10), Ok(date.day_offset()));
    /// ```
    pub fn day_offset(&self) -> i32 {
        if self.before_table_origin {
            return match self.month.num() {
                11 => self.day as i32 - 11,
                _ => self.day as i32 + 18,
            };
        }
        let years: u32 = (FIRST_YEAR..self.year)
            .filter_map(LunarYear::get)
            .map(|y| y.days())
            .sum();
        let months: u32 = LunarYear::get(self.year)
            .into_iter()
            .flat_map(|y| y.months())
            .take_while(|(m, _)| *m != self.month)
            .map(|(_, d)| d)
            .sum();
        NEW_YEAR_OFFSET + (years + months + self.day - 1) as i32
    }

    /// 對應的公曆日期
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = LunarDate::new(2033, Leap(11), 1).unwrap();
    /// assert_eq!("2033-12-22", date.to_date().iso_gregorian());
    /// ```
    pub fn to_date(&self) -> Date {
        EPOCH + self.day_offset()
    }

    /// 該年干支序號
    pub fn year_name(&self) -> YearName {
        lunar_year_name(self.year)
    }

    /// 當日節日
    pub fn festival(&self) -> Option<Festival> {
        lunar_festival(self.month.num(), self.day, self.day_offset())
    }
}

fn check_day(day: u32, month: u32, max_day: u32) -> Result<(), LunarError> {
    if (1..=max_day).contains(&day) {
        Ok(())
    } else {
        Err(LunarError::InvalidDay {
            day: day as i32,
            month: month as i32,
            max_day: max_day as i32,
        })
    }
}

/// 取得公曆日期距 1901 年 1 月 1 日的日數。`month0` 自 0 起算（0 為一月）。
///
/// 年份須在 1901–2100 間，否則返回 [`LunarError::InvalidYear`]；月、日無效亦回報錯誤。
///
/// # 用例
///
/// ```
/// use nongli::chinese::day_offset;
///
/// assert_eq!(Ok(0), day_offset(1901, 0, 1));
/// assert_eq!(Ok(49), day_offset(1901, 1, 19));
/// assert!(day_offset(2101, 0, 1).is_err());
/// ```
pub fn day_offset(year: i32, month0: i32, day: i32) -> Result<i32, LunarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        warn!(year, "gregorian year outside the supported range");
        return Err(LunarError::InvalidYear { year });
    }
    if !(0..12).contains(&month0) {
        return Err(LunarError::InvalidMonth { month: month0 });
    }
    let date = Date::from_gregorian(year, month0 + 1, day)?;
    Ok(date - EPOCH)
}

/// 將距 1901 年 1 月 1 日的日數換算為農曆日期。
///
/// 日數須在 `0..=MAX_DAY_OFFSET` 間。前 49 日在表前，推為 1900 年冬月、臘月。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{day_offset, days_to_lunar_date, Month::*};
///
/// let date = days_to_lunar_date(day_offset(2000, 0, 1).unwrap()).unwrap();
/// assert_eq!((1999, Common(11), 25), (date.year(), date.month(), date.day()));
/// ```
pub fn days_to_lunar_date(days: i32) -> Result<LunarDate, LunarError> {
    if !(0..=MAX_DAY_OFFSET).contains(&days) {
        warn!(days, "day offset outside the supported range");
        return Err(LunarError::DayOffsetOutOfRange { days });
    }
    let date = if days < NEW_YEAR_OFFSET {
        before_table_origin(days)
    } else {
        let remaining = (days - NEW_YEAR_OFFSET) as u32;
        let (year, remaining) = if remaining > FAST_FORWARD_DAYS {
            (FAST_FORWARD_YEAR, remaining - FAST_FORWARD_DAYS)
        } else {
            (FIRST_YEAR, remaining)
        };
        resolve(year, remaining).ok_or(LunarError::DayOffsetOutOfRange { days })?
    };
    trace!(
        days,
        year = date.year,
        month = ?date.month,
        day = date.day,
        "resolved lunar date"
    );
    Ok(date)
}

fn before_table_origin(days: i32) -> LunarDate {
    let (month, day) = if days < 19 {
        (11, 11 + days)
    } else {
        (12, days - 18)
    };
    LunarDate {
        year: FIRST_YEAR - 1,
        month: Month::Common(month),
        day: day as u32,
        before_table_origin: true,
    }
}

/// 自 `year` 年正月初一起，過 `remaining` 日所到的日期。
fn resolve(year: i32, mut remaining: u32) -> Option<LunarDate> {
    let mut table = LunarYear::get(year)?;
    while remaining >= table.days() {
        remaining -= table.days();
        table = LunarYear::get(table.year + 1)?;
    }

    let at = |month, remaining: u32| LunarDate {
        year: table.year,
        month,
        day: remaining + 1,
        before_table_origin: false,
    };
    let mut month = 1;
    loop {
        let days = table.days_in_month(month)?;
        if remaining < days.days {
            return Some(at(Month::Common(month), remaining));
        }
        remaining -= days.days;
        if remaining < days.leap_days {
            return Some(at(Month::Leap(month), remaining));
        }
        remaining -= days.leap_days;
        month += 1;
    }
}
