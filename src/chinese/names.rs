//! 年、月、日名的序號
//!
//! 文字表由調用方依語言自備，此處只給出序號。

use crate::error::LunarError;

/// 年的干支序號。`stem` 為天干（0 為甲），`branch` 為地支（0 為子），生肖與地支同序（0 為鼠）。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearName {
    pub stem: u32,
    pub branch: u32,
}

impl YearName {
    /// 生肖序號
    pub fn zodiac(&self) -> u32 {
        self.branch
    }
    /// 在六十甲子中的序號，1（甲子）到 60（癸亥）。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::lunar_year_name;
    ///
    /// assert_eq!(17, lunar_year_name(2000).cycle()); // 庚辰
    /// ```
    pub fn cycle(&self) -> u32 {
        (6 * self.stem as i32 - 5 * self.branch as i32).rem_euclid(60) as u32 + 1
    }
}

/// 取得農曆 `year` 年的干支序號。
///
/// # 用例
///
/// ```
/// use nongli::chinese::lunar_year_name;
///
/// let name = lunar_year_name(1984); // 甲子，鼠
/// assert_eq!((0, 0, 0), (name.stem, name.branch, name.zodiac()));
/// ```
pub fn lunar_year_name(year: i32) -> YearName {
    let num = year - 4;
    YearName {
        stem: num.rem_euclid(10) as u32,
        branch: num.rem_euclid(12) as u32,
    }
}

/// 取得月名序號，`1..=12` 分別為 `0..=11`。平閏同名。
pub fn month_name_index(month: u32) -> Result<usize, LunarError> {
    if (1..=12).contains(&month) {
        Ok(month as usize - 1)
    } else {
        Err(LunarError::InvalidMonth {
            month: month as i32,
        })
    }
}

/// 日名序號，分前後兩字。
///
/// `prefix` 為前字：0「初」、1「十」、2「廿」、3「三」、4「初」（初十）、5「二」（二十）；
/// `digit` 為後字，即日數個位，0 為「十」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayName {
    pub prefix: usize,
    pub digit: usize,
}

/// 取得日名序號。`day` 須在 `1..=30` 間，否則返回 [`LunarError::InvalidDay`]（不涉具體月份，`month` 記為 0）。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{DayName, day_name};
///
/// assert_eq!(Ok(DayName { prefix: 2, digit: 5 }), day_name(25)); // 廿五
/// assert_eq!(Ok(DayName { prefix: 4, digit: 0 }), day_name(10)); // 初十
/// ```
pub fn day_name(day: u32) -> Result<DayName, LunarError> {
    let prefix = match day {
        10 => 4,
        20 => 5,
        1..=30 => day as usize / 10,
        _ => {
            return Err(LunarError::InvalidDay {
                day: day as i32,
                month: 0,
                max_day: 30,
            });
        }
    };
    Ok(DayName {
        prefix,
        digit: day as usize % 10,
    })
}
