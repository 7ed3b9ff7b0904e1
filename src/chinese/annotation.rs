//! 逐日農曆信息，供月曆格子標注

use super::{
    Festival, LunarDate, Month, SolarTerm, YearName, day_offset, days_to_lunar_date,
    lunar_festival, lunar_year_name, solar_term,
};
use crate::error::LunarError;

/// 某公曆日的農曆信息
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayInfo {
    pub date: LunarDate,
    pub year_name: YearName,
    pub festival: Option<Festival>,
    pub solar_term: Option<SolarTerm>,
}

/// 月曆格子中唯一的標注
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Annotation {
    Festival(Festival),
    SolarTerm(SolarTerm),
    /// 月首，標月名
    MonthStart(Month),
    /// 其餘日子，標日名
    Day(u32),
}

impl DayInfo {
    /// 依節日、節氣、月首、日名的先後選出一個標注。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{describe, Annotation, Month::*, SolarTerm};
    ///
    /// let annotation = |m0, d| describe(2024, m0, d).unwrap().annotation();
    /// assert_eq!(Annotation::SolarTerm(SolarTerm::WinterSolstice), annotation(11, 21));
    /// assert_eq!(Annotation::MonthStart(Common(1)), annotation(1, 10));
    /// assert_eq!(Annotation::Day(2), annotation(1, 11));
    /// ```
    pub fn annotation(&self) -> Annotation {
        if let Some(festival) = self.festival {
            Annotation::Festival(festival)
        } else if let Some(term) = self.solar_term {
            Annotation::SolarTerm(term)
        } else if self.date.day() == 1 {
            Annotation::MonthStart(self.date.month())
        } else {
            Annotation::Day(self.date.day())
        }
    }
}

/// 取得公曆 `year` 年 `month0` 月 `day` 日的農曆信息。`month0` 自 0 起算。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{describe, Festival, Month::*};
///
/// let info = describe(2024, 1, 9).unwrap();
/// assert_eq!((2023, Common(12), 30), (info.date.year(), info.date.month(), info.date.day()));
/// assert_eq!(Some(Festival::NewYearsEve), info.festival);
/// assert_eq!(3, info.year_name.zodiac()); // 兔
/// ```
#[tracing::instrument(level = "trace")]
pub fn describe(year: i32, month0: i32, day: i32) -> Result<DayInfo, LunarError> {
    let days = day_offset(year, month0, day)?;
    let date = days_to_lunar_date(days)?;
    Ok(DayInfo {
        date,
        year_name: lunar_year_name(date.year()),
        festival: lunar_festival(date.month().num(), date.day(), days),
        solar_term: solar_term(year, month0, day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority() {
        for ((y, m0, d), std) in [
            ((2024, 1, 9), Annotation::Festival(Festival::NewYearsEve)),
            ((2024, 1, 4), Annotation::SolarTerm(SolarTerm::StartOfSpring)),
            ((2024, 1, 10), Annotation::MonthStart(Month::Common(1))),
            ((2023, 2, 22), Annotation::MonthStart(Month::Leap(2))),
            ((1901, 0, 20), Annotation::MonthStart(Month::Common(12))),
            ((2024, 1, 12), Annotation::Day(3)),
        ] {
            assert_eq!(
                std,
                describe(y, m0, d).unwrap().annotation(),
                "{y}-{}-{d}",
                m0 + 1
            );
        }
    }

    #[test]
    fn year_name_follows_lunar_year() {
        // 2024-02-09 仍屬癸卯年
        assert_eq!(lunar_year_name(2023), describe(2024, 1, 9).unwrap().year_name);
        assert_eq!(lunar_year_name(2024), describe(2024, 1, 10).unwrap().year_name);
    }

    #[test]
    fn errors() {
        assert_eq!(
            Err(LunarError::InvalidYear { year: 2101 }),
            describe(2101, 0, 1)
        );
        assert_eq!(
            Err(LunarError::InvalidMonth { month: 12 }),
            describe(2024, 12, 1)
        );
    }
}
