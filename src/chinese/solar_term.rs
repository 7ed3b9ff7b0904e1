//! 二十四節氣
//!
//! 以平氣法近似：自 1900 年小寒（1900-01-06T02:05Z）起，每年加一回歸年，再加各節氣的固定分鐘偏移。
//! 精度在一日左右，僅供標注。

use tracing::warn;

use super::{FIRST_YEAR, LAST_YEAR};
use crate::date::Date;

/// 1900 年小寒時刻，Unix 毫秒
const ANCHOR_UNIX_MILLIS: i64 = -2_208_549_300_000;
/// 回歸年長度，毫秒
const TROPICAL_YEAR_MILLIS: f64 = 31_556_925_974.7;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// 各節氣距當年小寒的分鐘數
const OFFSET_MINUTES: [i64; 24] = [
    0, 21208, 42467, 63836, 85337, 107014, 128867, 150921, 173149, 195551, 218072, 240693, 263343,
    285989, 308563, 331033, 353350, 375494, 397447, 419210, 440795, 462224, 483532, 504758,
];

/// 節氣，自小寒起依序號排列，每公曆月兩個：第 `m` 月（自 0 起）為 `2m`、`2m + 1`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolarTerm {
    /// 小寒
    MinorCold,
    /// 大寒
    MajorCold,
    /// 立春
    StartOfSpring,
    /// 雨水
    RainWater,
    /// 驚蟄
    AwakeningOfInsects,
    /// 春分
    SpringEquinox,
    /// 清明
    PureBrightness,
    /// 穀雨
    GrainRain,
    /// 立夏
    StartOfSummer,
    /// 小滿
    GrainBuds,
    /// 芒種
    GrainInEar,
    /// 夏至
    SummerSolstice,
    /// 小暑
    MinorHeat,
    /// 大暑
    MajorHeat,
    /// 立秋
    StartOfAutumn,
    /// 處暑
    EndOfHeat,
    /// 白露
    WhiteDew,
    /// 秋分
    AutumnEquinox,
    /// 寒露
    ColdDew,
    /// 霜降
    FrostDescent,
    /// 立冬
    StartOfWinter,
    /// 小雪
    MinorSnow,
    /// 大雪
    MajorSnow,
    /// 冬至
    WinterSolstice,
}

impl SolarTerm {
    /// 全部節氣，依序號排列
    pub const ALL: [SolarTerm; 24] = {
        use SolarTerm::*;
        [
            MinorCold,
            MajorCold,
            StartOfSpring,
            RainWater,
            AwakeningOfInsects,
            SpringEquinox,
            PureBrightness,
            GrainRain,
            StartOfSummer,
            GrainBuds,
            GrainInEar,
            SummerSolstice,
            MinorHeat,
            MajorHeat,
            StartOfAutumn,
            EndOfHeat,
            WhiteDew,
            AutumnEquinox,
            ColdDew,
            FrostDescent,
            StartOfWinter,
            MinorSnow,
            MajorSnow,
            WinterSolstice,
        ]
    };

    /// 序號，`0..=23`
    pub fn index(self) -> usize {
        self as usize
    }

    /// 由序號取得節氣。
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 該節氣在公曆 `year` 年交節的 UTC 日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::SolarTerm;
    ///
    /// assert_eq!("2024-12-21", SolarTerm::WinterSolstice.date_in(2024).iso_gregorian());
    /// ```
    pub fn date_in(self, year: i32) -> Date {
        Date::from_unix_millis(self.instant_millis(year))
    }

    /// 交節時刻，Unix 毫秒。整個和向零取整，含錨點。
    fn instant_millis(self, year: i32) -> i64 {
        let millis = TROPICAL_YEAR_MILLIS * f64::from(year - 1900)
            + (OFFSET_MINUTES[self.index()] * MILLIS_PER_MINUTE) as f64
            + ANCHOR_UNIX_MILLIS as f64;
        millis as i64
    }
}

/// 取得公曆 `year` 年 `month0` 月 `day` 日所交節氣。`month0` 自 0 起算。
///
/// 當日不交節則返回 `None`；年份不在 1901–2100 或月份無效時亦返回 `None` 並記錄警告。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{solar_term, SolarTerm};
///
/// assert_eq!(Some(SolarTerm::StartOfSpring), solar_term(2024, 1, 4));
/// assert_eq!(None, solar_term(2024, 1, 5));
/// ```
pub fn solar_term(year: i32, month0: i32, day: i32) -> Option<SolarTerm> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        warn!(year, "solar term requested outside the supported range");
        return None;
    }
    if !(0..12).contains(&month0) {
        warn!(month0, "solar term requested for an invalid month");
        return None;
    }
    let first = month0 as usize * 2;
    [first, first + 1]
        .into_iter()
        .filter_map(SolarTerm::from_index)
        .find(|term| term.date_in(year).gregorian().2 == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices() {
        for (i, term) in SolarTerm::ALL.into_iter().enumerate() {
            assert_eq!(i, term.index());
            assert_eq!(Some(term), SolarTerm::from_index(i));
        }
        assert_eq!(None, SolarTerm::from_index(24));
    }

    #[test]
    fn dates() {
        use SolarTerm::*;
        #[rustfmt::skip]
        let dataset = [
            (1901, ["1901-01-06", "1901-02-04", "1901-03-21", "1901-06-22", "1901-09-24", "1901-12-22"]),
            (1950, ["1950-01-06", "1950-02-04", "1950-03-21", "1950-06-22", "1950-09-23", "1950-12-22"]),
            (2000, ["2000-01-06", "2000-02-04", "2000-03-20", "2000-06-21", "2000-09-23", "2000-12-21"]),
            (2024, ["2024-01-06", "2024-02-04", "2024-03-20", "2024-06-21", "2024-09-22", "2024-12-21"]),
            (2100, ["2100-01-05", "2100-02-04", "2100-03-20", "2100-06-21", "2100-09-23", "2100-12-22"]),
        ];
        let terms = [
            MinorCold,
            StartOfSpring,
            SpringEquinox,
            SummerSolstice,
            AutumnEquinox,
            WinterSolstice,
        ];
        for (year, stds) in dataset {
            for (term, std) in terms.into_iter().zip(stds) {
                assert_eq!(std, term.date_in(year).iso_gregorian(), "{term:?} {year}");
            }
        }
    }

    #[test]
    fn instant_truncates_toward_zero() {
        // 1901 年小寒：-2176992374025.3 毫秒
        assert_eq!(-2_176_992_374_025, SolarTerm::MinorCold.instant_millis(1901));
        assert_eq!(ANCHOR_UNIX_MILLIS, SolarTerm::MinorCold.instant_millis(1900));
        assert_eq!(
            ANCHOR_UNIX_MILLIS + 504758 * MILLIS_PER_MINUTE,
            SolarTerm::WinterSolstice.instant_millis(1900)
        );
    }

    #[test]
    fn lookup() {
        use SolarTerm::*;
        for ((y, m0, d), std) in [
            ((2024, 11, 21), Some(WinterSolstice)),
            ((2024, 11, 20), None),
            ((2024, 5, 21), Some(SummerSolstice)),
            ((1901, 11, 22), Some(WinterSolstice)),
            ((2100, 0, 5), Some(MinorCold)),
            ((2024, 0, 20), Some(MajorCold)),
        ] {
            assert_eq!(std, solar_term(y, m0, d), "{y}-{}-{d}", m0 + 1);
        }
    }

    #[test]
    fn each_month_has_two_terms() {
        for year in [1901, 1984, 2024, 2100] {
            for m0 in 0..12 {
                let hits = (1..=31)
                    .filter(|&d| solar_term(year, m0, d).is_some())
                    .count();
                assert_eq!(2, hits, "{year}-{}", m0 + 1);
            }
        }
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(None, solar_term(1900, 11, 22));
        assert_eq!(None, solar_term(2101, 0, 5));
        assert_eq!(None, solar_term(2024, 12, 21));
        assert_eq!(None, solar_term(2024, -1, 21));
    }
}
