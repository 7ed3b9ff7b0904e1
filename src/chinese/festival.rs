//! 農曆節日

use super::days_to_lunar_date;

/// 農曆節日，依序號排列。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Festival {
    /// 除夕，正月初一前一日
    NewYearsEve,
    /// 元宵，正月十五
    Lantern,
    /// 端午，五月初五
    DragonBoat,
    /// 七夕，七月初七
    Qixi,
    /// 中元，七月十五
    Ghost,
    /// 中秋，八月十五
    MidAutumn,
    /// 重陽，九月初九
    DoubleNinth,
    /// 臘八，十二月初八
    Laba,
    /// 小年，十二月廿三
    KitchenGod,
}

impl Festival {
    /// 全部節日，依序號排列
    pub const ALL: [Festival; 9] = [
        Festival::NewYearsEve,
        Festival::Lantern,
        Festival::DragonBoat,
        Festival::Qixi,
        Festival::Ghost,
        Festival::MidAutumn,
        Festival::DoubleNinth,
        Festival::Laba,
        Festival::KitchenGod,
    ];

    /// 序號，`0..=8`
    pub fn index(self) -> usize {
        self as usize
    }

    /// 由序號取得節日。
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 節日的月日鍵 `(月 << 8) | 日`。除夕記作正月初〇。
    fn key(self) -> u32 {
        use Festival::*;
        match self {
            NewYearsEve => 0x0100,
            Lantern => 0x010f,
            DragonBoat => 0x0505,
            Qixi => 0x0707,
            Ghost => 0x070f,
            MidAutumn => 0x080f,
            DoubleNinth => 0x0909,
            Laba => 0x0c08,
            KitchenGod => 0x0c17,
        }
    }
}

/// 取得農曆 `month` 月 `day` 日的節日，`day_offset` 為該日距 1901 年 1 月 1 日的日數。
///
/// 臘月廿九、三十須知次日是否為正月初一方能判定除夕，故以 `day_offset` 推算次日。不論平閏月。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{day_offset, lunar_festival, Festival};
///
/// // 2024-02-09 為癸卯年臘月三十，次日即甲辰年正月初一
/// let days = day_offset(2024, 1, 9).unwrap();
/// assert_eq!(Some(Festival::NewYearsEve), lunar_festival(12, 30, days));
/// ```
pub fn lunar_festival(month: u32, day: u32, day_offset: i32) -> Option<Festival> {
    let (mut month, mut day) = (month, day);
    if month == 12 && day >= 29 {
        let next = day_offset
            .checked_add(1)
            .and_then(|days| days_to_lunar_date(days).ok());
        if next.is_some_and(|next| next.month().num() == 1 && next.day() == 1) {
            month = 1;
            day = 0;
        }
    }
    let key = (month << 8) | (day & 0xff);
    Festival::ALL.into_iter().find(|f| f.key() == key)
}
