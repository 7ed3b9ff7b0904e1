//! 1901–2100 年農曆月份表
//!
//! 原始數據為兩張壓縮表：每年一個 16 位整數記各月大小，每字節記兩年的閏月。
//! 本模塊於編譯期將其解為逐年記錄 [`LunarYear`]，查表時不再做位運算。

use tracing::warn;

use super::Month;

/// 表中首年
pub const FIRST_YEAR: i32 = 1901;
/// 表中末年
pub const LAST_YEAR: i32 = 2100;

const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// 表外年份各月的固定日數
const FALLBACK_MONTH_DAYS: u32 = 30;

/// 各年月大小。自最高位起依曆序（閏月就位計入）每位對應一月，1 為大月（30 日），0 為小月（29 日）。
#[rustfmt::skip]
const MONTH_BITS: [u16; YEAR_COUNT] = [
    0x4ae0, 0xa570, 0x5268, 0xd260, 0xd950, 0x6aa8, 0x56a0, 0x9ad0, 0x4ae8, 0x4ae0, // 1901-1910
    0xa4d8, 0xa4d0, 0xd250, 0xd528, 0xb540, 0xd6a0, 0x96d0, 0x95b0, 0x49b8, 0x4970, // 1911-1920
    0xa4b0, 0xb258, 0x6a50, 0x6d40, 0xada8, 0x2b60, 0x9570, 0x4978, 0x4970, 0x64b0, // 1921-1930
    0xd4a0, 0xea50, 0x6d48, 0x5ad0, 0x2b60, 0x9370, 0x92e0, 0xc968, 0xc950, 0xd4a0, // 1931-1940
    0xda50, 0xb550, 0x56a0, 0xaad8, 0x25d0, 0x92d0, 0xc958, 0xa950, 0xb4a8, 0x6ca0, // 1941-1950
    0xb550, 0x55a8, 0x4da0, 0xa5b0, 0x52b8, 0x52b0, 0xa950, 0xe950, 0x6aa0, 0xad50, // 1951-1960
    0xab50, 0x4b60, 0xa570, 0xa570, 0x5260, 0xe930, 0xd950, 0x5aa8, 0x56a0, 0x96d0, // 1961-1970
    0x4ae8, 0x4ad0, 0xa4d0, 0xd268, 0xd250, 0xd528, 0xb540, 0xb6a0, 0x96d0, 0x95b0, // 1971-1980
    0x49b0, 0xa4b8, 0xa4b0, 0xb258, 0x6a50, 0x6d40, 0xada0, 0xab60, 0x9570, 0x4978, // 1981-1990
    0x4970, 0x64b0, 0x6a50, 0xea50, 0x6b28, 0x5ac0, 0xab60, 0x9368, 0x92e0, 0xc960, // 1991-2000
    0xd4a8, 0xd4a0, 0xda50, 0x5aa8, 0x56a0, 0xaad8, 0x25d0, 0x92d0, 0xc958, 0xa950, // 2001-2010
    0xb4a0, 0xb550, 0xad50, 0x55a8, 0x4ba0, 0xa5b0, 0x52b8, 0x52b0, 0xa930, 0x74a8, // 2011-2020
    0x6aa0, 0xad50, 0x4da8, 0x4b60, 0xa570, 0xa4e0, 0xd260, 0xe930, 0xd530, 0x5aa0, // 2021-2030
    0x6b50, 0x96d0, 0x4ae8, 0x4ad0, 0xa4d0, 0xd258, 0xd250, 0xd520, 0xdaa0, 0xb5a0, // 2031-2040
    0x56d0, 0x4ad8, 0x49b0, 0xa4b8, 0xa4b0, 0xaa50, 0xb528, 0x6d20, 0xada0, 0x55b0, // 2041-2050
    0x9370, 0x4978, 0x4970, 0x64b0, 0x6a50, 0xea50, 0x6aa0, 0xab60, 0xaae0, 0x92e0, // 2051-2060
    0xc970, 0xc960, 0xd4a8, 0xd4a0, 0xda50, 0x5aa8, 0x56a0, 0xa6d0, 0x52e8, 0x52d0, // 2061-2070
    0xa958, 0xa950, 0xb4a0, 0xb550, 0xad50, 0x55a0, 0xa5d0, 0xa5b0, 0x52b0, 0xa938, // 2071-2080
    0x6930, 0x7298, 0x6aa0, 0xad50, 0x4da8, 0x4b60, 0xa570, 0x5270, 0xd160, 0xe930, // 2081-2090
    0xd520, 0xdaa0, 0x6b50, 0x56d0, 0x4ae0, 0xa4e8, 0xa2d0, 0xd150, 0xd928, 0xd520, // 2091-2100
];

/// 閏月，每字節兩年：高四位為距首年偶數年，低四位為奇數年，0 為無閏月。
///
/// `0x80`、`0xb0` 兩值原表以有符號字節記作 `-128`、`-80`。
#[rustfmt::skip]
const LEAP_CODES: [u8; YEAR_COUNT / 2] = [
    0x00, 0x50, 0x04, 0x00, 0x20, // 1901-1910
    0x60, 0x05, 0x00, 0x20, 0x70, // 1911-1920
    0x05, 0x00, 0x40, 0x02, 0x06, // 1921-1930
    0x00, 0x50, 0x03, 0x07, 0x00, // 1931-1940
    0x60, 0x04, 0x00, 0x20, 0x70, // 1941-1950
    0x05, 0x00, 0x30, 0x80, 0x06, // 1951-1960
    0x00, 0x40, 0x03, 0x07, 0x00, // 1961-1970
    0x50, 0x04, 0x08, 0x00, 0x60, // 1971-1980
    0x04, 0x0a, 0x00, 0x60, 0x05, // 1981-1990
    0x00, 0x30, 0x80, 0x05, 0x00, // 1991-2000
    0x40, 0x02, 0x07, 0x00, 0x50, // 2001-2010
    0x04, 0x09, 0x00, 0x60, 0x04, // 2011-2020
    0x00, 0x20, 0x60, 0x05, 0x00, // 2021-2030
    0x30, 0xb0, 0x06, 0x00, 0x50, // 2031-2040
    0x02, 0x07, 0x00, 0x50, 0x03, // 2041-2050
    0x08, 0x00, 0x60, 0x04, 0x00, // 2051-2060
    0x30, 0x70, 0x05, 0x00, 0x40, // 2061-2070
    0x80, 0x06, 0x00, 0x40, 0x03, // 2071-2080
    0x07, 0x00, 0x50, 0x04, 0x08, // 2081-2090
    0x00, 0x60, 0x04, 0x00, 0x20, // 2091-2100
];

static YEARS: [LunarYear; YEAR_COUNT] = decode_all();

/// 一年的月份表
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LunarYear {
    /// 年份（以正月所在公元年計）
    pub year: i32,
    /// 閏幾月，0 為無閏月
    pub leap_month: u32,
    /// 依曆序的各月日數，無閏月之年末項為 0
    month_days: [u8; 13],
    /// 全年日數
    days: u32,
}

/// 某月日數。`days` 為該月（平月）日數，`leap_days` 為其後閏月日數，非閏年或非閏月則為 0。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthDays {
    pub days: u32,
    pub leap_days: u32,
}

impl MonthDays {
    /// 平月與其閏月日數之和
    pub fn total(&self) -> u32 {
        self.days + self.leap_days
    }
}

impl LunarYear {
    /// 取得農曆 `year` 年的月份表。
    ///
    /// 表外年份返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::tables::LunarYear;
    ///
    /// let year = LunarYear::get(2017).unwrap();
    /// assert_eq!(6, year.leap_month);
    /// assert_eq!(384, year.days());
    /// assert!(LunarYear::get(2101).is_none());
    /// ```
    pub fn get(year: i32) -> Option<&'static Self> {
        let offset = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        YEARS.get(offset)
    }

    /// 全年日數
    pub fn days(&self) -> u32 {
        self.days
    }

    /// 月數，12 或 13
    pub fn month_count(&self) -> usize {
        if self.leap_month == 0 { 12 } else { 13 }
    }

    /// 取得 `month` 月及其閏月的日數。`month` 不在 `1..=12` 則返回 `None`。
    pub fn days_in_month(&self, month: u32) -> Option<MonthDays> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let leap = self.leap_month;
        let slot = (if leap != 0 && month > leap {
            month
        } else {
            month - 1
        }) as usize;
        let leap_days = if month == leap {
            u32::from(self.month_days[slot + 1])
        } else {
            0
        };
        Some(MonthDays {
            days: u32::from(self.month_days[slot]),
            leap_days,
        })
    }

    /// 依曆序列出各月及其日數。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{Month::*, tables::LunarYear};
    ///
    /// let months: Vec<_> = LunarYear::get(2023).unwrap().months().collect();
    /// assert_eq!(13, months.len());
    /// assert_eq!((Leap(2), 29), months[2]);
    /// assert_eq!((Common(3), 29), months[3]);
    /// ```
    pub fn months(&self) -> impl Iterator<Item = (Month, u32)> + '_ {
        let leap = self.leap_month;
        (0..self.month_count() as u32).map(move |slot| {
            let month = match leap {
                0 => Month::Common(slot + 1),
                _ if slot == leap => Month::Leap(leap),
                _ if slot > leap => Month::Common(slot),
                _ => Month::Common(slot + 1),
            };
            (month, u32::from(self.month_days[slot as usize]))
        })
    }
}

const fn leap_code(offset: usize) -> u32 {
    let byte = LEAP_CODES[offset / 2];
    if offset % 2 == 0 {
        (byte >> 4) as u32
    } else {
        (byte & 0x0f) as u32
    }
}

const fn decode(offset: usize) -> LunarYear {
    let bits = MONTH_BITS[offset];
    let leap_month = leap_code(offset);
    let count = if leap_month == 0 { 12 } else { 13 };
    let mut month_days = [0u8; 13];
    let mut days = 0;
    let mut slot = 0;
    while slot < count {
        let len = if bits & (1 << (15 - slot)) != 0 { 30 } else { 29 };
        month_days[slot] = len;
        days += len as u32;
        slot += 1;
    }
    LunarYear {
        year: FIRST_YEAR + offset as i32,
        leap_month,
        month_days,
        days,
    }
}

const fn decode_all() -> [LunarYear; YEAR_COUNT] {
    let mut years = [LunarYear {
        year: 0,
        leap_month: 0,
        month_days: [0; 13],
        days: 0,
    }; YEAR_COUNT];
    let mut i = 0;
    while i < YEAR_COUNT {
        years[i] = decode(i);
        i += 1;
    }
    years
}

/// 取得農曆 `year` 年閏幾月，0 為無閏月。
///
/// 表外年份記錄警告並返回 0。
///
/// # 用例
///
/// ```
/// use nongli::chinese::tables::leap_month_in_year;
///
/// assert_eq!(11, leap_month_in_year(2033));
/// assert_eq!(0, leap_month_in_year(2024));
/// ```
pub fn leap_month_in_year(year: i32) -> u32 {
    match LunarYear::get(year) {
        Some(y) => y.leap_month,
        None => {
            warn!(year, "leap month requested outside the table range");
            0
        }
    }
}

/// 取得農曆 `year` 年 `month` 月的日數，若其後為閏月則一併給出閏月日數。
///
/// 表外年份或月份不在 `1..=12` 時返回固定值 30 日、無閏月。
///
/// # 用例
///
/// ```
/// use nongli::chinese::tables::{MonthDays, days_in_lunar_month};
///
/// assert_eq!(MonthDays { days: 29, leap_days: 30 }, days_in_lunar_month(2017, 6));
/// assert_eq!(MonthDays { days: 30, leap_days: 0 }, days_in_lunar_month(1850, 1));
/// ```
pub fn days_in_lunar_month(year: i32, month: u32) -> MonthDays {
    let fallback = MonthDays {
        days: FALLBACK_MONTH_DAYS,
        leap_days: 0,
    };
    match LunarYear::get(year) {
        Some(y) => y.days_in_month(month).unwrap_or_else(|| {
            warn!(year, month, "lunar month outside 1..=12");
            fallback
        }),
        None => fallback,
    }
}

/// 取得農曆 `year` 年全年日數，為十二個月（連同閏月）日數之和。
///
/// # 用例
///
/// ```
/// use nongli::chinese::tables::days_in_lunar_year;
///
/// assert_eq!(354, days_in_lunar_year(1901));
/// assert_eq!(384, days_in_lunar_year(2023));
/// ```
pub fn days_in_lunar_year(year: i32) -> u32 {
    (1..=12).map(|m| days_in_lunar_month(year, m).total()).sum()
}
