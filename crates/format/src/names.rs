//! Traditional Chinese names for lunar months and days.

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

#[rustfmt::skip]
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Traditional name of a lunar month, without the trailing 月.
///
/// # Panics
///
/// Panics if `month` is not in 1..=12; resolved dates always are.
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

/// Traditional name of a lunar day-of-month.
///
/// # Panics
///
/// Panics if `day` is not in 1..=30; resolved dates always are.
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES[day as usize - 1]
}
