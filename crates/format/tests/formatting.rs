use chrono::NaiveDate;

use sanli_format::{Calendar, Locale, format_date};

fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One Gregorian day rendered through all three calendars, both locales.
#[test]
fn all_calendars_render_2025_08_29() {
    let date = naive(2025, 8, 29);

    assert_eq!(
        format_date(Calendar::Gregorian, date, Locale::Zh),
        "2025年08月29日 🔴 周五"
    );
    assert_eq!(
        format_date(Calendar::Gregorian, date, Locale::En),
        "2025-08-29 🔴 Fri"
    );

    // Lunar: sixth day after leap 6/30 ended Aug 23, i.e. month 7 day 6.
    assert_eq!(
        format_date(Calendar::Lunar, date, Locale::Zh),
        "2025年七月初六"
    );
    assert_eq!(format_date(Calendar::Lunar, date, Locale::En), "2025/7/6");
}

/// Every day of a table-covered year renders without panicking and
/// non-empty, in every calendar and locale.
#[test]
fn rendering_is_total_over_2025() {
    let mut date = naive(2025, 1, 1);
    while date < naive(2026, 1, 1) {
        for calendar in [Calendar::Gregorian, Calendar::Lunar, Calendar::Tibetan] {
            for locale in [Locale::Zh, Locale::En] {
                let text = format_date(calendar, date, locale);
                assert!(!text.is_empty(), "{calendar:?} {locale:?} {date}");
            }
        }
        date = date.succ_opt().unwrap();
    }
}

/// Out-of-table years render through the approximation without error.
#[test]
fn rendering_survives_out_of_table_years() {
    for date in [naive(2050, 1, 1), naive(2050, 7, 15), naive(1999, 12, 31)] {
        for calendar in [Calendar::Lunar, Calendar::Tibetan] {
            let text = format_date(calendar, date, Locale::En);
            assert!(!text.is_empty(), "{calendar:?} {date}");
        }
    }
}

/// Tibetan annotations ride on the Tibetan day-of-month, not the
/// Gregorian one.
#[test]
fn tibetan_annotations_follow_tibetan_day() {
    // 2024-02-23 is Tibetan 1/15: Amitabha day, auspicious haircut.
    let text = format_date(Calendar::Tibetan, naive(2024, 2, 23), Locale::En);
    assert_eq!(
        text,
        "2024/1/15 (Amitabha Buddha Day/Auspicious Day, Hair Cut: Increase Merit)"
    );
}

/// The comma-joined annotation list keeps observance before haircut.
#[test]
fn annotation_order_is_stable() {
    let zh = format_date(Calendar::Tibetan, naive(2024, 2, 23), Locale::Zh);
    assert_eq!(zh, "2024年1月15日 (阿弥陀佛节日/殊胜日, 理发吉: 增长福报)");
}
