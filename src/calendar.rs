use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub number: u32,
    pub days: Vec<NaiveDate>,
}

/// Monday-first weeks covering `month`, padded with the neighbouring
/// months' days so every week has seven entries.
pub fn month_grid(year: i32, month: u32) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_monday();
    let mut day = first - Duration::days(i64::from(offset));

    let mut weeks = Vec::new();
    loop {
        let days: Vec<NaiveDate> = day.iter_days().take(7).collect();
        weeks.push(Week {
            number: day.iso_week().week(),
            days,
        });
        day += Duration::days(7);
        if day.month() != month || day.year() != year {
            break;
        }
    }
    weeks
}

/// `(year, month)` one month before.
pub fn prev_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// `(year, month)` one month after.
pub fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// How a single calendar cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayStyle {
    pub in_month: bool,
    pub has_wallpaper: bool,
    pub is_today: bool,
    pub selected: bool,
    /// Future days are shown but cannot be picked.
    pub disabled: bool,
}

pub fn day_style(
    day: NaiveDate,
    month: (i32, u32),
    today: NaiveDate,
    selected: NaiveDate,
    wallpaper_days: &BTreeSet<NaiveDate>,
) -> DayStyle {
    DayStyle {
        in_month: month_of(day) == month,
        has_wallpaper: wallpaper_days.contains(&day),
        is_today: day == today,
        selected: day == selected,
        disabled: day > today,
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_month((year, month): (i32, u32)) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
