//! Display formatting helpers shared by the window bodies and the nav
//! menu preview. Copy is Korean to match the catalog content.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::catalog::EconomicEvent;

fn weekday_ko(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// `3. 12. (수)`
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "{}. {}. ({})",
        date.month(),
        date.day(),
        weekday_ko(date.weekday())
    )
}

/// `3. 12. (수) 21:30`
pub fn datetime_label(datetime: NaiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        date_label(datetime.date()),
        datetime.hour(),
        datetime.minute()
    )
}

/// `21:30 KST` when the event carries a timezone, otherwise just `21:30`.
pub fn event_time_label(event: &EconomicEvent) -> String {
    match event.timezone {
        Some(tz) => format!("{} {tz}", event.time),
        None => event.time.to_owned(),
    }
}

/// One-line calendar entry: `21:30 KST · 미국 소비자물가(CPI)`.
pub fn event_calendar_title(event: &EconomicEvent) -> String {
    format!("{} · {}", event_time_label(event), event.title)
}

/// Signed percentage with one decimal: `+2.4%`, `-0.8%`, `0.0%`.
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}
