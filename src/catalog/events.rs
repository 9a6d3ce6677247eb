//! Economic event catalog and the derived upcoming-event schedule.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventImportance {
    High,
    Medium,
    Low,
}

impl EventImportance {
    pub fn label(self) -> &'static str {
        match self {
            EventImportance::High => "중요",
            EventImportance::Medium => "보통",
            EventImportance::Low => "참고",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    DomesticEconomic,
    ForeignEconomic,
    DomesticEarnings,
    ForeignEarnings,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::DomesticEconomic => "국내 경제지표",
            EventCategory::ForeignEconomic => "해외 경제지표",
            EventCategory::DomesticEarnings => "국내 실적",
            EventCategory::ForeignEarnings => "해외 실적",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomicEvent {
    /// `YYYY-MM-DD`
    pub date: &'static str,
    /// `HH:MM`, 24h clock; empty means unscheduled (treated as midnight).
    pub time: &'static str,
    pub timezone: Option<&'static str>,
    pub id: &'static str,
    pub title: &'static str,
    pub indicator: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
    pub description: &'static str,
    pub importance: EventImportance,
    pub forecast: Option<&'static str>,
    pub previous: Option<&'static str>,
    pub related_themes: &'static [&'static str],
    pub category: EventCategory,
}

impl EconomicEvent {
    /// Combines `date` and `time` into a naive local datetime. A missing or
    /// malformed time falls back to midnight; a malformed date sorts first.
    pub fn datetime(&self) -> NaiveDateTime {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .unwrap_or(NaiveDate::MIN);
        let time = NaiveTime::parse_from_str(self.time, "%H:%M")
            .unwrap_or(NaiveTime::MIN);
        NaiveDateTime::new(date, time)
    }
}

pub fn economic_events() -> &'static [EconomicEvent] {
    &ECONOMIC_EVENTS
}

/// All events in chronological order.
pub fn sorted_events() -> Vec<&'static EconomicEvent> {
    let mut events: Vec<_> = economic_events().iter().collect();
    events.sort_by_key(|event| event.datetime());
    events
}

/// Events at or after `now`, in chronological order. Falls back to the full
/// sorted catalog when everything is already in the past so the events
/// window never renders empty.
pub fn upcoming_events(now: NaiveDateTime) -> Vec<&'static EconomicEvent> {
    let sorted = sorted_events();
    let upcoming: Vec<_> = sorted
        .iter()
        .copied()
        .filter(|event| event.datetime() >= now)
        .collect();
    if upcoming.is_empty() { sorted } else { upcoming }
}

/// The short slice shown in the nav hover preview.
pub fn menu_preview_events(now: NaiveDateTime) -> Vec<&'static EconomicEvent> {
    let mut events = upcoming_events(now);
    events.truncate(crate::constants::MENU_PREVIEW_EVENTS);
    events
}

static ECONOMIC_EVENTS: [EconomicEvent; 8] = [
    EconomicEvent {
        id: "kr-bok-rate-20250227",
        date: "2025-02-27",
        time: "09:30",
        timezone: None,
        title: "한국은행 기준금리 결정",
        indicator: "BOK Base Rate",
        country: "대한민국",
        flag: "🇰🇷",
        description: "한국은행 금융통화위원회가 기준금리를 발표합니다. 성장률과 물가 전망이 함께 공개됩니다.",
        importance: EventImportance::High,
        forecast: Some("연 3.00%"),
        previous: Some("연 3.00%"),
        related_themes: &["원화", "국채", "은행주"],
        category: EventCategory::DomesticEconomic,
    },
    EconomicEvent {
        id: "kr-cpi-20250305",
        date: "2025-03-05",
        time: "08:00",
        timezone: None,
        title: "한국 소비자물가(CPI)",
        indicator: "Consumer Price Index",
        country: "대한민국",
        flag: "🇰🇷",
        description: "한국은행의 통화정책에 직접적인 영향을 주는 핵심 물가지표입니다.",
        importance: EventImportance::High,
        forecast: Some("전년 대비 +2.3%"),
        previous: Some("+2.6%"),
        related_themes: &["원화", "국채", "리테일"],
        category: EventCategory::DomesticEconomic,
    },
    EconomicEvent {
        id: "us-fomc-20250319",
        date: "2025-03-19",
        time: "03:00",
        timezone: Some("KST"),
        title: "미 연준 FOMC 금리 결정",
        indicator: "Federal Funds Rate",
        country: "미국",
        flag: "🇺🇸",
        description: "연방공개시장위원회가 정책금리와 점도표를 발표합니다. 파월 의장 기자회견이 이어집니다.",
        importance: EventImportance::High,
        forecast: Some("4.25~4.50%"),
        previous: Some("4.25~4.50%"),
        related_themes: &["달러", "국채", "성장주"],
        category: EventCategory::ForeignEconomic,
    },
    EconomicEvent {
        id: "kr-unemployment-20250313",
        date: "2025-03-13",
        time: "08:00",
        timezone: None,
        title: "한국 고용동향",
        indicator: "Employment Statistics",
        country: "대한민국",
        flag: "🇰🇷",
        description: "취업자 증감과 실업률을 포함한 월간 고용 통계가 발표됩니다.",
        importance: EventImportance::Medium,
        forecast: Some("실업률 2.9%"),
        previous: Some("실업률 3.0%"),
        related_themes: &["내수", "리테일"],
        category: EventCategory::DomesticEconomic,
    },
    EconomicEvent {
        id: "us-cpi-20250312",
        date: "2025-03-12",
        time: "21:30",
        timezone: Some("KST"),
        title: "미국 소비자물가(CPI)",
        indicator: "Consumer Price Index",
        country: "미국",
        flag: "🇺🇸",
        description: "연준 금리 경로를 좌우하는 핵심 물가 지표입니다. 근원 물가에 주목하세요.",
        importance: EventImportance::High,
        forecast: Some("전년 대비 +2.9%"),
        previous: Some("+3.0%"),
        related_themes: &["달러", "금", "성장주"],
        category: EventCategory::ForeignEconomic,
    },
    EconomicEvent {
        id: "kr-samsung-earnings-20250407",
        date: "2025-04-07",
        time: "09:00",
        timezone: None,
        title: "삼성전자 1분기 잠정 실적",
        indicator: "Earnings Guidance",
        country: "대한민국",
        flag: "🇰🇷",
        description: "메모리 가격 반등 폭과 파운드리 가동률이 관전 포인트입니다.",
        importance: EventImportance::High,
        forecast: Some("영업이익 7.1조원"),
        previous: Some("영업이익 6.5조원"),
        related_themes: &["반도체", "코스피"],
        category: EventCategory::DomesticEarnings,
    },
    EconomicEvent {
        id: "us-nvidia-earnings-20250528",
        date: "2025-05-28",
        time: "05:20",
        timezone: Some("KST"),
        title: "엔비디아 분기 실적 발표",
        indicator: "Quarterly Earnings",
        country: "미국",
        flag: "🇺🇸",
        description: "데이터센터 매출 성장률과 차세대 칩 출하 가이던스가 공개됩니다.",
        importance: EventImportance::High,
        forecast: Some("EPS $5.65"),
        previous: Some("EPS $5.16"),
        related_themes: &["AI", "반도체", "나스닥"],
        category: EventCategory::ForeignEarnings,
    },
    EconomicEvent {
        id: "cn-pmi-20250331",
        date: "2025-03-31",
        time: "10:30",
        timezone: Some("CST"),
        title: "중국 제조업 PMI",
        indicator: "Manufacturing PMI",
        country: "중국",
        flag: "🇨🇳",
        description: "중국 경기 모멘텀을 가늠하는 월간 구매관리자지수입니다.",
        importance: EventImportance::Medium,
        forecast: Some("50.4"),
        previous: Some("50.2"),
        related_themes: &["위안화", "원자재"],
        category: EventCategory::ForeignEconomic,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        )
    }

    #[test]
    fn sorted_events_are_chronological() {
        let sorted = sorted_events();
        for pair in sorted.windows(2) {
            assert!(pair[0].datetime() <= pair[1].datetime());
        }
    }

    #[test]
    fn upcoming_filters_past_events() {
        let now = at("2025-03-10", "00:00");
        let upcoming = upcoming_events(now);
        assert!(upcoming.iter().all(|event| event.datetime() >= now));
        assert_eq!(upcoming[0].id, "us-cpi-20250312");
    }

    #[test]
    fn upcoming_falls_back_to_full_list_when_everything_is_past() {
        let now = at("2030-01-01", "00:00");
        let upcoming = upcoming_events(now);
        assert_eq!(upcoming.len(), economic_events().len());
        assert_eq!(upcoming[0].id, "kr-bok-rate-20250227");
    }

    #[test]
    fn menu_preview_is_first_three_upcoming() {
        let now = at("2025-01-01", "00:00");
        let preview = menu_preview_events(now);
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0].id, "kr-bok-rate-20250227");
        assert_eq!(preview[1].id, "kr-cpi-20250305");
        assert_eq!(preview[2].id, "us-cpi-20250312");
    }
}
