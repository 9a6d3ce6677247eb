//! Shared crate-wide constants.
//!
//! Canvas coordinates are terminal cells. Window positions are signed so a
//! dragged window may hang partially off the left or top edge; rendering
//! clips to the visible area.

use std::time::Duration;

use crate::nav::Section;
use crate::workspace::Size;

/// Nav-bar sections in display order, with their Korean labels.
pub const SECTIONS: [(Section, &str); 5] = [
    (Section::Chart, "차트보기"),
    (Section::Events, "경제 이벤트"),
    (Section::Sns, "SNS"),
    (Section::News, "뉴스"),
    (Section::Community, "커뮤니티"),
];

/// Height of the top navigation bar in rows.
pub const DEFAULT_NAV_HEIGHT: i32 = 3;

/// Horizontal anchor for the first cascaded window.
pub const CASCADE_BASE_X: i32 = 4;
/// Number of discrete horizontal lanes the cascade cycles through.
pub const CASCADE_LANES: i32 = 4;
/// Horizontal step between cascade lanes.
pub const CASCADE_STEP_X: i32 = 7;
/// Gap between the nav bar and the first cascaded window.
pub const CASCADE_TOP_GAP: i32 = 2;
/// Vertical step per already-open window.
pub const CASCADE_STEP_Y: i32 = 2;

pub const DEFAULT_CHART_SIZE: Size = Size {
    width: 46,
    height: 14,
};
pub const DEFAULT_EVENTS_SIZE: Size = Size {
    width: 52,
    height: 16,
};
pub const DEFAULT_SNS_SIZE: Size = Size {
    width: 44,
    height: 17,
};
pub const DEFAULT_NEWS_SIZE: Size = Size {
    width: 54,
    height: 18,
};
pub const DEFAULT_COMMUNITY_SIZE: Size = Size {
    width: 54,
    height: 18,
};

/// Delay before a hover-driven menu preview is hidden after the pointer
/// leaves the nav bar.
pub const HOVER_HIDE_DELAY: Duration = Duration::from_millis(150);

/// Number of events shown in the nav hover preview.
pub const MENU_PREVIEW_EVENTS: usize = 3;

/// Smallest size a window may be resized down to with the corner grip.
pub const MIN_WINDOW_WIDTH: u16 = 20;
pub const MIN_WINDOW_HEIGHT: u16 = 6;
