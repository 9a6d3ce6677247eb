//! Floating-window workspace: the window collection, its manager, and the
//! pure projections that turn window filter state into display lists.

pub mod items;
mod manager;

use std::fmt;

pub use manager::{FilterPick, WindowManager};

/// Top-left corner in canvas cells. Signed so a dragged window may hang off
/// the left or top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Identity of an open window. Chart windows are keyed per instrument; every
/// other kind is a singleton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowKey {
    Chart(String),
    Events,
    Sns,
    News,
    Community,
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKey::Chart(id) => write!(f, "chart:{id}"),
            WindowKey::Events => f.write_str("events:schedule"),
            WindowKey::Sns => f.write_str("sns"),
            WindowKey::News => f.write_str("news"),
            WindowKey::Community => f.write_str("community"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowView {
    #[default]
    List,
    Detail,
}

/// Common envelope shared by every window variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub position: Point,
    pub size: Size,
    pub z: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartWindow {
    pub instrument_id: String,
    pub frame: WindowFrame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsWindow {
    pub frame: WindowFrame,
    pub view: WindowView,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsWindow {
    pub frame: WindowFrame,
    /// Selected platform ids, always kept as an ordered, de-duplicated
    /// subsequence of the catalog id list. Never empty while the window is
    /// open.
    pub platforms: Vec<String>,
    pub view: WindowView,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsWindow {
    pub frame: WindowFrame,
    /// Same subsequence discipline as [`SnsWindow::platforms`].
    pub sources: Vec<String>,
    pub view: WindowView,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityWindow {
    pub frame: WindowFrame,
    /// `None` means all boards.
    pub selected_board: Option<String>,
    pub view: WindowView,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowState {
    Chart(ChartWindow),
    Events(EventsWindow),
    Sns(SnsWindow),
    News(NewsWindow),
    Community(CommunityWindow),
}

impl WindowState {
    pub fn key(&self) -> WindowKey {
        match self {
            WindowState::Chart(window) => WindowKey::Chart(window.instrument_id.clone()),
            WindowState::Events(_) => WindowKey::Events,
            WindowState::Sns(_) => WindowKey::Sns,
            WindowState::News(_) => WindowKey::News,
            WindowState::Community(_) => WindowKey::Community,
        }
    }

    pub fn frame(&self) -> &WindowFrame {
        match self {
            WindowState::Chart(window) => &window.frame,
            WindowState::Events(window) => &window.frame,
            WindowState::Sns(window) => &window.frame,
            WindowState::News(window) => &window.frame,
            WindowState::Community(window) => &window.frame,
        }
    }

    pub fn frame_mut(&mut self) -> &mut WindowFrame {
        match self {
            WindowState::Chart(window) => &mut window.frame,
            WindowState::Events(window) => &mut window.frame,
            WindowState::Sns(window) => &mut window.frame,
            WindowState::News(window) => &mut window.frame,
            WindowState::Community(window) => &mut window.frame,
        }
    }
}
