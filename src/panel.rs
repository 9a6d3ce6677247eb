//! The top navigation bar: logo, mode switch, section tabs, theme toggle.
//!
//! Rendering records the hit rectangle of every interactive element for the
//! frame, and `hit_test` maps pointer coordinates back to them. Hover over a
//! section tab drives the menu preview; leaving the bar arms the delayed
//! hide in [`crate::nav::Navigation`].

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::constants::SECTIONS;
use crate::nav::{Mode, Navigation, Section};
use crate::theme::{self, ThemeMode};
use crate::ui::{UiFrame, safe_set_string};

const LOGO: &str = " Invest Hub ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Logo,
    Mode(Mode),
    Section(Section),
    ThemeToggle,
}

#[derive(Debug, Default)]
pub struct NavBar {
    area: Rect,
    hits: Vec<(Rect, NavHit)>,
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    /// Left edge of a section tab, used to anchor its menu preview.
    pub fn section_anchor(&self, section: Section) -> Option<u16> {
        self.hits
            .iter()
            .find(|(_, hit)| *hit == NavHit::Section(section))
            .map(|(rect, _)| rect.x)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<NavHit> {
        self.hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, hit)| *hit)
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        nav: &Navigation,
        theme_mode: ThemeMode,
    ) {
        self.area = area;
        self.hits.clear();
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg = Style::default()
            .bg(theme::nav_bg(theme_mode))
            .fg(theme::nav_fg(theme_mode));
        frame.render_widget(ratatui::widgets::Block::default().style(bg), area);

        let buffer = frame.buffer_mut();
        let row = area.y + area.height / 2;
        let mut x = area.x + 1;

        let logo_style = bg.fg(theme::accent()).add_modifier(Modifier::BOLD);
        safe_set_string(buffer, area, x, row, LOGO, logo_style);
        self.push_hit(x, row, LOGO.chars().count() as u16, NavHit::Logo);
        x += LOGO.chars().count() as u16 + 2;

        for mode in [Mode::General, Mode::Pro] {
            let label = match mode {
                Mode::General => "일반",
                Mode::Pro => "프로",
            };
            let style = if nav.mode() == mode {
                bg.fg(theme::nav_active_fg(theme_mode))
                    .add_modifier(Modifier::BOLD)
            } else {
                bg
            };
            safe_set_string(buffer, area, x, row, label, style);
            // Korean labels occupy two cells per character.
            let width = label.chars().count() as u16 * 2;
            self.push_hit(x, row, width, NavHit::Mode(mode));
            x += width + 2;
        }
        x += 2;

        for (section, label) in SECTIONS {
            let active = nav.active_section() == section;
            let hovered = nav.open_menu() == Some(section);
            let mut style = if active {
                bg.fg(theme::nav_active_fg(theme_mode))
                    .add_modifier(Modifier::BOLD)
            } else {
                bg
            };
            if hovered {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            safe_set_string(buffer, area, x, row, label, style);
            let width: u16 = label
                .chars()
                .map(|c| if c.is_ascii() { 1 } else { 2 })
                .sum();
            self.push_hit(x, row, width, NavHit::Section(section));
            x += width + 3;
        }

        let theme_label = match theme_mode {
            ThemeMode::Dark => "[다크]",
            ThemeMode::Light => "[라이트]",
        };
        let theme_width: u16 = theme_label
            .chars()
            .map(|c| if c.is_ascii() { 1 } else { 2 })
            .sum();
        let theme_x = area
            .x
            .saturating_add(area.width)
            .saturating_sub(theme_width + 1);
        safe_set_string(buffer, area, theme_x, row, theme_label, bg);
        self.push_hit(theme_x, row, theme_width, NavHit::ThemeToggle);
    }

    fn push_hit(&mut self, x: u16, y: u16, width: u16, hit: NavHit) {
        self.hits.push((
            Rect {
                x,
                y,
                width,
                height: 1,
            },
            hit,
        ));
    }
}
