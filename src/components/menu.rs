//! The hover menu preview that drops down from a nav section tab. Each row
//! is a click target that opens a window, optionally pre-filtered.

use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use crate::catalog::{DataMaps, menu_preview_events};
use crate::format::event_calendar_title;
use crate::nav::Section;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    OpenChart(&'static str),
    OpenEvents,
    SnsAll,
    SnsPlatform(&'static str),
    NewsAll,
    NewsSource(&'static str),
    CommunityAll,
    CommunityBoard(&'static str),
}

struct MenuRow {
    label: String,
    accent: Option<(u8, u8, u8)>,
    entry: Option<MenuEntry>,
}

#[derive(Debug, Default)]
pub struct MenuPreview {
    area: Rect,
    hits: Vec<(Rect, MenuEntry)>,
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl MenuPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<MenuEntry> {
        self.hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, entry)| *entry)
    }

    fn build_rows(section: Section, maps: &DataMaps, now: NaiveDateTime) -> Vec<MenuRow> {
        match section {
            Section::Chart => crate::catalog::instruments()
                .iter()
                .map(|instrument| MenuRow {
                    label: format!("{} ({})", instrument.name, instrument.symbol),
                    accent: Some(instrument.color),
                    entry: Some(MenuEntry::OpenChart(instrument.id)),
                })
                .collect(),
            Section::Events => {
                let mut rows = vec![MenuRow {
                    label: "전체 일정 보기".to_owned(),
                    accent: None,
                    entry: Some(MenuEntry::OpenEvents),
                }];
                rows.extend(menu_preview_events(now).into_iter().map(|event| MenuRow {
                    label: event_calendar_title(event),
                    accent: None,
                    entry: Some(MenuEntry::OpenEvents),
                }));
                rows
            }
            Section::Sns => {
                let mut rows = vec![MenuRow {
                    label: "전체".to_owned(),
                    accent: None,
                    entry: Some(MenuEntry::SnsAll),
                }];
                rows.extend(maps.all_platform_ids.iter().filter_map(|id| {
                    maps.sns_platforms.get(id).map(|platform| MenuRow {
                        label: platform.label.to_owned(),
                        accent: None,
                        entry: Some(MenuEntry::SnsPlatform(platform.id)),
                    })
                }));
                rows
            }
            Section::News => {
                let mut rows = vec![MenuRow {
                    label: "전체".to_owned(),
                    accent: None,
                    entry: Some(MenuEntry::NewsAll),
                }];
                rows.extend(maps.news_publishers.iter().map(|publisher| MenuRow {
                    label: format!("{} · {}", publisher.label, publisher.region),
                    accent: Some(publisher.accent),
                    entry: Some(MenuEntry::NewsSource(publisher.id)),
                }));
                rows
            }
            Section::Community => {
                let mut rows = vec![MenuRow {
                    label: "전체".to_owned(),
                    accent: None,
                    entry: Some(MenuEntry::CommunityAll),
                }];
                rows.extend(maps.boards_by_activity.iter().map(|board| MenuRow {
                    label: format!("{} {} · 오늘 {}건", board.emoji, board.title, board.posts_today),
                    accent: None,
                    entry: Some(MenuEntry::CommunityBoard(board.slug)),
                }));
                rows
            }
        }
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        screen: Rect,
        anchor_x: u16,
        top: u16,
        section: Section,
        maps: &DataMaps,
        now: NaiveDateTime,
    ) {
        self.hits.clear();
        self.area = Rect::default();

        let rows = Self::build_rows(section, maps, now);
        if rows.is_empty() || screen.height <= top {
            return;
        }

        let label_width = rows
            .iter()
            .map(|row| {
                row.label
                    .chars()
                    .map(|c| if c.is_ascii() { 1usize } else { 2 })
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0) as u16;
        let width = (label_width + 4).min(screen.width);
        let height = (rows.len() as u16 + 2).min(screen.height - top);
        let x = anchor_x.min(screen.width.saturating_sub(width));
        let area = Rect {
            x,
            y: top,
            width,
            height,
        };
        self.area = area;

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::accent()))
                .style(Style::default().bg(theme::menu_bg()).fg(theme::menu_fg())),
            area,
        );

        let buffer = frame.buffer_mut();
        for (index, row) in rows.iter().enumerate() {
            let y = area.y + 1 + index as u16;
            if y >= area.y + area.height - 1 {
                break;
            }
            let style = match row.accent {
                Some(accent) => Style::default()
                    .bg(theme::menu_bg())
                    .fg(theme::rgb_to_color(accent)),
                None => Style::default()
                    .bg(theme::menu_bg())
                    .fg(theme::menu_fg())
                    .add_modifier(Modifier::empty()),
            };
            safe_set_string(buffer, area, area.x + 2, y, &row.label, style);
            if let Some(entry) = row.entry {
                self.hits.push((
                    Rect {
                        x: area.x + 1,
                        y,
                        width: area.width.saturating_sub(2),
                        height: 1,
                    },
                    entry,
                ));
            }
        }
    }
}
