//! Body renderers for the events, SNS, news, and community windows. Each
//! renders either the list view or the detail view of the selected item,
//! driven entirely by the window state and the projection layer.

use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::catalog::{DataMaps, Sentiment, upcoming_events};
use crate::format::{date_label, event_time_label};
use crate::theme;
use crate::ui::UiFrame;
use crate::workspace::items::{
    community_window_meta, detail_at, news_window_meta, sns_window_meta,
};
use crate::workspace::{CommunityWindow, EventsWindow, NewsWindow, SnsWindow, WindowView};

fn selected_list_state(selected: Option<usize>) -> ListState {
    let mut state = ListState::default();
    state.select(selected);
    state
}

fn render_list(frame: &mut UiFrame<'_>, area: Rect, items: Vec<ListItem<'_>>, selected: Option<usize>) {
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = selected_list_state(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut UiFrame<'_>, area: Rect, lines: Vec<Line<'_>>) {
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_events(
    frame: &mut UiFrame<'_>,
    area: Rect,
    window: &EventsWindow,
    cursor: Option<usize>,
    now: NaiveDateTime,
) {
    let events = upcoming_events(now);
    match window.view {
        WindowView::List => {
            let items = events
                .iter()
                .map(|event| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", date_label(event.datetime().date())),
                            Style::default().fg(theme::accent()),
                        ),
                        Span::raw(format!("{} ", event_time_label(event))),
                        Span::styled(
                            format!("[{}] ", event.importance.label()),
                            Style::default().fg(theme::importance_color(matches!(
                                event.importance,
                                crate::catalog::EventImportance::High
                            ))),
                        ),
                        Span::raw(format!("{} {}", event.flag, event.title)),
                    ]))
                })
                .collect();
            render_list(frame, area, items, cursor);
        }
        WindowView::Detail => {
            let Some(event) = detail_at(&events, window.selected_index) else {
                return;
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", event.flag, event.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "{} {} · {} · {}",
                    date_label(event.datetime().date()),
                    event_time_label(event),
                    event.country,
                    event.category.label()
                )),
                Line::from(""),
                Line::from(event.description),
            ];
            if let Some(forecast) = event.forecast {
                lines.push(Line::from(format!("예상: {forecast}")));
            }
            if let Some(previous) = event.previous {
                lines.push(Line::from(format!("이전: {previous}")));
            }
            if !event.related_themes.is_empty() {
                lines.push(Line::from(format!(
                    "관련 테마: {}",
                    event.related_themes.join(", ")
                )));
            }
            render_detail(frame, area, lines);
        }
    }
}

pub fn render_sns(
    frame: &mut UiFrame<'_>,
    area: Rect,
    window: &SnsWindow,
    cursor: Option<usize>,
    maps: &DataMaps,
) {
    let meta = sns_window_meta(window, maps);
    if area.height < 2 {
        return;
    }
    let header = Line::from(vec![
        Span::styled(
            meta.primary_platform_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            meta.platform_subtitle.clone(),
            Style::default().fg(theme::rgb_to_color((148, 163, 184))),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header),
        Rect {
            height: 1,
            ..area
        },
    );
    let body = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    match window.view {
        WindowView::List => {
            let items = meta
                .items
                .iter()
                .map(|item| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", item.post.nickname),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("({}) ", item.platform_label),
                            Style::default().fg(theme::accent()),
                        ),
                        Span::raw(item.post.content),
                    ]))
                })
                .collect();
            render_list(frame, body, items, cursor);
        }
        WindowView::Detail => {
            let Some(item) = detail_at(&meta.items, window.selected_index) else {
                return;
            };
            render_detail(
                frame,
                body,
                vec![
                    Line::from(Span::styled(
                        format!("{} {}", item.post.nickname, item.post.handle),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("{} · {}", item.platform_label, item.post.time_ago)),
                    Line::from(""),
                    Line::from(item.post.detail),
                    Line::from(""),
                    Line::from(format!(
                        "좋아요 {} · 댓글 {} · 공유 {}",
                        item.post.likes, item.post.comments, item.post.shares
                    )),
                ],
            );
        }
    }
}

pub fn render_news(
    frame: &mut UiFrame<'_>,
    area: Rect,
    window: &NewsWindow,
    cursor: Option<usize>,
    maps: &DataMaps,
) {
    let meta = news_window_meta(window, maps);
    if area.height < 2 {
        return;
    }
    let header = Line::from(vec![
        Span::styled(
            meta.primary_source_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            meta.source_subtitle.clone(),
            Style::default().fg(theme::rgb_to_color((148, 163, 184))),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header),
        Rect {
            height: 1,
            ..area
        },
    );
    let body = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    match window.view {
        WindowView::List => {
            let items = meta
                .items
                .iter()
                .map(|item| {
                    let accent = theme::news_region_accent(item.region);
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", item.source_label),
                            Style::default().fg(theme::rgb_to_color(accent)),
                        ),
                        Span::raw(format!("{} ", item.title)),
                        Span::styled(
                            item.time_ago,
                            Style::default().fg(theme::rgb_to_color((148, 163, 184))),
                        ),
                    ]))
                })
                .collect();
            render_list(frame, body, items, cursor);
        }
        WindowView::Detail => {
            let Some(item) = detail_at(&meta.items, window.selected_index) else {
                return;
            };
            render_detail(
                frame,
                body,
                vec![
                    Line::from(Span::styled(
                        item.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!(
                        "{} · {} · {}",
                        item.source_label, item.region, item.time_ago
                    )),
                    Line::from(""),
                    Line::from(item.summary),
                ],
            );
        }
    }
}

pub fn render_community(
    frame: &mut UiFrame<'_>,
    area: Rect,
    window: &CommunityWindow,
    cursor: Option<usize>,
    maps: &DataMaps,
) {
    let meta = community_window_meta(window, maps);
    if area.height < 2 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("게시판: {}", meta.filter_label),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        Rect {
            height: 1,
            ..area
        },
    );
    let body = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    match window.view {
        WindowView::List => {
            let items = meta
                .posts
                .iter()
                .map(|post| {
                    let board = maps.community_boards.get(post.board_slug);
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!(
                                "[{}] ",
                                board.map(|board| board.title).unwrap_or(post.board_slug)
                            ),
                            Style::default().fg(theme::accent()),
                        ),
                        Span::raw(format!("{} ", post.title)),
                        Span::styled(
                            format!("♥{} 💬{}", post.likes, post.comments),
                            Style::default().fg(theme::rgb_to_color((148, 163, 184))),
                        ),
                    ]))
                })
                .collect();
            render_list(frame, body, items, cursor);
        }
        WindowView::Detail => {
            let Some(post) = detail_at(&meta.posts, window.selected_index) else {
                return;
            };
            render_detail(
                frame,
                body,
                vec![
                    Line::from(Span::styled(
                        post.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!(
                        "{} · {} · {}",
                        post.author,
                        post.posted_at,
                        match post.sentiment {
                            Sentiment::Bullish => "강세",
                            Sentiment::Bearish => "약세",
                            Sentiment::Neutral => "중립",
                        }
                    )),
                    Line::from(""),
                    Line::from(post.summary),
                    Line::from(""),
                    Line::from(format!("태그: {}", post.tags.join(", "))),
                ],
            );
        }
    }
}
