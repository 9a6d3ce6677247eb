//! Application state and event routing: wires the navigation bar, the menu
//! preview, and the window manager into one handler driven by the event
//! loop, plus the compositor that draws everything back-to-front.

use std::time::Instant;

use chrono::NaiveDateTime;
use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::catalog::{DataMaps, upcoming_events};
use crate::components::{MenuEntry, MenuPreview, WindowChrome, WindowHit, chart, windows};
use crate::constants::{DEFAULT_NAV_HEIGHT, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::event_loop::ControlFlow;
use crate::keybindings::{Action, KeyBindings};
use crate::nav::{Mode, Navigation, Section};
use crate::panel::{NavBar, NavHit};
use crate::theme::{self, ThemeMode, ThemeStore};
use crate::ui::UiFrame;
use crate::workspace::items::{community_items, news_items, sns_items};
use crate::workspace::{FilterPick, Point, Size, WindowKey, WindowManager, WindowState, WindowView};

#[derive(Debug, Clone)]
enum DragState {
    Move { key: WindowKey, grab: (i32, i32) },
    Resize { key: WindowKey },
}

pub struct App {
    maps: &'static DataMaps,
    wm: WindowManager,
    nav: Navigation,
    nav_bar: NavBar,
    menu: MenuPreview,
    bindings: KeyBindings,
    theme_store: ThemeStore,
    theme_mode: ThemeMode,
    /// Keyboard list cursor for the focused window's list view.
    cursor: Option<usize>,
    drag: Option<DragState>,
}

impl App {
    pub fn new(theme_store: ThemeStore, theme_mode: ThemeMode) -> Self {
        Self {
            maps: DataMaps::global(),
            wm: WindowManager::new(DEFAULT_NAV_HEIGHT),
            nav: Navigation::new(),
            nav_bar: NavBar::new(),
            menu: MenuPreview::new(),
            bindings: KeyBindings::default(),
            theme_store,
            theme_mode,
            cursor: None,
            drag: None,
        }
    }

    pub fn initial_mode(&mut self, mode: Mode) {
        self.nav.set_mode(mode);
    }

    pub fn window_manager(&self) -> &WindowManager {
        &self.wm
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    fn now() -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    pub fn handle_event(&mut self, event: Option<&Event>) -> ControlFlow {
        match event {
            None => {
                self.nav.tick(Instant::now());
                ControlFlow::Continue
            }
            Some(Event::Key(key)) => self.handle_key(key),
            Some(Event::Mouse(mouse)) => {
                self.handle_mouse(mouse);
                ControlFlow::Continue
            }
            Some(_) => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        let Some(action) = self.bindings.action_for_key(key) else {
            return ControlFlow::Continue;
        };
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::Back => self.handle_back(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleMode => {
                let next = match self.nav.mode() {
                    Mode::General => Mode::Pro,
                    Mode::Pro => Mode::General,
                };
                self.nav.set_mode(next);
            }
            Action::CloseFocused => {
                if let Some(key) = self.wm.topmost().map(WindowState::key) {
                    self.wm.close_window(&key);
                    self.cursor = None;
                }
            }
            Action::FocusNext => {
                if let Some(key) = self.wm.stacking_order().first().map(|w| w.key()) {
                    self.wm.bring_to_front(&key);
                    self.cursor = None;
                }
            }
            Action::FocusPrev => {
                let order = self.wm.stacking_order();
                if order.len() >= 2 {
                    let key = order[order.len() - 2].key();
                    self.wm.bring_to_front(&key);
                    self.cursor = None;
                }
            }
            Action::SectionChart => self.nav.handle_nav_click(Section::Chart),
            Action::SectionEvents => self.nav.handle_nav_click(Section::Events),
            Action::SectionSns => self.nav.handle_nav_click(Section::Sns),
            Action::SectionNews => self.nav.handle_nav_click(Section::News),
            Action::SectionCommunity => self.nav.handle_nav_click(Section::Community),
            Action::SelectDown => self.move_cursor(1),
            Action::SelectUp => self.move_cursor(-1),
            Action::OpenDetail => self.open_detail_at_cursor(),
        }
        ControlFlow::Continue
    }

    fn handle_back(&mut self) {
        if let Some(window) = self.wm.topmost() {
            let key = window.key();
            let in_detail = matches!(
                window,
                WindowState::Events(w) if w.view == WindowView::Detail
            ) || matches!(window, WindowState::Sns(w) if w.view == WindowView::Detail)
                || matches!(window, WindowState::News(w) if w.view == WindowView::Detail)
                || matches!(window, WindowState::Community(w) if w.view == WindowView::Detail);
            if in_detail {
                match key {
                    WindowKey::Events => self.wm.close_event_detail(&key),
                    WindowKey::Sns => self.wm.close_sns_detail(&key),
                    WindowKey::News => self.wm.close_news_detail(&key),
                    WindowKey::Community => self.wm.close_community_detail(&key),
                    WindowKey::Chart(_) => {}
                }
                return;
            }
        }
        self.nav.dismiss_menu();
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        if let Err(err) = self.theme_store.save(self.theme_mode) {
            tracing::warn!(%err, "failed to persist theme mode");
        }
    }

    fn topmost_item_count(&self) -> usize {
        let Some(window) = self.wm.topmost() else {
            return 0;
        };
        self.item_count(window)
    }

    fn item_count(&self, window: &WindowState) -> usize {
        match window {
            WindowState::Chart(_) => 0,
            WindowState::Events(_) => upcoming_events(Self::now()).len(),
            WindowState::Sns(w) => sns_items(&w.platforms, &self.maps.all_platform_ids).len(),
            WindowState::News(w) => news_items(&w.sources).len(),
            WindowState::Community(w) => community_items(w.selected_board.as_deref()).len(),
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let count = self.topmost_item_count();
        if count == 0 {
            self.cursor = None;
            return;
        }
        let current = self.cursor.unwrap_or(0) as i32;
        let next = (current + delta).clamp(0, count as i32 - 1);
        self.cursor = Some(next as usize);
    }

    fn open_detail_at_cursor(&mut self) {
        let Some(index) = self.cursor else {
            return;
        };
        let Some(key) = self.wm.topmost().map(WindowState::key) else {
            return;
        };
        self.open_detail(&key, index);
    }

    fn open_detail(&mut self, key: &WindowKey, index: usize) {
        match key {
            WindowKey::Events => self.wm.open_event_detail(key, index),
            WindowKey::Sns => self.wm.open_sns_detail(key, index),
            WindowKey::News => self.wm.open_news_detail(key, index),
            WindowKey::Community => self.wm.open_community_detail(key, index),
            WindowKey::Chart(_) => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_down(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.handle_drag(mouse.column as i32, mouse.row as i32);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag = None;
            }
            MouseEventKind::Moved => {
                self.handle_pointer_moved(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn handle_pointer_moved(&mut self, column: u16, row: u16) {
        if let Some(NavHit::Section(section)) = self.nav_bar.hit_test(column, row) {
            self.nav.handle_nav_pointer_enter(section);
        } else if self.nav_bar.contains(column, row)
            || (self.nav.open_menu().is_some() && self.menu.contains(column, row))
        {
            self.nav.cancel_hover_hide();
        } else if self.nav.open_menu().is_some() {
            self.nav.schedule_hover_hide(Instant::now());
        }
    }

    fn handle_left_down(&mut self, column: u16, row: u16) {
        if self.nav.open_menu().is_some()
            && let Some(entry) = self.menu.hit_test(column, row)
        {
            self.activate_menu_entry(entry);
            return;
        }
        if let Some(hit) = self.nav_bar.hit_test(column, row) {
            match hit {
                NavHit::Logo => self.nav.handle_logo_click(),
                NavHit::Mode(mode) => self.nav.set_mode(mode),
                NavHit::Section(section) => self.nav.handle_nav_click(section),
                NavHit::ThemeToggle => self.toggle_theme(),
            }
            return;
        }
        if self.nav_bar.contains(column, row) {
            return;
        }
        self.nav.dismiss_menu();

        let canvas = (column as i32, row as i32);
        let hit = self
            .wm
            .stacking_order()
            .into_iter()
            .rev()
            .find_map(|window| {
                WindowChrome::hit(window.frame(), canvas.0, canvas.1)
                    .map(|hit| (window.key(), *window.frame(), hit))
            });
        let Some((key, frame, hit)) = hit else {
            return;
        };
        match hit {
            WindowHit::Close => {
                self.wm.close_window(&key);
                self.cursor = None;
            }
            WindowHit::Header => {
                self.focus(&key);
                self.drag = Some(DragState::Move {
                    key,
                    grab: (canvas.0 - frame.position.x, canvas.1 - frame.position.y),
                });
            }
            WindowHit::ResizeGrip => {
                self.focus(&key);
                self.drag = Some(DragState::Resize { key });
            }
            WindowHit::Body => {
                self.focus(&key);
                self.handle_body_click(&key, canvas.1);
            }
        }
    }

    fn focus(&mut self, key: &WindowKey) {
        let already_top = self.wm.topmost().map(WindowState::key).as_ref() == Some(key);
        if !already_top {
            self.cursor = None;
        }
        self.wm.bring_to_front(key);
    }

    /// Maps a click row inside a list-view body to an item index and opens
    /// its detail. Chart bodies have no items.
    fn handle_body_click(&mut self, key: &WindowKey, row: i32) {
        let Some(window) = self.wm.get(key) else {
            return;
        };
        let header_rows = match window {
            WindowState::Chart(_) => return,
            WindowState::Events(w) => {
                if w.view != WindowView::List {
                    return;
                }
                2
            }
            WindowState::Sns(w) => {
                if w.view != WindowView::List {
                    return;
                }
                3
            }
            WindowState::News(w) => {
                if w.view != WindowView::List {
                    return;
                }
                3
            }
            WindowState::Community(w) => {
                if w.view != WindowView::List {
                    return;
                }
                3
            }
        };
        let count = self.item_count(window);
        let index = row - window.frame().position.y - header_rows;
        if index >= 0 && (index as usize) < count {
            self.open_detail(key, index as usize);
        }
    }

    fn handle_drag(&mut self, column: i32, row: i32) {
        match self.drag.clone() {
            Some(DragState::Move { key, grab }) => {
                self.wm.handle_move(
                    &key,
                    Point {
                        x: column - grab.0,
                        y: row - grab.1,
                    },
                );
            }
            Some(DragState::Resize { key }) => {
                if let Some(window) = self.wm.get(&key) {
                    let position = window.frame().position;
                    let width = (column - position.x + 1).max(MIN_WINDOW_WIDTH as i32) as u16;
                    let height = (row - position.y + 1).max(MIN_WINDOW_HEIGHT as i32) as u16;
                    self.wm.handle_resize(&key, Size { width, height });
                }
            }
            None => {}
        }
    }

    fn activate_menu_entry(&mut self, entry: MenuEntry) {
        self.cursor = None;
        match entry {
            MenuEntry::OpenChart(id) => {
                self.wm.open_chart(id);
                self.nav.dismiss_menu();
            }
            MenuEntry::OpenEvents => {
                self.wm.open_events_window();
                self.nav.dismiss_menu();
            }
            // Filter entries keep the menu open so several platforms or
            // sources can be toggled in a row.
            MenuEntry::SnsAll => {
                self.wm
                    .open_sns_window(FilterPick::All, &self.maps.all_platform_ids);
            }
            MenuEntry::SnsPlatform(id) => {
                self.wm
                    .open_sns_window(FilterPick::One(id), &self.maps.all_platform_ids);
            }
            MenuEntry::NewsAll => {
                self.wm
                    .open_news_window(FilterPick::All, &self.maps.all_news_source_ids);
            }
            MenuEntry::NewsSource(id) => {
                self.wm
                    .open_news_window(FilterPick::One(id), &self.maps.all_news_source_ids);
            }
            MenuEntry::CommunityAll => {
                self.wm.open_community_window(FilterPick::All);
            }
            MenuEntry::CommunityBoard(slug) => {
                self.wm.open_community_window(FilterPick::One(slug));
            }
        }
    }

    fn window_title(&self, window: &WindowState) -> String {
        match window {
            WindowState::Chart(w) => self
                .maps
                .instruments
                .get(w.instrument_id.as_str())
                .map(|instrument| format!("{} ({})", instrument.name, instrument.symbol))
                .unwrap_or_else(|| w.instrument_id.clone()),
            WindowState::Events(_) => "경제 이벤트".to_owned(),
            WindowState::Sns(_) => "SNS".to_owned(),
            WindowState::News(_) => "뉴스".to_owned(),
            WindowState::Community(_) => "커뮤니티".to_owned(),
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let screen = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::nav_bg(self.theme_mode))),
            screen,
        );

        let nav_area = Rect {
            x: screen.x,
            y: screen.y,
            width: screen.width,
            height: (DEFAULT_NAV_HEIGHT as u16).min(screen.height),
        };
        self.wm.set_nav_height(nav_area.height as i32);

        let now = Self::now();
        let topmost = self.wm.topmost().map(WindowState::key);
        for window in self.wm.stacking_order() {
            let size = window.frame().size;
            if size.width < 2 || size.height < 3 {
                continue;
            }
            let area = Rect {
                x: 0,
                y: 0,
                width: size.width,
                height: size.height,
            };
            let mut buf = Buffer::empty(area);
            let focused = topmost.as_ref() == Some(&window.key());
            let title = self.window_title(window);
            let body = WindowChrome::render(&mut buf, &title, focused);
            let cursor = if focused { self.cursor } else { None };
            {
                let mut offscreen = UiFrame::from_parts(area, &mut buf);
                match window {
                    WindowState::Chart(w) => {
                        if let Some(instrument) = self.maps.instruments.get(w.instrument_id.as_str())
                        {
                            chart::render(&mut offscreen, body, instrument);
                        }
                    }
                    WindowState::Events(w) => {
                        windows::render_events(&mut offscreen, body, w, cursor, now);
                    }
                    WindowState::Sns(w) => {
                        windows::render_sns(&mut offscreen, body, w, cursor, self.maps);
                    }
                    WindowState::News(w) => {
                        windows::render_news(&mut offscreen, body, w, cursor, self.maps);
                    }
                    WindowState::Community(w) => {
                        windows::render_community(&mut offscreen, body, w, cursor, self.maps);
                    }
                }
            }
            frame.blit_window(&buf, window.frame().position);
        }

        self.nav_bar
            .render(frame, nav_area, &self.nav, self.theme_mode);
        if let Some(section) = self.nav.open_menu() {
            let anchor_x = self.nav_bar.section_anchor(section).unwrap_or(nav_area.x);
            self.menu.render(
                frame,
                screen,
                anchor_x,
                nav_area.y + nav_area.height,
                section,
                self.maps,
                now,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let dir = std::env::temp_dir().join("invest-desk-app-test-theme");
        App::new(ThemeStore::new(dir), ThemeMode::Dark)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(matches!(app.handle_event(Some(&key)), ControlFlow::Quit));
    }

    #[test]
    fn menu_entry_opens_and_toggles_windows() {
        let mut app = app();
        app.activate_menu_entry(MenuEntry::SnsPlatform("x"));
        assert!(app.wm.get(&WindowKey::Sns).is_some());
        app.activate_menu_entry(MenuEntry::SnsPlatform("x"));
        assert!(app.wm.get(&WindowKey::Sns).is_none());
    }

    #[test]
    fn escape_leaves_detail_before_dismissing_menu() {
        let mut app = app();
        app.activate_menu_entry(MenuEntry::OpenEvents);
        app.cursor = Some(1);
        app.open_detail_at_cursor();
        match app.wm.get(&WindowKey::Events) {
            Some(WindowState::Events(w)) => assert_eq!(w.view, WindowView::Detail),
            other => panic!("unexpected window: {other:?}"),
        }
        app.handle_back();
        match app.wm.get(&WindowKey::Events) {
            Some(WindowState::Events(w)) => assert_eq!(w.view, WindowView::List),
            other => panic!("unexpected window: {other:?}"),
        }
    }

    #[test]
    fn cursor_clamps_to_item_range() {
        let mut app = app();
        app.activate_menu_entry(MenuEntry::CommunityAll);
        app.move_cursor(-5);
        assert_eq!(app.cursor, Some(0));
        for _ in 0..100 {
            app.move_cursor(1);
        }
        let count = app.topmost_item_count();
        assert_eq!(app.cursor, Some(count - 1));
    }

    #[test]
    fn focus_change_resets_cursor() {
        let mut app = app();
        app.activate_menu_entry(MenuEntry::CommunityAll);
        app.move_cursor(1);
        assert!(app.cursor.is_some());
        app.activate_menu_entry(MenuEntry::OpenEvents);
        // Opening a new window moved focus; the cursor was reset.
        assert_eq!(app.cursor, None);
    }
}
