//! Sole owner and mutator of the open-window collection.
//!
//! Every operation is total: unknown keys and variant mismatches are silent
//! no-ops, and nothing here returns an error. The only caller is trusted UI
//! event wiring, so idempotent no-ops beat error propagation.

use crate::constants::{
    CASCADE_BASE_X, CASCADE_LANES, CASCADE_STEP_X, CASCADE_STEP_Y, CASCADE_TOP_GAP,
    DEFAULT_CHART_SIZE, DEFAULT_COMMUNITY_SIZE, DEFAULT_EVENTS_SIZE, DEFAULT_NEWS_SIZE,
    DEFAULT_SNS_SIZE,
};

use super::{
    ChartWindow, CommunityWindow, EventsWindow, NewsWindow, Point, Size, SnsWindow, WindowFrame,
    WindowKey, WindowState, WindowView,
};

/// Filter argument mirroring the UI's "all" chip versus a concrete id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPick<'a> {
    All,
    One(&'a str),
}

pub struct WindowManager {
    windows: Vec<WindowState>,
    z_counter: u32,
    nav_height: i32,
}

impl WindowManager {
    pub fn new(nav_height: i32) -> Self {
        Self {
            windows: Vec::new(),
            z_counter: 0,
            nav_height,
        }
    }

    pub fn set_nav_height(&mut self, nav_height: i32) {
        self.nav_height = nav_height;
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    /// Open windows sorted back-to-front by stacking order.
    pub fn stacking_order(&self) -> Vec<&WindowState> {
        let mut ordered: Vec<_> = self.windows.iter().collect();
        ordered.sort_by_key(|window| window.frame().z);
        ordered
    }

    /// The window currently on top of the stack, if any.
    pub fn topmost(&self) -> Option<&WindowState> {
        self.windows.iter().max_by_key(|window| window.frame().z)
    }

    pub fn get(&self, key: &WindowKey) -> Option<&WindowState> {
        self.windows.iter().find(|window| window.key() == *key)
    }

    fn next_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Diagonal cascade: 4 horizontal lanes at a fixed step, vertical offset
    /// linear in the number of currently open windows.
    fn next_position(&self) -> Point {
        let offset = self.windows.len() as i32;
        Point {
            x: CASCADE_BASE_X + (offset % CASCADE_LANES) * CASCADE_STEP_X,
            y: self.nav_height + CASCADE_TOP_GAP + offset * CASCADE_STEP_Y,
        }
    }

    fn update<F>(&mut self, key: &WindowKey, f: F)
    where
        F: FnOnce(&mut WindowState),
    {
        if let Some(window) = self.windows.iter_mut().find(|window| window.key() == *key) {
            f(window);
        }
    }

    pub fn bring_to_front(&mut self, key: &WindowKey) {
        let z = self.next_z();
        self.update(key, |window| window.frame_mut().z = z);
    }

    pub fn handle_move(&mut self, key: &WindowKey, position: Point) {
        self.update(key, |window| window.frame_mut().position = position);
    }

    pub fn handle_resize(&mut self, key: &WindowKey, size: Size) {
        self.update(key, |window| window.frame_mut().size = size);
    }

    pub fn close_window(&mut self, key: &WindowKey) {
        let before = self.windows.len();
        self.windows.retain(|window| window.key() != *key);
        if self.windows.len() != before {
            tracing::debug!(%key, "closed window");
        }
    }

    pub fn open_chart(&mut self, instrument_id: &str) {
        let key = WindowKey::Chart(instrument_id.to_owned());
        if self.get(&key).is_some() {
            self.bring_to_front(&key);
            return;
        }
        let frame = WindowFrame {
            position: self.next_position(),
            size: DEFAULT_CHART_SIZE,
            z: self.next_z(),
        };
        tracing::debug!(%key, "opened window");
        self.windows.push(WindowState::Chart(ChartWindow {
            instrument_id: instrument_id.to_owned(),
            frame,
        }));
    }

    pub fn open_events_window(&mut self) {
        if self.get(&WindowKey::Events).is_some() {
            self.bring_to_front(&WindowKey::Events);
            return;
        }
        let frame = WindowFrame {
            position: self.next_position(),
            size: DEFAULT_EVENTS_SIZE,
            z: self.next_z(),
        };
        tracing::debug!(key = %WindowKey::Events, "opened window");
        self.windows.push(WindowState::Events(EventsWindow {
            frame,
            view: WindowView::List,
            selected_index: None,
        }));
    }

    pub fn open_sns_window(&mut self, pick: FilterPick<'_>, all_platform_ids: &[&str]) {
        let key = WindowKey::Sns;
        let existing = self.windows.iter().find_map(|window| match window {
            WindowState::Sns(sns) => Some(sns),
            _ => None,
        });

        let Some(existing) = existing else {
            let platforms: Vec<String> = match pick {
                FilterPick::All => all_platform_ids.iter().map(|id| (*id).to_owned()).collect(),
                FilterPick::One(id) => vec![id.to_owned()],
            };
            let frame = WindowFrame {
                position: self.next_position(),
                size: DEFAULT_SNS_SIZE,
                z: self.next_z(),
            };
            tracing::debug!(%key, "opened window");
            self.windows.push(WindowState::Sns(SnsWindow {
                frame,
                platforms,
                view: WindowView::List,
                selected_index: None,
            }));
            return;
        };

        let next = match pick {
            FilterPick::All => all_platform_ids.iter().map(|id| (*id).to_owned()).collect(),
            FilterPick::One(id) => toggle_membership(&existing.platforms, id),
        };
        // Catalog order wins over click order, and duplicates drop out.
        let selection = reduce_to_catalog_order(&next, all_platform_ids);

        if selection.is_empty() {
            self.close_window(&key);
            return;
        }

        self.update(&key, |window| {
            if let WindowState::Sns(sns) = window {
                sns.platforms = selection;
                sns.view = WindowView::List;
                sns.selected_index = None;
            }
        });
        self.bring_to_front(&key);
    }

    pub fn open_news_window(&mut self, pick: FilterPick<'_>, all_source_ids: &[&str]) {
        let key = WindowKey::News;
        let existing = self.windows.iter().find_map(|window| match window {
            WindowState::News(news) => Some(news),
            _ => None,
        });

        let Some(existing) = existing else {
            let sources: Vec<String> = match pick {
                FilterPick::All => all_source_ids.iter().map(|id| (*id).to_owned()).collect(),
                FilterPick::One(id) => vec![id.to_owned()],
            };
            let frame = WindowFrame {
                position: self.next_position(),
                size: DEFAULT_NEWS_SIZE,
                z: self.next_z(),
            };
            tracing::debug!(%key, "opened window");
            self.windows.push(WindowState::News(NewsWindow {
                frame,
                sources,
                view: WindowView::List,
                selected_index: None,
            }));
            return;
        };

        let next = match pick {
            FilterPick::All => all_source_ids.iter().map(|id| (*id).to_owned()).collect(),
            FilterPick::One(id) => toggle_membership(&existing.sources, id),
        };
        let selection = reduce_to_catalog_order(&next, all_source_ids);

        if selection.is_empty() {
            self.close_window(&key);
            return;
        }

        self.update(&key, |window| {
            if let WindowState::News(news) = window {
                news.sources = selection;
                news.view = WindowView::List;
                news.selected_index = None;
            }
        });
        self.bring_to_front(&key);
    }

    /// Forces the news selection to a single source, or to the full catalog
    /// when `source_id` is `None`. No toggle semantics.
    pub fn set_news_window_source(
        &mut self,
        key: &WindowKey,
        source_id: Option<&str>,
        all_source_ids: &[&str],
    ) {
        self.update(key, |window| {
            if let WindowState::News(news) = window {
                news.sources = match source_id {
                    Some(id) => vec![id.to_owned()],
                    None => all_source_ids.iter().map(|id| (*id).to_owned()).collect(),
                };
                news.view = WindowView::List;
                news.selected_index = None;
            }
        });
        self.bring_to_front(key);
    }

    pub fn open_community_window(&mut self, pick: FilterPick<'_>) {
        let key = WindowKey::Community;
        let selected_board = match pick {
            FilterPick::All => None,
            FilterPick::One(slug) => Some(slug.to_owned()),
        };

        if self.get(&key).is_none() {
            let frame = WindowFrame {
                position: self.next_position(),
                size: DEFAULT_COMMUNITY_SIZE,
                z: self.next_z(),
            };
            tracing::debug!(%key, "opened window");
            self.windows.push(WindowState::Community(CommunityWindow {
                frame,
                selected_board,
                view: WindowView::List,
                selected_index: None,
            }));
            return;
        }

        self.update(&key, |window| {
            if let WindowState::Community(community) = window {
                community.selected_board = selected_board;
                community.view = WindowView::List;
                community.selected_index = None;
            }
        });
        self.bring_to_front(&key);
    }

    /// Single-select board filter replacement; unlike the SNS/News toggles an
    /// empty filter is a valid "all boards" state.
    pub fn set_community_filter(&mut self, key: &WindowKey, board_slug: Option<&str>) {
        self.update(key, |window| {
            if let WindowState::Community(community) = window {
                community.selected_board = board_slug.map(str::to_owned);
                community.view = WindowView::List;
                community.selected_index = None;
            }
        });
    }

    pub fn open_event_detail(&mut self, key: &WindowKey, index: usize) {
        self.update(key, |window| {
            if let WindowState::Events(events) = window {
                events.view = WindowView::Detail;
                events.selected_index = Some(index);
            }
        });
    }

    pub fn close_event_detail(&mut self, key: &WindowKey) {
        self.update(key, |window| {
            if let WindowState::Events(events) = window {
                events.view = WindowView::List;
                events.selected_index = None;
            }
        });
    }

    pub fn open_sns_detail(&mut self, key: &WindowKey, index: usize) {
        self.update(key, |window| {
            if let WindowState::Sns(sns) = window {
                sns.view = WindowView::Detail;
                sns.selected_index = Some(index);
            }
        });
    }

    pub fn close_sns_detail(&mut self, key: &WindowKey) {
        self.update(key, |window| {
            if let WindowState::Sns(sns) = window {
                sns.view = WindowView::List;
                sns.selected_index = None;
            }
        });
    }

    pub fn open_news_detail(&mut self, key: &WindowKey, index: usize) {
        self.update(key, |window| {
            if let WindowState::News(news) = window {
                news.view = WindowView::Detail;
                news.selected_index = Some(index);
            }
        });
    }

    pub fn close_news_detail(&mut self, key: &WindowKey) {
        self.update(key, |window| {
            if let WindowState::News(news) = window {
                news.view = WindowView::List;
                news.selected_index = None;
            }
        });
    }

    pub fn open_community_detail(&mut self, key: &WindowKey, index: usize) {
        self.update(key, |window| {
            if let WindowState::Community(community) = window {
                community.view = WindowView::Detail;
                community.selected_index = Some(index);
            }
        });
    }

    pub fn close_community_detail(&mut self, key: &WindowKey) {
        self.update(key, |window| {
            if let WindowState::Community(community) = window {
                community.view = WindowView::List;
                community.selected_index = None;
            }
        });
    }
}

fn toggle_membership(current: &[String], id: &str) -> Vec<String> {
    if current.iter().any(|existing| existing == id) {
        current
            .iter()
            .filter(|existing| *existing != id)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(id.to_owned());
        next
    }
}

fn reduce_to_catalog_order(selection: &[String], catalog_ids: &[&str]) -> Vec<String> {
    catalog_ids
        .iter()
        .filter(|id| selection.iter().any(|selected| selected == **id))
        .map(|id| (*id).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_NAV_HEIGHT;

    const PLATFORMS: [&str; 2] = ["x", "facebook"];
    const SOURCES: [&str; 4] = ["reuters", "bloomberg", "yonhap", "nikkei"];

    fn manager() -> WindowManager {
        WindowManager::new(DEFAULT_NAV_HEIGHT)
    }

    fn sns(manager: &WindowManager) -> Option<&SnsWindow> {
        match manager.get(&WindowKey::Sns) {
            Some(WindowState::Sns(window)) => Some(window),
            _ => None,
        }
    }

    fn news(manager: &WindowManager) -> Option<&NewsWindow> {
        match manager.get(&WindowKey::News) {
            Some(WindowState::News(window)) => Some(window),
            _ => None,
        }
    }

    #[test]
    fn reopening_chart_only_raises_z() {
        let mut wm = manager();
        wm.open_chart("bitcoin");
        let first = wm.get(&WindowKey::Chart("bitcoin".into())).unwrap().clone();
        wm.open_chart("bitcoin");
        assert_eq!(wm.windows().len(), 1);
        let second = wm.get(&WindowKey::Chart("bitcoin".into())).unwrap();
        assert!(second.frame().z > first.frame().z);
        assert_eq!(second.frame().position, first.frame().position);
        assert_eq!(second.frame().size, first.frame().size);
    }

    #[test]
    fn chart_windows_cascade_diagonally() {
        let mut wm = manager();
        wm.open_chart("bitcoin");
        wm.open_chart("kospi");
        let a = wm.get(&WindowKey::Chart("bitcoin".into())).unwrap().frame();
        let b = wm.get(&WindowKey::Chart("kospi".into())).unwrap().frame();
        assert_ne!(a.position, b.position);
        assert_eq!(b.position.x - a.position.x, CASCADE_STEP_X);
        assert_eq!(b.position.y - a.position.y, CASCADE_STEP_Y);
    }

    #[test]
    fn cascade_lane_wraps_after_four_windows() {
        let mut wm = manager();
        for id in ["a", "b", "c", "d", "e"] {
            wm.open_chart(id);
        }
        let first = wm.get(&WindowKey::Chart("a".into())).unwrap().frame();
        let fifth = wm.get(&WindowKey::Chart("e".into())).unwrap().frame();
        assert_eq!(first.position.x, fifth.position.x);
        assert!(fifth.position.y > first.position.y);
    }

    #[test]
    fn events_window_is_a_singleton() {
        let mut wm = manager();
        wm.open_events_window();
        wm.open_events_window();
        assert_eq!(wm.windows().len(), 1);
    }

    #[test]
    fn sns_selection_stays_in_catalog_order() {
        let mut wm = manager();
        // Open with facebook only, then toggle x on: click order is
        // facebook-then-x but the stored order must be the catalog's.
        wm.open_sns_window(FilterPick::One("facebook"), &PLATFORMS);
        wm.open_sns_window(FilterPick::One("x"), &PLATFORMS);
        assert_eq!(sns(&wm).unwrap().platforms, vec!["x", "facebook"]);
    }

    #[test]
    fn sns_all_pick_replaces_selection() {
        let mut wm = manager();
        wm.open_sns_window(FilterPick::One("facebook"), &PLATFORMS);
        wm.open_sns_window(FilterPick::All, &PLATFORMS);
        assert_eq!(sns(&wm).unwrap().platforms, vec!["x", "facebook"]);
    }

    #[test]
    fn toggling_last_platform_off_closes_window() {
        let mut wm = manager();
        wm.open_sns_window(FilterPick::One("x"), &PLATFORMS);
        wm.open_sns_window(FilterPick::One("x"), &PLATFORMS);
        assert!(wm.get(&WindowKey::Sns).is_none());
        assert!(wm.windows().is_empty());
    }

    #[test]
    fn sns_toggle_resets_view_and_raises_window() {
        let mut wm = manager();
        wm.open_sns_window(FilterPick::All, &PLATFORMS);
        wm.open_sns_detail(&WindowKey::Sns, 2);
        let z_before = wm.get(&WindowKey::Sns).unwrap().frame().z;
        wm.open_sns_window(FilterPick::One("facebook"), &PLATFORMS);
        let window = sns(&wm).unwrap();
        assert_eq!(window.platforms, vec!["x"]);
        assert_eq!(window.view, WindowView::List);
        assert_eq!(window.selected_index, None);
        assert!(window.frame.z > z_before);
    }

    #[test]
    fn news_selection_mirrors_sns_semantics() {
        let mut wm = manager();
        wm.open_news_window(FilterPick::One("nikkei"), &SOURCES);
        wm.open_news_window(FilterPick::One("reuters"), &SOURCES);
        assert_eq!(news(&wm).unwrap().sources, vec!["reuters", "nikkei"]);
        wm.open_news_window(FilterPick::One("reuters"), &SOURCES);
        wm.open_news_window(FilterPick::One("nikkei"), &SOURCES);
        assert!(wm.get(&WindowKey::News).is_none());
    }

    #[test]
    fn set_news_window_source_forces_selection() {
        let mut wm = manager();
        wm.open_news_window(FilterPick::All, &SOURCES);
        wm.set_news_window_source(&WindowKey::News, Some("yonhap"), &SOURCES);
        assert_eq!(news(&wm).unwrap().sources, vec!["yonhap"]);
        wm.set_news_window_source(&WindowKey::News, None, &SOURCES);
        assert_eq!(news(&wm).unwrap().sources.len(), SOURCES.len());
    }

    #[test]
    fn community_filter_is_single_select() {
        let mut wm = manager();
        wm.open_community_window(FilterPick::One("coin"));
        wm.open_community_window(FilterPick::One("bond"));
        assert_eq!(wm.windows().len(), 1);
        match wm.get(&WindowKey::Community) {
            Some(WindowState::Community(window)) => {
                assert_eq!(window.selected_board.as_deref(), Some("bond"));
            }
            other => panic!("unexpected window: {other:?}"),
        }
        wm.set_community_filter(&WindowKey::Community, None);
        match wm.get(&WindowKey::Community) {
            Some(WindowState::Community(window)) => assert_eq!(window.selected_board, None),
            other => panic!("unexpected window: {other:?}"),
        }
    }

    #[test]
    fn detail_ops_guard_on_window_kind() {
        let mut wm = manager();
        wm.open_events_window();
        // News detail op against the events key is a no-op.
        wm.open_news_detail(&WindowKey::Events, 1);
        match wm.get(&WindowKey::Events) {
            Some(WindowState::Events(window)) => {
                assert_eq!(window.view, WindowView::List);
                assert_eq!(window.selected_index, None);
            }
            other => panic!("unexpected window: {other:?}"),
        }
        wm.open_event_detail(&WindowKey::Events, 1);
        match wm.get(&WindowKey::Events) {
            Some(WindowState::Events(window)) => {
                assert_eq!(window.view, WindowView::Detail);
                assert_eq!(window.selected_index, Some(1));
            }
            other => panic!("unexpected window: {other:?}"),
        }
        wm.close_event_detail(&WindowKey::Events);
        match wm.get(&WindowKey::Events) {
            Some(WindowState::Events(window)) => {
                assert_eq!(window.view, WindowView::List);
                assert_eq!(window.selected_index, None);
            }
            other => panic!("unexpected window: {other:?}"),
        }
    }

    #[test]
    fn mutators_ignore_unknown_keys() {
        let mut wm = manager();
        wm.open_chart("gold");
        let before = wm.windows().to_vec();
        let missing = WindowKey::Chart("unknown".into());
        wm.bring_to_front(&missing);
        wm.handle_move(&missing, Point { x: 1, y: 1 });
        wm.handle_resize(
            &missing,
            Size {
                width: 10,
                height: 10,
            },
        );
        wm.close_window(&missing);
        assert_eq!(wm.windows(), &before[..]);
    }

    #[test]
    fn move_and_resize_replace_fields_directly() {
        let mut wm = manager();
        wm.open_chart("wti");
        let key = WindowKey::Chart("wti".into());
        wm.handle_move(&key, Point { x: -3, y: 40 });
        wm.handle_resize(
            &key,
            Size {
                width: 30,
                height: 9,
            },
        );
        let frame = wm.get(&key).unwrap().frame();
        assert_eq!(frame.position, Point { x: -3, y: 40 });
        assert_eq!(
            frame.size,
            Size {
                width: 30,
                height: 9
            }
        );
    }

    #[test]
    fn stacking_order_tracks_most_recent_action() {
        let mut wm = manager();
        wm.open_chart("bitcoin");
        wm.open_chart("gold");
        wm.open_events_window();
        wm.bring_to_front(&WindowKey::Chart("bitcoin".into()));
        let order: Vec<_> = wm
            .stacking_order()
            .iter()
            .map(|window| window.key().to_string())
            .collect();
        assert_eq!(order, vec!["chart:gold", "events:schedule", "chart:bitcoin"]);
        assert_eq!(
            wm.topmost().unwrap().key(),
            WindowKey::Chart("bitcoin".into())
        );
    }
}
