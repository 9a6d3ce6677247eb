use invest_desk::catalog::DataMaps;
use invest_desk::constants::DEFAULT_NAV_HEIGHT;
use invest_desk::workspace::{
    FilterPick, Point, Size, WindowKey, WindowManager, WindowState, WindowView,
};

fn platform_ids() -> Vec<&'static str> {
    DataMaps::global().all_platform_ids.clone()
}

fn source_ids() -> Vec<&'static str> {
    DataMaps::global().all_news_source_ids.clone()
}

#[test]
fn session_flow_open_filter_detail_close() {
    let mut wm = WindowManager::new(DEFAULT_NAV_HEIGHT);
    let platforms = platform_ids();
    let sources = source_ids();

    // Open a few windows from the menus.
    wm.open_chart("bitcoin");
    wm.open_events_window();
    wm.open_news_window(FilterPick::All, &sources);
    assert_eq!(wm.windows().len(), 3);
    assert_eq!(wm.topmost().unwrap().key(), WindowKey::News);

    // Narrow news down to one source, then read a headline.
    wm.set_news_window_source(&WindowKey::News, Some("yonhap"), &sources);
    wm.open_news_detail(&WindowKey::News, 1);
    match wm.get(&WindowKey::News) {
        Some(WindowState::News(news)) => {
            assert_eq!(news.sources, vec!["yonhap"]);
            assert_eq!(news.view, WindowView::Detail);
            assert_eq!(news.selected_index, Some(1));
        }
        other => panic!("unexpected window: {other:?}"),
    }

    // Toggling another source from the menu resets the detail view.
    wm.open_news_window(FilterPick::One("reuters"), &sources);
    match wm.get(&WindowKey::News) {
        Some(WindowState::News(news)) => {
            assert_eq!(news.sources, vec!["reuters", "yonhap"]);
            assert_eq!(news.view, WindowView::List);
            assert_eq!(news.selected_index, None);
        }
        other => panic!("unexpected window: {other:?}"),
    }

    // Toggle both sources off; the window closes itself.
    wm.open_news_window(FilterPick::One("reuters"), &sources);
    wm.open_news_window(FilterPick::One("yonhap"), &sources);
    assert!(wm.get(&WindowKey::News).is_none());
    assert_eq!(wm.windows().len(), 2);

    // The SNS window follows the same lifecycle independently.
    wm.open_sns_window(FilterPick::One("x"), &platforms);
    wm.open_sns_window(FilterPick::One("x"), &platforms);
    assert!(wm.get(&WindowKey::Sns).is_none());
}

#[test]
fn drag_and_resize_survive_refocus() {
    let mut wm = WindowManager::new(DEFAULT_NAV_HEIGHT);
    wm.open_chart("gold");
    wm.open_chart("kospi");

    let key = WindowKey::Chart("gold".into());
    wm.handle_move(&key, Point { x: -5, y: 12 });
    wm.handle_resize(
        &key,
        Size {
            width: 33,
            height: 11,
        },
    );
    wm.bring_to_front(&key);

    let frame = wm.get(&key).unwrap().frame();
    assert_eq!(frame.position, Point { x: -5, y: 12 });
    assert_eq!(
        frame.size,
        Size {
            width: 33,
            height: 11
        }
    );
    assert_eq!(wm.topmost().unwrap().key(), key);
}

#[test]
fn every_kind_cascades_from_the_same_origin_rules() {
    let mut wm = WindowManager::new(DEFAULT_NAV_HEIGHT);
    let platforms = platform_ids();
    wm.open_chart("bitcoin");
    wm.open_events_window();
    wm.open_sns_window(FilterPick::All, &platforms);
    wm.open_community_window(FilterPick::All);

    let positions: Vec<Point> = wm
        .windows()
        .iter()
        .map(|window| window.frame().position)
        .collect();
    // Strictly descending staircase: each later window sits lower.
    for pair in positions.windows(2) {
        assert!(pair[1].y > pair[0].y);
    }
    // No two open windows share a position.
    for (i, a) in positions.iter().enumerate() {
        for b in positions.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
