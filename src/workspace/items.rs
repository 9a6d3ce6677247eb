//! Pure projections: flattened display lists and header metadata derived
//! from a window's filter selection plus the static catalogs.
//!
//! Nothing here mutates state. Label and subtitle copy must match the UI
//! strings exactly; parity tests pin them.

use crate::catalog::{
    CommunityPost, DataMaps, SocialPost, featured_community_posts, news_sources, social_platforms,
};

use super::{CommunityWindow, NewsWindow, SnsWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnsListItem {
    pub post: &'static SocialPost,
    pub platform_id: &'static str,
    pub platform_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsListItem {
    /// `<sourceId>-<index>`, stable while the source's headline list is.
    pub id: String,
    pub title: &'static str,
    pub summary: &'static str,
    pub time_ago: &'static str,
    pub source_id: &'static str,
    pub source_label: &'static str,
    pub region: &'static str,
}

/// Posts across the selected platforms, iterated in catalog order (not
/// selection order). An empty selection is treated as "all".
pub fn sns_items(selected_platform_ids: &[String], all_platform_ids: &[&str]) -> Vec<SnsListItem> {
    let selected: Vec<&str> = if selected_platform_ids.is_empty() {
        all_platform_ids.to_vec()
    } else {
        selected_platform_ids.iter().map(String::as_str).collect()
    };
    let mut items = Vec::new();
    for platform in social_platforms() {
        if !selected.contains(&platform.id) {
            continue;
        }
        for post in platform.posts {
            items.push(SnsListItem {
                post,
                platform_id: platform.id,
                platform_label: platform.label,
            });
        }
    }
    items
}

pub fn news_items(selected_source_ids: &[String]) -> Vec<NewsListItem> {
    let all_selected = selected_source_ids.is_empty();
    let mut items = Vec::new();
    for source in news_sources() {
        if !all_selected && !selected_source_ids.iter().any(|id| id == source.id) {
            continue;
        }
        for (index, headline) in source.headlines.iter().enumerate() {
            items.push(NewsListItem {
                id: format!("{}-{}", source.id, index),
                title: headline.title,
                summary: headline.summary,
                time_ago: headline.time_ago,
                source_id: source.id,
                source_label: source.label,
                region: source.region,
            });
        }
    }
    items
}

pub fn community_items(board_slug: Option<&str>) -> Vec<&'static CommunityPost> {
    match board_slug {
        None => featured_community_posts().iter().collect(),
        Some(slug) => featured_community_posts()
            .iter()
            .filter(|post| post.board_slug == slug)
            .collect(),
    }
}

/// Bounds-checked detail accessor: `None` index or an out-of-range index
/// resolves to `None` rather than an error.
pub fn detail_at<T>(items: &[T], index: Option<usize>) -> Option<&T> {
    index.and_then(|index| items.get(index))
}

#[derive(Debug, Clone)]
pub struct SnsWindowMeta {
    pub has_all_platforms: bool,
    pub platform_labels: Vec<String>,
    pub primary_platform_label: String,
    pub platform_subtitle: String,
    pub items: Vec<SnsListItem>,
}

#[derive(Debug, Clone)]
pub struct NewsWindowMeta {
    pub has_all_sources: bool,
    pub source_labels: Vec<String>,
    pub primary_source_label: String,
    pub source_subtitle: String,
    pub items: Vec<NewsListItem>,
}

#[derive(Debug, Clone)]
pub struct CommunityWindowMeta {
    pub board_filter: Option<String>,
    pub filter_label: String,
    pub posts: Vec<&'static CommunityPost>,
}

/// Primary label rule shared by SNS and News headers: up to two labels are
/// joined verbatim, more collapse to the first two plus an `외 N곳` suffix.
fn primary_label(labels: &[String]) -> String {
    if labels.len() <= 2 {
        labels.join(", ")
    } else {
        format!("{} 외 {}곳", labels[..2].join(", "), labels.len() - 2)
    }
}

pub fn sns_window_meta(window: &SnsWindow, maps: &DataMaps) -> SnsWindowMeta {
    let selected = &window.platforms;
    let has_all_platforms = selected.len() == maps.all_platform_ids.len();
    // Unknown ids degrade to the raw id so a stale selection stays visible.
    let platform_labels: Vec<String> = selected
        .iter()
        .map(|id| {
            maps.sns_platforms
                .get(id.as_str())
                .map(|platform| platform.label.to_owned())
                .unwrap_or_else(|| id.clone())
        })
        .collect();
    let single_platform = if !has_all_platforms && selected.len() == 1 {
        maps.sns_platforms.get(selected[0].as_str()).copied()
    } else {
        None
    };
    let primary_platform_label = if has_all_platforms {
        "전체".to_owned()
    } else {
        primary_label(&platform_labels)
    };
    let platform_subtitle = if has_all_platforms {
        "모든 플랫폼의 실시간 커뮤니티 업데이트를 한 곳에서 확인하세요.".to_owned()
    } else if let Some(platform) = single_platform {
        platform.description.to_owned()
    } else {
        format!(
            "선택한 {}개 플랫폼의 실시간 커뮤니티 업데이트입니다.",
            platform_labels.len()
        )
    };
    let items = sns_items(selected, &maps.all_platform_ids);
    SnsWindowMeta {
        has_all_platforms,
        platform_labels,
        primary_platform_label,
        platform_subtitle,
        items,
    }
}

pub fn news_window_meta(window: &NewsWindow, maps: &DataMaps) -> NewsWindowMeta {
    let selected = &window.sources;
    let has_all_sources = selected.len() == maps.all_news_source_ids.len();
    let source_labels: Vec<String> = selected
        .iter()
        .map(|id| {
            maps.news_sources
                .get(id.as_str())
                .map(|source| source.label.to_owned())
                .unwrap_or_else(|| id.clone())
        })
        .collect();
    let single_source = if !has_all_sources && selected.len() == 1 {
        maps.news_sources.get(selected[0].as_str()).copied()
    } else {
        None
    };
    let primary_source_label = if has_all_sources {
        "전체".to_owned()
    } else {
        primary_label(&source_labels)
    };
    let source_subtitle = if has_all_sources {
        "신뢰도 높은 언론사의 최신 헤드라인을 모았습니다.".to_owned()
    } else if let Some(source) = single_source {
        format!("{} 주요 헤드라인", source.region)
    } else {
        format!(
            "선택한 {}개 언론사의 최신 헤드라인을 모았습니다.",
            source_labels.len()
        )
    };
    let items = news_items(selected);
    NewsWindowMeta {
        has_all_sources,
        source_labels,
        primary_source_label,
        source_subtitle,
        items,
    }
}

pub fn community_window_meta(window: &CommunityWindow, maps: &DataMaps) -> CommunityWindowMeta {
    let board_filter = window.selected_board.clone();
    let posts = community_items(board_filter.as_deref());
    let filter_label = board_filter
        .as_deref()
        .and_then(|slug| maps.community_boards.get(slug))
        .map(|board| board.title.to_owned())
        .unwrap_or_else(|| "전체".to_owned());
    CommunityWindowMeta {
        board_filter,
        filter_label,
        posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{Point, Size, WindowFrame, WindowView};

    fn frame() -> WindowFrame {
        WindowFrame {
            position: Point { x: 0, y: 0 },
            size: Size {
                width: 40,
                height: 15,
            },
            z: 1,
        }
    }

    fn sns_window(platforms: &[&str]) -> SnsWindow {
        SnsWindow {
            frame: frame(),
            platforms: platforms.iter().map(|id| (*id).to_owned()).collect(),
            view: WindowView::List,
            selected_index: None,
        }
    }

    fn news_window(sources: &[&str]) -> NewsWindow {
        NewsWindow {
            frame: frame(),
            sources: sources.iter().map(|id| (*id).to_owned()).collect(),
            view: WindowView::List,
            selected_index: None,
        }
    }

    #[test]
    fn sns_items_follow_catalog_order_not_selection_order() {
        let maps = DataMaps::build();
        let reversed = ["facebook".to_owned(), "x".to_owned()];
        let items = sns_items(&reversed, &maps.all_platform_ids);
        // x posts come first because the catalog lists x first.
        assert_eq!(items.first().unwrap().platform_id, "x");
        assert_eq!(items.last().unwrap().platform_id, "facebook");
    }

    #[test]
    fn empty_sns_selection_means_all() {
        let maps = DataMaps::build();
        let all = sns_items(&[], &maps.all_platform_ids);
        let explicit: Vec<String> = maps
            .all_platform_ids
            .iter()
            .map(|id| (*id).to_owned())
            .collect();
        assert_eq!(all.len(), sns_items(&explicit, &maps.all_platform_ids).len());
    }

    #[test]
    fn news_items_synthesize_positional_ids() {
        let items = news_items(&["yonhap".to_owned()]);
        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["yonhap-0", "yonhap-1", "yonhap-2"]);
        assert!(items.iter().all(|item| item.region == "한국"));
    }

    #[test]
    fn community_items_filter_by_board() {
        let all = community_items(None);
        assert_eq!(all.len(), featured_community_posts().len());
        let coin = community_items(Some("coin"));
        assert!(coin.iter().all(|post| post.board_slug == "coin"));
        assert_eq!(coin.len(), 1);
        assert!(community_items(Some("no-such-board")).is_empty());
    }

    #[test]
    fn detail_at_is_bounds_checked() {
        let items = vec!["a", "b"];
        assert_eq!(detail_at(&items, None), None);
        assert_eq!(detail_at::<&str>(&[], Some(0)), None);
        assert_eq!(detail_at(&items, Some(1)), Some(&"b"));
        assert_eq!(detail_at(&items, Some(2)), None);
    }

    #[test]
    fn sns_meta_all_platforms_uses_all_label() {
        let maps = DataMaps::build();
        let meta = sns_window_meta(&sns_window(&["x", "facebook"]), &maps);
        assert!(meta.has_all_platforms);
        assert_eq!(meta.primary_platform_label, "전체");
        assert_eq!(
            meta.platform_subtitle,
            "모든 플랫폼의 실시간 커뮤니티 업데이트를 한 곳에서 확인하세요."
        );
    }

    #[test]
    fn sns_meta_single_platform_uses_its_description() {
        let maps = DataMaps::build();
        let meta = sns_window_meta(&sns_window(&["x"]), &maps);
        assert!(!meta.has_all_platforms);
        assert_eq!(meta.primary_platform_label, "X (Twitter)");
        assert_eq!(
            meta.platform_subtitle,
            "실시간 글로벌 인플루언서 메시지를 큐레이션합니다."
        );
    }

    #[test]
    fn sns_meta_unknown_id_falls_back_to_raw_id() {
        let maps = DataMaps::build();
        let meta = sns_window_meta(&sns_window(&["ghost"]), &maps);
        assert_eq!(meta.platform_labels, vec!["ghost".to_owned()]);
        assert_eq!(meta.primary_platform_label, "ghost");
    }

    #[test]
    fn news_meta_collapses_long_selections() {
        let maps = DataMaps::build();
        let meta = news_window_meta(&news_window(&["reuters", "bloomberg", "ft"]), &maps);
        assert_eq!(meta.primary_source_label, "로이터, 블룸버그 외 1곳");
        assert_eq!(
            meta.source_subtitle,
            "선택한 3개 언론사의 최신 헤드라인을 모았습니다."
        );
    }

    #[test]
    fn news_meta_two_sources_join_verbatim() {
        let maps = DataMaps::build();
        let meta = news_window_meta(&news_window(&["reuters", "bloomberg"]), &maps);
        assert_eq!(meta.primary_source_label, "로이터, 블룸버그");
    }

    #[test]
    fn news_meta_single_source_names_its_region() {
        let maps = DataMaps::build();
        let meta = news_window_meta(&news_window(&["nikkei"]), &maps);
        assert_eq!(meta.source_subtitle, "일본 주요 헤드라인");
    }

    #[test]
    fn community_meta_resolves_board_title() {
        let maps = DataMaps::build();
        let mut window = CommunityWindow {
            frame: frame(),
            selected_board: Some("coin".to_owned()),
            view: WindowView::List,
            selected_index: None,
        };
        let meta = community_window_meta(&window, &maps);
        assert_eq!(meta.filter_label, "코인");
        assert_eq!(meta.posts.len(), 1);

        window.selected_board = None;
        let meta = community_window_meta(&window, &maps);
        assert_eq!(meta.filter_label, "전체");
        assert_eq!(meta.posts.len(), featured_community_posts().len());
    }
}
