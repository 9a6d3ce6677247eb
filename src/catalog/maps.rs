//! Eager id → record lookup tables over the static catalogs.
//!
//! The catalogs never change at runtime, so the tables are built once and
//! shared for the whole session via [`DataMaps::global`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::community::{CommunityBoard, community_boards};
use super::instruments::{Instrument, instruments};
use super::news::{NewsSource, news_sources};
use super::social::{SocialPlatform, social_platforms};
use crate::theme;

/// Per-source display record for the news publisher strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsPublisher {
    pub id: &'static str,
    pub label: &'static str,
    pub region: &'static str,
    pub accent: (u8, u8, u8),
}

#[derive(Debug)]
pub struct DataMaps {
    pub instruments: BTreeMap<&'static str, &'static Instrument>,
    pub sns_platforms: BTreeMap<&'static str, &'static SocialPlatform>,
    pub all_platform_ids: Vec<&'static str>,
    pub news_sources: BTreeMap<&'static str, &'static NewsSource>,
    pub all_news_source_ids: Vec<&'static str>,
    pub news_publishers: Vec<NewsPublisher>,
    pub community_boards: BTreeMap<&'static str, &'static CommunityBoard>,
    pub boards_by_activity: Vec<&'static CommunityBoard>,
}

static GLOBAL: LazyLock<DataMaps> = LazyLock::new(DataMaps::build);

impl DataMaps {
    pub fn build() -> Self {
        let instruments = instruments()
            .iter()
            .map(|instrument| (instrument.id, instrument))
            .collect();
        let sns_platforms = social_platforms()
            .iter()
            .map(|platform| (platform.id, platform))
            .collect();
        let all_platform_ids = social_platforms()
            .iter()
            .map(|platform| platform.id)
            .collect();
        let news_sources_map = news_sources()
            .iter()
            .map(|source| (source.id, source))
            .collect();
        let all_news_source_ids = news_sources().iter().map(|source| source.id).collect();
        let news_publishers = news_sources()
            .iter()
            .map(|source| NewsPublisher {
                id: source.id,
                label: source.label,
                region: source.region,
                accent: theme::news_region_accent(source.region),
            })
            .collect();
        let community_boards_map = community_boards()
            .iter()
            .map(|board| (board.slug, board))
            .collect();
        let mut boards_by_activity: Vec<_> = community_boards().iter().collect();
        boards_by_activity.sort_by(|a, b| b.posts_today.cmp(&a.posts_today));

        Self {
            instruments,
            sns_platforms,
            all_platform_ids,
            news_sources: news_sources_map,
            all_news_source_ids,
            news_publishers,
            community_boards: community_boards_map,
            boards_by_activity,
        }
    }

    pub fn global() -> &'static DataMaps {
        &GLOBAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ids_preserve_catalog_order() {
        let maps = DataMaps::build();
        let catalog_ids: Vec<_> = social_platforms().iter().map(|p| p.id).collect();
        assert_eq!(maps.all_platform_ids, catalog_ids);
    }

    #[test]
    fn lookups_resolve_catalog_entries() {
        let maps = DataMaps::build();
        assert_eq!(maps.instruments["bitcoin"].symbol, "BTC");
        assert_eq!(maps.sns_platforms["x"].label, "X (Twitter)");
        assert_eq!(maps.news_sources["yonhap"].region, "한국");
        assert_eq!(maps.community_boards["coin"].title, "코인");
    }

    #[test]
    fn boards_sorted_by_daily_activity() {
        let maps = DataMaps::build();
        for pair in maps.boards_by_activity.windows(2) {
            assert!(pair[0].posts_today >= pair[1].posts_today);
        }
        assert_eq!(maps.boards_by_activity[0].slug, "kr-stock");
    }

    #[test]
    fn publishers_carry_region_accents() {
        let maps = DataMaps::build();
        let yonhap = maps
            .news_publishers
            .iter()
            .find(|p| p.id == "yonhap")
            .unwrap();
        assert_eq!(yonhap.accent, crate::theme::news_region_accent("한국"));
    }
}
