//! Static reference catalogs and the lookup tables derived from them.
//!
//! Every catalog is hand-authored mock content compiled into the binary; the
//! core treats it as immutable for the lifetime of the session. Derived
//! structures (`maps::DataMaps`, the sorted event schedule) are built once
//! and never invalidated.

pub mod community;
pub mod events;
pub mod instruments;
pub mod maps;
pub mod news;
pub mod social;

pub use community::{
    CommunityBoard, CommunityPost, Sentiment, community_boards, featured_community_posts,
};
pub use events::{
    EconomicEvent, EventImportance, economic_events, menu_preview_events, sorted_events,
    upcoming_events,
};
pub use instruments::{Instrument, instruments};
pub use maps::DataMaps;
pub use news::{NewsHeadline, NewsSource, news_sources};
pub use social::{SocialPlatform, SocialPost, social_platforms};
