//! Helix response models.
//!
//! Field names follow the Helix wire format. Fields Helix may omit or null
//! are `Option` or defaulted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub user_type: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelInfo {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    pub broadcaster_name: String,
    #[serde(default)]
    pub broadcaster_language: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub viewer_count: u64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// A game or category; `/games`, `/games/top` and `/search/categories` share this shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub box_art_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchedChannel {
    pub id: String,
    pub broadcaster_login: String,
    pub display_name: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub broadcaster_language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_live: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmoteImages {
    pub url_1x: String,
    pub url_2x: String,
    pub url_4x: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Emote {
    pub id: String,
    pub name: String,
    pub images: EmoteImages,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BadgeVersion {
    pub id: String,
    pub image_url_1x: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BadgeSet {
    pub set_id: String,
    pub versions: Vec<BadgeVersion>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub creator_id: String,
    pub creator_name: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub language: String,
    pub title: String,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatSettings {
    pub broadcaster_id: String,
    pub emote_mode: bool,
    pub follower_mode: bool,
    /// Minutes; null when follower mode is off.
    pub follower_mode_duration: Option<u64>,
    pub slow_mode: bool,
    /// Seconds; null when slow mode is off.
    pub slow_mode_wait_time: Option<u64>,
    pub subscriber_mode: bool,
    pub unique_chat_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MutedSegment {
    pub duration: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub view_count: u64,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    /// Helix duration string such as `3h8m33s`.
    pub duration: String,
    pub muted_segments: Option<Vec<MutedSegment>>,
}

/// Filters for `/streams`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamFilter {
    /// Game name; resolved to an id before the request.
    pub game: Option<String>,
    pub language: Option<String>,
    pub limit: Option<u32>,
}
