use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A library user, as far as hydration is concerned: an identity plus the
/// parental ceiling applied when filtering container children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Items with a parental rating above this level are filtered out of
    /// child listings; `None` lifts the ceiling.
    pub max_parental_rating: Option<u8>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            max_parental_rating: None,
        }
    }
}

/// Opaque per-user state for one item, copied verbatim into the DTO.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserItemData {
    pub play_count: u32,
    pub played: bool,
    pub is_favorite: bool,
    pub playback_position_ticks: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played_date: Option<DateTime<Utc>>,
}

/// Container-level per-user aggregates, populated only for folder DTOs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialCounts {
    pub recently_added_item_count: u32,
    pub recently_added_unplayed_item_count: u32,
    pub in_progress_item_count: u32,
}
