//! Flat, client-facing representations of media items.
//!
//! An [`ItemDto`] is assembled fresh per request from a single store
//! snapshot, carries no references back into the store, and nests at most
//! one level of child DTOs.

use crate::ids::ItemId;
use crate::people::PersonInfo;
use crate::userdata::{SpecialCounts, UserItemData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One studio reference on an item, joined against the entity catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudioDto {
    pub name: String,
    pub has_image: bool,
}

/// One person reference on an item, joined against the entity catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonDto {
    pub person_info: PersonInfo,
    pub has_image: bool,
}

/// The flat transport record for one media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDto {
    pub id: ItemId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "Type")]
    pub item_type: String,
    pub is_folder: bool,
    /// Recently-added flag for the requesting user.
    pub is_new: bool,
    pub date_created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premiere_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_time_ticks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub provider_ids: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taglines: Vec<String>,

    /// Count of the item's own backdrop images.
    pub backdrop_count: usize,
    pub local_trailer_count: usize,
    pub has_primary_image: bool,
    pub has_logo: bool,
    pub has_thumb: bool,
    pub has_art: bool,
    pub has_banner: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
    /// Nearest ancestor holding backdrops; set only when this item has
    /// none of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_backdrop_item_id: Option<ItemId>,
    pub parent_backdrop_count: usize,
    /// Nearest ancestor holding a logo; set only when this item has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_logo_item_id: Option<ItemId>,

    pub user_data: UserItemData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub studios: Vec<StudioDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<PersonDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ItemDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_trailers: Option<Vec<ItemDto>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_counts: Option<SpecialCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_virtual_folder: Option<bool>,
}
