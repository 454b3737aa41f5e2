use super::ItemStore;
use crate::personal::Personalizer;
use crate::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use luma_model::{ItemId, MediaItem, SpecialCounts, User, UserId, UserItemData};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory item store backing tests and the demo server.
///
/// Holds the containment tree plus per-user item state, so it also serves
/// as the [`Personalizer`], the same arrangement a persistent backend
/// would have with watch state living next to the items.
#[derive(Debug)]
pub struct MemoryStore {
    items: RwLock<HashMap<Uuid, MediaItem>>,
    user_data: RwLock<HashMap<(Uuid, Uuid), UserItemData>>,
    recently_added_window: Duration,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            user_data: RwLock::new(HashMap::new()),
            recently_added_window: Duration::days(14),
        }
    }

    pub fn with_recently_added_window(window: Duration) -> Self {
        Self {
            recently_added_window: window,
            ..Self::new()
        }
    }

    /// Insert or replace an item, returning its id.
    pub async fn insert(&self, item: MediaItem) -> ItemId {
        let id = item.id;
        self.items.write().await.insert(id.to_uuid(), item);
        id
    }

    pub async fn set_user_data(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        data: UserItemData,
    ) {
        self.user_data
            .write()
            .await
            .insert((user_id.to_uuid(), item_id.to_uuid()), data);
    }

    fn is_recent(&self, item: &MediaItem) -> bool {
        Utc::now() - item.date_created <= self.recently_added_window
    }

    fn is_allowed(child: &MediaItem, user: &User) -> bool {
        match (child.parental_rating, user.max_parental_rating) {
            (Some(rating), Some(ceiling)) => rating <= ceiling,
            _ => true,
        }
    }

    async fn lookup_user_data(&self, user: &User, item: &MediaItem) -> UserItemData {
        self.user_data
            .read()
            .await
            .get(&(user.id.to_uuid(), item.id.to_uuid()))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn get_item(&self, id: &ItemId) -> Result<Option<MediaItem>> {
        if id.is_nil() {
            return Ok(None);
        }
        Ok(self.items.read().await.get(id.as_uuid()).cloned())
    }

    async fn allowed_children(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Result<Vec<MediaItem>> {
        let items = self.items.read().await;
        Ok(item
            .children
            .iter()
            .filter_map(|child_id| items.get(child_id.as_uuid()))
            .filter(|child| Self::is_allowed(child, user))
            .cloned()
            .collect())
    }

    async fn special_counts(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Result<SpecialCounts> {
        let children = self.allowed_children(item, user).await?;
        let mut counts = SpecialCounts::default();

        for child in &children {
            let data = self.lookup_user_data(user, child).await;
            if self.is_recent(child) {
                counts.recently_added_item_count += 1;
                if !data.played {
                    counts.recently_added_unplayed_item_count += 1;
                }
            }
            if data.playback_position_ticks > 0 && !data.played {
                counts.in_progress_item_count += 1;
            }
        }

        Ok(counts)
    }
}

#[async_trait]
impl Personalizer for MemoryStore {
    async fn user_data(&self, item: &MediaItem, user: &User) -> Result<UserItemData> {
        Ok(self.lookup_user_data(user, item).await)
    }

    async fn is_recently_added(&self, item: &MediaItem, _user: &User) -> Result<bool> {
        Ok(self.is_recent(item))
    }
}
