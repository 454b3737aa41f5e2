use crate::Result;
use async_trait::async_trait;
use luma_model::{MediaItem, User, UserItemData};

/// Per-user personalization state, consumed opaquely during hydration.
#[async_trait]
pub trait Personalizer: Send + Sync {
    /// The user's state for one item, copied verbatim into the DTO.
    async fn user_data(&self, item: &MediaItem, user: &User) -> Result<UserItemData>;

    async fn is_recently_added(&self, item: &MediaItem, user: &User) -> Result<bool>;
}
