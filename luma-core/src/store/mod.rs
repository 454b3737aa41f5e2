pub mod memory;

pub use memory::MemoryStore;

use crate::{CoreError, Result};
use async_trait::async_trait;
use luma_model::{ItemId, MediaItem, SpecialCounts, User};
use std::sync::Arc;

/// Read-side contract of the media-item store.
///
/// The store owns the containment tree; the hydration engine only ever
/// navigates it. Lookups for the nil sentinel id are expected to return
/// `None` rather than fail.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get_item(&self, id: &ItemId) -> Result<Option<MediaItem>>;

    /// The container's ordered child sequence with parental-control
    /// filtering applied for `user`. Empty for non-containers.
    async fn allowed_children(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Result<Vec<MediaItem>>;

    /// Container-level per-user aggregates.
    async fn special_counts(
        &self,
        item: &MediaItem,
        user: &User,
    ) -> Result<SpecialCounts>;
}

/// Handle to the configured item store backend.
#[derive(Clone)]
pub struct MediaLibrary {
    backend: Arc<dyn ItemStore>,
}

impl MediaLibrary {
    pub fn new(backend: Arc<dyn ItemStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn ItemStore {
        self.backend.as_ref()
    }

    /// Look an item up, mapping absence (including the nil sentinel) to a
    /// not-found error for callers that need the item to proceed.
    pub async fn require_item(&self, id: &ItemId) -> Result<MediaItem> {
        self.backend
            .get_item(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }
}

impl std::fmt::Debug for MediaLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaLibrary").finish_non_exhaustive()
    }
}
