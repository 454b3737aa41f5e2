//! Fixture helpers for the hydration tests: an in-memory library tree,
//! catalog entries, and a wired-up builder.

use luma_core::{DtoBuilder, MemoryCatalog, MemoryStore};
use luma_model::{ItemId, ItemKind, MediaItem, User};
use std::sync::Arc;

pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<MemoryCatalog>,
    pub builder: DtoBuilder,
    pub user: User,
}

pub fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let catalog = Arc::new(MemoryCatalog::new());
    let builder = DtoBuilder::new(store.clone(), catalog.clone(), store.clone());
    Fixture {
        store,
        catalog,
        builder,
        user: User::new("tester"),
    }
}

pub fn item(kind: ItemKind, name: &str) -> MediaItem {
    MediaItem::new(kind, name)
}

/// Wire `child` under `parent` and insert it, returning the child's id.
/// The parent must be inserted (or re-inserted) by the caller once its
/// child list is complete.
pub async fn attach(store: &MemoryStore, parent: &mut MediaItem, mut child: MediaItem) -> ItemId {
    child.parent_id = Some(parent.id);
    parent.children.push(child.id);
    store.insert(child).await
}
