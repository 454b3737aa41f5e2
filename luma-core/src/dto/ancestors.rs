use crate::store::ItemStore;
use crate::Result;
use luma_model::{ItemId, MediaItem};
use tracing::warn;

/// Walk ceiling. The store enforces containment as a tree, so this only
/// trips on a corrupted parent relation; hitting it behaves like an
/// exhausted chain.
const MAX_ANCESTOR_HOPS: usize = 64;

/// Nearest ancestor with at least one backdrop image, plus that ancestor's
/// backdrop count. `(None, 0)` when the chain is exhausted.
pub(super) async fn find_backdrop_ancestor(
    store: &dyn ItemStore,
    item: &MediaItem,
) -> Result<(Option<ItemId>, usize)> {
    let mut next = item.parent_id;
    let mut hops = 0;

    while let Some(id) = next {
        if hops == MAX_ANCESTOR_HOPS {
            warn!(item = %item.id, "ancestor walk exceeded {MAX_ANCESTOR_HOPS} hops, giving up");
            break;
        }
        hops += 1;

        let Some(parent) = store.get_item(&id).await? else {
            break;
        };
        if parent.backdrop_count() > 0 {
            return Ok((Some(parent.id), parent.backdrop_count()));
        }
        next = parent.parent_id;
    }

    Ok((None, 0))
}

/// Nearest ancestor with a non-empty logo path.
pub(super) async fn find_logo_ancestor(
    store: &dyn ItemStore,
    item: &MediaItem,
) -> Result<Option<ItemId>> {
    let mut next = item.parent_id;
    let mut hops = 0;

    while let Some(id) = next {
        if hops == MAX_ANCESTOR_HOPS {
            warn!(item = %item.id, "ancestor walk exceeded {MAX_ANCESTOR_HOPS} hops, giving up");
            break;
        }
        hops += 1;

        let Some(parent) = store.get_item(&id).await? else {
            break;
        };
        if parent.images.has_logo() {
            return Ok(Some(parent.id));
        }
        next = parent.parent_id;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use luma_model::ItemKind;

    async fn chain(store: &MemoryStore, items: Vec<MediaItem>) -> MediaItem {
        // Links items[i].parent_id -> items[i-1] and returns the last one.
        let mut parent: Option<ItemId> = None;
        let mut leaf = None;
        for mut item in items {
            item.parent_id = parent;
            parent = Some(item.id);
            leaf = Some(item.clone());
            store.insert(item).await;
        }
        leaf.unwrap()
    }

    #[tokio::test]
    async fn nearest_ancestor_wins() {
        let store = MemoryStore::new();

        let mut grandparent = MediaItem::new(ItemKind::Folder, "grandparent");
        grandparent.images.backdrops =
            vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()];
        let mut parent = MediaItem::new(ItemKind::Series, "parent");
        parent.images.backdrops = vec!["d.jpg".into()];
        let parent_id = parent.id;
        let leaf = chain(
            &store,
            vec![grandparent, parent, MediaItem::new(ItemKind::Season, "leaf")],
        )
        .await;

        let (found, count) = find_backdrop_ancestor(&store, &leaf).await.unwrap();
        assert_eq!(found, Some(parent_id));
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn walk_skips_bare_ancestors() {
        let store = MemoryStore::new();

        let mut root = MediaItem::new(ItemKind::Folder, "root");
        root.images.logo = Some("logo.png".into());
        let root_id = root.id;
        let leaf = chain(
            &store,
            vec![
                root,
                MediaItem::new(ItemKind::Series, "series"),
                MediaItem::new(ItemKind::Season, "season"),
                MediaItem::new(ItemKind::Episode, "episode"),
            ],
        )
        .await;

        assert_eq!(
            find_logo_ancestor(&store, &leaf).await.unwrap(),
            Some(root_id)
        );
    }

    #[tokio::test]
    async fn exhausted_chain_resolves_to_nothing() {
        let store = MemoryStore::new();
        let leaf = chain(
            &store,
            vec![
                MediaItem::new(ItemKind::Folder, "root"),
                MediaItem::new(ItemKind::Movie, "movie"),
            ],
        )
        .await;

        let (found, count) = find_backdrop_ancestor(&store, &leaf).await.unwrap();
        assert_eq!(found, None);
        assert_eq!(count, 0);
        assert_eq!(find_logo_ancestor(&store, &leaf).await.unwrap(), None);
    }

    #[tokio::test]
    async fn parent_missing_from_store_ends_the_walk() {
        let store = MemoryStore::new();
        let mut orphan = MediaItem::new(ItemKind::Episode, "orphan");
        orphan.parent_id = Some(ItemId::new());
        store.insert(orphan.clone()).await;

        let (found, _) = find_backdrop_ancestor(&store, &orphan).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn cyclic_parent_relation_terminates() {
        let store = MemoryStore::new();

        let mut a = MediaItem::new(ItemKind::Folder, "a");
        let mut b = MediaItem::new(ItemKind::Folder, "b");
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        store.insert(a.clone()).await;
        store.insert(b).await;

        let (found, count) = find_backdrop_ancestor(&store, &a).await.unwrap();
        assert_eq!(found, None);
        assert_eq!(count, 0);
    }
}
