use super::builder::{BuildOptions, DtoBuilder};
use crate::Result;
use futures::{stream, StreamExt, TryStreamExt};
use luma_model::{ItemDto, MediaItem, User};

/// Width cap on concurrent recursive builds within one batch; keeps a very
/// large container from fanning out unboundedly.
const MAX_CONCURRENT_BUILDS: usize = 16;

/// Hydrate the container's parental-filtered children, in input order.
pub(super) async fn hydrate_children(
    builder: &DtoBuilder,
    item: &MediaItem,
    user: &User,
    depth: usize,
) -> Result<Vec<ItemDto>> {
    let children = builder.store().allowed_children(item, user).await?;

    stream::iter(children.into_iter().map(|child| async move {
        builder
            .build_at_depth(&child, user, BuildOptions::bare(), depth + 1)
            .await
    }))
    .buffered(MAX_CONCURRENT_BUILDS)
    .try_collect()
    .await
}

/// Hydrate the item's local trailers, in input order. Applies to any item
/// that carries trailers, container or not.
pub(super) async fn hydrate_trailers(
    builder: &DtoBuilder,
    item: &MediaItem,
    user: &User,
    depth: usize,
) -> Result<Vec<ItemDto>> {
    stream::iter((0..item.local_trailers.len()).map(|index| async move {
        builder
            .build_at_depth(&item.local_trailers[index], user, BuildOptions::bare(), depth + 1)
            .await
    }))
    .buffered(MAX_CONCURRENT_BUILDS)
    .try_collect()
    .await
}
