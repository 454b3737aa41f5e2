use super::{ancestors, children, relations};
use crate::catalog::EntityCatalog;
use crate::personal::Personalizer;
use crate::store::ItemStore;
use crate::Result;
use futures::future::BoxFuture;
use luma_model::{ItemDto, MediaItem, User};
use std::sync::Arc;
use tracing::trace;

/// Nested DTO levels below the top-level call. One level keeps output
/// bounded on deep containment hierarchies.
const MAX_CHILD_DEPTH: usize = 1;

/// Per-call switches for the optional attachment passes.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub include_children: bool,
    pub include_people: bool,
}

impl BuildOptions {
    /// Everything off; the shape used for recursive child builds.
    pub fn bare() -> Self {
        Self {
            include_children: false,
            include_people: false,
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_children: true,
            include_people: true,
        }
    }
}

/// Assembles flat [`ItemDto`]s from store items.
///
/// Holds its collaborators behind shared trait objects and is cheap to
/// clone. Each `build` call reads a single item snapshot and produces a
/// fresh DTO; nothing in the store is mutated.
#[derive(Clone)]
pub struct DtoBuilder {
    store: Arc<dyn ItemStore>,
    catalog: Arc<dyn EntityCatalog>,
    personal: Arc<dyn Personalizer>,
}

impl DtoBuilder {
    pub fn new(
        store: Arc<dyn ItemStore>,
        catalog: Arc<dyn EntityCatalog>,
        personal: Arc<dyn Personalizer>,
    ) -> Self {
        Self {
            store,
            catalog,
            personal,
        }
    }

    pub(crate) fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }

    /// Hydrate one item into its transport representation.
    ///
    /// Missing optional data (absent parent, no images, empty relations)
    /// degrades to empty DTO fields; a failing store or catalog lookup
    /// fails the whole call.
    pub async fn build(
        &self,
        item: &MediaItem,
        user: &User,
        options: BuildOptions,
    ) -> Result<ItemDto> {
        self.build_at_depth(item, user, options, 0).await
    }

    /// Recursive core with the depth cap threaded explicitly. Child builds
    /// enter at `depth + 1` with the optional passes switched off, so
    /// nested DTOs never carry their own children, trailers, or people.
    pub(crate) fn build_at_depth<'a>(
        &'a self,
        item: &'a MediaItem,
        user: &'a User,
        options: BuildOptions,
        depth: usize,
    ) -> BoxFuture<'a, Result<ItemDto>> {
        Box::pin(async move {
            trace!(item = %item.id, depth, "hydrating item");

            let backdrop_count = item.backdrop_count();
            let (parent_backdrop_item_id, parent_backdrop_count) =
                if backdrop_count == 0 {
                    ancestors::find_backdrop_ancestor(self.store(), item).await?
                } else {
                    (None, 0)
                };

            let has_logo = item.images.has_logo();
            let parent_logo_item_id = if has_logo {
                None
            } else {
                ancestors::find_logo_ancestor(self.store(), item).await?
            };

            let is_new = self.personal.is_recently_added(item, user).await?;
            let user_data = self.personal.user_data(item, user).await?;

            let include_children = options.include_children && depth < MAX_CHILD_DEPTH;

            // Studios always attach; the flags only gate people and
            // children/trailers. The four batches run as one structured
            // join with first-error propagation.
            let studios_fut = relations::join_studios(self.catalog.as_ref(), &item.studios);
            let people_fut = async {
                if options.include_people {
                    relations::join_people(self.catalog.as_ref(), &item.people).await
                } else {
                    Ok(Vec::new())
                }
            };
            let children_fut = async {
                if include_children && item.is_container() {
                    children::hydrate_children(self, item, user, depth)
                        .await
                        .map(Some)
                } else {
                    Ok(None)
                }
            };
            let trailers_fut = async {
                if include_children && !item.local_trailers.is_empty() {
                    children::hydrate_trailers(self, item, user, depth)
                        .await
                        .map(Some)
                } else {
                    Ok(None)
                }
            };

            let (studios, people, built_children, local_trailers) =
                tokio::try_join!(studios_fut, people_fut, children_fut, trailers_fut)?;

            let (special_counts, is_root, is_virtual_folder) = if item.is_container() {
                let counts = self.store.special_counts(item, user).await?;
                (
                    Some(counts),
                    Some(item.is_root),
                    Some(item.kind.is_virtual_folder()),
                )
            } else {
                (None, None, None)
            };

            Ok(ItemDto {
                id: item.id,
                name: item.name.clone(),
                sort_name: item.sort_name.clone(),
                overview: item.overview.clone(),
                path: item.path.clone(),
                item_type: item.kind.as_str().to_string(),
                is_folder: item.is_container(),
                is_new,
                date_created: item.date_created,
                premiere_date: item.premiere_date,
                production_year: item.production_year,
                index_number: item.index_number,
                official_rating: item.official_rating.clone(),
                user_rating: item.user_rating,
                run_time_ticks: item.run_time_ticks,
                aspect_ratio: item.aspect_ratio.clone(),
                display_media_type: item.display_media_type.clone(),
                trailer_url: item.trailer_url.clone(),
                provider_ids: item.provider_ids.clone(),
                genres: item.genres.clone(),
                taglines: item.taglines.clone(),
                backdrop_count,
                local_trailer_count: item.local_trailers.len(),
                has_primary_image: item.images.has_primary(),
                has_logo,
                has_thumb: item.images.has_thumb(),
                has_art: item.images.has_art(),
                has_banner: item.images.has_banner(),
                parent_id: item.parent_id,
                parent_backdrop_item_id,
                parent_backdrop_count,
                parent_logo_item_id,
                user_data,
                studios,
                people,
                children: built_children,
                local_trailers,
                special_counts,
                is_root,
                is_virtual_folder,
            })
        })
    }
}

impl std::fmt::Debug for DtoBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtoBuilder").finish_non_exhaustive()
    }
}
