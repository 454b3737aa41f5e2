//! Synthetic in-memory library for running the server standalone, in the
//! same spirit as a demo mode: a couple of movies with trailers, one
//! series tree, a small entity catalog, and a single demo user.

use crate::state::AppState;
use chrono::{Duration, Utc};
use luma_core::{MemoryCatalog, MemoryStore};
use luma_model::{
    EntityRecord, ItemId, ItemKind, MediaItem, PersonInfo, User, UserId, UserItemData,
};
use std::sync::Arc;
use tracing::info;

/// Seeded state plus the ids a client needs to start browsing.
#[derive(Debug)]
pub struct DemoSeed {
    pub state: AppState,
    pub root_id: ItemId,
    pub movie_id: ItemId,
    pub series_id: ItemId,
    pub user_id: UserId,
}

pub async fn seed() -> DemoSeed {
    let store = Arc::new(MemoryStore::new());
    let catalog = Arc::new(MemoryCatalog::new());
    let user = User::new("demo");

    catalog
        .add_studio(EntityRecord::with_image(
            "Mirage Pictures",
            "/meta/studios/mirage.png",
        ))
        .await;
    catalog.add_studio(EntityRecord::new("Atlas Films")).await;
    catalog
        .add_person(EntityRecord::with_image(
            "Ada Calder",
            "/meta/people/ada-calder.png",
        ))
        .await;
    catalog.add_person(EntityRecord::new("Rhys Moran")).await;

    let mut root = MediaItem::new(ItemKind::VirtualFolder, "Media");
    root.is_root = true;

    let mut movies = MediaItem::new(ItemKind::Folder, "Movies");
    movies.parent_id = Some(root.id);
    movies.images.backdrops = vec!["/meta/folders/movies-backdrop.jpg".into()];
    movies.images.logo = Some("/meta/folders/movies-logo.png".into());
    root.children.push(movies.id);

    let mut trailer = MediaItem::new(ItemKind::Trailer, "Signal Fires - Teaser");
    trailer.run_time_ticks = Some(90 * 10_000_000);

    // Carries its own artwork, so nothing is inherited.
    let mut feature = MediaItem::new(ItemKind::Movie, "Signal Fires");
    feature.parent_id = Some(movies.id);
    feature.overview = Some("A lighthouse keeper intercepts a broadcast that should not exist.".into());
    feature.production_year = Some(2024);
    feature.premiere_date = Some(Utc::now() - Duration::days(200));
    feature.run_time_ticks = Some(118 * 60 * 10_000_000);
    feature.official_rating = Some("PG-13".into());
    feature.parental_rating = Some(13);
    feature.genres = vec!["Drama".into(), "Mystery".into()];
    feature.taglines = vec!["Some signals want to be found.".into()];
    feature.studios = vec!["Mirage Pictures".into(), "Atlas Films".into()];
    feature.people = vec![
        PersonInfo::with_role("Ada Calder", "Director"),
        PersonInfo::with_role("Rhys Moran", "Writer"),
    ];
    feature.images.primary = Some("/meta/movies/signal-fires/poster.jpg".into());
    feature.images.backdrops = vec!["/meta/movies/signal-fires/backdrop.jpg".into()];
    feature.local_trailers = vec![trailer];
    movies.children.push(feature.id);

    // No artwork of its own; inherits the folder's backdrop and logo.
    let mut second = MediaItem::new(ItemKind::Movie, "Quiet Harbour");
    second.parent_id = Some(movies.id);
    second.production_year = Some(2021);
    second.parental_rating = Some(0);
    second.genres = vec!["Documentary".into()];
    movies.children.push(second.id);

    let mut tv = MediaItem::new(ItemKind::Folder, "TV");
    tv.parent_id = Some(root.id);
    root.children.push(tv.id);

    let mut series = MediaItem::new(ItemKind::Series, "Harbour Lights");
    series.parent_id = Some(tv.id);
    series.images.backdrops = vec![
        "/meta/tv/harbour-lights/backdrop-1.jpg".into(),
        "/meta/tv/harbour-lights/backdrop-2.jpg".into(),
    ];
    series.images.logo = Some("/meta/tv/harbour-lights/logo.png".into());
    series.studios = vec!["Mirage Pictures".into()];
    tv.children.push(series.id);

    let mut season = MediaItem::new(ItemKind::Season, "Season 1");
    season.parent_id = Some(series.id);
    season.index_number = Some(1);
    series.children.push(season.id);

    let mut episode_ids = Vec::new();
    for (number, title) in [(1, "Arrival"), (2, "The Ledger"), (3, "Spring Tide")] {
        let mut episode = MediaItem::new(ItemKind::Episode, title);
        episode.parent_id = Some(season.id);
        episode.index_number = Some(number);
        episode.run_time_ticks = Some(42 * 60 * 10_000_000);
        season.children.push(episode.id);
        episode_ids.push(episode.id);
        store.insert(episode).await;
    }

    let seed = DemoSeed {
        root_id: root.id,
        movie_id: feature.id,
        series_id: series.id,
        user_id: user.id,
        state: AppState::new(
            store.clone(),
            catalog,
            store.clone(),
            vec![user.clone()],
            user.clone(),
        ),
    };

    store.insert(root).await;
    store.insert(movies).await;
    store.insert(feature).await;
    store.insert(second).await;
    store.insert(tv).await;
    store.insert(series).await;
    store.insert(season).await;

    // The demo user is halfway through the second episode.
    store
        .set_user_data(
            &user.id,
            &episode_ids[1],
            UserItemData {
                playback_position_ticks: 21 * 60 * 10_000_000,
                ..UserItemData::default()
            },
        )
        .await;

    info!(root = %seed.root_id, "seeded demo library");
    seed
}
