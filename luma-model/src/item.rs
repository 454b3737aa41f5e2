use crate::ids::ItemId;
use crate::people::PersonInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification of a media item within the library tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Movie,
    Series,
    Season,
    Episode,
    Trailer,
    Folder,
    VirtualFolder,
}

impl ItemKind {
    /// Containers own an ordered child sequence; everything else is a leaf.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ItemKind::Series
                | ItemKind::Season
                | ItemKind::Folder
                | ItemKind::VirtualFolder
        )
    }

    pub fn is_virtual_folder(&self) -> bool {
        matches!(self, ItemKind::VirtualFolder)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Movie => "Movie",
            ItemKind::Series => "Series",
            ItemKind::Season => "Season",
            ItemKind::Episode => "Episode",
            ItemKind::Trailer => "Trailer",
            ItemKind::Folder => "Folder",
            ItemKind::VirtualFolder => "VirtualFolder",
        }
    }
}

/// Display-asset paths attached to a media item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub primary: Option<String>,
    pub logo: Option<String>,
    pub thumb: Option<String>,
    pub art: Option<String>,
    pub banner: Option<String>,
    pub backdrops: Vec<String>,
}

impl ImageSet {
    pub fn has_primary(&self) -> bool {
        non_empty(&self.primary)
    }

    pub fn has_logo(&self) -> bool {
        non_empty(&self.logo)
    }

    pub fn has_thumb(&self) -> bool {
        non_empty(&self.thumb)
    }

    pub fn has_art(&self) -> bool {
        non_empty(&self.art)
    }

    pub fn has_banner(&self) -> bool {
        non_empty(&self.banner)
    }
}

fn non_empty(path: &Option<String>) -> bool {
    path.as_deref().is_some_and(|p| !p.is_empty())
}

/// A node in the media-item graph, as handed out by the item store.
///
/// Containment is a tree: `parent_id` is a weak back-reference (traversal
/// only, resolved through the store) and `children` lists the ids of the
/// ordered child sequence for containers. The hydration engine consumes
/// these read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub parent_id: Option<ItemId>,
    pub kind: ItemKind,
    pub name: String,
    pub sort_name: Option<String>,
    pub overview: Option<String>,
    pub path: Option<String>,
    pub date_created: DateTime<Utc>,
    pub premiere_date: Option<DateTime<Utc>>,
    pub production_year: Option<i32>,
    pub index_number: Option<i32>,
    pub official_rating: Option<String>,
    /// Numeric rating level used for parental filtering; `None` means
    /// unrated and always allowed.
    pub parental_rating: Option<u8>,
    pub user_rating: Option<f32>,
    pub run_time_ticks: Option<i64>,
    pub aspect_ratio: Option<String>,
    pub display_media_type: Option<String>,
    pub trailer_url: Option<String>,
    pub provider_ids: HashMap<String, String>,
    pub genres: Vec<String>,
    pub taglines: Vec<String>,
    pub images: ImageSet,
    /// Studio name references, joined against the entity catalog.
    pub studios: Vec<String>,
    /// Person references, joined against the entity catalog.
    pub people: Vec<PersonInfo>,
    /// Trailer items stored alongside this item, hydrated like children.
    pub local_trailers: Vec<MediaItem>,
    /// Ordered child ids; populated only for containers.
    pub children: Vec<ItemId>,
    /// Whether this container is the library root.
    pub is_root: bool,
}

impl MediaItem {
    /// A fresh item with a generated id and empty attributes; callers fill
    /// in what they know.
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            parent_id: None,
            kind,
            name: name.into(),
            sort_name: None,
            overview: None,
            path: None,
            date_created: Utc::now(),
            premiere_date: None,
            production_year: None,
            index_number: None,
            official_rating: None,
            parental_rating: None,
            user_rating: None,
            run_time_ticks: None,
            aspect_ratio: None,
            display_media_type: None,
            trailer_url: None,
            provider_ids: HashMap::new(),
            genres: Vec::new(),
            taglines: Vec::new(),
            images: ImageSet::default(),
            studios: Vec::new(),
            people: Vec::new(),
            local_trailers: Vec::new(),
            children: Vec::new(),
            is_root: false,
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn backdrop_count(&self) -> usize {
        self.images.backdrops.len()
    }
}
