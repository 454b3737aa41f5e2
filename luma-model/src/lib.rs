//! Shared data models for the Luma media platform.
//!
//! Everything here is plain data: typed identifiers, the store-side
//! [`MediaItem`](item::MediaItem) graph node, catalog records, per-user
//! state, and the flat [`ItemDto`](dto::ItemDto) handed to clients.
//! Behavior (hydration, joins, inheritance) lives in `luma-core`.

pub mod dto;
pub mod entities;
pub mod ids;
pub mod item;
pub mod people;
pub mod userdata;

pub use dto::{ItemDto, PersonDto, StudioDto};
pub use entities::EntityRecord;
pub use ids::{ItemId, UserId};
pub use item::{ImageSet, ItemKind, MediaItem};
pub use people::PersonInfo;
pub use userdata::{SpecialCounts, User, UserItemData};
