//! The hydration engine: turns store-side [`MediaItem`] graphs into flat
//! [`ItemDto`] records.
//!
//! [`DtoBuilder`] is the only entry point. It copies scalar attributes,
//! resolves inherited display assets by walking the ancestor chain, joins
//! denormalized studio/person references against the entity catalog, and
//! hydrates children and local trailers one level deep.
//!
//! [`MediaItem`]: luma_model::MediaItem
//! [`ItemDto`]: luma_model::ItemDto

mod ancestors;
mod builder;
mod children;
mod relations;

pub use builder::{BuildOptions, DtoBuilder};
