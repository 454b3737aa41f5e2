use serde::{Deserialize, Serialize};

/// Canonical catalog entry for a studio or person.
///
/// The hydration engine only ever asks one question of these records:
/// does a primary display image exist for this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub primary_image_path: Option<String>,
}

impl EntityRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_image_path: None,
        }
    }

    pub fn with_image(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_image_path: Some(path.into()),
        }
    }

    pub fn has_primary_image(&self) -> bool {
        self.primary_image_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
    }
}
