use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strongly typed identifier for media items.
///
/// The nil value doubles as the empty-identifier sentinel: request strings
/// that are empty or unparseable map to [`ItemId::nil`] at the boundary
/// instead of failing, and store lookups for it return nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    pub const fn nil() -> Self {
        ItemId(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Map a raw request string onto an id, folding empty or malformed
    /// input into the nil sentinel.
    pub fn from_request(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::nil();
        }
        raw.parse().map(ItemId).unwrap_or_else(|_| Self::nil())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed identifier for users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parsing_folds_bad_input_to_nil() {
        assert!(ItemId::from_request("").is_nil());
        assert!(ItemId::from_request("not-a-uuid").is_nil());
        assert!(ItemId::from_request("1234").is_nil());

        let id = ItemId::new();
        assert_eq!(ItemId::from_request(&id.to_string()), id);
    }

    #[test]
    fn fresh_ids_are_not_nil() {
        assert!(!ItemId::new().is_nil());
    }
}
