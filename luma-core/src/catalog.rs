use crate::Result;
use async_trait::async_trait;
use luma_model::EntityRecord;
use tokio::sync::RwLock;

/// Name-keyed lookup into the studio/person catalog.
///
/// Lookups are independent and may run concurrently; "not found" is an
/// ordinary answer, never an error.
#[async_trait]
pub trait EntityCatalog: Send + Sync {
    async fn lookup_studio(&self, name: &str) -> Result<Option<EntityRecord>>;

    async fn lookup_person(&self, name: &str) -> Result<Option<EntityRecord>>;
}

/// Case-insensitive name equality, the join key used throughout the
/// catalog. Unicode lowercase folding, no allocation.
pub fn name_eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// In-memory catalog backing tests and the demo server.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    studios: RwLock<Vec<EntityRecord>>,
    people: RwLock<Vec<EntityRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_studio(&self, record: EntityRecord) {
        self.studios.write().await.push(record);
    }

    pub async fn add_person(&self, record: EntityRecord) {
        self.people.write().await.push(record);
    }
}

#[async_trait]
impl EntityCatalog for MemoryCatalog {
    async fn lookup_studio(&self, name: &str) -> Result<Option<EntityRecord>> {
        let studios = self.studios.read().await;
        Ok(studios
            .iter()
            .find(|record| name_eq_fold(&record.name, name))
            .cloned())
    }

    async fn lookup_person(&self, name: &str) -> Result<Option<EntityRecord>> {
        let people = self.people.read().await;
        Ok(people
            .iter()
            .find(|record| name_eq_fold(&record.name, name))
            .cloned())
    }
}
