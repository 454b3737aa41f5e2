use crate::errors::AppError;
use luma_core::{
    DtoBuilder, EntityCatalog, ItemStore, MediaLibrary, MemoryCatalog, MemoryStore,
    Personalizer,
};
use luma_model::User;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shared handler state: the library handle, the hydration engine, and
/// the known users.
#[derive(Clone, Debug)]
pub struct AppState {
    pub library: MediaLibrary,
    pub builder: DtoBuilder,
    users: Arc<HashMap<Uuid, User>>,
    default_user: User,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ItemStore>,
        catalog: Arc<dyn EntityCatalog>,
        personal: Arc<dyn Personalizer>,
        users: Vec<User>,
        default_user: User,
    ) -> Self {
        let builder = DtoBuilder::new(Arc::clone(&store), catalog, personal);
        Self {
            library: MediaLibrary::new(store),
            builder,
            users: Arc::new(
                users
                    .into_iter()
                    .map(|user| (user.id.to_uuid(), user))
                    .collect(),
            ),
            default_user,
        }
    }

    /// A state with no media at all; useful until a real backend is wired
    /// up, and for probes.
    pub fn empty() -> Self {
        let store = Arc::new(MemoryStore::new());
        let catalog = Arc::new(MemoryCatalog::new());
        Self::new(
            store.clone(),
            catalog,
            store,
            Vec::new(),
            User::new("anonymous"),
        )
    }

    /// Resolve the optional `user_id` request parameter; absence falls
    /// back to the default user, an unknown id is a client error.
    pub fn resolve_user(&self, user_id: Option<Uuid>) -> Result<&User, AppError> {
        match user_id {
            None => Ok(&self.default_user),
            Some(id) => self
                .users
                .get(&id)
                .ok_or_else(|| AppError::not_found(format!("user not found: {id}"))),
        }
    }

    pub fn default_user(&self) -> &User {
        &self.default_user
    }
}
