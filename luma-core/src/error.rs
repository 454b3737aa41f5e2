use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("item store error: {0}")]
    Store(String),

    #[error("entity catalog error: {0}")]
    Catalog(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
