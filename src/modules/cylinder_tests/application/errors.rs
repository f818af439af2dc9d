use thiserror::Error;

use crate::modules::cylinder_tests::adapters::outbound::record_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidQueryParameters(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
