pub mod creditcard;

use thiserror::Error;

use crate::domain::search::PlanError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<PlanError> for ServiceError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidArgument(msg) => ServiceError::InvalidArgument(msg),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
