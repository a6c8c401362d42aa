use reviewdb_core::{
    gateways::email::DeliveryError, repositories::Error as RepoError,
    usecases::Error as ParameterError,
};
use std::io;
use thiserror::Error;

pub use reviewdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        // Storage and delivery failures are not caused by
        // invalid parameters and must be reported separately.
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            ParameterError::Delivery(err) => Self::Delivery(err),
            err => Self::Parameter(err),
        }
    }
}
