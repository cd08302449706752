use thiserror::Error;
use uuid::Uuid;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Prospect {0} not found")]
    ProspectNotFound(Uuid),

    #[error("Prospect {0} has no attributed affiliate, commission cannot be computed")]
    NoAffiliateAttributed(Uuid),

    #[error("Commission {0} not found")]
    CommissionNotFound(Uuid),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ProspectNotFound(_) | ServiceError::CommissionNotFound(_) => {
                HttpError::not_found(error.to_string())
            }

            ServiceError::NoAffiliateAttributed(_) | ServiceError::InvalidAmount(_) => {
                HttpError::bad_request(error.to_string())
            }

            ServiceError::Database(_) => HttpError::server_error(error.to_string()),
        }
    }
}
