use crate::{gateways::email::DeliveryError, repositories};
use reviewdb_entities::{email::EmailAddressParseError, rating::RatingValueOutOfRange};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RatingValue(#[from] RatingValueOutOfRange),
    #[error("Either productId or serviceId must be provided")]
    MissingSubject,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid review link: {0}")]
    ReviewLink(#[from] url::ParseError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::Email
    }
}
