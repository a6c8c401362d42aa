use reviewdb_entities::email::*;
use thiserror::Error;

/// The mail transport did not accept the message.
///
/// Deliveries are never retried.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("No valid email addresses specified")]
    NoRecipients,
    #[error("Failed to compose the message: {0}")]
    Compose(String),
    #[error("The mail transport rejected the message: {0}")]
    Rejected(String),
    #[error("The mail transport is unreachable: {0}")]
    Unreachable(#[source] anyhow::Error),
}

pub trait EmailGateway {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        email: &EmailContent,
    ) -> Result<(), DeliveryError>;
}
