use std::sync::Arc;

use reviewdb_core::gateways::notify::{NotificationEvent, NotificationGateway};

use crate::{
    email::{DeliveryError, EmailGateway},
    user_communication,
};

/// Turns notification events into emails.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    sender_name: String,
}

impl Notify {
    pub fn new<G>(gw: G, sender_name: impl Into<String>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            sender_name: sender_name.into(),
        }
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent<'_>) -> Result<(), DeliveryError> {
        use NotificationEvent as E;
        match event {
            E::ReviewRequested {
                recipient,
                customer_name,
                transaction_id,
                review_url,
            } => {
                let content = user_communication::review_request_email(
                    customer_name,
                    transaction_id,
                    review_url.as_str(),
                    &self.sender_name,
                )
                .map_err(|err| DeliveryError::Compose(err.to_string()))?;
                log::info!(
                    "Sending review request for transaction '{transaction_id}' to {}",
                    recipient.as_str()
                );
                self.email_gw
                    .compose_and_send(std::slice::from_ref(recipient), &content)
            }
        }
    }
}
