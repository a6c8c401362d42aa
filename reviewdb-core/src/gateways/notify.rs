use reviewdb_entities::email::EmailAddress;
use url::Url;

use super::email::DeliveryError;

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    ReviewRequested {
        recipient: &'a EmailAddress,
        customer_name: &'a str,
        transaction_id: &'a str,
        review_url: &'a Url,
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent<'_>) -> Result<(), DeliveryError>;
}
