use std::sync::Arc;

use reviewdb_core::{gateways::notify::NotificationGateway, Url};

use super::*;

/// Sends review requests through the injected notification gateway.
#[derive(Clone)]
pub struct ReviewRequestSender {
    notify: Arc<dyn NotificationGateway + Send + Sync>,
    base_url: Url,
}

impl ReviewRequestSender {
    pub fn new<G>(notify: G, base_url: Url) -> Self
    where
        G: NotificationGateway + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(notify), base_url)
    }

    pub fn from_shared(notify: Arc<dyn NotificationGateway + Send + Sync>, base_url: Url) -> Self {
        Self { notify, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the link that has been sent to the customer.
    ///
    /// Might block while the message is handed over to the mail transport.
    pub fn send_review_request(&self, req: &usecases::ReviewRequest) -> Result<Url> {
        Ok(usecases::request_review(&*self.notify, &self.base_url, req)?)
    }
}
