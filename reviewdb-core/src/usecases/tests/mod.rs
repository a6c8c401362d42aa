// Here we could use a real DB instead of this MockDb.

use std::{
    cell::{Cell, RefCell},
    result,
};

use crate::{
    entities::*,
    gateways::{email::DeliveryError, notify::*},
    repositories::{Error as RepoError, *},
};
use url::Url;

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub reviews: RefCell<Vec<Review>>,
    pub fail_on_write: Cell<bool>,
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: NewReview) -> RepoResult<Review> {
        if self.fail_on_write.get() {
            return Err(RepoError::Other(anyhow::anyhow!("connection lost")));
        }
        let mut reviews = self.reviews.borrow_mut();
        let id = ReviewId::new(reviews.len() as i64 + 1);
        let review = review.into_review(id);
        reviews.push(review.clone());
        Ok(review)
    }

    fn all_reviews(&self, kind: ReviewKind) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub recipient: EmailAddress,
    pub customer_name: String,
    pub transaction_id: String,
    pub review_url: Url,
}

#[derive(Default)]
pub struct MockNotify {
    pub sent: RefCell<Vec<Sent>>,
    rejection: RefCell<Option<String>>,
}

impl MockNotify {
    pub fn reject_with(&self, msg: &str) {
        *self.rejection.borrow_mut() = Some(msg.to_owned());
    }
}

impl NotificationGateway for MockNotify {
    fn notify(&self, event: NotificationEvent<'_>) -> Result<(), DeliveryError> {
        if let Some(msg) = &*self.rejection.borrow() {
            return Err(DeliveryError::Rejected(msg.clone()));
        }
        match event {
            NotificationEvent::ReviewRequested {
                recipient,
                customer_name,
                transaction_id,
                review_url,
            } => {
                self.sent.borrow_mut().push(Sent {
                    recipient: recipient.clone(),
                    customer_name: customer_name.to_owned(),
                    transaction_id: transaction_id.to_owned(),
                    review_url: review_url.clone(),
                });
            }
        }
        Ok(())
    }
}
