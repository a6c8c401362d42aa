use super::prelude::*;
use crate::gateways::notify::{NotificationEvent, NotificationGateway};
use url::Url;

/// Ask a customer to review a purchased product or booked service.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub customer_email: String,
    pub customer_name: String,
    pub product_id: Option<SubjectId>,
    pub service_id: Option<SubjectId>,
    pub account_id: AccountId,
    pub transaction_id: String,
}

/// The page where the customer submits the review.
///
/// A product id takes precedence over a service id.
pub fn review_link(base_url: &Url, req: &ReviewRequest) -> Result<Url> {
    let (subject_param, subject_id, kind) = match (req.product_id, req.service_id) {
        (Some(id), _) => ("productId", id, ReviewKind::Product),
        (None, Some(id)) => ("serviceId", id, ReviewKind::Service),
        (None, None) => return Err(Error::MissingSubject),
    };
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("index.html");
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(subject_param, &subject_id.to_string())
        .append_pair("accountId", &req.account_id.to_string())
        .append_pair("type", kind.as_str());
    Ok(url)
}

pub fn request_review<G>(gateway: &G, base_url: &Url, req: &ReviewRequest) -> Result<Url>
where
    G: NotificationGateway + ?Sized,
{
    let review_url = review_link(base_url, req)?;
    let recipient = req
        .customer_email
        .parse::<EmailAddress>()?
        .with_display_name(req.customer_name.as_str());
    let event = NotificationEvent::ReviewRequested {
        recipient: &recipient,
        customer_name: &req.customer_name,
        transaction_id: &req.transaction_id,
        review_url: &review_url,
    };
    if let Err(err) = gateway.notify(event) {
        log::warn!(
            "Failed to send review request to {}: {err}",
            recipient.as_str()
        );
        return Err(err.into());
    }
    log::info!(
        "Sent review request for transaction '{}' to {}",
        req.transaction_id,
        recipient.as_str()
    );
    Ok(review_url)
}
