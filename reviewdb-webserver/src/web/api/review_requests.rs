use rocket::tokio::task;

use super::*;

#[post("/review/request-review", format = "application/json", data = "<request>")]
pub async fn post_review_request(
    sender: &State<ReviewRequestSender>,
    request: JsonResult<'_, json::ReviewRequest>,
) -> Result<json::ReviewRequestConfirmation> {
    let json::ReviewRequest {
        customer_email,
        customer_name,
        product_id,
        service_id,
        account_id,
        transaction_id,
    } = request?.into_inner();
    let req = usecases::ReviewRequest {
        customer_email,
        customer_name,
        product_id: product_id.map(Into::into),
        service_id: service_id.map(Into::into),
        account_id: account_id.into(),
        transaction_id,
    };
    let sender = sender.inner().clone();
    // Mail transports block until the message has been handed over.
    let (req, review_url) = task::spawn_blocking(move || {
        let res = sender.send_review_request(&req);
        (req, res)
    })
    .await?;
    let review_url = review_url?;
    Ok(Json(json::ReviewRequestConfirmation {
        message: format!("Review request email sent to {}", req.customer_email),
        review_url: review_url.into(),
    }))
}
