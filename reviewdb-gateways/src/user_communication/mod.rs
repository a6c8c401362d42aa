use askama::Template;
use reviewdb_entities::email::*;

#[derive(Template)]
#[template(path = "email_review_request/subject.txt")]
struct EmailReviewRequestSubjectTemplate;

#[derive(Template)]
#[template(path = "email_review_request/body.txt")]
struct EmailReviewRequestBodyTemplate<'a> {
    customer_name: &'a str,
    transaction_id: &'a str,
    review_url: &'a str,
    sender_name: &'a str,
}

pub fn review_request_email(
    customer_name: &str,
    transaction_id: &str,
    review_url: &str,
    sender_name: &str,
) -> askama::Result<EmailContent> {
    let subject = EmailReviewRequestSubjectTemplate.render()?.trim().to_owned();
    let body = EmailReviewRequestBodyTemplate {
        customer_name: customer_name.trim(),
        transaction_id,
        review_url,
        sender_name,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}
