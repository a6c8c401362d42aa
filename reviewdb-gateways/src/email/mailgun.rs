use std::time::Duration;

use itertools::Itertools;
use reviewdb_entities::email::*;

use super::{DeliveryError, EmailGateway};

pub const DEFAULT_API_BASE_URL: &str = "https://api.eu.mailgun.net/v3";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An email gateway based on mailgun.net.
#[derive(Debug, Clone)]
pub struct Mailgun {
    pub api_key: String,
    pub api_base_url: String,
    pub domain: String,
    pub from_email: EmailAddress,
    pub timeout: Duration,
}

impl Mailgun {
    fn messages_url(&self) -> String {
        let Self {
            api_base_url,
            domain,
            ..
        } = self;
        format!("{}/{domain}/messages", api_base_url.trim_end_matches('/'))
    }

    fn params(
        &self,
        recipients: &[EmailAddress],
        email: &EmailContent,
    ) -> Vec<(&'static str, String)> {
        let to = recipients.iter().map(ToString::to_string).join(",");
        vec![
            ("from", self.from_email.to_string()),
            ("to", to),
            ("subject", email.subject.to_owned()),
            ("text", email.body.to_owned()),
        ]
    }
}

#[derive(Debug, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    pub message: String,
}

#[cfg(not(test))]
fn send_raw(
    url: &str,
    api_key: &str,
    timeout: Duration,
    params: Vec<(&'static str, String)>,
) -> Result<(), DeliveryError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| DeliveryError::Unreachable(err.into()))?;
    let response = client
        .post(url)
        .form(&params)
        .basic_auth("api", Some(api_key))
        .send()
        .map_err(|err| DeliveryError::Unreachable(err.into()))?;
    let status = response.status();
    if status.is_success() {
        log::debug!("Mail provider response: {:#?}", response);
        return Ok(());
    }
    let message = response
        .json::<JsonError>()
        .map(|err| err.message)
        .unwrap_or_else(|_| status.to_string());
    Err(DeliveryError::Rejected(message))
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(
    _: &str,
    _: &str,
    _: Duration,
    params: Vec<(&'static str, String)>,
) -> Result<(), DeliveryError> {
    log::debug!("Would send e-mail: {:?}", params);
    Ok(())
}

impl EmailGateway for Mailgun {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        email: &EmailContent,
    ) -> Result<(), DeliveryError> {
        if recipients.is_empty() {
            log::warn!("No valid email addresses specified");
            return Err(DeliveryError::NoRecipients);
        }
        log::debug!(
            "Sending e-mails from {} to: {:?}",
            self.from_email,
            recipients
        );
        let params = self.params(recipients, email);
        send_raw(&self.messages_url(), &self.api_key, self.timeout, params)
    }
}
