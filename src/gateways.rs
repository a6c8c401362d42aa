use anyhow::Result;
use reviewdb_core::{
    entities::{EmailAddress, EmailContent},
    gateways::email::{DeliveryError, EmailGateway},
};
use reviewdb_gateways::{
    email::{mailgun::Mailgun, send_to_json_file::SendToJsonFile, sendmail::Sendmail},
    notify::Notify,
};

use crate::config;

pub fn notification_gateway(
    gateway: Option<config::EmailGateway>,
    sender_name: &str,
) -> Result<Notify> {
    let notify = match gateway {
        Some(config::EmailGateway::MailGun {
            api_base_url,
            api_key,
            domain,
            sender_address,
            timeout,
        }) => {
            let gw = Mailgun {
                api_key,
                api_base_url,
                domain,
                from_email: sender_mailbox(sender_address, sender_name),
                timeout,
            };
            Notify::new(gw, sender_name)
        }
        Some(config::EmailGateway::Sendmail { sender_address }) => {
            Notify::new(
                Sendmail::new(sender_mailbox(sender_address, sender_name)),
                sender_name,
            )
        }
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            Notify::new(SendToJsonFile::try_new(dir)?, sender_name)
        }
        None => {
            log::warn!("No eMail gateway was configured: review requests are only logged");
            Notify::new(DummyMailGw, sender_name)
        }
    };
    Ok(notify)
}

/// Uses the sender name unless the configured address already has one.
fn sender_mailbox(address: EmailAddress, sender_name: &str) -> EmailAddress {
    if address.display_name().is_some() {
        address
    } else {
        address.with_display_name(sender_name)
    }
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        email: &EmailContent,
    ) -> Result<(), DeliveryError> {
        let recipients: Vec<_> = recipients.iter().map(EmailAddress::as_str).collect();
        log::info!(
            "Cannot send emails because no e-mail gateway was configured: to={} subject='{}'",
            recipients.join(", "),
            email.subject
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewdb_core::{gateways::notify::NotificationEvent, gateways::notify::NotificationGateway, Url};
    use reviewdb_gateways::email::sendmail;

    #[test]
    fn dev_mode_does_not_fail() {
        let notify = notification_gateway(None, "Reviews Team").unwrap();
        let recipient: EmailAddress = "alice@example.com".parse().unwrap();
        let review_url: Url = "http://localhost:8000/index.html?productId=1".parse().unwrap();
        let res = notify.notify(NotificationEvent::ReviewRequested {
            recipient: &recipient,
            customer_name: "Alice",
            transaction_id: "T-1",
            review_url: &review_url,
        });
        assert!(res.is_ok());
    }

    #[test]
    fn sender_name_in_from_header() {
        let address: EmailAddress = "reviews@example.com".parse().unwrap();
        let from = sender_mailbox(address, "Reviews Team");
        let to: [EmailAddress; 1] = ["alice@example.com".parse().unwrap()];
        let content = EmailContent {
            subject: "Review request".into(),
            body: "Hello".into(),
        };
        let mail = sendmail::compose(&from, &to, &content).unwrap();
        assert!(
            mail.contains("From:\"Reviews Team\" <reviews@example.com>\r\n"),
            "{mail}"
        );
    }

    #[test]
    fn keep_configured_sender_name() {
        let address: EmailAddress = r#""Shop" <reviews@example.com>"#.parse().unwrap();
        let from = sender_mailbox(address, "Reviews Team");
        assert_eq!(from.to_string(), r#""Shop" <reviews@example.com>"#);
    }
}
