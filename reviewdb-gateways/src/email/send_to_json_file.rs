use jfs::Store;
use reviewdb_core::entities::Timestamp;
use reviewdb_entities::email::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

use super::{DeliveryError, EmailGateway};

/// Stores outgoing emails as JSON files instead of sending them.
///
/// Intended for local testing.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        let subject = content.subject.to_owned();
        let body = content.body.to_owned();
        let to = to.to_string();
        Self { to, subject, body }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        content: &EmailContent,
    ) -> Result<(), DeliveryError> {
        if recipients.is_empty() {
            return Err(DeliveryError::NoRecipients);
        }
        for to in recipients {
            let now = Timestamp::now().as_millis();
            let key = format!("{now}-{}", to.as_str());
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                log::warn!("Unable to save email in JSON file: {err}");
                return Err(DeliveryError::Unreachable(err.into()));
            }
        }
        Ok(())
    }
}
