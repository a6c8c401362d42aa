use fast_chemail::is_valid_email;
use itertools::Itertools;
use reviewdb_entities::email::*;
#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

use super::{DeliveryError, EmailGateway};

/// Hands messages over to the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub const fn new(from: EmailAddress) -> Self {
        Self { from }
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<(), DeliveryError> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| DeliveryError::Unreachable(err.into()))?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| DeliveryError::Unreachable(anyhow::anyhow!("Could not get stdin")))?
        .write_all(mail.as_bytes())
        .map_err(|err| DeliveryError::Unreachable(err.into()))?;
    let output = child
        .wait_with_output()
        .map_err(|err| DeliveryError::Unreachable(err.into()))?;
    if !output.status.success() {
        return Err(DeliveryError::Rejected(format!(
            "sendmail exited with {}",
            output.status
        )));
    }
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(email: &str) -> Result<(), DeliveryError> {
    log::debug!("Would send e-mail: {}", email);
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        email: &EmailContent,
    ) -> Result<(), DeliveryError> {
        log::debug!("Sending e-mails to: {:?}", recipients);
        for to in recipients {
            let mail = compose(&self.from, std::slice::from_ref(to), email)?;
            send_raw(&mail)?;
        }
        Ok(())
    }
}

// quoted_printable limits the length of lines to 76 chars
// and otherwise inserts unintended line breaks! The max.
// length of a header line is 78 chars including the \r\n
// line break.
const MAX_HEADER_FIELD_LEN: usize = 76;

const LINE_BREAK: &str = "\r\n";

fn encode_header_field_partially(input: &str, encoded_max_len: usize) -> (String, usize) {
    // overhead of the encoding (see string formatting literal below)
    debug_assert!(encoded_max_len >= "=?UTF-8?Q??=".len());
    debug_assert!(encoded_max_len <= MAX_HEADER_FIELD_LEN);
    // Binary search for the longest prefix that fits.
    let mut input_min_len = 0;
    let mut input_max_len = input.len() * 2;
    loop {
        debug_assert!(input_min_len <= input_max_len);
        let mut input_len = (input_min_len + (input_max_len - input_min_len) / 2).min(input.len());
        while !input.is_char_boundary(input_len) {
            input_len -= 1;
        }
        let encoded = format!(
            "=?UTF-8?Q?{}?=",
            quoted_printable::encode_to_str(input[..input_len].as_bytes())
        );
        if encoded.len() <= encoded_max_len {
            if input_len == input_min_len {
                return (encoded, input_len);
            }
            input_min_len = input_len;
        } else {
            debug_assert!(input_min_len < input_len);
            input_max_len = input_len;
        }
    }
}

fn encode_header_field(name: &str, input: &str) -> String {
    let mut prefix_len = name.len() + 1;
    let mut encoded_output = String::with_capacity(prefix_len + input.len() * 2);
    encoded_output.push_str(name);
    encoded_output.push(':');
    let mut input_len = 0;
    while input_len < input.len() {
        if input_len > 0 {
            // continuation line
            encoded_output.push_str(LINE_BREAK);
            encoded_output.push(' ');
            prefix_len = 1;
        }
        let (encoded_part, input_part_len) =
            encode_header_field_partially(&input[input_len..], MAX_HEADER_FIELD_LEN - prefix_len);
        debug_assert!(!encoded_part.is_empty());
        debug_assert!(input_part_len > 0);
        encoded_output.push_str(&encoded_part);
        input_len += input_part_len;
    }
    encoded_output
}

pub fn compose(
    from: &EmailAddress,
    to: &[EmailAddress],
    content: &EmailContent,
) -> Result<String, DeliveryError> {
    let to = to
        .iter()
        .filter(|addr| is_valid_email(addr.as_str()))
        .map(ToString::to_string)
        .join(",");
    if to.is_empty() {
        return Err(DeliveryError::NoRecipients);
    }

    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let date = now
        .format(&Rfc2822)
        .map_err(|err| DeliveryError::Compose(err.to_string()))?;

    let email = format!(
        "Date:{date}\r\n\
         From:{from}\r\n\
         To:{to}\r\n\
         {subject_header}\r\n\
         MIME-Version:1.0\r\n\
         Content-Type:text/plain;charset=utf-8\r\n\r\n\
         {body}",
        subject_header = encode_header_field("Subject", &content.subject),
        body = content.body
    );

    log::debug!("Composed email: {}", &email);

    Ok(email)
}
