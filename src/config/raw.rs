use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_CONFIG_FILE: &str = include_str!("reviewdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub review_request: Option<ReviewRequest>,
    pub email: Option<Email>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    #[serde(default)]
    pub backend: DbBackend,
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DbBackend {
    #[default]
    Sqlite,
    InMemory,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReviewRequest {
    pub base_url: String,
    pub sender_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailGateway {
    Mailgun,
    Sendmail,
    EmailToJsonFile,
}

impl EmailGateway {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::Mailgun => "mailgun",
            Self::Sendmail => "sendmail",
            Self::EmailToJsonFile => "email-to-json-file",
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub mailgun: Option<MailGun>,
    pub sendmail: Option<Sendmail>,
    pub email_to_json_file: Option<EmailToJsonFile>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MailGun {
    pub api_key: String,
    pub domain: String,
    pub sender_address: String,
    pub api_base_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sendmail {
    pub sender_address: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailToJsonFile {
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::try_default().unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.review_request.is_some());
        assert!(cfg.email.and_then(|e| e.gateway).is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg: Config = toml::from_str(include_str!("reviewdb.full-example.toml")).unwrap();
        let gateway = cfg.gateway.unwrap();
        let mailgun = gateway.mailgun.unwrap();
        assert_eq!(mailgun.timeout, Some(Duration::from_secs(30)));
        assert!(gateway.sendmail.is_some());
        assert!(gateway.email_to_json_file.is_some());
        assert_eq!(cfg.db.unwrap().backend, DbBackend::Sqlite);
    }

    #[test]
    fn parse_in_memory_backend() {
        let cfg: Config = toml::from_str(
            r#"
            [db]
            backend = "in-memory"
            connection-sqlite = "unused.db"
            connection-pool-size = 1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.db.unwrap().backend, DbBackend::InMemory);
    }
}
