use anyhow::{anyhow, Result};
use reviewdb_core::Url;
use reviewdb_entities::email::EmailAddress;
use reviewdb_gateways::email::mailgun;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

pub use raw::DbBackend;

const DEFAULT_CONFIG_FILE_NAME: &str = "reviewdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub review_request: ReviewRequest,
    pub email: Email,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    pub backend: DbBackend,
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct ReviewRequest {
    /// Base of the links that are sent to customers.
    pub base_url: Url,
    pub sender_name: String,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    MailGun {
        api_base_url: String,
        api_key: String,
        domain: String,
        sender_address: EmailAddress,
        timeout: Duration,
    },
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            review_request,
            email,
            gateway,
        } = from;

        // Missing sections are taken from the embedded defaults.
        let default = raw::Config::try_default()?;

        let raw::Db {
            backend,
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(default.db)
            .ok_or_else(|| anyhow!("Missing DB configuration"))?;

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }

        let db = Db {
            backend,
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let toml_name = gw_name.toml_name();
                let gateway = gateway.unwrap_or_default();

                let gw = match gw_name {
                    raw::EmailGateway::Mailgun => {
                        let raw::MailGun {
                            api_key,
                            domain,
                            sender_address,
                            api_base_url,
                            timeout,
                        } = gateway.mailgun.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        let sender_address = sender_address.parse()?;
                        let api_base_url = api_base_url
                            .unwrap_or_else(|| mailgun::DEFAULT_API_BASE_URL.to_string());
                        let timeout = timeout.unwrap_or(mailgun::DEFAULT_TIMEOUT);
                        log::info!("Use Mailgun gateway");
                        EmailGateway::MailGun {
                            api_base_url,
                            api_key,
                            domain,
                            sender_address,
                            timeout,
                        }
                    }
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.ok_or_else(|| {
                                anyhow!("Missing '{toml_name}' gateway configuration")
                            })?;
                        let sender_address = sender_address.parse()?;
                        log::info!("Use sendmail gateway");
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing '{toml_name}' gateway configuration")
                            })?;

                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let email = Email {
            gateway: email_gateway,
        };

        let raw::WebServer { cors } = webserver
            .or(default.webserver)
            .ok_or_else(|| anyhow!("Missing webserver configuration"))?;

        let webserver = WebServer { enable_cors: cors };

        let raw::ReviewRequest {
            base_url,
            sender_name,
        } = review_request
            .or(default.review_request)
            .ok_or_else(|| anyhow!("Missing review request configuration"))?;

        let base_url = base_url
            .parse()
            .map_err(|err| anyhow!("Invalid review request base URL '{base_url}': {err}"))?;

        let review_request = ReviewRequest {
            base_url,
            sender_name,
        };

        Ok(Self {
            db,
            webserver,
            review_request,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.db.backend, DbBackend::Sqlite);
        assert!(cfg.email.gateway.is_none());
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(cfg.review_request.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(cfg.review_request.sender_name, "Reviews Team");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(
            r#"
            [webserver]
            cors = true
            "#,
        )
        .unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert_eq!(cfg.review_request.sender_name, "Reviews Team");
    }

    #[test]
    fn mailgun_defaults() {
        let cfg = parse(
            r#"
            [email]
            gateway = "mailgun"

            [gateway.mailgun]
            api-key = "secret"
            domain = "mg.example.com"
            sender-address = "reviews@example.com"
            "#,
        )
        .unwrap();
        let Some(EmailGateway::MailGun {
            api_base_url,
            timeout,
            sender_address,
            ..
        }) = cfg.email.gateway
        else {
            panic!("Expected Mailgun gateway");
        };
        assert_eq!(api_base_url, mailgun::DEFAULT_API_BASE_URL);
        assert_eq!(timeout, mailgun::DEFAULT_TIMEOUT);
        assert_eq!(sender_address.as_str(), "reviews@example.com");
    }

    #[test]
    fn missing_gateway_configuration() {
        let err = parse(
            r#"
            [email]
            gateway = "sendmail"
            "#,
        )
        .err()
        .unwrap();
        assert_eq!(err.to_string(), "Missing 'sendmail' gateway configuration");
    }

    #[test]
    fn invalid_sender_address() {
        assert!(parse(
            r#"
            [email]
            gateway = "sendmail"

            [gateway.sendmail]
            sender-address = ""
            "#,
        )
        .is_err());
    }

    #[test]
    fn invalid_base_url() {
        assert!(parse(
            r#"
            [review-request]
            base-url = "not a url"
            sender-name = "Shop"
            "#,
        )
        .is_err());
    }

    #[test]
    fn parse_full_config_example() {
        let cfg = parse(include_str!("reviewdb.full-example.toml")).unwrap();
        assert!(matches!(
            cfg.email.gateway,
            Some(EmailGateway::MailGun { .. })
        ));
        assert_eq!(
            cfg.review_request.base_url.as_str(),
            "https://shop.example.com/reviews/"
        );
    }
}
