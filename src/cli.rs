use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reviewdb_application::prelude::{ReviewRequestSender, ReviewService};
use reviewdb_db_memory::InMemoryReviewStore;

use crate::{
    config::{self, Config, DbBackend},
    gateways,
};

#[derive(Parser, Debug)]
#[command(name = "reviewdb", version, about = "Collect reviews and ratings of products, services and teams")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// URL to the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    /// Keep all reviews in memory (they are lost on shutdown)
    #[arg(long)]
    pub in_memory: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let reviews = review_service(&cfg.db)?;
    let notify =
        gateways::notification_gateway(cfg.email.gateway, &cfg.review_request.sender_name)?;
    let review_requests = ReviewRequestSender::new(notify, cfg.review_request.base_url);

    reviewdb_webserver::run(
        reviews,
        review_requests,
        cfg.webserver.enable_cors,
        env!("CARGO_PKG_VERSION"),
    )
    .await
}

fn load_config(args: &Args) -> Result<Config> {
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = &args.db_url {
        cfg.db.conn_sqlite = db_url.clone();
    }
    if args.in_memory {
        cfg.db.backend = DbBackend::InMemory;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    Ok(cfg)
}

fn review_service(db: &config::Db) -> Result<ReviewService> {
    let service = match db.backend {
        DbBackend::InMemory => {
            log::warn!("Reviews are kept in memory only");
            ReviewService::new(InMemoryReviewStore::new())
        }
        DbBackend::Sqlite => {
            log::info!(
                "Connecting to SQLite database '{}' (pool size = {})",
                db.conn_sqlite,
                db.conn_pool_size
            );
            let connections =
                reviewdb_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
            reviewdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
            ReviewService::new(connections)
        }
    };
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "reviewdb",
            "--config-file",
            "custom.toml",
            "--db-url",
            "other.db",
            "--enable-cors",
            "--in-memory",
        ])
        .unwrap();
        assert_eq!(args.config_file, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.db_url.as_deref(), Some("other.db"));
        assert!(args.enable_cors);
        assert!(args.in_memory);
    }

    #[test]
    fn args_override_config() {
        let args = Args::try_parse_from([
            "reviewdb",
            "--config-file",
            "does-not-exist.toml",
            "--db-url",
            "other.db",
            "--in-memory",
            "--enable-cors",
        ])
        .unwrap();
        let cfg = load_config(&args).unwrap();
        assert_eq!(cfg.db.conn_sqlite, "other.db");
        assert_eq!(cfg.db.backend, DbBackend::InMemory);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn create_sqlite_review_service() {
        let db = config::Db {
            backend: DbBackend::Sqlite,
            conn_sqlite: ":memory:".into(),
            conn_pool_size: 1,
        };
        let service = review_service(&db).unwrap();
        assert_eq!(
            service
                .count_reviews(reviewdb_core::entities::ReviewKind::Product)
                .unwrap(),
            0
        );
    }
}
