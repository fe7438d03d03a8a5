//! PostgreSQL pool behind the folder/file repositories.

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use drive_core::config::{DatabaseConfig, DatabaseProvider};
use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;

/// Schema for the `folders` and `files` tables, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connection pool for the `postgres` provider.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect and, when `auto_migrate` is set, bring the schema up to date.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        let db = Self::connect(config).await?;
        if config.auto_migrate {
            db.migrate().await?;
        }
        Ok(db)
    }

    /// Connect without touching the schema.
    ///
    /// Fails with a configuration error unless the provider is `postgres`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if config.provider != DatabaseProvider::Postgres {
            return Err(AppError::configuration(format!(
                "database.provider is {:?}, expected postgres",
                config.provider
            )));
        }

        info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to {}", redact_url(&config.url)),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Apply every embedded migration the database has not seen yet.
    pub async fn migrate(&self) -> AppResult<()> {
        MIGRATOR.run(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;
        info!(
            known = MIGRATOR.iter().count(),
            "Folder/file schema is up to date"
        );
        Ok(())
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Replaces the password in a connection URL with `****`.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:****@{host}"),
        None => url.to_string(),
    }
}
