//! MySQL connection pool

use serde::Serialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

/// Statements slower than this are logged at warn
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

const MYSQL_SCHEME: &str = "mysql";

/// Parse a `mysql://` URL and attach statement logging
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, InfrastructureError> {
    match config.url.split_once("://") {
        Some((scheme, _)) if scheme.eq_ignore_ascii_case(MYSQL_SCHEME) => {}
        Some((scheme, _)) => {
            return Err(InfrastructureError::Config(format!(
                "Invalid database URL: unsupported scheme {:?}, expected {}://",
                scheme, MYSQL_SCHEME
            )))
        }
        None => {
            return Err(InfrastructureError::Config(format!(
                "Invalid database URL: missing {}:// scheme",
                MYSQL_SCHEME
            )))
        }
    }

    let options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;
    Ok(options
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD))
}

/// Pooled connections plus the settings they were opened with
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Open the pool and verify one connection
    ///
    /// ```no_run
    /// use sf_infra::config::DatabaseConfig;
    /// use sf_infra::database::DatabasePool;
    ///
    /// # async fn open() -> Result<(), sf_infra::InfrastructureError> {
    /// let pool = DatabasePool::new(DatabaseConfig::new("mysql://root@localhost/safiri")).await?;
    /// assert!(pool.health_check().await.reachable);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = connect_options(&config)?;
        tracing::info!(max_connections = config.max_connections, "Opening MySQL pool");

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!("Could not open MySQL pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool, config })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Round-trip `SELECT 1`
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        if value != 1 {
            return Err(InfrastructureError::Config(format!(
                "Unexpected ping result: {}",
                value
            )));
        }
        Ok(())
    }

    /// Ping result together with the current pool occupancy
    pub async fn health_check(&self) -> DatabaseHealth {
        let reachable = match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        };
        DatabaseHealth {
            reachable,
            pool: self.get_statistics(),
        }
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }

    /// Apply the embedded migrations under `migrations/`
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Migrations applied");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections, {} idle",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    pub pool: PoolStatistics,
}
