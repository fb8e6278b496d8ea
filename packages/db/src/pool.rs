// ABOUTME: Construction and routing of the primary/replica pool pair
// ABOUTME: Pools are created lazily and resolved per operation via DbRole

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::routing::{AccessMode, DbRole};

/// Connection settings for the primary/replica pool pair.
///
/// The two URLs are configured independently; in production they point at
/// logically replicated instances of the same schema.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub primary_url: String,
    pub replica_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(primary_url: impl Into<String>, replica_url: impl Into<String>) -> Self {
        Self {
            primary_url: primary_url.into(),
            replica_url: replica_url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Handle pair over the two physical database pools.
///
/// Held once for the process lifetime and cloned into request state; the
/// pools synchronize internally.
#[derive(Clone)]
pub struct ReplicatedDb {
    primary: SqlitePool,
    replica: SqlitePool,
}

impl ReplicatedDb {
    pub fn new(primary: SqlitePool, replica: SqlitePool) -> Self {
        Self { primary, replica }
    }

    /// Build both pools from the config.
    ///
    /// Pools connect lazily: no connection is attempted here, so a database
    /// that is down at boot does not prevent process start. The replica is
    /// opened read-only, so a write mistakenly routed there fails loudly.
    pub fn connect(config: &DbConfig) -> StoreResult<Self> {
        debug!("Configuring primary pool: {}", config.primary_url);
        let primary_opts = SqliteConnectOptions::from_str(&config.primary_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);
        let primary = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(primary_opts);

        debug!("Configuring replica pool: {}", config.replica_url);
        let replica_opts = SqliteConnectOptions::from_str(&config.replica_url)?.read_only(true);
        let replica = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(replica_opts);

        Ok(Self { primary, replica })
    }

    /// Resolve the pool backing an operation.
    ///
    /// The routing decision is made fresh on every call; the intent can
    /// differ between sequential units of work within one process lifetime.
    pub fn pool(&self, mode: AccessMode) -> &SqlitePool {
        match DbRole::select(mode.is_read_only()) {
            DbRole::Primary => &self.primary,
            DbRole::Replica => &self.replica,
        }
    }

    /// Direct access to a pool by role, bypassing routing. Used by the boot
    /// health check, which probes both roles regardless of intent.
    pub fn pool_for_role(&self, role: DbRole) -> &SqlitePool {
        match role {
            DbRole::Primary => &self.primary,
            DbRole::Replica => &self.replica,
        }
    }

    /// Bring the primary schema up to date with the embedded migrations.
    ///
    /// Only the primary is migrated; a real replica receives the schema
    /// through replication.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        sqlx::migrate!().run(&self.primary).await?;
        info!("Database migrations completed");
        Ok(())
    }
}
