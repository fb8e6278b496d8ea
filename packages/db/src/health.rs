// ABOUTME: One-shot boot-time connectivity report for both database roles
// ABOUTME: Failures are logged and recorded, never fatal

use serde::Serialize;
use tracing::{error, info};

use crate::pool::ReplicatedDb;
use crate::routing::DbRole;

/// Connectivity status of a single pool, captured once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct PoolHealth {
    pub role: DbRole,
    pub connected: bool,
    pub product: Option<String>,
    pub version: Option<String>,
    pub error: Option<String>,
}

/// Structured report covering both roles, emitted once at boot.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub primary: PoolHealth,
    pub replica: PoolHealth,
}

impl HealthReport {
    pub fn all_connected(&self) -> bool {
        self.primary.connected && self.replica.connected
    }
}

/// Probe both pools by acquiring one connection each.
///
/// Outcomes are logged per role; errors end up in the report instead of
/// propagating, and startup proceeds regardless.
pub async fn check(db: &ReplicatedDb) -> HealthReport {
    HealthReport {
        primary: probe(db, DbRole::Primary).await,
        replica: probe(db, DbRole::Replica).await,
    }
}

async fn probe(db: &ReplicatedDb, role: DbRole) -> PoolHealth {
    let pool = db.pool_for_role(role);

    match sqlx::query_scalar::<_, String>("SELECT sqlite_version()")
        .fetch_one(pool)
        .await
    {
        Ok(version) => {
            info!(?role, product = "SQLite", %version, "Database connected successfully");
            PoolHealth {
                role,
                connected: true,
                product: Some("SQLite".to_string()),
                version: Some(version),
                error: None,
            }
        }
        Err(err) => {
            error!(?role, %err, "Failed to connect to database");
            PoolHealth {
                role,
                connected: false,
                product: None,
                version: None,
                error: Some(err.to_string()),
            }
        }
    }
}
