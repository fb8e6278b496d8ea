// ABOUTME: Author entity definition
// ABOUTME: Schema-only in the current scope, no exposed operations

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub biography: Option<String>,
}
