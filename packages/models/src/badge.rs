// ABOUTME: Badge entity definition and type enumeration
// ABOUTME: Schema-only in the current scope, no exposed operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge category, stored as text in the `badge_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    Achievement,
    Subscription,
    Event,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub effect_class: Option<String>,
    pub badge_type: BadgeType,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_type_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&BadgeType::Achievement).unwrap(),
            r#""achievement""#
        );
    }
}
