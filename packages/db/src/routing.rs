// ABOUTME: Connection routing between the primary and replica pools
// ABOUTME: Read-only units of work go to the replica, everything else to the primary

use serde::Serialize;

/// Intent of a unit of work, declared by whoever opens the operation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    pub fn is_read_only(self) -> bool {
        matches!(self, AccessMode::ReadOnly)
    }
}

/// Selection key naming the physical pool that backs an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbRole {
    Primary,
    Replica,
}

impl DbRole {
    /// Routing rule: only explicitly read-only work may use the replica.
    /// Writes must never reach a replica, so primary is the fallback for
    /// everything else.
    pub fn select(read_only: bool) -> Self {
        if read_only {
            DbRole::Replica
        } else {
            DbRole::Primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_selects_replica() {
        assert_eq!(DbRole::select(true), DbRole::Replica);
    }

    #[test]
    fn read_write_selects_primary() {
        assert_eq!(DbRole::select(false), DbRole::Primary);
    }

    #[test]
    fn selection_is_not_cached_across_calls() {
        // The flag can differ between sequential units of work in the same
        // process, so every call must be evaluated fresh.
        assert_eq!(DbRole::select(true), DbRole::Replica);
        assert_eq!(DbRole::select(false), DbRole::Primary);
        assert_eq!(DbRole::select(true), DbRole::Replica);
        assert_eq!(DbRole::select(false), DbRole::Primary);
    }

    #[test]
    fn access_mode_maps_to_read_only_flag() {
        assert!(AccessMode::ReadOnly.is_read_only());
        assert!(!AccessMode::ReadWrite.is_read_only());
    }
}
