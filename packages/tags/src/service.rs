// ABOUTME: Unit-of-work boundary around tag store operations
// ABOUTME: Reads are marked read-only (replica), writes read-write (primary)

use comica_db::{AccessMode, StoreResult};
use comica_models::{Tag, TagDraft};

use crate::store::TagStore;

/// Application service defining the read/write boundary for tag operations.
///
/// The access mode is fixed here, before the store acquires any connection,
/// so the router always sees the correct intent.
pub struct TagService {
    store: TagStore,
}

impl TagService {
    pub fn new(store: TagStore) -> Self {
        Self { store }
    }

    /// Read-only unit of work: the lookup routes to the replica.
    pub async fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        self.store.find_all(AccessMode::ReadOnly).await
    }

    /// Read-write unit of work: the write routes to the primary.
    ///
    /// Returns the persisted entity with its assigned identifier. Store
    /// rejections propagate unmodified; there is no retry.
    pub async fn add_tag(&self, draft: TagDraft) -> StoreResult<Tag> {
        self.store.save(AccessMode::ReadWrite, draft).await
    }
}
