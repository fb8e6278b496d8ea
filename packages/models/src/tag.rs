// ABOUTME: Tag entity and input types
// ABOUTME: The only entity with exposed CRUD operations

use serde::{Deserialize, Serialize};

/// A classification label attached to comics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub slug: Option<String>,
}

/// Candidate tag submitted by callers.
///
/// The id is only present when re-saving an existing record; fresh tags get
/// their id from the store on first persist, never from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub slug: Option<String>,
}
