// ABOUTME: Tag persistence layer over the replicated pool pair
// ABOUTME: Translates find-all/save into SQL routed by the caller's intent

use comica_db::{AccessMode, ReplicatedDb, StoreResult};
use comica_models::{Tag, TagDraft};
use sqlx::Row;
use tracing::debug;

pub struct TagStore {
    db: ReplicatedDb,
}

impl TagStore {
    pub fn new(db: ReplicatedDb) -> Self {
        Self { db }
    }

    /// Every persisted tag, in store order (by id). Empty when none exist.
    pub async fn find_all(&self, mode: AccessMode) -> StoreResult<Vec<Tag>> {
        debug!("Fetching all tags");

        let rows = sqlx::query("SELECT id, name, description, slug FROM tags ORDER BY id")
            .fetch_all(self.db.pool(mode))
            .await?;

        rows.iter().map(row_to_tag).collect()
    }

    /// Insert when the draft carries no id, upsert-by-id otherwise.
    ///
    /// Returns the stored entity, re-read through the same pool the write
    /// was routed to.
    pub async fn save(&self, mode: AccessMode, draft: TagDraft) -> StoreResult<Tag> {
        let pool = self.db.pool(mode);

        let id = match draft.id {
            None => {
                debug!("Inserting tag (name: {})", draft.name);

                let result =
                    sqlx::query("INSERT INTO tags (name, description, slug) VALUES (?, ?, ?)")
                        .bind(&draft.name)
                        .bind(&draft.description)
                        .bind(&draft.slug)
                        .execute(pool)
                        .await?;
                result.last_insert_rowid()
            }
            Some(id) => {
                debug!("Upserting tag: {}", id);

                sqlx::query(
                    r#"
                    INSERT INTO tags (id, name, description, slug)
                    VALUES (?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        description = excluded.description,
                        slug = excluded.slug
                    "#,
                )
                .bind(id)
                .bind(&draft.name)
                .bind(&draft.description)
                .bind(&draft.slug)
                .execute(pool)
                .await?;
                id
            }
        };

        let row = sqlx::query("SELECT id, name, description, slug FROM tags WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
        row_to_tag(&row)
    }
}

/// Convert a database row to a Tag
fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> StoreResult<Tag> {
    Ok(Tag {
        id: row.try_get("id").map_err(comica_db::StoreError::from)?,
        name: row.try_get("name").map_err(comica_db::StoreError::from)?,
        description: row
            .try_get("description")
            .map_err(comica_db::StoreError::from)?,
        slug: row.try_get("slug").map_err(comica_db::StoreError::from)?,
    })
}
