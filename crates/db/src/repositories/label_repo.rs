//! Repository for the `labels` table.

use sqlx::{PgConnection, PgPool};
use contactbook_core::types::DbId;

use crate::models::label::{Label, LabelSummary, LabelUpsert};

/// Column list for `labels` queries.
const COLUMNS: &str = "id, name, is_deleted, created_at";

/// Provides CRUD operations for labels.
pub struct LabelRepo;

impl LabelRepo {
    /// Return the label named `name`, inserting it first if it does not exist.
    ///
    /// Insert and lookup happen in one statement guarded by the unique
    /// constraint on `name`, so among concurrent callers with the same name
    /// exactly one observes `created = true`. Pass `&mut *tx` to run inside an
    /// open transaction.
    pub async fn get_or_create(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<LabelUpsert, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                 INSERT INTO labels (name) VALUES ($1) \
                 ON CONFLICT (name) DO NOTHING \
                 RETURNING {COLUMNS} \
             ) \
             SELECT {COLUMNS}, TRUE AS created FROM inserted \
             UNION ALL \
             SELECT {COLUMNS}, FALSE AS created FROM labels \
             WHERE name = $1 AND NOT EXISTS (SELECT 1 FROM inserted)"
        );
        let row = sqlx::query_as::<_, LabelUpsert>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(row) = row {
            return Ok(row);
        }

        // The conflicting row was committed after this statement's snapshot.
        tracing::debug!(name, "Label inserted concurrently, re-reading");
        let query = format!("SELECT {COLUMNS}, FALSE AS created FROM labels WHERE name = $1");
        sqlx::query_as::<_, LabelUpsert>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a label by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels WHERE id = $1");
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all labels in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<LabelSummary>, sqlx::Error> {
        sqlx::query_as::<_, LabelSummary>("SELECT id, name FROM labels ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Delete a label by ID. Cascade deletes all contact associations.
    ///
    /// Returns `true` if a label was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
