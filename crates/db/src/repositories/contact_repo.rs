//! Repository for the `contacts` and `contact_labels` tables.
//!
//! Provides contact CRUD, label attach/detach by name, and the label-based
//! contact listing.

use std::collections::{BTreeSet, HashMap};

use sqlx::{PgExecutor, PgPool};
use contactbook_core::label_filter::{LabelFilter, MatchMode};
use contactbook_core::types::DbId;

use crate::models::contact::{Contact, ContactWithLabels, CreateContact};
use crate::repositories::LabelRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, is_deleted, created_at";

/// Provides CRUD operations for contacts and their label associations.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    ///
    /// No uniqueness is enforced on any field.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, phone, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by ID. Cascade deletes its label associations.
    ///
    /// Returns `true` if a contact was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Label-based listing
    // -----------------------------------------------------------------------

    /// List contacts matching the label filter, in insertion order.
    ///
    /// Each qualifying contact appears once and carries its full label list,
    /// not only the labels that matched.
    pub async fn filter(
        pool: &PgPool,
        filter: &LabelFilter,
    ) -> Result<Vec<ContactWithLabels>, sqlx::Error> {
        let contacts = if filter.is_unfiltered() {
            let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id");
            sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await?
        } else {
            match filter.mode {
                MatchMode::Any => {
                    // Contact must hold ANY of the requested names.
                    let query = format!(
                        "SELECT {COLUMNS} FROM contacts c \
                         WHERE EXISTS ( \
                             SELECT 1 FROM contact_labels cl \
                             JOIN labels l ON l.id = cl.label_id \
                             WHERE cl.contact_id = c.id AND l.name = ANY($1) \
                         ) \
                         ORDER BY c.id"
                    );
                    sqlx::query_as::<_, Contact>(&query)
                        .bind(filter.names.as_slice())
                        .fetch_all(pool)
                        .await?
                }
                MatchMode::All => {
                    // Contact must hold ALL of the requested names.
                    let query = format!(
                        "SELECT {COLUMNS} FROM contacts c \
                         WHERE ( \
                             SELECT COUNT(DISTINCT l.name) FROM contact_labels cl \
                             JOIN labels l ON l.id = cl.label_id \
                             WHERE cl.contact_id = c.id AND l.name = ANY($1) \
                         ) = $2 \
                         ORDER BY c.id"
                    );
                    sqlx::query_as::<_, Contact>(&query)
                        .bind(filter.names.as_slice())
                        .bind(filter.names.len() as i64)
                        .fetch_all(pool)
                        .await?
                }
            }
        };

        let ids: Vec<DbId> = contacts.iter().map(|c| c.id).collect();
        let mut labels_by_contact = Self::label_names_for(pool, &ids).await?;

        Ok(contacts
            .into_iter()
            .map(|contact| {
                let labels = labels_by_contact.remove(&contact.id).unwrap_or_default();
                ContactWithLabels::new(contact, labels)
            })
            .collect())
    }

    /// Label names held by one contact, ordered by label id.
    pub async fn label_names<'e, E>(executor: E, contact_id: DbId) -> Result<Vec<String>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, String>(
            "SELECT l.name FROM contact_labels cl \
             JOIN labels l ON l.id = cl.label_id \
             WHERE cl.contact_id = $1 \
             ORDER BY l.id",
        )
        .bind(contact_id)
        .fetch_all(executor)
        .await
    }

    /// Label names for several contacts at once, keyed by contact id.
    async fn label_names_for(
        pool: &PgPool,
        contact_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        if contact_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (DbId, String)>(
            "SELECT cl.contact_id, l.name FROM contact_labels cl \
             JOIN labels l ON l.id = cl.label_id \
             WHERE cl.contact_id = ANY($1) \
             ORDER BY cl.contact_id, l.id",
        )
        .bind(contact_ids)
        .fetch_all(pool)
        .await?;

        let mut map: HashMap<DbId, Vec<String>> = HashMap::new();
        for (contact_id, name) in rows {
            map.entry(contact_id).or_default().push(name);
        }
        Ok(map)
    }

    // -----------------------------------------------------------------------
    // Label associations
    // -----------------------------------------------------------------------

    /// Attach labels to a contact by name, creating missing labels.
    ///
    /// Runs in one transaction holding a share lock on the contact row.
    /// Already-attached labels are left as they are. Returns `None` if the
    /// contact does not exist, otherwise the contact's label names afterwards.
    ///
    /// Names are processed in sorted order. An uncommitted label insert holds
    /// the `uq_labels_name` index entry, so concurrent calls must take those
    /// entries in one global order or they can deadlock.
    pub async fn add_labels(
        pool: &PgPool,
        contact_id: DbId,
        names: &[String],
    ) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_for_share(&mut *tx, contact_id).await? {
            return Ok(None);
        }

        let ordered: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        for name in ordered {
            let upsert = LabelRepo::get_or_create(&mut *tx, name).await?;
            sqlx::query(
                "INSERT INTO contact_labels (contact_id, label_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT (contact_id, label_id) DO NOTHING",
            )
            .bind(contact_id)
            .bind(upsert.label.id)
            .execute(&mut *tx)
            .await?;
        }

        let labels = Self::label_names(&mut *tx, contact_id).await?;
        tx.commit().await?;

        Ok(Some(labels))
    }

    /// Detach labels from a contact by name.
    ///
    /// Names that match no stored label are ignored. Returns `None` if the
    /// contact does not exist, otherwise the contact's label names afterwards.
    pub async fn remove_labels(
        pool: &PgPool,
        contact_id: DbId,
        names: &[String],
    ) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_for_share(&mut *tx, contact_id).await? {
            return Ok(None);
        }

        sqlx::query(
            "DELETE FROM contact_labels cl \
             USING labels l \
             WHERE cl.label_id = l.id AND cl.contact_id = $1 AND l.name = ANY($2)",
        )
        .bind(contact_id)
        .bind(names)
        .execute(&mut *tx)
        .await?;

        let labels = Self::label_names(&mut *tx, contact_id).await?;
        tx.commit().await?;

        Ok(Some(labels))
    }

    /// Share-lock a contact row for the rest of the transaction.
    ///
    /// Returns `false` if the contact does not exist.
    async fn lock_for_share<'e, E>(executor: E, contact_id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let found = sqlx::query_scalar::<_, DbId>("SELECT id FROM contacts WHERE id = $1 FOR SHARE")
            .bind(contact_id)
            .fetch_optional(executor)
            .await?;
        Ok(found.is_some())
    }
}
