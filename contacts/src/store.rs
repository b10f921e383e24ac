//! Contact Store - single-table CRUD over SQLite.
//!
//! The store owns its connection. Ids are assigned by SQLite on insert and
//! are required for update and delete; a record without one is a caller bug
//! and is reported as [`ContactError::MissingId`] instead of being ignored.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tally_types::{Contact, ContactId};

use crate::error::{ContactError, Result};
use crate::sqlite_util::open_db;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistent store for contacts.
pub struct ContactStore {
    db: Connection,
}

impl ContactStore {
    const SCHEMA: &'static str = r"
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_contacts_name
        ON contacts(name COLLATE NOCASE);
    ";

    const COLUMNS: &'static str = "id, name, address, email, phone";

    /// Open or create the contacts database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = open_db(path)?;
        tracing::debug!(path = %path.display(), "opened contact store");
        Self::initialize(db)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(db: Connection) -> Result<Self> {
        db.busy_timeout(BUSY_TIMEOUT)?;
        db.execute_batch(Self::SCHEMA)?;
        Ok(Self { db })
    }

    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: Some(ContactId::new(row.get(0)?)),
            name: row.get(1)?,
            address: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
        })
    }

    /// Insert a new contact and return it with its assigned id.
    ///
    /// Any id already present on `contact` is ignored.
    pub fn create(&mut self, contact: &Contact) -> Result<Contact> {
        self.db.execute(
            "INSERT INTO contacts (name, address, email, phone) VALUES (?1, ?2, ?3, ?4)",
            params![contact.name, contact.address, contact.email, contact.phone],
        )?;
        let id = ContactId::new(self.db.last_insert_rowid());
        tracing::debug!(%id, name = %contact.name, "created contact");
        Ok(Contact {
            id: Some(id),
            ..contact.clone()
        })
    }

    /// All contacts, alphabetical by name (case-insensitive), ties by id.
    pub fn get_all(&self) -> Result<Vec<Contact>> {
        let sql = format!(
            "SELECT {} FROM contacts ORDER BY name COLLATE NOCASE ASC, id ASC",
            Self::COLUMNS
        );
        let mut stmt = self.db.prepare(&sql)?;
        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    pub fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
        let sql = format!("SELECT {} FROM contacts WHERE id = ?1", Self::COLUMNS);
        let contact = self
            .db
            .query_row(&sql, [id.value()], Self::row_to_contact)
            .optional()?;
        Ok(contact)
    }

    /// Overwrite the stored fields of an existing contact.
    ///
    /// Returns the stored record after the update, or `None` when no row has
    /// that id.
    pub fn update(&mut self, contact: &Contact) -> Result<Option<Contact>> {
        let id = contact
            .id
            .ok_or(ContactError::MissingId { operation: "update" })?;

        let changed = self.db.execute(
            "UPDATE contacts SET name = ?1, address = ?2, email = ?3, phone = ?4 WHERE id = ?5",
            params![
                contact.name,
                contact.address,
                contact.email,
                contact.phone,
                id.value()
            ],
        )?;
        if changed == 0 {
            tracing::debug!(%id, "update matched no contact");
            return Ok(None);
        }
        tracing::debug!(%id, "updated contact");
        self.get_by_id(id)
    }

    /// Create when the contact has no id, update otherwise.
    pub fn save(&mut self, contact: &Contact) -> Result<Contact> {
        match contact.id {
            None => self.create(contact),
            Some(id) => self.update(contact)?.ok_or(ContactError::NotFound(id)),
        }
    }

    /// Delete a stored contact. Returns whether a row was removed.
    pub fn delete(&mut self, contact: &Contact) -> Result<bool> {
        let id = contact
            .id
            .ok_or(ContactError::MissingId { operation: "delete" })?;
        self.delete_by_id(id)
    }

    pub fn delete_by_id(&mut self, id: ContactId) -> Result<bool> {
        let removed = self
            .db
            .execute("DELETE FROM contacts WHERE id = ?1", [id.value()])?;
        tracing::debug!(%id, removed, "delete contact");
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert `contacts` in one transaction, but only into an empty table.
    ///
    /// Returns the number of rows inserted (zero when the table already had data).
    pub fn seed_sample_data(&mut self, contacts: &[Contact]) -> Result<usize> {
        if self.count()? > 0 {
            tracing::debug!("contact store not empty, skipping seed");
            return Ok(0);
        }

        let tx = self.db.transaction()?;
        for contact in contacts {
            tx.execute(
                "INSERT INTO contacts (name, address, email, phone) VALUES (?1, ?2, ?3, ?4)",
                params![contact.name, contact.address, contact.email, contact.phone],
            )?;
        }
        tx.commit()?;

        tracing::info!(count = contacts.len(), "seeded contact store");
        Ok(contacts.len())
    }
}
