use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::values::embedding::{decode_embedding, encode_embedding};
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Mutex::new(conn) }
    }

    pub fn open(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL").map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        Ok(Self::new(conn))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn ensure_schema(&self) -> Result<(), DomainError> {
        let conn = self.lock()?;
        run_migrations(&conn).map_err(DomainError::Database)
    }

    fn insert(&self, text: &str, embedding: &[f32]) -> Result<i64, DomainError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO documents (text, embedding) VALUES (?1, ?2)",
            params![text, encode_embedding(embedding)],
        ).map_err(|e| DomainError::Database(format!("Failed to insert document: {e}")))?;
        Ok(conn.last_insert_rowid())
    }

    fn list_all(&self) -> Result<Vec<Document>, DomainError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, text, embedding FROM documents ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let text: String = row.get(1)?;
                let blob: Vec<u8> = row.get(2)?;
                Ok((id, text, blob))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, text, blob)| {
                let embedding = decode_embedding(&blob)
                    .map_err(|e| DomainError::Parse(format!("document {id}: {e}")))?;
                Ok(Document { id, text, embedding })
            })
            .collect()
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM documents", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn stored_dimension(&self) -> Result<Option<usize>, DomainError> {
        let conn = self.lock()?;
        let len: Option<i64> = conn
            .query_row("SELECT length(embedding) FROM documents ORDER BY id LIMIT 1", [], |r| r.get(0))
            .optional()?;
        Ok(len.map(|bytes| bytes as usize / 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteDocumentStore {
        let store = SqliteDocumentStore::new(Connection::open_in_memory().unwrap());
        store.ensure_schema().unwrap();
        store
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let s = store();
        let a = s.insert("first", &[0.1, 0.2]).unwrap();
        let b = s.insert("first", &[0.1, 0.2]).unwrap();
        assert!(b > a);
        assert_eq!(s.count().unwrap(), 2);
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let s = store();
        s.insert("a", &[1.0]).unwrap();
        s.insert("b", &[2.0]).unwrap();
        let docs = s.list_all().unwrap();
        assert_eq!(docs.iter().map(|d| d.text.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(docs[1].embedding, vec![2.0]);
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let s = store();
        s.insert("kept", &[1.0]).unwrap();
        s.ensure_schema().unwrap();
        assert_eq!(s.count().unwrap(), 1);
    }

    #[test]
    fn test_stored_dimension() {
        let s = store();
        assert_eq!(s.stored_dimension().unwrap(), None);
        s.insert("x", &[0.0; 3]).unwrap();
        assert_eq!(s.stored_dimension().unwrap(), Some(3));
    }

    #[test]
    fn test_malformed_blob_is_parse_error() {
        let s = store();
        {
            let conn = s.lock().unwrap();
            conn.execute(
                "INSERT INTO documents (text, embedding) VALUES ('bad', ?1)",
                params![vec![1u8, 2, 3]],
            )
            .unwrap();
        }
        assert!(matches!(s.list_all(), Err(DomainError::Parse(_))));
    }
}
