//! Read-only handle on a single style database file.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use stylx_core::{Item, TableInfo};
use tracing::debug;

use crate::error::{Result, StylxError};
use crate::query::ItemQuery;
use crate::schema::{self, PROBE_SQL};

/// An open, read-only connection to one `.stylx` file.
///
/// The file is never created or written. Dropping the value releases the
/// connection; [`close`](Self::close) does the same and reports failures.
///
/// # Examples
///
/// ```no_run
/// use stylx_sqlite::StyleDatabase;
///
/// let db = StyleDatabase::open("styles/Basic.stylx").unwrap();
/// for table in db.list_tables_and_views().unwrap() {
///     println!("{} ({})", table.name, table.kind.as_str());
/// }
/// let items = db.read_items().unwrap();
/// println!("{} items", items.len());
/// db.close().unwrap();
/// ```
#[derive(Debug)]
pub struct StyleDatabase {
    conn: Connection,
    path: PathBuf,
}

impl StyleDatabase {
    /// Opens `path` strictly read-only.
    ///
    /// The schema catalog is probed once so that a file which is not a
    /// SQLite database fails here rather than on the first query.
    ///
    /// # Errors
    ///
    /// Returns [`StylxError::Open`] if the file is missing, unreadable, or
    /// not a database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let open_error = |source| StylxError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open_with_flags(&path, flags).map_err(open_error)?;
        conn.query_row(PROBE_SQL, [], |row| row.get::<_, i64>(0))
            .map_err(open_error)?;

        debug!(path = %path.display(), "opened style database");
        Ok(Self { conn, path })
    }

    /// Lists every user table and view, sorted ascending by name.
    pub fn list_tables_and_views(&self) -> Result<Vec<TableInfo>> {
        schema::list_tables_and_views(&self.conn)
    }

    /// Prepares the item query. See [`ItemQuery`] for lazy iteration.
    pub fn items(&self) -> Result<ItemQuery<'_>> {
        ItemQuery::prepare(self)
    }

    /// Reads every item into memory, failing on the first bad row.
    pub fn read_items(&self) -> Result<Vec<Item>> {
        let mut query = self.items()?;
        let items = query.iter()?.collect::<Result<Vec<_>>>()?;
        debug!(path = %self.path.display(), count = items.len(), "read items");
        Ok(items)
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StylxError::Database`] if SQLite refuses to close. The
    /// connection is released regardless.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.path.display(), "closing style database");
        self.conn
            .close()
            .map_err(|(_conn, err)| StylxError::Database(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.stylx");

        let err = StyleDatabase::open(&path).unwrap_err();
        assert!(matches!(err, StylxError::Open { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_non_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.stylx");
        std::fs::write(&path, "not a sqlite database\n".repeat(64)).unwrap();

        let err = StyleDatabase::open(&path).unwrap_err();
        match err {
            StylxError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn test_connection_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro.stylx");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE Items (ID);")
            .unwrap();

        let db = StyleDatabase::open(&path).unwrap();
        assert!(db.connection().execute("INSERT INTO Items VALUES (1)", []).is_err());
        db.close().unwrap();
    }
}
