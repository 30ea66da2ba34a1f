//! Fixed SQL used against style databases and catalog introspection.

use rusqlite::Connection;
use stylx_core::{TableInfo, TableKind};

use crate::error::Result;

/// Projection of the `Items` table. Column names are matched
/// case-insensitively by SQLite and aliased to lowercase. No `ORDER BY`:
/// rows come back in the table's natural scan order.
pub(crate) const ITEMS_SQL: &str = "SELECT
    ID id,
    CLASS class,
    CATEGORY category,
    NAME name,
    TAGS tags,
    CONTENT content
FROM Items";

/// Every table and view outside SQLite's reserved `sqlite_` namespace.
const CATALOG_SQL: &str = r"SELECT name, type
FROM sqlite_schema
WHERE type IN ('table', 'view')
    AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
ORDER BY name";

/// Cheap read that fails when the file is not a database.
pub(crate) const PROBE_SQL: &str = "SELECT count(*) FROM sqlite_schema";

/// Lists tables and views sorted ascending by name.
pub(crate) fn list_tables_and_views(conn: &Connection) -> Result<Vec<TableInfo>> {
    let mut stmt = conn.prepare(CATALOG_SQL)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut tables = Vec::new();
    for row in rows {
        let (name, kind) = row?;
        if let Some(kind) = TableKind::from_catalog(&kind) {
            tables.push(TableInfo { name, kind });
        }
    }
    Ok(tables)
}
