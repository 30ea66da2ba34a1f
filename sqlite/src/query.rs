//! Lazy extraction of items from the `Items` table.

use std::iter::FusedIterator;

use rusqlite::{Rows, Statement};
use stylx_core::Item;
use tracing::debug;

use crate::convert;
use crate::database::StyleDatabase;
use crate::error::{Result, StylxError};
use crate::schema::ITEMS_SQL;

/// Prepared item query bound to one [`StyleDatabase`].
///
/// Each call to [`iter`](Self::iter) runs the query afresh and yields items
/// in the table's natural scan order; no ordering is imposed.
///
/// # Examples
///
/// ```no_run
/// use stylx_sqlite::StyleDatabase;
///
/// let db = StyleDatabase::open("styles/Basic.stylx").unwrap();
/// let mut query = db.items().unwrap();
/// for item in query.iter().unwrap() {
///     let item = item.unwrap();
///     println!("{}: {}", item.id, item.name);
/// }
/// ```
pub struct ItemQuery<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> ItemQuery<'conn> {
    /// Prepares the fixed item projection.
    ///
    /// # Errors
    ///
    /// Returns [`StylxError::Query`] if the `Items` table or one of its
    /// expected columns does not exist.
    pub fn prepare(db: &'conn StyleDatabase) -> Result<Self> {
        let stmt = db
            .connection()
            .prepare(ITEMS_SQL)
            .map_err(StylxError::Query)?;
        Ok(Self { stmt })
    }

    /// Starts a new pass over the table.
    pub fn iter(&mut self) -> Result<ItemIter<'_>> {
        debug!("querying items");
        let rows = self.stmt.query([])?;
        Ok(ItemIter { rows, done: false })
    }
}

/// Forward-only iterator over the rows of one item query.
///
/// Yields `Err` at most once: after a row fails to decode or SQLite reports
/// an error, the iterator is exhausted.
pub struct ItemIter<'stmt> {
    rows: Rows<'stmt>,
    done: bool,
}

impl Iterator for ItemIter<'_> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.rows.next() {
            Ok(Some(row)) => convert::item_from_row(row),
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(err) => Err(err.into()),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl FusedIterator for ItemIter<'_> {}
