//! Conversion from `Items` rows to [`Item`] records.
//!
//! A row is first read into a private `RawItem` holding the column text as
//! stored, then reshaped: the `;`-delimited tags string becomes a list and the
//! content string is parsed as JSON. Column order follows
//! [`ITEMS_SQL`](crate::schema::ITEMS_SQL).

use rusqlite::Row;
use rusqlite::types::ValueRef;
use stylx_core::Item;

use crate::error::{Result, StylxError};

const TAG_DELIMITER: char = ';';

/// Placeholder id used in errors when the id column itself is unusable.
const UNKNOWN_ID: &str = "<null>";

struct RawItem {
    id: String,
    class: String,
    category: Option<String>,
    name: String,
    tags: Option<String>,
    content: Option<String>,
}

impl RawItem {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        let id = column_text(row, 0, UNKNOWN_ID)?;
        let id = required(id, "id", UNKNOWN_ID)?;

        Ok(Self {
            class: required(column_text(row, 1, &id)?, "class", &id)?,
            category: column_text(row, 2, &id)?,
            name: required(column_text(row, 3, &id)?, "name", &id)?,
            tags: column_text(row, 4, &id)?,
            content: column_text(row, 5, &id)?,
            id,
        })
    }
}

impl TryFrom<RawItem> for Item {
    type Error = StylxError;

    fn try_from(raw: RawItem) -> Result<Self> {
        // NULL content decodes like the JSON literal `null`.
        let content = match raw.content.as_deref() {
            Some(text) => serde_json::from_str(text).map_err(|e| StylxError::Decode {
                id: raw.id.clone(),
                reason: format!("invalid content JSON: {e}"),
            })?,
            None => serde_json::Value::Null,
        };

        Ok(Item {
            tags: split_tags(raw.tags.as_deref()),
            id: raw.id,
            class: raw.class,
            category: raw.category,
            name: raw.name,
            content,
        })
    }
}

/// Reads one `Items` row into an [`Item`].
pub(crate) fn item_from_row(row: &Row<'_>) -> Result<Item> {
    RawItem::from_row(row)?.try_into()
}

/// Splits a raw tags column. `None` and `""` yield `None`; empty segments
/// between consecutive delimiters are kept.
pub(crate) fn split_tags(raw: Option<&str>) -> Option<Vec<String>> {
    match raw {
        Some(tags) if !tags.is_empty() => {
            Some(tags.split(TAG_DELIMITER).map(String::from).collect())
        }
        _ => None,
    }
}

/// Reads a column as text. Numeric storage classes are rendered in decimal,
/// since style files commonly declare `ID` and `CLASS` as integers.
fn column_text(row: &Row<'_>, idx: usize, id: &str) -> Result<Option<String>> {
    let text = match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(value) => Some(value.to_string()),
        ValueRef::Real(value) => Some(value.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| StylxError::Decode {
                id: id.to_string(),
                reason: format!("column {idx} is not valid UTF-8: {e}"),
            })?;
            Some(text.to_string())
        }
    };
    Ok(text)
}

fn required(value: Option<String>, column: &str, id: &str) -> Result<String> {
    value.ok_or_else(|| StylxError::Decode {
        id: id.to_string(),
        reason: format!("required column '{column}' is NULL"),
    })
}
