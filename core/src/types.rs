//! Record types extracted from stylx style-library files.
//!
//! A `.stylx` file is a SQLite database whose `Items` table holds one style or
//! symbol definition per row. The types here are the normalized, serializable
//! shape of those rows and of the database catalog.

use serde::{Deserialize, Serialize};

/// One normalized style item.
///
/// `tags` is `None` when the source column was null or empty. `content` is
/// the decoded JSON payload of the item (symbol definition, color ramp, ...),
/// or JSON `null` when the source column is NULL.
///
/// # Examples
///
/// ```
/// use stylx_core::Item;
///
/// let item = Item {
///     id: "1".into(),
///     class: "3".into(),
///     category: None,
///     name: "Red Marker".into(),
///     tags: Some(vec!["point".into(), "marker".into()]),
///     content: serde_json::json!({ "type": "CIMPointSymbol" }),
/// };
///
/// let json = serde_json::to_value(&item).unwrap();
/// assert_eq!(json["category"], serde_json::Value::Null);
/// assert_eq!(json["tags"][1], "marker");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier, unique within one source file.
    pub id: String,
    /// Item classification.
    pub class: String,
    /// Optional grouping category.
    pub category: Option<String>,
    /// Display name.
    pub name: String,
    /// Tags split from the `;`-delimited source column.
    pub tags: Option<Vec<String>>,
    /// Decoded JSON content.
    pub content: serde_json::Value,
}

/// Kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Table,
    View,
}

impl TableKind {
    /// Parses the `type` column of `sqlite_schema`.
    ///
    /// Returns `None` for entries that are neither tables nor views
    /// (indexes, triggers).
    pub fn from_catalog(kind: &str) -> Option<Self> {
        match kind {
            "table" => Some(Self::Table),
            "view" => Some(Self::View),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::View => "view",
        }
    }
}

/// A table or view listed in the database catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TableKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_fields_in_order() {
        let item = Item {
            id: "7".into(),
            class: "1".into(),
            category: Some("Basic".into()),
            name: "Dot".into(),
            tags: None,
            content: serde_json::json!({ "size": 4 }),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"7","class":"1","category":"Basic","name":"Dot","tags":null,"content":{"size":4}}"#
        );
    }

    #[test]
    fn test_table_kind_from_catalog() {
        assert_eq!(TableKind::from_catalog("table"), Some(TableKind::Table));
        assert_eq!(TableKind::from_catalog("view"), Some(TableKind::View));
        assert_eq!(TableKind::from_catalog("index"), None);
    }

    #[test]
    fn test_table_info_uses_type_key() {
        let info = TableInfo {
            name: "Items".into(),
            kind: TableKind::Table,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Items", "type": "table" }));
    }
}
