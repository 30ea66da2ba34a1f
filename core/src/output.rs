//! Output formatting for dumped items and catalogs.

use serde::{Deserialize, Serialize};

use crate::file_map::FileMap;
use crate::types::{Item, TableInfo};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object keyed by relative path.
    #[default]
    Json,
    Yaml,
    /// Human-readable listing, one summary line per item followed by its
    /// content.
    Text,
}

/// Formats extracted items in the requested output format.
pub fn format_items(files: &FileMap<Vec<Item>>, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(files)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(files).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => items_to_text(files),
    }
}

/// Formats catalog listings in the requested output format.
pub fn format_tables(
    files: &FileMap<Vec<TableInfo>>,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(files)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(files).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(tables_to_text(files)),
    }
}

fn items_to_text(files: &FileMap<Vec<Item>>) -> Result<String, String> {
    let mut out = String::new();

    for (path, items) in files.iter() {
        out.push_str(&format!("== {path} ({} items)\n\n", items.len()));
        for item in items {
            let category = item.category.as_deref().unwrap_or("null");
            let tags = match &item.tags {
                Some(tags) => tags.join(","),
                None => "null".to_string(),
            };
            out.push_str(&format!(
                "id: {}, class: {}, category: {category}, name: {}, tags: {tags}\n",
                item.id, item.class, item.name
            ));
            let content = serde_json::to_string_pretty(&item.content)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            out.push_str(&content);
            out.push_str("\n\n");
        }
    }

    Ok(out)
}

fn tables_to_text(files: &FileMap<Vec<TableInfo>>) -> String {
    let mut out = String::new();

    for (path, tables) in files.iter() {
        out.push_str(&format!("{path}\n"));
        for table in tables {
            out.push_str(&format!("  {:<32} {}\n", table.name, table.kind.as_str()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TableKind;

    fn sample_items() -> FileMap<Vec<Item>> {
        let mut files = FileMap::new();
        files.insert(
            "styles/a.stylx".to_string(),
            vec![Item {
                id: "1".into(),
                class: "3".into(),
                category: None,
                name: "Pin".into(),
                tags: Some(vec!["point".into(), "pin".into()]),
                content: serde_json::json!({ "type": "CIMPointSymbol", "size": 8 }),
            }],
        );
        files
    }

    #[test]
    fn test_json_uses_two_space_indent_and_keeps_field_order() {
        let out = format_items(&sample_items(), OutputFormat::Json).unwrap();
        let expected = r#"{
  "styles/a.stylx": [
    {
      "id": "1",
      "class": "3",
      "category": null,
      "name": "Pin",
      "tags": [
        "point",
        "pin"
      ],
      "content": {
        "type": "CIMPointSymbol",
        "size": 8
      }
    }
  ]
}"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let out = format_items(&sample_items(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["styles/a.stylx"][0]["name"].as_str(), Some("Pin"));
    }

    #[test]
    fn test_text_listing() {
        let out = format_items(&sample_items(), OutputFormat::Text).unwrap();
        assert!(out.starts_with("== styles/a.stylx (1 items)\n"));
        assert!(out.contains("id: 1, class: 3, category: null, name: Pin, tags: point,pin\n"));
        assert!(out.contains("\"type\": \"CIMPointSymbol\""));
    }

    #[test]
    fn test_tables_text_listing() {
        let mut files = FileMap::new();
        files.insert(
            "a.stylx".to_string(),
            vec![
                TableInfo {
                    name: "Items".into(),
                    kind: TableKind::Table,
                },
                TableInfo {
                    name: "ItemsView".into(),
                    kind: TableKind::View,
                },
            ],
        );
        let out = format_tables(&files, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a.stylx");
        assert!(lines[1].trim_start().starts_with("Items"));
        assert!(lines[1].ends_with("table"));
        assert!(lines[2].ends_with("view"));
    }

    #[test]
    fn test_tables_json() {
        let mut files = FileMap::new();
        files.insert(
            "a.stylx".to_string(),
            vec![TableInfo {
                name: "Items".into(),
                kind: TableKind::Table,
            }],
        );
        let out = format_tables(&files, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "a.stylx": [{ "name": "Items", "type": "table" }] })
        );
    }
}
