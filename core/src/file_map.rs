use indexmap::IndexMap;

/// Ordered mapping from a source path to the result extracted from it.
///
/// Keys keep the order in which they were first inserted. Inserting an
/// existing key replaces its value in place, so a path listed twice keeps its
/// first position and its latest result. Serializes as a JSON/YAML map.
///
/// # Examples
///
/// ```
/// use stylx_core::FileMap;
///
/// let mut map = FileMap::new();
/// map.insert("b.stylx".to_string(), 1);
/// map.insert("a.stylx".to_string(), 2);
/// map.insert("b.stylx".to_string(), 3);
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["b.stylx", "a.stylx"]);
/// assert_eq!(map.get("b.stylx"), Some(&3));
/// assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b.stylx":3,"a.stylx":2}"#);
/// ```
pub type FileMap<T> = IndexMap<String, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_serializes_to_empty_object() {
        let map: FileMap<Vec<u8>> = FileMap::new();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string_pretty(&map).unwrap(), "{}");
    }

    #[test]
    fn test_repeated_key_keeps_first_position_and_latest_value() {
        let mut map = FileMap::new();
        assert_eq!(map.insert("x".to_string(), "first"), None);
        map.insert("y".to_string(), "other");
        assert_eq!(map.insert("x".to_string(), "second"), Some("first"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(map["x"], "second");
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut map = FileMap::new();
        map.insert("z.stylx".to_string(), 1);
        map.insert("a.stylx".to_string(), 2);
        assert_eq!(
            serde_yaml::to_string(&map).unwrap(),
            "z.stylx: 1\na.stylx: 2\n"
        );
    }
}
