use std::fs;
use std::io;
use std::path::Path;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

/// One loaded source document. Loading never fails past this type: every
/// failure mode becomes a variant, so "empty because absent" and "empty
/// because broken" stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Loaded(Map<String, Value>),
    Missing,
    Empty,
    Malformed(String),
}

impl Document {
    pub fn entries(&self) -> Option<&Map<String, Value>> {
        match self {
            Document::Loaded(map) => Some(map),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads one JSON document keyed by route id. A missing file, an empty
/// document, or undecodable content all degrade to a non-`Loaded` variant
/// with a diagnostic; nothing is raised to the caller.
pub fn load(path: &Path) -> Document {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found", path.display());
            return Document::Missing;
        }
        Err(err) => {
            warn!("can't read {}: {err}", path.display());
            return Document::Malformed(err.to_string());
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => Document::Empty,
        Ok(Value::Object(map)) if map.is_empty() => Document::Empty,
        Ok(Value::Object(map)) => Document::Loaded(map),
        Ok(_) => {
            warn!("{}: top level is not an object", path.display());
            Document::Malformed("top level is not an object".to_string())
        }
        Err(err) => {
            warn!("can't decode {}: {err}", path.display());
            Document::Malformed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn tmp_file(name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("routes-meta-loader-{name}"));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(load(Path::new("no/such/dir/file.json")), Document::Missing);
    }

    #[test]
    fn test_malformed_json() {
        let path = tmp_file("malformed.json", b"{not json");

        assert!(matches!(load(&path), Document::Malformed(_)));
    }

    #[test]
    fn test_empty_object() {
        let path = tmp_file("empty.json", b"{}");

        let doc = load(&path);
        assert_eq!(doc, Document::Empty);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_null_document() {
        let path = tmp_file("null.json", b"null");

        assert_eq!(load(&path), Document::Empty);
    }

    #[test]
    fn test_non_object_top_level() {
        let path = tmp_file("array.json", b"[1, 2]");

        assert!(matches!(load(&path), Document::Malformed(_)));
    }

    #[test]
    fn test_loaded() {
        let path = tmp_file("ok.json", br#"{"RouteID_1": {"city": "Austin"}}"#);

        let doc = load(&path);
        assert_eq!(doc.len(), 1);
        assert!(doc.entries().unwrap().contains_key("RouteID_1"));
    }
}
