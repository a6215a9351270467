//! Style-document loading.
//!
//! A style document is an externally supplied key/value mapping merged
//! verbatim into the layer's `visConfig`. The on-disk format is selected
//! by file extension: `.json`, `.yaml`/`.yml`, or `.py`/`.dict` for
//! Python-literal mappings. No schema validation is performed.

mod literal;

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use literal::LiteralError;

/// A loaded style document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDocument {
    entries: Map<String, Value>,
}

impl StyleDocument {
    /// Loads a style document from a file, selecting the format by
    /// extension.
    ///
    /// The extension comparison is case-insensitive. The parsed top level
    /// must be a key/value mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStyleFormat`] when the extension matches
    /// none of the recognized suffixes; parse errors for malformed content
    /// propagate unchanged.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        let value = match extension.as_deref() {
            Some("json") => {
                let contents = fs::read_to_string(path)?;
                serde_json::from_str::<Value>(&contents)?
            }
            Some("yaml" | "yml") => {
                let contents = fs::read_to_string(path)?;
                serde_yaml::from_str::<Value>(&contents)?
            }
            Some("py" | "dict") => {
                let contents = fs::read_to_string(path)?;
                literal::parse(&contents).map_err(|source| Error::StyleLiteral {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => {
                return Err(Error::UnsupportedStyleFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(Error::StyleNotMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Creates a style document from already-parsed entries.
    #[must_use]
    pub fn from_entries(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Iterates over the key/value pairs of the document.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_style(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_json_style() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.json", r#"{"opacity": 0.3, "filled": true}"#);

        let style = StyleDocument::load(&path).unwrap();
        let entries: Map<String, Value> = style.entries().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(entries["opacity"], json!(0.3));
        assert_eq!(entries["filled"], json!(true));
    }

    #[test]
    fn loads_yaml_style() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.yaml", "opacity: 0.5\nstroked: false\n");

        let style = StyleDocument::load(&path).unwrap();
        let entries: Map<String, Value> = style.entries().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(entries["opacity"], json!(0.5));
        assert_eq!(entries["stroked"], json!(false));
    }

    #[test]
    fn loads_yml_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.yml", "thickness: 2\n");
        assert!(StyleDocument::load(&path).is_ok());
    }

    #[test]
    fn loads_python_literal_style() {
        let dir = TempDir::new().unwrap();
        let path = write_style(
            &dir,
            "style.py",
            "{'opacity': 0.8, 'enable3d': True, 'colorRange': {'colors': ['#FFF', '#000']}}",
        );

        let style = StyleDocument::load(&path).unwrap();
        let entries: Map<String, Value> = style.entries().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(entries["opacity"], json!(0.8));
        assert_eq!(entries["enable3d"], json!(true));
        assert_eq!(entries["colorRange"]["colors"], json!(["#FFF", "#000"]));
    }

    #[test]
    fn dict_extension_uses_literal_parser() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.dict", "{'radius': 10}");
        assert!(StyleDocument::load(&path).is_ok());
    }

    #[test]
    fn extension_comparison_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.JSON", r#"{"opacity": 1}"#);
        assert!(StyleDocument::load(&path).is_ok());
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        // The file does not even exist; the extension check comes first.
        let result = StyleDocument::load(Path::new("/nonexistent/style.xyz"));
        assert!(matches!(
            result,
            Err(Error::UnsupportedStyleFormat { .. })
        ));
    }

    #[test]
    fn missing_extension_is_rejected() {
        let result = StyleDocument::load(Path::new("/nonexistent/style"));
        assert!(matches!(
            result,
            Err(Error::UnsupportedStyleFormat { .. })
        ));
    }

    #[test]
    fn malformed_json_propagates_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.json", "{broken");
        assert!(matches!(StyleDocument::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn non_mapping_top_level_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.json", "[1, 2, 3]");
        assert!(matches!(
            StyleDocument::load(&path),
            Err(Error::StyleNotMapping { .. })
        ));
    }

    #[test]
    fn empty_mapping_loads_as_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = write_style(&dir, "style.json", "{}");
        let style = StyleDocument::load(&path).unwrap();
        assert!(style.is_empty());
    }
}
