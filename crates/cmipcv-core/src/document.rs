//! Canonical JSON documents for CV entries.
//!
//! Every vocabulary entry is written as `<root>/<entity-type>/<id>.json`
//! with a deterministic field order: a fixed header-key sequence first, then
//! all remaining keys sorted lexicographically. Re-running a generator with
//! unchanged input produces byte-identical files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{CvError, CvResult};

/// Shared JSON-LD context file referenced by every entry.
pub const CONTEXT: &str = "000_context.jsonld";

/// Keys that appear first in every document, in this order.
///
/// All other keys follow sorted lexicographically.
pub const HEADER_KEYS: [&str; 8] = [
    "@context",
    "id",
    "type",
    "description",
    "drs_name",
    "start_timestamp",
    "end_timestamp",
    "min_number_yrs_per_sim",
];

/// A record that can be emitted as a CV entry.
pub trait CvRecord {
    /// Entity type, which is also the output sub-directory (`experiment`,
    /// `activity`, ...).
    fn entity_type(&self) -> &'static str;

    /// Unique id within the entity collection; also the filename stem.
    fn id(&self) -> String;

    /// Build the canonical document for this record.
    fn document(&self) -> CvResult<CvDocument>;
}

/// A CV entry ready for serialisation.
#[derive(Debug, Clone)]
pub struct CvDocument {
    entity_type: &'static str,
    id: String,
    fields: Map<String, Value>,
}

impl CvDocument {
    /// Build a document from a serialisable record.
    ///
    /// Seeds the `@context`, `id` and `type` keys, then merges the record's
    /// own fields. `Field::Omit` members must be dropped by the record's
    /// serialisation; they never reach the document.
    pub fn from_record<T: Serialize>(
        entity_type: &'static str,
        id: String,
        record: &T,
    ) -> CvResult<Self> {
        let value = serde_json::to_value(record).map_err(|source| CvError::Serialise {
            id: id.clone(),
            source,
        })?;
        let mut fields = match value {
            Value::Object(map) => map,
            other => {
                return Err(CvError::Serialise {
                    id,
                    source: serde_json::Error::custom(format!("expected a JSON object, got {other}")),
                })
            }
        };
        fields.insert("@context".to_string(), Value::String(CONTEXT.to_string()));
        fields.insert("id".to_string(), Value::String(id.clone()));
        fields.insert("type".to_string(), Value::String(entity_type.to_string()));

        Ok(Self {
            entity_type,
            id,
            fields,
        })
    }

    pub fn entity_type(&self) -> &'static str {
        self.entity_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path of this entry relative to a vocabulary root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.entity_type).join(format!("{}.json", self.id))
    }

    /// Render the document with canonical key order, 4-space indentation and
    /// a trailing newline.
    pub fn render(&self) -> CvResult<String> {
        let ordered = Value::Object(sort_keys(&self.fields));

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        ordered
            .serialize(&mut serializer)
            .map_err(|source| CvError::Serialise {
                id: self.id.clone(),
                source,
            })?;
        buf.push(b'\n');

        // serde_json only emits valid UTF-8
        Ok(String::from_utf8(buf).expect("JSON output is UTF-8"))
    }

    /// Write the document under `root`.
    ///
    /// The `<root>/<entity-type>/` directory must already exist; this does
    /// not create missing directories.
    pub fn write_to(&self, root: &Path) -> CvResult<PathBuf> {
        let path = root.join(self.relative_path());
        fs::write(&path, self.render()?)?;
        debug!(path = %path.display(), "wrote CV entry");
        Ok(path)
    }
}

/// Reorder a document's keys: header keys first, remaining keys sorted.
fn sort_keys(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut ordered = Map::new();
    for key in HEADER_KEYS {
        if let Some(value) = fields.get(key) {
            ordered.insert(key.to_string(), value.clone());
        }
    }

    let mut rest: Vec<&String> = fields
        .keys()
        .filter(|k| !HEADER_KEYS.contains(&k.as_str()))
        .collect();
    rest.sort();
    for key in rest {
        ordered.insert(key.clone(), fields[key].clone());
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[derive(Serialize)]
    struct Probe {
        description: String,
        zulu: Field<u32>,
        alpha: u32,
        #[serde(skip_serializing_if = "Field::is_omit")]
        hidden: Field<String>,
    }

    fn probe_document() -> CvDocument {
        let probe = Probe {
            description: "A probe entry".to_string(),
            zulu: Field::Null,
            alpha: 7,
            hidden: Field::Omit,
        };
        CvDocument::from_record("experiment", "probe".to_string(), &probe).unwrap()
    }

    #[test]
    fn test_header_keys_come_first_then_lexicographic() {
        let rendered = probe_document().render().unwrap();
        let expected = concat!(
            "{\n",
            "    \"@context\": \"000_context.jsonld\",\n",
            "    \"id\": \"probe\",\n",
            "    \"type\": \"experiment\",\n",
            "    \"description\": \"A probe entry\",\n",
            "    \"alpha\": 7,\n",
            "    \"zulu\": null\n",
            "}\n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_omitted_fields_are_dropped() {
        let rendered = probe_document().render().unwrap();
        assert!(!rendered.contains("hidden"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = probe_document();
        assert_eq!(doc.render().unwrap(), doc.render().unwrap());
    }

    #[test]
    fn test_relative_path_uses_entity_type_and_id() {
        assert_eq!(
            probe_document().relative_path(),
            Path::new("experiment").join("probe.json")
        );
    }

    #[test]
    fn test_write_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        // No experiment/ sub-directory: the serializer must not create it.
        let err = probe_document().write_to(dir.path()).unwrap_err();
        assert!(matches!(err, CvError::Io(_)));
    }

    #[test]
    fn test_write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("experiment")).unwrap();

        let doc = probe_document();
        let path = doc.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("experiment").join("probe.json"));

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, doc.render().unwrap());
        assert!(on_disk.ends_with('\n'));
    }
}
