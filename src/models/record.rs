use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row as returned by the Airtable list-records API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Accepted shapes of an export file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordFile {
    Page { records: Vec<Record> },
    List(Vec<Record>),
}

impl RecordFile {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            RecordFile::Page { records } | RecordFile::List(records) => records,
        }
    }
}

impl Record {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field rendered as text; `None` when missing, null or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.field(name)
            .and_then(value_to_text)
            .filter(|s| !s.trim().is_empty())
    }

    /// JSON truthiness of a field (missing, null, false, 0 and "" are false).
    pub fn flag(&self, name: &str) -> bool {
        match self.field(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.field(name)
            .and_then(Value::as_str)
            .and_then(parse_timestamp)
    }

    /// Case-insensitive substring match over every field value.
    /// `needle` must already be lowercase.
    pub fn contains_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.fields
            .values()
            .filter_map(value_to_text)
            .any(|v| v.to_lowercase().contains(needle))
    }
}

/// Text form of a JSON value; arrays are joined with ", ".
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_text).collect();
            Some(parts.join(", "))
        }
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("email"))
            .and_then(value_to_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> Record {
        let Value::Object(map) = fields else {
            panic!("fields must be an object")
        };
        Record::new("rec1", map)
    }

    #[test]
    fn text_handles_arrays_and_blanks() {
        let r = record(json!({
            "Product Types": ["Hoodie", "Tee"],
            "Blank": "  ",
            "Qty": 3,
            "Designer": {"id": "usr1", "email": "a@b.co", "name": "Ann"}
        }));

        assert_eq!(r.text("Product Types").as_deref(), Some("Hoodie, Tee"));
        assert_eq!(r.text("Blank"), None);
        assert_eq!(r.text("Qty").as_deref(), Some("3"));
        assert_eq!(r.text("Designer").as_deref(), Some("Ann"));
        assert_eq!(r.text("Missing"), None);
    }

    #[test]
    fn flag_follows_json_truthiness() {
        let r = record(json!({
            "yes": true, "no": false, "zero": 0, "one": 1, "empty": "", "word": "x", "null": null
        }));

        assert!(r.flag("yes"));
        assert!(!r.flag("no"));
        assert!(!r.flag("zero"));
        assert!(r.flag("one"));
        assert!(!r.flag("empty"));
        assert!(r.flag("word"));
        assert!(!r.flag("null"));
        assert!(!r.flag("missing"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let r = record(json!({"Account Name": "Riverside Lacrosse", "Tags": ["Blue", "Gold"]}));

        assert!(r.contains_text("lacrosse"));
        assert!(r.contains_text("gold"));
        assert!(r.contains_text(""));
        assert!(!r.contains_text("hockey"));
    }

    #[test]
    fn both_file_shapes_parse() {
        let page: RecordFile =
            serde_json::from_str(r#"{"records":[{"id":"a","fields":{}}],"offset":"x"}"#).unwrap();
        let list: RecordFile = serde_json::from_str(r#"[{"id":"a","fields":{}}]"#).unwrap();

        assert_eq!(page.into_records().len(), 1);
        assert_eq!(list.into_records().len(), 1);
    }
}
