use chrono::Local;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Timestamp layout written to `metadata.scraped_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Run summary written next to the extracted entries.
///
/// `tables_found` counts every `<table>` seen in the document, including
/// the ones dropped for having a single row, so it can exceed the number
/// of `table_*` keys under `teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub scraped_at: String,
    pub source: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams_found: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables_found: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTag {
    #[serde(rename = "link")]
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableTag {
    #[serde(rename = "table_data")]
    TableData,
}

/// One value under `teams`. The `type` field is written last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Anchor whose text matched a team keyword. `url` is the raw href.
    Link {
        name: String,
        url: String,
        #[serde(rename = "type")]
        kind: LinkTag,
    },
    /// Rows of cell text from one table.
    Table {
        data: Vec<Vec<String>>,
        #[serde(rename = "type")]
        kind: TableTag,
    },
}

impl Entry {
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            name: name.into(),
            url: url.into(),
            kind: LinkTag::Link,
        }
    }

    pub fn table(data: Vec<Vec<String>>) -> Self {
        Self::Table {
            data,
            kind: TableTag::TableData,
        }
    }
}

/// Full document written to disk.
///
/// Keys under `teams` are `table_<i>` (position among all tables in the page)
/// and `team_<i>` (position among matched links only). The two counters are
/// independent, so `table_3` can exist without `table_0..2`. Keys keep
/// insertion order: tables by page position, then links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub metadata: Metadata,
    #[serde(default)]
    pub teams: IndexMap<String, Entry>,
}

impl ScrapeResult {
    pub fn success(source: &str) -> Self {
        Self {
            metadata: Metadata {
                scraped_at: now_timestamp(),
                source: source.to_string(),
                status: Status::Success,
                error: None,
                teams_found: None,
                tables_found: None,
            },
            teams: IndexMap::new(),
        }
    }

    pub fn failure(source: &str, error: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                scraped_at: now_timestamp(),
                source: source.to_string(),
                status: Status::Error,
                error: Some(error.into()),
                teams_found: None,
                tables_found: None,
            },
            teams: IndexMap::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.metadata.status == Status::Success
    }
}

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn table_key(index: usize) -> String {
    format!("table_{}", index)
}

pub fn team_key(index: usize) -> String {
    format!("team_{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_entry_serializes_with_type_tag() {
        let entry = Entry::link("Kansas City Chiefs", "/team/kc");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Kansas City Chiefs","url":"/team/kc","type":"link"}"#
        );
    }

    #[test]
    fn table_entry_serializes_with_type_tag() {
        let entry = Entry::table(vec![vec!["QB".into(), "Mahomes".into()]]);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"data":[["QB","Mahomes"]],"type":"table_data"}"#
        );
    }

    #[test]
    fn entries_deserialize_by_shape() {
        let link: Entry =
            serde_json::from_str(r#"{"name":"Ravens","url":"/bal","type":"link"}"#).unwrap();
        assert_eq!(link, Entry::link("Ravens", "/bal"));

        let table: Entry = serde_json::from_str(r#"{"data":[["QB"]],"type":"table_data"}"#).unwrap();
        assert_eq!(table, Entry::table(vec![vec!["QB".into()]]));

        assert!(serde_json::from_str::<Entry>(r#"{"data":[],"type":"link"}"#).is_err());
    }

    #[test]
    fn failure_omits_counts() {
        let result = ScrapeResult::failure("ourlads.com", "boom");
        let value = serde_json::to_value(&result).unwrap();
        let metadata = value["metadata"].as_object().unwrap();
        assert_eq!(metadata["status"], "error");
        assert_eq!(metadata["error"], "boom");
        assert!(!metadata.contains_key("teams_found"));
        assert!(!metadata.contains_key("tables_found"));
        assert_eq!(value["teams"], json!({}));
    }

    #[test]
    fn timestamp_has_expected_layout() {
        let ts = now_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
