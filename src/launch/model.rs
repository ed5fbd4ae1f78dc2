use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchMode {
    #[default]
    Default,
    Debug,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchStatus {
    InProgress,
    Passed,
    Failed,
    Stopped,
    Skipped,
    Interrupted,
    Cancelled,
}

/// A key-value pair attached to a launch. Keys are optional and non-unique;
/// an absent key and an empty-string key are both valid.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct ItemAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl ItemAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        ItemAttribute {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn value_only(value: impl Into<String>) -> Self {
        ItemAttribute {
            key: None,
            value: value.into(),
        }
    }
}

/// One test-execution reporting session as the service exposes it.
///
/// `end_time` is absent exactly while the launch is in progress. Timestamps
/// travel as epoch milliseconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    pub number: i64,
    #[serde(default)]
    pub mode: LaunchMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LaunchStatus>,
    #[serde(default)]
    pub rerun: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerun_of: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ItemAttribute>,
}

/// One page of a listing plus its paging metadata.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// Acknowledgment of a started launch. The number is assigned by the
/// service and is never zero; on a rerun match both fields come from the
/// prior launch.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StartedLaunch {
    #[serde(rename = "id")]
    pub uuid: String,
    pub number: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FinishedLaunch {
    #[serde(rename = "id")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Free-text acknowledgment for update, stop, analyze and delete.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OperationMessage {
    pub message: String,
}
