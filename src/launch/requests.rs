//! Request payloads for the launch operations. Optional fields stay off the
//! wire when unset, which is what gives update its partial-update semantics.
//! No client-side validation happens here: oversized names and malformed
//! merges are sent as-is and come back as remote rejections.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::launch::model::{ItemAttribute, LaunchMode, LaunchStatus};

#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct StartLaunchRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LaunchMode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub attributes: Vec<ItemAttribute>,
    #[serde(default)]
    #[builder(default)]
    pub rerun: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerun_of: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
#[serde(rename_all = "camelCase")]
pub struct FinishLaunchRequest {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LaunchStatus>,
}

/// Partial update: fields left unset keep their server-side values.
#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct UpdateLaunchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LaunchMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ItemAttribute>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeType {
    Basic,
    Deep,
}

/// The merged launch takes its start and end times from this request, not
/// from the constituent launches.
#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct MergeLaunchesRequest {
    pub name: String,
    pub launches: Vec<i64>,
    pub merge_type: MergeType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub attributes: Vec<ItemAttribute>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyzerMode {
    All,
    LaunchName,
    CurrentLaunch,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyzerItemsMode {
    ToInvestigate,
    AutoAnalyzed,
    ManuallyAnalyzed,
}

#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct AnalyzeLaunchRequest {
    pub launch_id: i64,
    pub analyzer_mode: AnalyzerMode,
    pub analyzer_type_name: String,
    pub analyze_items_mode: Vec<AnalyzerItemsMode>,
}
