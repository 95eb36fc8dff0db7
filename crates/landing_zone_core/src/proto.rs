//! Wire types for the RunFunction exchange.
//!
//! JSON shapes follow the protobuf JSON mapping of the composition function
//! protocol: camelCase fields, enum values as their full names
//! (`SEVERITY_WARNING`, `TARGET_COMPOSITE`, ...) and durations as `"<secs>s"`.
//! Maps are `BTreeMap`s so identical responses serialize to identical bytes.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Request ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFunctionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RequestMeta>,
    /// The function input document, decoded by [`crate::input::decode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<State>,
    /// Desired state accumulated by earlier functions in the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RunFunctionRequest {
    pub fn tag(&self) -> &str {
        self.meta.as_ref().map(|m| m.tag.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMeta {
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<Resource>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub resource: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<Ready>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ready {
    #[serde(rename = "READY_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "READY_TRUE")]
    True,
    #[serde(rename = "READY_FALSE")]
    False,
}

// ── Response ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFunctionResponse {
    pub meta: ResponseMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired: Option<State>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<FunctionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl RunFunctionResponse {
    /// True if any result is fatal.
    pub fn is_fatal(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Fatal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub tag: String,
    /// How long the response may be cached by the caller.
    #[serde(with = "duration_secs")]
    pub ttl: Duration,
}

/// A human-readable message emitted by the function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "SEVERITY_FATAL")]
    Fatal,
    #[serde(rename = "SEVERITY_WARNING")]
    Warning,
    #[serde(rename = "SEVERITY_NORMAL")]
    Normal,
}

/// Where a result or condition is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "TARGET_COMPOSITE")]
    Composite,
    #[serde(rename = "TARGET_COMPOSITE_AND_CLAIM")]
    CompositeAndClaim,
}

/// A status condition the function asks to be set on the composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: ConditionStatus,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    #[serde(rename = "STATUS_CONDITION_UNKNOWN")]
    Unknown,
    #[serde(rename = "STATUS_CONDITION_TRUE")]
    True,
    #[serde(rename = "STATUS_CONDITION_FALSE")]
    False,
}

/// Protobuf JSON duration encoding: `"60s"`, `"1.5s"`.
pub mod duration_secs {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(d: &Duration) -> String {
        if d.subsec_nanos() == 0 {
            format!("{}s", d.as_secs())
        } else {
            let s = format!("{}.{:09}", d.as_secs(), d.subsec_nanos());
            format!("{}s", s.trim_end_matches('0'))
        }
    }

    pub fn parse(s: &str) -> Option<Duration> {
        let secs: f64 = s.strip_suffix('s')?.parse().ok()?;
        Duration::try_from_secs_f64(secs).ok()
    }

    pub fn serialize<S: Serializer>(d: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&format(d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| de::Error::custom(format!("invalid duration {s:?}")))
    }
}
