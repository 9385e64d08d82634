use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use std::fmt;

// Seconds from 0001-01-01T00:00:00Z to the Unix epoch.
const ZERO_TIME_OFFSET_SECS: i64 = 62_135_596_800;

// Zero values are left off the wire, same as unset optional fields.
pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Timestamp of a report that was never stamped, 0001-01-01T00:00:00Z.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::default() - Duration::seconds(ZERO_TIME_OFFSET_SECS)
}

pub fn is_zero_time(timestamp: &DateTime<Utc>) -> bool {
    *timestamp == zero_time()
}

// JSON has no NaN or infinity; refuse them instead of writing null.
pub(crate) fn finite<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Copy + Into<f64> + Serialize,
    S: Serializer,
{
    let number: f64 = (*value).into();
    if !number.is_finite() {
        return Err(S::Error::custom(format!("unsupported value: {}", number)));
    }
    value.serialize(serializer)
}

/// Address of a node plus the reason collection failed on it, if it did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NodeCommon {
    pub addr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl NodeCommon {
    pub fn new(addr: impl Into<String>) -> NodeCommon {
        NodeCommon {
            addr: addr.into(),
            error: String::new(),
        }
    }

    pub fn failed(addr: impl Into<String>, error: impl Into<String>) -> NodeCommon {
        NodeCommon {
            addr: addr.into(),
            error: error.into(),
        }
    }

    /// A record with a non-empty error carries no trustworthy data.
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Latency summary of a measured operation, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Latency {
    #[serde(serialize_with = "finite")]
    pub avg: f64,
    #[serde(serialize_with = "finite")]
    pub max: f64,
    #[serde(serialize_with = "finite")]
    pub min: f64,
    #[serde(serialize_with = "finite")]
    pub percentile_50: f64,
    #[serde(serialize_with = "finite")]
    pub percentile_90: f64,
    #[serde(serialize_with = "finite")]
    pub percentile_99: f64,
}

/// Throughput summary of a measured operation, in bytes per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Throughput {
    pub avg: u64,
    pub max: u64,
    pub min: u64,
    pub percentile_50: u64,
    pub percentile_90: u64,
    pub percentile_99: u64,
}

/// Outcome of a whole report, derived from its top-level error only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Success,
    Error,
}

impl HealthStatus {
    pub fn from_error(error: &str) -> HealthStatus {
        if error.is_empty() {
            HealthStatus::Success
        } else {
            HealthStatus::Error
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Success => "success",
            HealthStatus::Error => "error",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
