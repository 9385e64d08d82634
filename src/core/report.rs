use crate::core::ent::{zero_time, HealthStatus};
use crate::core::minio::MinioHealthInfo;
use crate::core::perf::PerfInfo;
use crate::core::render::{to_compact_string, to_json_string, JsonStyle};
use crate::core::sys::SysHealthInfo;
use crate::core::sysinfo::SysInfo;
use crate::error::{HealthInfoError, Result};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HEALTH_INFO_VERSION: &str = "2";

/// Accessors shared by every report version.
///
/// The versions stay separate types; this only covers how a report is
/// inspected and rendered.
pub trait HealthReport: Serialize {
    fn error(&self) -> &str;

    fn timestamp(&self) -> DateTime<Utc>;

    fn status(&self) -> HealthStatus {
        HealthStatus::from_error(self.error())
    }

    /// Indented JSON, one space of prefix and four of indent.
    fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonStyle::default())
    }

    fn to_json_with(&self, style: &JsonStyle) -> Result<String> {
        tracing::debug!(status = %self.status(), "render health report");
        to_json_string(self, style)
    }
}

fn write_compact<T: Serialize>(report: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match to_compact_string(report) {
        Ok(data) => f.write_str(&data),
        Err(err) => {
            tracing::error!("failure to render health report: {}", err);
            Err(fmt::Error)
        }
    }
}

/// Cluster health report, version 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HealthInfoV0 {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub sys: SysHealthInfo,
}

impl Default for HealthInfoV0 {
    fn default() -> Self {
        HealthInfoV0 {
            timestamp: zero_time(),
            error: String::new(),
            sys: SysHealthInfo::default(),
        }
    }
}

impl HealthReport for HealthInfoV0 {
    fn error(&self) -> &str {
        &self.error
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for HealthInfoV0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(self, f)
    }
}

impl FromStr for HealthInfoV0 {
    type Err = HealthInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Cluster health report, version 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HealthInfoV2 {
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub timestamp: DateTime<Utc>,
    pub sys: SysInfo,
    pub perf: PerfInfo,
    pub minio: MinioHealthInfo,
}

// An unset timestamp is written as 0001-01-01T00:00:00Z.
impl Default for HealthInfoV2 {
    fn default() -> Self {
        HealthInfoV2 {
            version: String::new(),
            error: String::new(),
            timestamp: zero_time(),
            sys: SysInfo::default(),
            perf: PerfInfo::default(),
            minio: MinioHealthInfo::default(),
        }
    }
}

impl HealthInfoV2 {
    pub fn new(timestamp: DateTime<Utc>) -> HealthInfoV2 {
        HealthInfoV2 {
            version: HEALTH_INFO_VERSION.to_string(),
            timestamp,
            ..HealthInfoV2::default()
        }
    }

    /// A report that failed as a whole, e.g. because the cluster was unreachable.
    pub fn failed(timestamp: DateTime<Utc>, error: impl Into<String>) -> HealthInfoV2 {
        HealthInfoV2 {
            error: error.into(),
            ..HealthInfoV2::new(timestamp)
        }
    }
}

impl HealthReport for HealthInfoV2 {
    fn error(&self) -> &str {
        &self.error
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for HealthInfoV2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(self, f)
    }
}

impl FromStr for HealthInfoV2 {
    type Err = HealthInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
