//! MinIO server section: deployment summary and server configuration.
//!
//! Server configuration is free-form, so it is kept as an opaque JSON value.

use crate::core::ent::is_zero;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

fn is_absent(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Buckets {
    pub count: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Objects {
    pub count: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Usage {
    pub size: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// A drive as seen by a MinIO server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Disk {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(rename = "rootDisk", skip_serializing_if = "is_zero")]
    pub root_disk: bool,
    #[serde(rename = "path", skip_serializing_if = "String::is_empty")]
    pub drive_path: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub healing: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(rename = "totalspace", skip_serializing_if = "is_zero")]
    pub total_space: u64,
    #[serde(rename = "usedspace", skip_serializing_if = "is_zero")]
    pub used_space: u64,
    #[serde(rename = "availspace", skip_serializing_if = "is_zero")]
    pub available_space: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub uptime: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(rename = "commitID", skip_serializing_if = "String::is_empty")]
    pub commit_id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub network: BTreeMap<String, String>,
    #[serde(rename = "drives", skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<Disk>,
    #[serde(rename = "poolNumber", skip_serializing_if = "is_zero")]
    pub pool_number: i64,
}

/// Deployment-wide summary reported by the MinIO servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InfoMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(rename = "sqsARN", skip_serializing_if = "Vec::is_empty")]
    pub sqs_arn: Vec<String>,
    #[serde(rename = "deploymentID", skip_serializing_if = "String::is_empty")]
    pub deployment_id: String,
    pub buckets: Buckets,
    pub objects: Objects,
    pub usage: Usage,
    #[serde(skip_serializing_if = "is_absent")]
    pub backend: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ServerProperties>,
}

impl InfoMessage {
    /// Servers whose state is anything other than `online`.
    pub fn offline_servers(&self) -> impl Iterator<Item = &ServerProperties> {
        self.servers.iter().filter(|srv| srv.state != "online")
    }
}

/// MinIO section of the version 0 report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MinioHealthInfoV0 {
    pub info: InfoMessage,
    #[serde(skip_serializing_if = "is_absent")]
    pub config: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MinioConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub config: Option<Value>,
}

/// MinIO section of the version 2 report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MinioHealthInfo {
    pub info: InfoMessage,
    pub config: MinioConfig,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}
