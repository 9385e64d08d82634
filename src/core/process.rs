use crate::core::ent::{finite, is_zero};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapshot of a single OS process on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SysProcess {
    pub pid: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub background: bool,
    #[serde(
        rename = "cpupercent",
        skip_serializing_if = "is_zero",
        serialize_with = "finite"
    )]
    pub cpu_percent: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<i32>,
    #[serde(rename = "cmd", skip_serializing_if = "String::is_empty")]
    pub cmd_line: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub connection_count: i64,
    #[serde(rename = "createtime", skip_serializing_if = "is_zero")]
    pub create_time: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cwd: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub exe: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gids: Vec<i32>,
    #[serde(rename = "isrunning", skip_serializing_if = "is_zero")]
    pub is_running: bool,
    #[serde(
        rename = "mempercent",
        skip_serializing_if = "is_zero",
        serialize_with = "finite"
    )]
    pub mem_percent: f32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub nice: i32,
    #[serde(rename = "numfds", skip_serializing_if = "is_zero")]
    pub num_fds: i32,
    #[serde(rename = "numthreads", skip_serializing_if = "is_zero")]
    pub num_threads: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub parent: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub ppid: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub tgid: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uids: Vec<i32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
}

impl SysProcess {
    pub fn owner(&self) -> &str {
        &self.username
    }
}
