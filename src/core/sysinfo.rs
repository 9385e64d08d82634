//! System section of the version 2 report.

use crate::core::ent::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SysInfo {
    #[serde(rename = "cpus", skip_serializing_if = "Vec::is_empty")]
    pub cpu_info: Vec<Cpus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<Partitions>,
    #[serde(rename = "osinfo", skip_serializing_if = "Vec::is_empty")]
    pub os_info: Vec<OsInfo>,
    #[serde(rename = "meminfo", skip_serializing_if = "Vec::is_empty")]
    pub mem_info: Vec<MemInfo>,
    #[serde(rename = "procinfo", skip_serializing_if = "Vec::is_empty")]
    pub proc_info: Vec<ProcInfo>,
    #[serde(rename = "errors", skip_serializing_if = "Vec::is_empty")]
    pub sys_errs: Vec<SysErrors>,
}

impl SysInfo {
    fn nodes(&self) -> impl Iterator<Item = &NodeCommon> {
        self.cpu_info
            .iter()
            .map(|r| &r.node)
            .chain(self.partitions.iter().map(|r| &r.node))
            .chain(self.os_info.iter().map(|r| &r.node))
            .chain(self.mem_info.iter().map(|r| &r.node))
            .chain(self.proc_info.iter().map(|r| &r.node))
            .chain(self.sys_errs.iter().map(|r| &r.node))
    }

    /// `(addr, error)` of every node record that failed to collect.
    pub fn failed_nodes(&self) -> Vec<(&str, &str)> {
        self.nodes()
            .filter(|node| !node.is_ok())
            .map(|node| (node.addr.as_str(), node.error.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Cpu {
    pub vendor_id: String,
    pub family: String,
    pub model: String,
    pub physical_id: String,
    pub model_name: String,
    #[serde(serialize_with = "finite")]
    pub mhz: f64,
    pub cache_size: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    pub cores: i32,
}

/// CPUs of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Cpus {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cpus: Vec<Cpu>,
}

impl Cpus {
    pub fn total_cores(&self) -> i64 {
        self.cpus.iter().map(|cpu| i64::from(cpu.cores)).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Partition {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mountpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fs_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mount_options: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub space_total: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub space_free: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub inode_total: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub inode_free: u64,
}

/// Mounted partitions of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Partitions {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<Partition>,
}

/// Host identification as reported by the node's OS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: String,
    pub uptime: u64,
    pub boot_time: u64,
    pub procs: u64,
    pub os: String,
    pub platform: String,
    pub platform_family: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
    #[serde(rename = "hostid")]
    pub host_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TemperatureStat {
    #[serde(rename = "sensorKey")]
    pub sensor_key: String,
    #[serde(serialize_with = "finite")]
    pub temperature: f64,
    #[serde(rename = "sensorHigh", serialize_with = "finite")]
    pub high: f64,
    #[serde(rename = "sensorCritical", serialize_with = "finite")]
    pub critical: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OsInfo {
    #[serde(flatten)]
    pub node: NodeCommon,
    pub info: HostInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sensors: Vec<TemperatureStat>,
}

/// Memory counters of one node, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MemInfo {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "is_zero")]
    pub total: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub used: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub free: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub available: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub shared: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub cache: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub buffers: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub swap_space_total: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub swap_space_free: u64,
    /// cgroup limit, zero when unlimited
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u64,
}

/// The MinIO process of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProcInfo {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "is_zero")]
    pub pid: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub is_background: bool,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub cpu_percent: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children_pids: Vec<i32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cmd_line: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_connections: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub create_time: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cwd: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub exec_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gids: Vec<i32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub is_running: bool,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub mem_percent: f32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub nice: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_fds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_threads: i32,
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

/// Kernel or hardware errors seen on one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SysErrors {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
