use crate::core::ent::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Performance of a single drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DrivePerfInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub path: String,
    pub latency: Latency,
    pub throughput: Throughput,
}

/// All drive measurements of one node, serial and parallel phases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DrivePerfInfos {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub serial_perf: Vec<DrivePerfInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parallel_perf: Vec<DrivePerfInfo>,
}

/// Network performance from one node towards a peer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PeerNetPerfInfo {
    #[serde(flatten)]
    pub node: NodeCommon,
    pub latency: Latency,
    pub throughput: Throughput,
}

/// Network performance from one node to every other node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NetPerfInfo {
    #[serde(flatten)]
    pub node: NodeCommon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remote_peers: Vec<PeerNetPerfInfo>,
}

/// Drive and network performance for the whole cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PerfInfo {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drives: Vec<DrivePerfInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub net: Vec<NetPerfInfo>,
    pub net_parallel: NetPerfInfo,
}

impl PerfInfo {
    /// Drive paths, per node, whose measurement failed in either phase.
    pub fn failed_drives(&self) -> Vec<(&str, &str)> {
        self.drives
            .iter()
            .flat_map(|infos| {
                infos
                    .serial_perf
                    .iter()
                    .chain(infos.parallel_perf.iter())
                    .filter(|drive| !drive.error.is_empty())
                    .map(move |drive| (infos.node.addr.as_str(), drive.path.as_str()))
            })
            .collect()
    }
}
