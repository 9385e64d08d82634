use chrono::{TimeZone, Utc};
use health_info::*;
use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "health_info=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

fn latency(base: f64) -> Latency {
    Latency {
        avg: base,
        max: base * 4.0,
        min: base / 2.0,
        percentile_50: base,
        percentile_90: base * 2.0,
        percentile_99: base * 3.0,
    }
}

fn throughput(base: u64) -> Throughput {
    Throughput {
        avg: base,
        max: base * 2,
        min: base / 2,
        percentile_50: base,
        percentile_90: base + base / 2,
        percentile_99: base * 2 - 1,
    }
}

fn populated_v2() -> HealthInfoV2 {
    let mut info = HealthInfoV2::new(Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap());
    info.sys = SysInfo {
        cpu_info: vec![Cpus {
            node: NodeCommon::new("node1:9000"),
            cpus: vec![Cpu {
                vendor_id: "GenuineIntel".to_string(),
                model_name: "Xeon".to_string(),
                mhz: 2400.0,
                cores: 16,
                flags: vec!["avx2".to_string(), "sse4_2".to_string()],
                ..Cpu::default()
            }],
        }],
        mem_info: vec![
            MemInfo {
                node: NodeCommon::new("node1:9000"),
                total: 128 << 30,
                available: 100 << 30,
                ..MemInfo::default()
            },
            MemInfo {
                node: NodeCommon::failed("node2:9000", "context deadline exceeded"),
                ..MemInfo::default()
            },
        ],
        proc_info: vec![ProcInfo {
            node: NodeCommon::new("node1:9000"),
            pid: 812,
            name: "minio".to_string(),
            num_threads: 64,
            username: "minio-user".to_string(),
            ..ProcInfo::default()
        }],
        ..SysInfo::default()
    };
    info.perf = PerfInfo {
        drives: vec![DrivePerfInfos {
            node: NodeCommon::new("node1:9000"),
            serial_perf: vec![DrivePerfInfo {
                error: String::new(),
                path: "/data1".to_string(),
                latency: latency(0.25),
                throughput: throughput(512 << 20),
            }],
            parallel_perf: vec![DrivePerfInfo {
                error: "drive faulty".to_string(),
                path: "/data2".to_string(),
                ..DrivePerfInfo::default()
            }],
        }],
        net: vec![NetPerfInfo {
            node: NodeCommon::new("node1:9000"),
            remote_peers: vec![PeerNetPerfInfo {
                node: NodeCommon::new("node2:9000"),
                latency: latency(0.125),
                throughput: throughput(1 << 30),
            }],
        }],
        net_parallel: NetPerfInfo {
            node: NodeCommon::new("node1:9000"),
            remote_peers: vec![],
        },
    };
    info.minio = MinioHealthInfo {
        info: InfoMessage {
            mode: "online".to_string(),
            deployment_id: "8d0b5c3e".to_string(),
            buckets: Buckets {
                count: 3,
                error: String::new(),
            },
            servers: vec![ServerProperties {
                state: "online".to_string(),
                endpoint: "node1:9000".to_string(),
                version: "2022-05-26T05-48-41Z".to_string(),
                ..ServerProperties::default()
            }],
            ..InfoMessage::default()
        },
        config: MinioConfig {
            error: String::new(),
            config: Some(json!({ "api": { "requests_max": "0" } })),
        },
        error: String::new(),
    };
    info
}

#[test]
fn populated_report_round_trips() {
    init_tracing();
    let info = populated_v2();
    let back: HealthInfoV2 = info.to_string().parse().unwrap();
    assert_eq!(back, info);

    let back: HealthInfoV2 = info.to_json().unwrap().parse().unwrap();
    assert_eq!(back, info);
}

#[test]
fn compact_and_indented_carry_same_content() {
    init_tracing();
    let info = populated_v2();
    let compact: Value = serde_json::from_str(&info.to_string()).unwrap();
    let indented_text = info.to_json().unwrap();
    let indented: Value = serde_json::from_str(&indented_text).unwrap();
    assert_eq!(compact, indented);
    assert!(indented_text.lines().count() > 1);
    assert!(indented_text.lines().skip(1).all(|line| line.starts_with(' ')));
}

#[test]
fn populated_report_is_success() {
    let info = populated_v2();
    assert_eq!(info.status(), HealthStatus::Success);
    assert_eq!(info.status().to_string(), "success");
    assert_eq!(info.error(), "");
    assert_eq!(
        info.sys.failed_nodes(),
        vec![("node2:9000", "context deadline exceeded")]
    );
    assert_eq!(info.perf.failed_drives(), vec![("node1:9000", "/data2")]);
}

#[test]
fn error_wins_regardless_of_sections() {
    let mut info = populated_v2();
    info.error = "disk read timeout".to_string();
    assert_eq!(info.status(), HealthStatus::Error);
    assert_eq!(info.status().as_str(), "error");
    assert_eq!(info.error(), "disk read timeout");

    let value: Value = serde_json::from_str(&info.to_string()).unwrap();
    assert_eq!(value["error"], json!("disk read timeout"));
}

#[test]
fn omit_empty_on_the_wire() {
    let info = populated_v2();
    let value: Value = serde_json::from_str(&info.to_string()).unwrap();

    assert!(value.get("error").is_none());
    let mem = &value["sys"]["meminfo"];
    assert!(mem[0].get("error").is_none());
    assert!(mem[0].get("used").is_none());
    assert_eq!(mem[1], json!({ "addr": "node2:9000", "error": "context deadline exceeded" }));
    assert!(value["sys"].get("partitions").is_none());
    assert!(value["perf"]["net_parallel"].get("remote_peers").is_none());
    assert_eq!(value["perf"]["drives"][0]["parallel_perf"][0]["latency"]["avg"], json!(0.0));
    assert_eq!(value["minio"]["info"]["objects"], json!({ "count": 0 }));
}

#[test]
fn v0_report_from_collector_output() {
    let raw = r#"{
        "timestamp": "2021-01-20T10:00:00Z",
        "sys": {
            "cpus": [{"addr": "node1:9000"}],
            "procinfos": [{
                "addr": "node1:9000",
                "processes": [
                    {"pid": 1, "name": "init", "username": "root"},
                    {"pid": 77, "name": "minio", "username": "minio-user", "numthreads": 40}
                ]
            }],
            "drives": [{"addr": "node2:9000", "error": "lsblk not found"}]
        }
    }"#;
    let info: HealthInfoV0 = raw.parse().unwrap();
    assert_eq!(info.status(), HealthStatus::Success);
    assert_eq!(
        info.timestamp(),
        Utc.with_ymd_and_hms(2021, 1, 20, 10, 0, 0).unwrap()
    );
    let owners: Vec<&str> = info.sys.proc_info[0]
        .processes
        .iter()
        .map(SysProcess::owner)
        .collect();
    assert_eq!(owners, vec!["root", "minio-user"]);
    assert_eq!(info.sys.failed_nodes(), vec![("node2:9000", "lsblk not found")]);

    let back: HealthInfoV0 = info.to_string().parse().unwrap();
    assert_eq!(back, info);
}

#[test]
fn configured_style_is_applied() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("health-info.yml"), "profiles:\n  active: flat\n").unwrap();
    std::fs::write(
        dir.path().join("health-info-flat.yml"),
        "json:\n  prefix: \"\"\n  indent: \"  \"\n",
    )
    .unwrap();
    let config = load_render_config(dir.path()).unwrap();

    let info = populated_v2();
    let out = info.to_json_with(&config.json).unwrap();
    assert_eq!(out, serde_json::to_string_pretty(&info).unwrap());
}
