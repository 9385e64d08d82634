use crate::core::render::JsonStyle;
use crate::error::{HealthInfoError, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const BASE_CONFIG_FILE: &str = "health-info.yml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profiles {
    pub active: String,
}

// health-info.yml, only selects the active profile
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub profiles: Profiles,
}

/// How reports are rendered, read from `health-info-{active}.yml`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub json: JsonStyle,
}

fn load_config<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = std::fs::read_to_string(path).map_err(|source| HealthInfoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str::<T>(&raw)?)
}

fn load_env_config(dir: &Path) -> Result<Option<EnvConfig>> {
    let path = dir.join(BASE_CONFIG_FILE);
    if !path.exists() {
        info!("no {} in {}, using default render config", BASE_CONFIG_FILE, dir.display());
        return Ok(None);
    }
    load_config::<EnvConfig>(&path).map(Some)
}

fn load_render_config_from_env(dir: &Path, active: &str) -> Result<RenderConfig> {
    if active.is_empty() || active.contains(['/', '\\']) {
        return Err(HealthInfoError::Config(format!(
            "invalid active profile {:?}",
            active
        )));
    }
    let path = dir.join(format!("health-info-{}.yml", active));
    let config = load_config::<RenderConfig>(&path)?;
    info!("loaded render config profile {}", active);
    Ok(config)
}

/// Loads the render config from `dir`, following the active profile named in
/// `health-info.yml`. Without that file the defaults apply.
pub fn load_render_config(dir: impl AsRef<Path>) -> Result<RenderConfig> {
    let dir = dir.as_ref();
    match load_env_config(dir)? {
        Some(env_config) => load_render_config_from_env(dir, &env_config.profiles.active),
        None => Ok(RenderConfig::default()),
    }
}
