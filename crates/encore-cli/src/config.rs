use std::collections::HashMap;

use encore_core::{EncoreResult, Role};
use encore_trust::RoleThresholds;
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct EncoreConfig {
    pub api: ApiConfig,
    pub thresholds: ThresholdOverrides,
}

#[derive(Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_api_bind")]
    pub bind: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_api_port(),
            bind: default_api_bind(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub musician: HashMap<String, u32>,
    pub teacher: HashMap<String, u32>,
    pub client: HashMap<String, u32>,
    pub booker: HashMap<String, u32>,
}

fn default_api_port() -> u16 {
    3001
}
fn default_api_bind() -> String {
    "127.0.0.1".to_string()
}

impl EncoreConfig {
    pub fn from_file(path: &str) -> EncoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn build_thresholds(&self) -> RoleThresholds {
        let mut tables = RoleThresholds::default();
        let overrides = [
            (Role::Musician, &self.thresholds.musician),
            (Role::Teacher, &self.thresholds.teacher),
            (Role::Client, &self.thresholds.client),
            (Role::Booker, &self.thresholds.booker),
        ];
        for (role, table) in overrides {
            for (feature, min_score) in table {
                if !tables.override_threshold(role, feature, *min_score) {
                    warn!(
                        feature = %feature,
                        role = role.as_str(),
                        "ignoring override for unknown feature"
                    );
                }
            }
        }
        tables
    }
}
