use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use review_prompt_core::PromptConfig;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "REVIEW_PROMPT_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default = "default_promotion_threshold")]
    pub promotion_threshold: u32,
    #[serde(default)]
    pub store_base_url: Option<String>,
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
    #[serde(default)]
    pub app_version: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_id: None,
            promotion_threshold: default_promotion_threshold(),
            store_base_url: None,
            state_path: default_state_path(),
            app_version: None,
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_id: Option<String>,
    pub promotion_threshold: Option<u32>,
    pub store_base_url: Option<String>,
    pub state_path: Option<PathBuf>,
    pub app_version: Option<String>,
}

impl CliConfig {
    /// `--config` が明示されていればそのファイルは必須。
    /// それ以外は見つからなければデフォルト。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = resolve_config_path(explicit, env::var(CONFIG_ENV).ok());
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config file {}", config_path.display()))?;
            let parsed: CliConfig = toml::from_str(&raw)
                .with_context(|| format!("failed to parse TOML from {}", config_path.display()))?;
            return Ok(parsed);
        }
        if explicit.is_some() {
            bail!("config file {} does not exist", config_path.display());
        }

        Ok(CliConfig::default())
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(store_id) = overrides.store_id {
            self.store_id = Some(store_id);
        }
        if let Some(threshold) = overrides.promotion_threshold {
            self.promotion_threshold = threshold;
        }
        if let Some(base) = overrides.store_base_url {
            self.store_base_url = Some(base);
        }
        if let Some(path) = overrides.state_path {
            self.state_path = path;
        }
        if let Some(version) = overrides.app_version {
            self.app_version = Some(version);
        }
        self
    }

    pub fn prompt_config(&self) -> Result<PromptConfig> {
        let Some(store_id) = &self.store_id else {
            bail!("store_id is not configured (set it in the config file or pass --store-id)");
        };
        let mut config = PromptConfig::new(store_id.clone(), self.promotion_threshold)?;
        if let Some(base) = &self.store_base_url {
            config = config.with_store_base_url(base.clone());
        }
        Ok(config)
    }

    /// 設定がなければこのバイナリ自身のバージョン
    pub fn app_version(&self) -> String {
        self.app_version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

fn resolve_config_path(explicit: Option<&Path>, from_env: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = from_env {
        return PathBuf::from(path);
    }

    PathBuf::from("review-prompt.toml")
}

fn default_promotion_threshold() -> u32 {
    3
}

fn default_state_path() -> PathBuf {
    PathBuf::from("review-prompt-state.json")
}
