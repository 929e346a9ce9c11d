//! 配置加载
//!
//! 来源依次合并（后者覆盖前者）：
//! 1. 内置默认值
//! 2. TOML 文件（不存在时跳过）
//! 3. `CUSTOMER_` 前缀的环境变量，`__` 表示嵌套，如 `CUSTOMER_TELEMETRY__LOG_LEVEL`

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "CUSTOMER_CONFIG";

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "customer.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 启动时分发的示例命令
#[derive(Debug, Clone, Deserialize)]
pub struct SampleConfig {
    pub customer_id: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    pub country: String,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub sample: Option<SampleConfig>,
}

fn default_app_name() -> String {
    "customer".to_string()
}

impl CustomerConfig {
    /// 从指定 TOML 文件与环境变量加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CUSTOMER_").ignore(&["CONFIG"]).split("__"))
            .extract()?;

        Ok(config)
    }

    /// 按 `CUSTOMER_CONFIG` 或默认路径加载
    pub fn from_env() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }
}
