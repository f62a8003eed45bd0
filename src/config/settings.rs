// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::infrastructure::manifest::codec::ManifestFormat;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 清单来源配置
    #[serde(default)]
    pub manifest: ManifestSettings,
    /// 导出配置
    pub export: ExportSettings,
}

/// 清单来源配置
#[derive(Debug, Default, Deserialize)]
pub struct ManifestSettings {
    /// 外部清单文件路径，缺省时使用内置清单
    pub source: Option<String>,
}

/// 导出配置
#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    /// 导出格式 (json, yaml)
    pub format: ManifestFormat,
    /// 输出文件路径，缺省时写到标准输出
    pub output_path: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `CACHE_TESTS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir("config")
    }

    /// 从指定目录加载配置文件，其余层与 [`Settings::new`] 相同
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("export.format", "json")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(Environment::with_prefix("CACHE_TESTS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
