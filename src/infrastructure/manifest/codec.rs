// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::models::cache_implementation::CacheImplementation;
use crate::utils::errors::ManifestError;

/// 清单的数据交换格式
///
/// 配置反序列化与 `FromStr` 接受同一组名称（不区分大小写，`yml` 视为 YAML）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum ManifestFormat {
    #[default]
    Json,
    Yaml,
}

impl ManifestFormat {
    /// 根据文件扩展名推断格式
    ///
    /// # 参数
    ///
    /// * `path` - 清单文件路径
    ///
    /// # 返回值
    ///
    /// * `Ok(ManifestFormat)` - `.json`、`.yaml` 或 `.yml`
    /// * `Err(ManifestError::UnsupportedFormat)` - 其他扩展名或无扩展名
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| ManifestError::UnsupportedFormat(path.display().to_string()))?;

        match extension.as_str() {
            "json" => Ok(ManifestFormat::Json),
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            _ => Err(ManifestError::UnsupportedFormat(extension)),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManifestFormat::Json => write!(f, "json"),
            ManifestFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ManifestFormat {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            _ => Err(ManifestError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for ManifestFormat {
    type Error = ManifestError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// 将清单编码为指定格式的文本，JSON 使用缩进格式
pub fn encode(
    implementations: &[CacheImplementation],
    format: ManifestFormat,
) -> Result<String, ManifestError> {
    let encoded = match format {
        ManifestFormat::Json => serde_json::to_string_pretty(implementations)?,
        ManifestFormat::Yaml => serde_yaml::to_string(implementations)?,
    };
    Ok(encoded)
}

/// 从指定格式的文本解码清单
///
/// 只检查结构，字段内容的校验见 `utils::validators::validate_manifest`
pub fn decode(
    content: &str,
    format: ManifestFormat,
) -> Result<Vec<CacheImplementation>, ManifestError> {
    let implementations = match format {
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(implementations)
}
