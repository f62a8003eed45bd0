// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// 缓存实现描述符
///
/// 描述一个被测的 HTTP 缓存实现（反向代理、CDN 或浏览器），
/// 测试工具通过 `file` 字段把结果文件与该实现对应起来。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CacheImplementation {
    /// 关联的结果/配置文件标识
    #[validate(custom(function = "validate_not_blank"))]
    pub file: String,
    /// 实现的可读名称
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// 实现类别，序列化为 `type`
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_implementation_type"))]
    pub implementation_type: ImplementationType,
    /// 版本号，格式自由，可能带有发行版打包后缀
    #[validate(custom(function = "validate_not_blank"))]
    pub version: String,
    /// 文档链接
    #[validate(url)]
    pub link: String,
}

impl CacheImplementation {
    pub fn new(
        file: impl Into<String>,
        name: impl Into<String>,
        implementation_type: ImplementationType,
        version: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
            implementation_type,
            version: version.into(),
            link: link.into(),
        }
    }

    /// 去掉扩展名后的文件名，例如 `caddy.json` -> `caddy`
    pub fn result_stem(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file)
    }
}

/// 实现类别
///
/// 未知的类别按原样保存在 `Other` 中，外部清单可以无损往返。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImplementationType {
    /// 浏览器缓存
    Browser,
    /// 反向代理
    RevProxy,
    /// 内容分发网络
    Cdn,
    Other(String),
}

impl fmt::Display for ImplementationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImplementationType::Browser => write!(f, "browser"),
            ImplementationType::RevProxy => write!(f, "rev-proxy"),
            ImplementationType::Cdn => write!(f, "cdn"),
            ImplementationType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for ImplementationType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "browser" => ImplementationType::Browser,
            "rev-proxy" => ImplementationType::RevProxy,
            "cdn" => ImplementationType::Cdn,
            _ => ImplementationType::Other(s),
        }
    }
}

impl From<ImplementationType> for String {
    fn from(t: ImplementationType) -> Self {
        t.to_string()
    }
}

impl FromStr for ImplementationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ImplementationType::from(s.to_string()))
    }
}

/// 空串或仅含空白的字段都视为缺失
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_implementation_type(value: &ImplementationType) -> Result<(), ValidationError> {
    match value {
        ImplementationType::Other(s) => validate_not_blank(s),
        _ => Ok(()),
    }
}
