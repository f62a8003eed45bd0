// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 清单错误类型
#[derive(Error, Debug)]
pub enum ManifestError {
    /// 条目未通过校验
    #[error("第 {index} 个条目 ({name}) 校验失败: {message}")]
    Validation {
        index: usize,
        name: String,
        message: String,
    },

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML 错误: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 未知的格式名或文件扩展名
    #[error("不支持的清单格式: {0}")]
    UnsupportedFormat(String),
}
