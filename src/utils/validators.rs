// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use tracing::warn;
use url::Url;
use validator::Validate;

use crate::domain::models::cache_implementation::CacheImplementation;
use crate::utils::errors::ManifestError;

/// 校验整个清单
///
/// # 参数
///
/// * `implementations` - 待校验的描述符列表
///
/// # 返回值
///
/// * `Ok(())` - 所有条目字段非空且链接为 http/https URL
/// * `Err(ManifestError::Validation)` - 第一个未通过校验的条目
///
/// 重复的文档链接不算错误，只记录警告
pub fn validate_manifest(implementations: &[CacheImplementation]) -> Result<(), ManifestError> {
    for (index, item) in implementations.iter().enumerate() {
        let failure = |message: String| ManifestError::Validation {
            index,
            name: item.name.clone(),
            message,
        };

        item.validate().map_err(|e| failure(e.to_string()))?;
        check_link_scheme(&item.link).map_err(failure)?;
    }

    for (link, names) in duplicate_links(implementations) {
        warn!(link = %link, names = ?names, "多个实现共用同一文档链接");
    }

    Ok(())
}

/// 找出被多个实现共用的文档链接
///
/// 按链接首次出现的顺序返回 (链接, 实现名称列表)
pub fn duplicate_links(implementations: &[CacheImplementation]) -> Vec<(String, Vec<String>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_link: HashMap<&str, Vec<String>> = HashMap::new();

    for item in implementations {
        let names = by_link.entry(item.link.as_str()).or_insert_with(|| {
            order.push(item.link.as_str());
            Vec::new()
        });
        names.push(item.name.clone());
    }

    order
        .into_iter()
        .filter_map(|link| {
            by_link
                .remove(link)
                .filter(|names| names.len() > 1)
                .map(|names| (link.to_string(), names))
        })
        .collect()
}

fn check_link_scheme(link: &str) -> Result<(), String> {
    let parsed = Url::parse(link).map_err(|e| format!("无效链接 {}: {}", link, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("链接协议不受支持: {}", scheme)),
    }
}
