// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::codec::{self, ManifestFormat};
use crate::domain::models::cache_implementation::CacheImplementation;
use crate::domain::repositories::implementation_repository::ImplementationRepository;
use crate::utils::errors::ManifestError;
use crate::utils::validators::validate_manifest;

/// 从 JSON/YAML 文件加载的清单
#[derive(Debug, Clone)]
pub struct FileManifest {
    path: PathBuf,
    implementations: Vec<CacheImplementation>,
}

impl FileManifest {
    /// 加载并校验清单文件
    ///
    /// 格式由扩展名决定；缺失字段、空字段或无效链接都会在加载时报错
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)?;
        debug!(path = %path.display(), %format, "读取清单文件");

        let content = fs::read_to_string(path).await?;
        let implementations = codec::decode(&content, format)?;
        validate_manifest(&implementations)?;

        info!(
            path = %path.display(),
            count = implementations.len(),
            "清单文件加载完成"
        );
        Ok(Self {
            path: path.to_path_buf(),
            implementations,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ImplementationRepository for FileManifest {
    async fn list(&self) -> Vec<CacheImplementation> {
        self.implementations.clone()
    }
}
