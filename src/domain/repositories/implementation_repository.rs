// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::cache_implementation::{CacheImplementation, ImplementationType};

/// 缓存实现仓库特质
///
/// 清单在读取时是只读的，因此只提供查询操作
#[async_trait]
pub trait ImplementationRepository: Send + Sync {
    /// 按编写顺序返回全部描述符
    async fn list(&self) -> Vec<CacheImplementation>;

    /// 按名称精确查找第一个匹配的描述符
    async fn find_by_name(&self, name: &str) -> Option<CacheImplementation> {
        self.list().await.into_iter().find(|item| item.name == name)
    }

    /// 按文件标识精确查找第一个匹配的描述符
    async fn find_by_file(&self, file: &str) -> Option<CacheImplementation> {
        self.list().await.into_iter().find(|item| item.file == file)
    }

    /// 返回指定类别的全部描述符
    async fn find_by_type(
        &self,
        implementation_type: &ImplementationType,
    ) -> Vec<CacheImplementation> {
        self.list()
            .await
            .into_iter()
            .filter(|item| &item.implementation_type == implementation_type)
            .collect()
    }
}
