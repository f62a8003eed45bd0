// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::models::cache_implementation::{CacheImplementation, ImplementationType};
use crate::domain::repositories::implementation_repository::ImplementationRepository;

static IMPLEMENTATIONS: Lazy<Vec<CacheImplementation>> = Lazy::new(|| {
    vec![
        CacheImplementation::new(
            "caddy.json",
            "Caddy",
            ImplementationType::RevProxy,
            "0.7.0",
            "https://github.com/http-tests/cache-tests/wiki/Caddy",
        ),
        // 与 Caddy 共用同一个文档页面
        CacheImplementation::new(
            "mr.json",
            "Merge request",
            ImplementationType::RevProxy,
            "0.0.1",
            "https://github.com/http-tests/cache-tests/wiki/Caddy",
        ),
        CacheImplementation::new(
            "varnish.json",
            "Varnish",
            ImplementationType::RevProxy,
            "7.1.1-1.1ubuntu1",
            "https://github.com/http-tests/cache-tests/wiki/Varnish",
        ),
    ]
});

/// 内置的缓存实现清单
pub fn implementations() -> &'static [CacheImplementation] {
    &IMPLEMENTATIONS
}

/// 基于内置清单的仓库实现
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinManifest;

impl BuiltinManifest {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImplementationRepository for BuiltinManifest {
    async fn list(&self) -> Vec<CacheImplementation> {
        implementations().to_vec()
    }
}
