// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cache_tests_manifest::config::settings::Settings;
use cache_tests_manifest::domain::repositories::implementation_repository::ImplementationRepository;
use cache_tests_manifest::infrastructure::manifest::builtin::{implementations, BuiltinManifest};
use cache_tests_manifest::infrastructure::manifest::codec;
use cache_tests_manifest::infrastructure::manifest::file::FileManifest;
use cache_tests_manifest::utils::telemetry;
use cache_tests_manifest::utils::validators::validate_manifest;
use tokio::fs;
use tracing::info;

/// 主函数
///
/// 加载清单并按配置的格式导出到标准输出或文件
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(format = %settings.export.format, "Configuration loaded");

    // 3. Select manifest source
    // FileManifest::load validates on its own
    let repository: Box<dyn ImplementationRepository> = match &settings.manifest.source {
        Some(path) => Box::new(FileManifest::load(path).await?),
        None => {
            validate_manifest(implementations())?;
            Box::new(BuiltinManifest::new())
        }
    };

    let implementations = repository.list().await;
    info!(count = implementations.len(), "Manifest validated");

    // 4. Export
    let body = codec::encode(&implementations, settings.export.format)?;
    match &settings.export.output_path {
        Some(path) => {
            fs::write(path, body).await?;
            info!(path = %path, "Manifest written");
        }
        None => println!("{}", body),
    }

    Ok(())
}
