// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 配置设置测试模块
//!
//! 测试默认值、环境配置文件和环境变量三层的合并结果

use cache_tests_manifest::config::settings::Settings;
use cache_tests_manifest::infrastructure::manifest::codec::ManifestFormat;
use std::sync::{Mutex, MutexGuard};
use tempfile::tempdir;

const ENV_VARS: [&str; 4] = [
    "APP_ENVIRONMENT",
    "CACHE_TESTS__MANIFEST__SOURCE",
    "CACHE_TESTS__EXPORT__FORMAT",
    "CACHE_TESTS__EXPORT__OUTPUT_PATH",
];

// 环境变量是进程级共享的，本文件中的测试需串行执行
static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn acquire() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();
        Self { _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_env();
    }
}

fn clear_env() {
    for key in ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_default_settings_use_builtin_manifest_and_json() {
    // Given: 未设置 CACHE_TESTS__* 环境变量
    let _env = EnvGuard::acquire();
    let settings = Settings::new().expect("配置加载失败");

    // Then: 使用内置清单并以 JSON 输出到标准输出
    assert!(settings.manifest.source.is_none());
    assert_eq!(settings.export.format, ManifestFormat::Json);
    assert!(settings.export.output_path.is_none());
}

#[test]
fn test_environment_variables_override_defaults() {
    // Given: 通过环境变量指定来源、格式和输出路径
    let _env = EnvGuard::acquire();
    std::env::set_var("CACHE_TESTS__MANIFEST__SOURCE", "manifests/index.yaml");
    std::env::set_var("CACHE_TESTS__EXPORT__FORMAT", "yml");
    std::env::set_var("CACHE_TESTS__EXPORT__OUTPUT_PATH", "out/index.yaml");

    // When: 加载配置
    let settings = Settings::new().expect("配置加载失败");

    // Then: 环境变量的值生效，yml 视为 YAML
    assert_eq!(
        settings.manifest.source.as_deref(),
        Some("manifests/index.yaml")
    );
    assert_eq!(settings.export.format, ManifestFormat::Yaml);
    assert_eq!(
        settings.export.output_path.as_deref(),
        Some("out/index.yaml")
    );
}

#[test]
fn test_unknown_format_is_rejected() {
    let _env = EnvGuard::acquire();
    std::env::set_var("CACHE_TESTS__EXPORT__FORMAT", "toml");

    assert!(Settings::new().is_err());
}

#[test]
fn test_app_environment_file_overrides_default_file() {
    // Given: default.toml 与 staging.toml 同时存在
    let _env = EnvGuard::acquire();
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("default.toml"),
        "[export]\nformat = \"json\"\noutput_path = \"out/default.json\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("staging.toml"),
        "[manifest]\nsource = \"manifests/staging.yml\"\n\n[export]\nformat = \"YAML\"\n",
    )
    .unwrap();
    std::env::set_var("APP_ENVIRONMENT", "staging");

    // When: 从该目录加载配置
    let settings = Settings::from_dir(dir.path()).expect("配置加载失败");

    // Then: 环境文件覆盖同名键，未覆盖的键沿用 default.toml
    assert_eq!(
        settings.manifest.source.as_deref(),
        Some("manifests/staging.yml")
    );
    assert_eq!(settings.export.format, ManifestFormat::Yaml);
    assert_eq!(
        settings.export.output_path.as_deref(),
        Some("out/default.json")
    );

    // When: 环境变量同时存在时优先于文件
    std::env::set_var("CACHE_TESTS__EXPORT__FORMAT", "json");
    let settings = Settings::from_dir(dir.path()).expect("配置加载失败");
    assert_eq!(settings.export.format, ManifestFormat::Json);
}
