// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理清单来源和导出格式的配置与环境变量
pub mod config;

/// 领域模块
///
/// 包含缓存实现描述符和清单仓库接口
pub mod domain;

/// 基础设施模块
///
/// 内置清单、文件清单以及 JSON/YAML 编解码
pub mod infrastructure;

/// 工具模块
///
/// 错误类型、校验和日志初始化
pub mod utils;
