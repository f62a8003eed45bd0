// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：缓存实现描述符
/// - 仓库接口（repositories）：清单的只读访问抽象
pub mod models;
pub mod repositories;
