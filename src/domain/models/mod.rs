// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 缓存实现描述符（cache_implementation）：清单中的单个条目
pub mod cache_implementation;
