// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供清单的具体来源（内置常量、外部文件）及其编解码
pub mod manifest;
