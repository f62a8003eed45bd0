// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 清单模块
///
/// - 内置清单（builtin）：编写时确定的常量列表
/// - 文件清单（file）：从 JSON/YAML 文件加载的列表
/// - 编解码（codec）：清单与数据交换格式之间的转换
pub mod builtin;
pub mod codec;
pub mod file;
