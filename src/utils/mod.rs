//! # 工具函数模块
//!
//! 提供统一的终端输出。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 子模块: output

pub mod output;
