//! # VESTA 输出模块
//!
//! 将结构记录与注释序列化为 VESTA 3.x 文本格式。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/`、`geometry/`、`annotations/`
//! - 子模块: blocks, document, format, tables

pub mod blocks;
pub mod document;
pub mod format;
pub mod tables;

pub use document::{Annotations, VestaDocument};
