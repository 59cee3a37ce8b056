//! # 数据模型模块
//!
//! 定义晶体结构、VESTA 结构记录与缺陷数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`geometry/`、`vesta/` 和 `commands/` 使用
//! - 子模块: structure, record, defect

pub mod defect;
pub mod record;
pub mod structure;

pub use defect::{DefectCenter, DefectEntry, DefectSource, DefectStructure};
pub use record::{Site, StructureRecord};
pub use structure::{Atom, Crystal, Lattice};
