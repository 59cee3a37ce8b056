//! # 注释选项解析模块
//!
//! 将命令行层面的字符串选项解析为类型化的注释数据：
//! 可见键、晶面、矢量表与显示样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `vesta/` 使用
//! - 使用 `models/`、`geometry/`、`vesta/tables.rs`
//! - 子模块: bonds, planes, vectors, style

pub mod bonds;
pub mod planes;
pub mod style;
pub mod vectors;

pub use bonds::{parse_bond_pairs, resolve_bonds, BondSet, ResolvedBond};
pub use planes::{parse_planes, Plane, PlaneSpec};
pub use style::{scaled_amplitude, RadiusMode, StyleOptions};
pub use vectors::parse_vector_file;
