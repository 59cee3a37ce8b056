//! # 几何工具模块
//!
//! 位移矢量与绘图范围的纯函数计算。
//!
//! ## 依赖关系
//! - 被 `commands/`、`models/defect.rs`、`parsers/` 和 `vesta/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: displacement, boundary

pub mod boundary;
pub mod displacement;

pub use boundary::{centering_shift, parse_boundary, BoundaryBox};
pub use displacement::{diff_vectors, displacement_vectors, VectorMap};
