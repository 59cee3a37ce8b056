//! # 数值格式化
//!
//! VESTA 读取器对数字格式敏感：坐标与晶胞参数一律为 6 位小数定点格式。
//!
//! ## 依赖关系
//! - 被 `vesta/blocks.rs` 使用

use crate::models::structure::DUMMY_SPECIES;

/// VESTA 中占位元素的写法
pub const VESTA_DUMMY_SPECIES: &str = "XX";

/// 6 位小数定点格式，空格分隔
pub fn format_line(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 最短往返表示，整数值保留 ".0"（如 1.0、0.5、12.731747）
pub fn format_real(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

/// 将内部占位元素标签替换为 VESTA 的 XX
pub fn replace_dummy_species(text: &str) -> String {
    text.replace(DUMMY_SPECIES, VESTA_DUMMY_SPECIES)
}
