//! # VESTA 默认数据表
//!
//! - 默认成键表（元素对 → 键长范围），对元素对顺序不敏感
//! - 原子半径模式与晶胞边框的样式字面量
//!
//! ## 依赖关系
//! - 被 `annotations/` 和 `vesta/blocks.rs` 使用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// SBOND 中一个元素对的键长搜索范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondLength {
    /// 最小键长 (Å)
    pub min: f64,
    /// 最大键长 (Å)
    pub max: f64,
}

impl BondLength {
    /// SBOND 行中元素符号之后的部分
    ///
    /// 末尾五个整数依次为：搜索模式、边界模式、显示多面体、按标签搜索、显示样式。
    pub fn to_vesta_fields(&self) -> String {
        format!("{:.5}  \t{:.3}\t 0  1  1  0  1", self.min, self.max)
    }
}

/// 默认成键表
///
/// 最小键长均为 0，最大键长约为典型配位键长的 1.15 倍。
pub static DEFAULT_BOND_LENGTHS: LazyLock<HashMap<(String, String), BondLength>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        let mut add = |a: &str, b: &str, max: f64| {
            let length = BondLength { min: 0.0, max };
            m.insert((a.to_string(), b.to_string()), length);
            m.insert((b.to_string(), a.to_string()), length);
        };

        // 有机/轻元素
        add("H", "H", 0.8);
        add("C", "H", 1.2);
        add("N", "H", 1.15);
        add("O", "H", 1.1);
        add("C", "C", 1.75);
        add("C", "N", 1.6);
        add("C", "O", 1.6);
        add("N", "N", 1.55);
        add("N", "O", 1.5);
        add("B", "N", 1.7);
        add("B", "O", 1.7);

        // 主族氧化物
        add("Li", "O", 2.35);
        add("Be", "O", 1.9);
        add("Mg", "O", 2.4);
        add("Al", "O", 2.15);
        add("Si", "O", 1.9);
        add("P", "O", 1.8);
        add("S", "O", 1.75);
        add("Ga", "O", 2.2);
        add("Ge", "O", 2.1);
        add("In", "O", 2.45);
        add("Sn", "O", 2.4);
        add("Sb", "O", 2.4);

        // 过渡金属氧化物
        add("Sc", "O", 2.4);
        add("Ti", "O", 2.707);
        add("V", "O", 2.3);
        add("Cr", "O", 2.3);
        add("Mn", "O", 2.4);
        add("Fe", "O", 2.4);
        add("Co", "O", 2.35);
        add("Ni", "O", 2.35);
        add("Cu", "O", 2.4);
        add("Zn", "O", 2.3);
        add("Y", "O", 2.6);
        add("Zr", "O", 2.5);
        add("Nb", "O", 2.45);
        add("Mo", "O", 2.4);
        add("Ru", "O", 2.3);
        add("Hf", "O", 2.5);
        add("Ta", "O", 2.45);
        add("W", "O", 2.4);

        // 氮化物
        add("Al", "N", 2.2);
        add("Ga", "N", 2.3);
        add("In", "N", 2.5);
        add("Si", "N", 2.0);
        add("Ti", "N", 2.4);

        // 硫族化合物
        add("Zn", "S", 2.7);
        add("Cd", "S", 2.9);
        add("Mo", "S", 2.75);
        add("W", "S", 2.75);
        add("Fe", "S", 2.6);
        add("Cu", "S", 2.6);
        add("Zn", "Se", 2.8);
        add("Cd", "Se", 3.0);
        add("Mo", "Se", 2.9);
        add("Ga", "Se", 2.8);
        add("Cu", "Se", 2.7);
        add("Cd", "Te", 3.2);
        add("Zn", "Te", 3.0);

        // 卤化物
        add("Li", "F", 2.3);
        add("Mg", "F", 2.3);
        add("Al", "F", 2.1);
        add("Pb", "I", 3.6);
        add("Pb", "Br", 3.4);
        add("Pb", "Cl", 3.2);
        add("Sn", "I", 3.5);

        // 单质共价键
        add("Si", "Si", 2.7);
        add("Ge", "Ge", 2.8);
        add("Ga", "As", 2.8);
        add("In", "P", 2.9);

        m
    });

/// 查询默认键长，未收录的元素对返回 None
pub fn default_bond_length(a: &str, b: &str) -> Option<BondLength> {
    DEFAULT_BOND_LENGTHS
        .get(&(a.to_string(), b.to_string()))
        .copied()
}

/// 原子半径模式对应的 ATOMS 行参数
pub const ATOMS_ATOMIC: &str = "0  0  1";
pub const ATOMS_IONIC: &str = "1  0  1";
pub const ATOMS_VDW: &str = "2  0  1";

/// UCOLP 行参数
pub const CELL_OUTLINE_BOLD: &str = "0  2  3.000   0   0   0";
pub const CELL_OUTLINE_THIN: &str = "0  1  1.000   0   0   0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bond_length_unordered() {
        let ti_o = default_bond_length("Ti", "O").unwrap();
        let o_ti = default_bond_length("O", "Ti").unwrap();

        assert_eq!(ti_o, o_ti);
        assert!((ti_o.max - 2.707).abs() < 1e-12);
    }

    #[test]
    fn test_default_bond_length_missing() {
        assert!(default_bond_length("Ba", "O").is_none());
        assert!(default_bond_length("X0+", "O").is_none());
    }

    #[test]
    fn test_bond_fields() {
        let fields = default_bond_length("Ti", "O").unwrap().to_vesta_fields();
        assert_eq!(fields, "0.00000  \t2.707\t 0  1  1  0  1");
    }
}
