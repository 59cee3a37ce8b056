//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示，由 `parsers/` 读入，供 `record.rs` 提取
//! VESTA 所需的最小信息。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`geometry/`、`models/record.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// 占位元素（空位、未知位点）的内部标签
pub const DUMMY_SPECIES: &str = "X0+";

/// 晶格参数表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    #[cfg(test)]
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let (cos_alpha, cos_beta) = (alpha.to_radians().cos(), beta.to_radians().cos());
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        Lattice {
            matrix: [
                [a, 0.0, 0.0],
                [b * cos_gamma, b * sin_gamma, 0.0],
                [c1, c2, c3],
            ],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 晶格常数 (a, b, c)
    pub fn lengths(&self) -> [f64; 3] {
        [
            norm(&self.matrix[0]),
            norm(&self.matrix[1]),
            norm(&self.matrix[2]),
        ]
    }

    /// 晶格夹角 (alpha, beta, gamma)，单位：度
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.lengths();
        let [a_vec, b_vec, c_vec] = self.matrix;

        // 防止舍入误差使 acos 越界
        let angle = |dot_uv: f64, u: f64, v: f64| (dot_uv / (u * v)).clamp(-1.0, 1.0).acos().to_degrees();

        [
            angle(dot(&b_vec, &c_vec), b, c),
            angle(dot(&a_vec, &c_vec), a, c),
            angle(dot(&a_vec, &b_vec), a, b),
        ]
    }

    /// 获取晶格参数 [a, b, c, alpha, beta, gamma]
    pub fn parameters(&self) -> [f64; 6] {
        let [a, b, c] = self.lengths();
        let [alpha, beta, gamma] = self.angles();
        [a, b, c, alpha, beta, gamma]
    }

    /// 计算晶格体积（带符号）
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        dot(&a, &cross(&b, &c))
    }

    /// 倒格子（含 2π 因子）：b1 = 2π(b×c)/V, b2 = 2π(c×a)/V, b3 = 2π(a×b)/V
    pub fn reciprocal(&self) -> Lattice {
        let [a, b, c] = self.matrix;
        let volume = self.volume();

        if volume.abs() < 1e-10 {
            return Lattice::from_vectors([[0.0; 3]; 3]);
        }

        let factor = 2.0 * PI / volume;
        let scale = |v: [f64; 3]| [v[0] * factor, v[1] * factor, v[2] * factor];

        Lattice::from_vectors([
            scale(cross(&b, &c)),
            scale(cross(&c, &a)),
            scale(cross(&a, &b)),
        ])
    }

    /// (hkl) 晶面间距：d = 1 / |h a* + k b* + l c*|，a* 为不含 2π 的倒格矢
    pub fn d_hkl(&self, hkl: [i32; 3]) -> f64 {
        let recip = self.reciprocal().matrix;
        let g: Vec<f64> = (0..3)
            .map(|j| {
                (0..3)
                    .map(|i| hkl[i] as f64 * recip[i][j] / (2.0 * PI))
                    .sum()
            })
            .collect();

        1.0 / (g[0] * g[0] + g[1] * g[1] + g[2] * g[2]).sqrt()
    }

    /// 分数坐标转笛卡尔坐标
    pub fn frac_to_cart(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }

    /// 笛卡尔坐标转分数坐标
    ///
    /// 利用 a*·a = 2π 的正交关系：x_i = (r · b_i) / 2π。
    pub fn cart_to_frac(&self, cart: [f64; 3]) -> [f64; 3] {
        let recip = self.reciprocal().matrix;
        [
            dot(&cart, &recip[0]) / (2.0 * PI),
            dot(&cart, &recip[1]) / (2.0 * PI),
            dot(&cart, &recip[2]) / (2.0 * PI),
        ]
    }
}

/// 原子（位点）信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号，占位位点为 [`DUMMY_SPECIES`]
    pub element: String,

    /// 分数坐标 [x, y, z]，不要求落在 [0, 1) 内
    pub position: [f64; 3],

    /// 占有率
    pub occupancy: f64,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
            occupancy: 1.0,
        }
    }

    /// 创建空位占位原子
    pub fn dummy(position: [f64; 3]) -> Self {
        Atom::new(DUMMY_SPECIES, position)
    }

    pub fn is_dummy(&self) -> bool {
        self.element == DUMMY_SPECIES
    }
}

/// 晶体结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crystal {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子列表（顺序决定位点编号）
    pub atoms: Vec<Atom>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal {
            name: name.into(),
            lattice,
            atoms,
        }
    }

    pub fn num_sites(&self) -> usize {
        self.atoms.len()
    }

    /// 晶胞体积（绝对值）
    pub fn volume(&self) -> f64 {
        self.lattice.volume().abs()
    }

    /// 元素组成：按首次出现顺序排列的 (元素, 占有率总和)，不含占位元素
    pub fn composition(&self) -> Vec<(String, f64)> {
        let mut order: Vec<String> = Vec::new();
        let mut amounts: BTreeMap<&str, f64> = BTreeMap::new();

        for atom in self.atoms.iter().filter(|a| !a.is_dummy()) {
            if !amounts.contains_key(atom.element.as_str()) {
                order.push(atom.element.clone());
            }
            *amounts.entry(atom.element.as_str()).or_insert(0.0) += atom.occupancy;
        }

        order
            .into_iter()
            .map(|el| {
                let amount = amounts[el.as_str()];
                (el, amount)
            })
            .collect()
    }

    /// 计算化学式，例如 "Ba1 Ti1 O3"
    pub fn formula(&self) -> String {
        self.composition()
            .into_iter()
            .map(|(el, amount)| format!("{}{}", el, format_amount(amount)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 返回追加了空位占位位点的新结构，原结构保持不变
    pub fn with_vacancy_inserted(&self, position: [f64; 3]) -> Crystal {
        let mut crystal = self.clone();
        crystal.atoms.push(Atom::dummy(position));
        crystal
    }
}

/// 化学式中的数量：整数省略小数部分
fn format_amount(amount: f64) -> String {
    if (amount - amount.round()).abs() < 1e-8 {
        format!("{}", amount.round() as i64)
    } else {
        let s = format!("{:.8}", amount);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// 向量叉积
pub(crate) fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 向量点积
pub(crate) fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batio3() -> Crystal {
        let a = 3.9928776341656214;
        let lattice = Lattice::from_parameters(a, a, a, 90.0, 90.0, 90.0);
        let atoms = vec![
            Atom::new("Ba", [0.5, 0.5, 0.5]),
            Atom::new("Ti", [0.0, 0.0, 0.0]),
            Atom::new("O", [0.5, 0.0, 0.0]),
            Atom::new("O", [0.0, 0.0, 0.5]),
            Atom::new("O", [0.0, 0.5, 0.0]),
        ];
        Crystal::new("BaTiO3", lattice, atoms)
    }

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let params = lattice.parameters();
        let expected = [5.0, 5.0, 5.0, 90.0, 90.0, 90.0];

        for (got, want) in params.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_lattice_hexagonal() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        let [a, b, c, alpha, beta, gamma] = lattice.parameters();

        assert!((a - 3.0).abs() < 1e-6);
        assert!((b - 3.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        assert!((lattice.volume().abs() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_cubic() {
        let lattice = Lattice::from_vectors([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let recip = lattice.reciprocal();

        assert!((recip.matrix[0][0] - PI).abs() < 1e-9);
        assert!((recip.matrix[1][1] - PI).abs() < 1e-9);
        assert!(recip.matrix[0][1].abs() < 1e-12);
    }

    #[test]
    fn test_d_hkl_cubic() {
        let lattice = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);

        assert!((lattice.d_hkl([1, 0, 0]) - 4.0).abs() < 1e-9);
        assert!((lattice.d_hkl([1, 1, 1]) - 4.0 / 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_d_hkl_of_reciprocal_lattice() {
        let crystal = batio3();
        let d = crystal.lattice.reciprocal().d_hkl([1, 1, 1]);
        assert_eq!(format!("{:.6}", d), "0.908517");
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lattice = Lattice::from_parameters(3.0, 4.0, 5.0, 80.0, 95.0, 110.0);
        let frac = [0.1, -0.3, 1.2];
        let back = lattice.cart_to_frac(lattice.frac_to_cart(frac));

        for i in 0..3 {
            assert!((back[i] - frac[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_crystal_formula_first_appearance() {
        assert_eq!(batio3().formula(), "Ba1 Ti1 O3");
    }

    #[test]
    fn test_crystal_formula_partial_occupancy() {
        let lattice = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);
        let atoms = vec![
            Atom { occupancy: 0.5, ..Atom::new("Fe", [0.0, 0.0, 0.0]) },
            Atom { occupancy: 0.5, ..Atom::new("Ni", [0.0, 0.0, 0.0]) },
            Atom::new("Fe", [0.5, 0.5, 0.5]),
        ];
        let crystal = Crystal::new("FeNi", lattice, atoms);

        assert_eq!(crystal.formula(), "Fe1.5 Ni0.5");
    }

    #[test]
    fn test_composition_skips_dummy() {
        let crystal = batio3().with_vacancy_inserted([0.25, 0.25, 0.25]);
        let elements: Vec<String> = crystal.composition().into_iter().map(|(el, _)| el).collect();

        assert_eq!(elements, vec!["Ba", "Ti", "O"]);
        assert_eq!(crystal.formula(), "Ba1 Ti1 O3");
    }

    #[test]
    fn test_with_vacancy_inserted_keeps_source() {
        let source = batio3();
        let with_vacancy = source.with_vacancy_inserted([0.25, 0.0, 0.0]);

        assert_eq!(source.num_sites(), 5);
        assert_eq!(with_vacancy.num_sites(), 6);
        assert!(with_vacancy.atoms[5].is_dummy());
        assert_eq!(with_vacancy.atoms[5].position, [0.25, 0.0, 0.0]);
    }
}
