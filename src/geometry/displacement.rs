//! # 位移矢量计算
//!
//! - 两个结构之间的分数坐标差（`--diff` 模式）
//! - 缺陷弛豫引起的周期性最短位移（最小像约定）
//!
//! ## 依赖关系
//! - 被 `geometry/mod.rs`、`models/defect.rs`、`commands/generate.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{Result, VestaError};
use crate::models::{Crystal, Lattice};

use std::collections::BTreeMap;

/// 位点编号（1 起始）到三维矢量的映射，按编号升序迭代
pub type VectorMap = BTreeMap<usize, [f64; 3]>;

/// 两个结构的分数坐标差 `a - b`，不做周期性折叠
pub fn diff_vectors(a: &Crystal, b: &Crystal) -> Result<VectorMap> {
    check_same_size(a, b)?;

    Ok(a.atoms
        .iter()
        .zip(b.atoms.iter())
        .enumerate()
        .map(|(i, (site_a, site_b))| (i + 1, sub(site_a.position, site_b.position)))
        .collect())
}

/// 从初始结构到终态结构的最短位移矢量（分数坐标，初始晶格）
///
/// `anchor` 为 1 起始的位点编号：该位点的位移视为整体漂移，从所有位点中扣除。
pub fn displacement_vectors(
    final_structure: &Crystal,
    initial_structure: &Crystal,
    anchor: Option<usize>,
) -> Result<Vec<[f64; 3]>> {
    check_same_size(final_structure, initial_structure)?;

    let drift = match anchor {
        Some(index) => {
            if index == 0 || index > final_structure.num_sites() {
                return Err(VestaError::LookupFailure(format!(
                    "anchor site {} is out of range (1..={})",
                    index,
                    final_structure.num_sites()
                )));
            }
            sub(
                final_structure.atoms[index - 1].position,
                initial_structure.atoms[index - 1].position,
            )
        }
        None => [0.0; 3],
    };

    Ok(final_structure
        .atoms
        .iter()
        .zip(initial_structure.atoms.iter())
        .map(|(fin, init)| {
            let delta = sub(sub(fin.position, drift), init.position);
            minimum_image(&initial_structure.lattice, delta)
        })
        .collect())
}

/// 在 27 个近邻平移中选取笛卡尔长度最短的等价矢量
fn minimum_image(lattice: &Lattice, delta: [f64; 3]) -> [f64; 3] {
    let wrapped = delta.map(|x| x - x.round());

    let mut best = wrapped;
    let mut best_len = cart_length(lattice, wrapped);

    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                let candidate = [
                    wrapped[0] + i as f64,
                    wrapped[1] + j as f64,
                    wrapped[2] + k as f64,
                ];
                let len = cart_length(lattice, candidate);
                if len < best_len - 1e-12 {
                    best = candidate;
                    best_len = len;
                }
            }
        }
    }

    best
}

fn cart_length(lattice: &Lattice, frac: [f64; 3]) -> f64 {
    let cart = lattice.frac_to_cart(frac);
    (cart[0] * cart[0] + cart[1] * cart[1] + cart[2] * cart[2]).sqrt()
}

fn check_same_size(a: &Crystal, b: &Crystal) -> Result<()> {
    if a.num_sites() != b.num_sites() {
        return Err(VestaError::ShapeMismatch(format!(
            "the number of atoms differs between the two structures ({} vs {})",
            a.num_sites(),
            b.num_sites()
        )));
    }
    Ok(())
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
