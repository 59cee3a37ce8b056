//! # VESTA 结构记录
//!
//! 从 [`Crystal`] 提取生成 VESTA 文件所需的最小信息：化学式、晶胞参数、
//! 位点列表与元素组成。记录拥有自己的数据副本，之后的空位插入等操作
//! 不会影响已生成的记录。
//!
//! ## 依赖关系
//! - 被 `vesta/` 使用
//! - 使用 `models/structure.rs`

use crate::models::structure::{Crystal, Lattice};

/// 单个位点
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// 1 起始的位点编号
    pub index: usize,
    pub species: String,
    pub frac_coords: [f64; 3],
    pub occupation: f64,
}

/// 结构记录
#[derive(Debug, Clone, PartialEq)]
pub struct StructureRecord {
    pub formula: String,
    /// [a, b, c, alpha, beta, gamma]
    pub cell_parameters: [f64; 6],
    pub sites: Vec<Site>,
    /// 不重复的元素符号，按首次出现顺序
    pub composition: Vec<String>,
    pub lattice: Lattice,
}

impl StructureRecord {
    pub fn from_crystal(crystal: &Crystal) -> Self {
        let sites = crystal
            .atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| Site {
                index: i + 1,
                species: atom.element.clone(),
                frac_coords: atom.position,
                occupation: atom.occupancy,
            })
            .collect();

        StructureRecord {
            formula: crystal.formula(),
            cell_parameters: crystal.lattice.parameters(),
            sites,
            composition: crystal.composition().into_iter().map(|(el, _)| el).collect(),
            lattice: crystal.lattice.clone(),
        }
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Atom;

    #[test]
    fn test_record_from_batio3() {
        let a = 3.9928776341656214;
        let lattice = Lattice::from_parameters(a, a, a, 90.0, 90.0, 90.0);
        let crystal = Crystal::new(
            "BaTiO3",
            lattice,
            vec![
                Atom::new("Ba", [0.5, 0.5, 0.5]),
                Atom::new("Ti", [0.0, 0.0, 0.0]),
                Atom::new("O", [0.5, 0.0, 0.0]),
                Atom::new("O", [0.0, 0.0, 0.5]),
                Atom::new("O", [0.0, 0.5, 0.0]),
            ],
        );

        let record = StructureRecord::from_crystal(&crystal);

        assert_eq!(record.formula, "Ba1 Ti1 O3");
        assert_eq!(record.composition, vec!["Ba", "Ti", "O"]);
        assert_eq!(record.num_sites(), 5);
        assert!((record.cell_parameters[0] - a).abs() < 1e-9);
        assert!((record.cell_parameters[5] - 90.0).abs() < 1e-9);

        let indices: Vec<usize> = record.sites.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(record.sites[2].species, "O");
        assert_eq!(record.sites[0].frac_coords, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_record_is_detached_from_crystal() {
        let lattice = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);
        let mut crystal = Crystal::new("Fe", lattice, vec![Atom::new("Fe", [0.0, 0.0, 0.0])]);

        let record = StructureRecord::from_crystal(&crystal);
        crystal.atoms.push(Atom::dummy([0.5, 0.5, 0.5]));

        assert_eq!(record.num_sites(), 1);
    }
}
