//! # 点缺陷数据模型
//!
//! 缺陷计算的上游输出有两种形状：
//! - `defect_entry.json`：缺陷中心、近邻位点、初始结构，位移需由终态结构计算
//! - `defect.json`：缺陷中心、近邻位点、已计算好的位移矢量
//!
//! 两者统一为 [`DefectSource`] trait，供位移矢量和空位标记使用。
//!
//! ## 依赖关系
//! - 被 `parsers/defect.rs`、`commands/generate.rs` 使用
//! - 使用 `geometry/displacement.rs`

use crate::error::{Result, VestaError};
use crate::geometry::{displacement_vectors, VectorMap};
use crate::models::Crystal;

use serde::{Deserialize, Serialize};

/// 缺陷中心：某个原子位点（0 起始编号），或一个分数坐标位置（空位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefectCenter {
    Site(usize),
    Position([f64; 3]),
}

/// 缺陷信息的统一接口
pub trait DefectSource {
    fn center(&self) -> &DefectCenter;

    /// 受缺陷影响的位点（0 起始编号）
    fn affected_site_indices(&self) -> &[usize];

    /// 每个位点的位移矢量（分数坐标），顺序与结构位点一致
    fn displacements(&self) -> Result<Vec<[f64; 3]>>;
}

/// `defect_entry.json` 形式的缺陷
#[derive(Debug, Clone)]
pub struct DefectEntry {
    pub defect_center: DefectCenter,
    pub neighboring_sites: Vec<usize>,
    pub initial_structure: Crystal,
    pub final_structure: Crystal,
}

impl DefectSource for DefectEntry {
    fn center(&self) -> &DefectCenter {
        &self.defect_center
    }

    fn affected_site_indices(&self) -> &[usize] {
        &self.neighboring_sites
    }

    /// 不扣除整体漂移，缺陷位点自身的位移保留
    fn displacements(&self) -> Result<Vec<[f64; 3]>> {
        displacement_vectors(&self.final_structure, &self.initial_structure, None)
    }
}

/// `defect.json` 形式的缺陷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectStructure {
    pub defect_center: DefectCenter,
    pub neighboring_sites: Vec<usize>,
    pub displacement_vectors: Vec<[f64; 3]>,
}

impl DefectSource for DefectStructure {
    fn center(&self) -> &DefectCenter {
        &self.defect_center
    }

    fn affected_site_indices(&self) -> &[usize] {
        &self.neighboring_sites
    }

    fn displacements(&self) -> Result<Vec<[f64; 3]>> {
        Ok(self.displacement_vectors.clone())
    }
}

/// 缺陷引起的位移矢量
///
/// `all_sites` 为 false 时只保留受影响位点。键为 1 起始的位点编号。
pub fn defect_induced_vectors(defect: &dyn DefectSource, all_sites: bool) -> Result<VectorMap> {
    let displacements = defect.displacements()?;

    if all_sites {
        return Ok(displacements
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i + 1, v))
            .collect());
    }

    defect
        .affected_site_indices()
        .iter()
        .map(|&site| {
            displacements
                .get(site)
                .map(|v| (site + 1, *v))
                .ok_or_else(|| {
                    VestaError::LookupFailure(format!(
                        "neighboring site {} has no displacement ({} sites)",
                        site,
                        displacements.len()
                    ))
                })
        })
        .collect()
}

/// 空位所在位置；缺陷中心为原子位点时不是空位
pub fn vacancy_position(defect: &dyn DefectSource) -> Result<[f64; 3]> {
    match defect.center() {
        DefectCenter::Position(position) => Ok(*position),
        DefectCenter::Site(index) => Err(VestaError::LookupFailure(format!(
            "defect is not a vacancy (center is site {})",
            index
        ))),
    }
}
