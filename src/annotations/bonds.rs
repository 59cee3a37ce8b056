//! # 可见键 (SBOND)
//!
//! 将 `--bonds Ti-O Ba-O` 解析为无序元素对集合，并与结构组成、默认成键表求交。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`、`vesta/blocks.rs` 使用
//! - 使用 `vesta/tables.rs`

use crate::error::{Result, VestaError};
use crate::vesta::tables::{default_bond_length, BondLength};

use std::collections::BTreeSet;

/// 无序元素对，内部按字典序存储
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BondPair(String, String);

impl BondPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            BondPair(a, b)
        } else {
            BondPair(b, a)
        }
    }
}

pub type BondSet = BTreeSet<BondPair>;

/// 组成与成键表求交后保留下来的键
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBond {
    pub species_a: String,
    pub species_b: String,
    pub length: BondLength,
}

/// 解析 "X-Y" 形式的元素对列表
///
/// 不检查元素是否存在于结构中，未匹配的元素对在 [`resolve_bonds`] 中被丢弃。
pub fn parse_bond_pairs<S: AsRef<str>>(tokens: &[S]) -> Result<BondSet> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            match token.split('-').collect::<Vec<_>>().as_slice() {
                [a, b] if !a.is_empty() && !b.is_empty() => Ok(BondPair::new(*a, *b)),
                _ => Err(VestaError::ParseError {
                    format: "bonds option".to_string(),
                    path: token.to_string(),
                    reason: "expected two element symbols joined by '-', e.g. Ti-O".to_string(),
                }),
            }
        })
        .collect()
}

/// 组成中所有可重复的两两组合，按组成顺序定向
pub fn composition_pairs(composition: &[String]) -> Vec<(String, String)> {
    composition
        .iter()
        .enumerate()
        .flat_map(|(i, a)| composition[i..].iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

/// 组成元素对 ∩ 用户可见集合 ∩ 默认成键表，按元素对字典序排序
///
/// `visible` 为 None 或空集合时视为全部可见。
pub fn resolve_bonds(composition: &[String], visible: Option<&BondSet>) -> Vec<ResolvedBond> {
    let mut pairs = composition_pairs(composition);
    pairs.sort();
    pairs.dedup();

    pairs
        .into_iter()
        .filter(|(a, b)| match visible {
            Some(set) if !set.is_empty() => set.contains(&BondPair::new(a.as_str(), b.as_str())),
            _ => true,
        })
        .filter_map(|(a, b)| {
            default_bond_length(&a, &b).map(|length| ResolvedBond {
                species_a: a,
                species_b: b,
                length,
            })
        })
        .collect()
}
