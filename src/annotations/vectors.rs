//! # 矢量文件 (VECTR)
//!
//! 解析 `--vectors` 指定的文本文件，两种形式：
//! ```text
//! # 稠密：恰好 N 行 (N = 位点数)，每行 3 个数，依次对应位点 1..N
//! 0.0 0.0 0.1
//! ...
//! # 稀疏：每行 4 个数，第一列为位点编号 (1 起始)
//! 2 1.0 1.0 1.0
//! 3 1.0 0.0 0.0
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `geometry/displacement.rs` 的 VectorMap

use crate::error::{Result, VestaError};
use crate::geometry::VectorMap;

use std::fs;
use std::path::Path;

/// 读取矢量文件
pub fn parse_vector_file(path: &Path, num_sites: usize) -> Result<VectorMap> {
    let content = fs::read_to_string(path).map_err(|e| VestaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_vector_content(&content, num_sites, &path.display().to_string())
}

/// 从字符串内容解析矢量表
pub fn parse_vector_content(content: &str, num_sites: usize, source: &str) -> Result<VectorMap> {
    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    let columns = rows.first().map(|r| r.len()).ok_or_else(|| {
        VestaError::ShapeMismatch(format!("vector file {} contains no rows", source))
    })?;

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(VestaError::ShapeMismatch(format!(
            "row {} of {} has {} columns, expected {}",
            i + 1,
            source,
            row.len(),
            columns
        )));
    }

    match columns {
        3 if rows.len() == num_sites => rows
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<(usize, [f64; 3])> {
                Ok((i + 1, parse_vector(row, source)?))
            })
            .collect(),
        4 => rows
            .iter()
            .map(|row| -> Result<(usize, [f64; 3])> {
                let site: usize = row[0]
                    .parse()
                    .ok()
                    .filter(|&s| s >= 1)
                    .ok_or_else(|| parse_error(source, format!("invalid site index '{}'", row[0])))?;
                Ok((site, parse_vector(&row[1..], source)?))
            })
            .collect(),
        _ => Err(VestaError::ShapeMismatch(format!(
            "{} has {} rows of {} columns; expected {} rows of 3 or rows of 4",
            source,
            rows.len(),
            columns,
            num_sites
        ))),
    }
}

fn parse_vector(fields: &[&str], source: &str) -> Result<[f64; 3]> {
    let mut v = [0.0; 3];
    for (slot, field) in v.iter_mut().zip(fields) {
        *slot = field
            .parse()
            .map_err(|_| parse_error(source, format!("'{}' is not a number", field)))?;
    }
    Ok(v)
}

fn parse_error(source: &str, reason: String) -> VestaError {
    VestaError::ParseError {
        format: "vector file".to_string(),
        path: source.to_string(),
        reason,
    }
}
