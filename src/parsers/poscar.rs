//! # VASP POSCAR 格式解析器
//!
//! 解析 VASP POSCAR/CONTCAR 文件格式。
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # scaling factor (负值表示目标体积)
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Element1 Element2 ...  # element symbols (VASP 5+)
//! n1 n2 ...              # number of atoms per element
//! Selective dynamics     # optional
//! Direct/Cartesian       # coordinate type
//! x1 y1 z1               # atom positions
//! ...
//! ```
//!
//! 元素符号 `X` 解析为占位元素（空位）。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{Result, VestaError};
use crate::models::{Atom, Crystal, Lattice};
use std::fs;
use std::path::Path;

/// 解析 POSCAR/CONTCAR 文件
pub fn parse_poscar_file(path: &Path) -> Result<Crystal> {
    let content = fs::read_to_string(path).map_err(|e| VestaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_poscar_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 POSCAR 格式
pub fn parse_poscar_content(content: &str, source: &str) -> Result<Crystal> {
    let error = |reason: String| VestaError::ParseError {
        format: "poscar file".to_string(),
        path: source.to_string(),
        reason,
    };

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 7 {
        return Err(error("File too short".to_string()));
    }

    // Line 0: Comment/name
    let name = lines[0].trim().to_string();

    // Line 1: Scaling factor
    let scale: f64 = lines[1]
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| error(format!("Invalid scaling factor '{}'", lines[1].trim())))?;

    // Lines 2-4: Lattice vectors
    let mut matrix = [[0.0; 3]; 3];
    for (i, row) in matrix.iter_mut().enumerate() {
        *row = parse_triple(lines[2 + i])
            .ok_or_else(|| error(format!("Invalid lattice vector at line {}", 3 + i)))?;
    }

    let scale = if scale < 0.0 {
        // 负的缩放因子表示目标体积
        let volume = Lattice::from_vectors(matrix).volume().abs();
        (-scale / volume).cbrt()
    } else {
        scale
    };
    let matrix = matrix.map(|row| row.map(|x| x * scale));
    let lattice = Lattice::from_vectors(matrix);

    // Line 5: Element symbols (VASP 5+) or atom counts (VASP 4)
    let line5_parts: Vec<&str> = lines[5].split_whitespace().collect();
    if line5_parts.is_empty() {
        return Err(error("Missing element or count line".to_string()));
    }

    let (elements, counts_line, mut coord_line) = if line5_parts[0].parse::<usize>().is_ok() {
        // VASP 4: 元素符号只能从注释行获取
        let symbols: Vec<String> = name.split_whitespace().map(normalize_symbol).collect();
        (symbols, lines[5], 6)
    } else {
        let symbols: Vec<String> = line5_parts.iter().map(|s| normalize_symbol(s)).collect();
        (symbols, lines[6], 7)
    };

    let counts: Vec<usize> = counts_line
        .split_whitespace()
        .map(|s| s.parse())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| error(format!("Invalid atom counts '{}'", counts_line.trim())))?;

    if elements.len() < counts.len() {
        return Err(error(format!(
            "{} atom counts but only {} element symbols",
            counts.len(),
            elements.len()
        )));
    }

    // Check for "Selective dynamics" line
    if lines
        .get(coord_line)
        .map(|l| l.trim().to_lowercase().starts_with('s'))
        .unwrap_or(false)
    {
        coord_line += 1;
    }

    // Coordinate type line
    let coord_type = lines
        .get(coord_line)
        .ok_or_else(|| error("Missing coordinate type line".to_string()))?
        .trim()
        .to_lowercase();
    let is_cartesian = coord_type.starts_with('c') || coord_type.starts_with('k');

    // Parse atom positions
    let mut atoms: Vec<Atom> = Vec::new();
    let mut line_idx = coord_line + 1;

    for (elem, &count) in elements.iter().zip(counts.iter()) {
        for _ in 0..count {
            let position = lines
                .get(line_idx)
                .and_then(|l| parse_triple(l))
                .ok_or_else(|| error(format!("Invalid atom position at line {}", line_idx + 1)))?;

            let position = if is_cartesian {
                lattice.cart_to_frac(position.map(|x| x * scale))
            } else {
                position
            };

            let atom = if elem == "X" {
                Atom::dummy(position)
            } else {
                Atom::new(elem.clone(), position)
            };
            atoms.push(atom);
            line_idx += 1;
        }
    }

    Ok(Crystal::new(name, lattice, atoms))
}

/// 解析一行中的前三个实数
fn parse_triple(line: &str) -> Option<[f64; 3]> {
    let parts: Vec<f64> = line
        .split_whitespace()
        .take(3)
        .map(|s| s.parse().ok())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [x, y, z] => Some([*x, *y, *z]),
        _ => None,
    }
}

/// VASP 5.4 允许 "Fe_pv" 或 "Fe/hash" 形式的符号；
/// VASP 4 注释行常写成 "Ba1 Ti1 O3"，去掉末尾的计数
fn normalize_symbol(symbol: &str) -> String {
    symbol
        .split(['_', '/'])
        .next()
        .unwrap_or(symbol)
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_string()
}
