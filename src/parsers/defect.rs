//! # 缺陷 JSON 文件解析器
//!
//! 读取 `defect_entry.json` 或 `defect.json`，构造 [`DefectSource`]。
//!
//! ## defect_entry.json
//! ```text
//! {
//!   "defect_center": [0.25, 0.0, 0.0],      // 或位点编号 (0 起始)
//!   "neighboring_sites": [0, 8, 16, 24],
//!   "initial_structure": {
//!     "lattice": [[..], [..], [..]],
//!     "species": ["Se", ...],
//!     "frac_coords": [[..], ...]
//!   }
//! }
//! ```
//!
//! ## defect.json
//! ```text
//! { "defect_center": .., "neighboring_sites": [..], "displacement_vectors": [[..], ..] }
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/defect.rs`，`serde_json`

use crate::error::{Result, VestaError};
use crate::models::{Atom, Crystal, DefectCenter, DefectEntry, DefectSource, DefectStructure, Lattice};

use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFECT_ENTRY_FILE: &str = "defect_entry.json";
pub const DEFECT_STRUCTURE_FILE: &str = "defect.json";

#[derive(Debug, Deserialize)]
struct StructureJson {
    lattice: [[f64; 3]; 3],
    species: Vec<String>,
    frac_coords: Vec<[f64; 3]>,
}

#[derive(Debug, Deserialize)]
struct DefectEntryJson {
    defect_center: DefectCenter,
    neighboring_sites: Vec<usize>,
    initial_structure: StructureJson,
}

/// 在 `dir` 中查找缺陷文件，`defect_entry.json` 优先
pub fn load_defect(dir: &Path, final_structure: &Crystal) -> Result<Box<dyn DefectSource>> {
    let entry_path = dir.join(DEFECT_ENTRY_FILE);
    if entry_path.is_file() {
        let content = read(&entry_path)?;
        let entry = parse_defect_entry(&content, &entry_path.display().to_string(), final_structure)?;
        return Ok(Box::new(entry));
    }

    let structure_path = dir.join(DEFECT_STRUCTURE_FILE);
    if structure_path.is_file() {
        let content = read(&structure_path)?;
        let defect = parse_defect_structure(&content, &structure_path.display().to_string())?;
        return Ok(Box::new(defect));
    }

    Err(VestaError::LookupFailure(format!(
        "neither {} nor {} found in {}",
        DEFECT_ENTRY_FILE,
        DEFECT_STRUCTURE_FILE,
        dir.display()
    )))
}

/// 解析 `defect_entry.json` 内容
pub fn parse_defect_entry(content: &str, source: &str, final_structure: &Crystal) -> Result<DefectEntry> {
    let json: DefectEntryJson = serde_json::from_str(content).map_err(|e| parse_error(source, e.to_string()))?;

    let initial = json.initial_structure;
    if initial.species.len() != initial.frac_coords.len() {
        return Err(parse_error(
            source,
            format!(
                "initial_structure has {} species but {} coordinates",
                initial.species.len(),
                initial.frac_coords.len()
            ),
        ));
    }

    let atoms = initial
        .species
        .into_iter()
        .zip(initial.frac_coords)
        .map(|(species, position)| Atom::new(species, position))
        .collect();

    Ok(DefectEntry {
        defect_center: json.defect_center,
        neighboring_sites: json.neighboring_sites,
        initial_structure: Crystal::new("initial", Lattice::from_vectors(initial.lattice), atoms),
        final_structure: final_structure.clone(),
    })
}

/// 解析 `defect.json` 内容
pub fn parse_defect_structure(content: &str, source: &str) -> Result<DefectStructure> {
    serde_json::from_str(content).map_err(|e| parse_error(source, e.to_string()))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| VestaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_error(source: &str, reason: String) -> VestaError {
    VestaError::ParseError {
        format: "defect json file".to_string(),
        path: source.to_string(),
        reason,
    }
}
