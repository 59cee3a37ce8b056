//! # 解析器模块
//!
//! 提供结构文件与缺陷 JSON 文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: poscar, defect

pub mod defect;
pub mod poscar;

use crate::error::{Result, VestaError};
use crate::models::Crystal;
use std::path::Path;

/// 从文件路径推断格式并解析
pub fn parse_structure_file(path: &Path) -> Result<Crystal> {
    if !path.is_file() {
        return Err(VestaError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    if ext == "vasp" || name.starts_with("POSCAR") || name.starts_with("CONTCAR") {
        return poscar::parse_poscar_file(path);
    }

    Err(VestaError::UnsupportedFormat(format!(
        "Cannot determine format for: {}",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CONTENT: &str = "Po
1.0
3.35 0.0 0.0
0.0 3.35 0.0
0.0 0.0 3.35
Po
1
Direct
0.0 0.0 0.0
";

    #[test]
    fn test_parse_structure_file_by_name() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["POSCAR", "CONTCAR-finish", "Po.vasp"] {
            let path = dir.path().join(name);
            fs::write(&path, CONTENT).unwrap();
            assert_eq!(parse_structure_file(&path).unwrap().num_sites(), 1);
        }
    }

    #[test]
    fn test_parse_structure_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("POSCAR");
        assert!(matches!(
            parse_structure_file(&missing),
            Err(VestaError::FileNotFound { .. })
        ));

        let unknown = dir.path().join("structure.xyz");
        fs::write(&unknown, CONTENT).unwrap();
        assert!(matches!(
            parse_structure_file(&unknown),
            Err(VestaError::UnsupportedFormat(_))
        ));
    }
}
