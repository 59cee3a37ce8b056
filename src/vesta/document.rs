//! # VESTA 文档组装
//!
//! 按固定顺序组装数据块并写出 `.vesta` 文件：
//! TITLE → CELLP → STRUC → BOUND → SBOND → VECTR → VECTT → SPLAN → STYLE。
//! 未提供的可选注释不生成对应的块，每个块之后跟一个空行。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `vesta/blocks.rs`、`annotations/`、`models/record.rs`

use crate::annotations::{resolve_bonds, BondSet, PlaneSpec, StyleOptions};
use crate::error::{Result, VestaError};
use crate::geometry::{BoundaryBox, VectorMap};
use crate::models::StructureRecord;
use crate::vesta::blocks::{
    Block, BondsBlock, BoundaryBlock, CellBlock, PlanesBlock, SitesBlock, StyleBlock, TitleBlock,
    VectorStyleBlock, VectorsBlock,
};

use std::fs;
use std::path::{Path, PathBuf};

/// 输出文件扩展名
pub const VESTA_EXTENSION: &str = "vesta";

/// 可选注释
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    /// 可见键，None 或空集合表示全部
    pub visible_bonds: Option<BondSet>,
    pub vectors: Option<VectorMap>,
    pub boundary: Option<BoundaryBox>,
    pub planes: Option<Vec<PlaneSpec>>,
    pub style: Option<StyleOptions>,
}

/// 组装完成的 VESTA 文档
#[derive(Debug, Clone)]
pub struct VestaDocument {
    blocks: Vec<Block>,
}

impl VestaDocument {
    pub fn new(record: &StructureRecord, annotations: &Annotations) -> Self {
        let mut blocks = vec![
            Block::Title(TitleBlock {
                formula: record.formula.clone(),
            }),
            Block::Cell(CellBlock {
                parameters: record.cell_parameters,
            }),
            Block::Sites(SitesBlock {
                sites: record.sites.clone(),
            }),
        ];

        if let Some(boundary) = annotations.boundary {
            blocks.push(Block::Boundary(BoundaryBlock { boundary }));
        }

        blocks.push(Block::Bonds(BondsBlock {
            bonds: resolve_bonds(&record.composition, annotations.visible_bonds.as_ref()),
        }));

        if let Some(vectors) = &annotations.vectors {
            blocks.push(Block::Vectors(VectorsBlock {
                vectors: vectors.clone(),
            }));
            blocks.push(Block::VectorStyle(VectorStyleBlock {
                count: vectors.len(),
            }));
        }

        if let Some(planes) = &annotations.planes {
            blocks.push(Block::Planes(PlanesBlock {
                planes: planes.iter().map(|p| p.resolve(&record.lattice)).collect(),
            }));
        }

        if let Some(options) = annotations.style {
            blocks.push(Block::Style(StyleBlock { options }));
        }

        VestaDocument { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// 完整文件文本
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|block| format!("{}\n", block))
            .collect()
    }

    /// 写出 `<stem>.vesta`，先写临时文件再重命名
    pub fn write_file(&self, stem: &Path) -> Result<PathBuf> {
        let path = PathBuf::from(format!("{}.{}", stem.display(), VESTA_EXTENSION));
        let tmp_path = PathBuf::from(format!("{}.{}.tmp", stem.display(), VESTA_EXTENSION));

        let write_error = |source: std::io::Error| VestaError::FileWriteError {
            path: path.display().to_string(),
            source,
        };

        fs::write(&tmp_path, self.render()).map_err(write_error)?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_error(e));
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{parse_bond_pairs, RadiusMode};
    use crate::models::{Atom, Crystal, Lattice};

    const A: f64 = 3.9928776341656214;

    fn batio3() -> Crystal {
        let lattice = Lattice::from_parameters(A, A, A, 90.0, 90.0, 90.0);
        let atoms = vec![
            Atom::new("Ba", [0.5, 0.5, 0.5]),
            Atom::new("Ti", [0.0, 0.0, 0.0]),
            Atom::new("O", [0.5, 0.0, 0.0]),
            Atom::new("O", [0.0, 0.5, 0.0]),
            Atom::new("O", [0.0, 0.0, 0.5]),
        ];
        Crystal::new("BaTiO3", lattice, atoms)
    }

    fn keywords(doc: &VestaDocument) -> Vec<&'static str> {
        doc.blocks().iter().map(|b| b.keyword()).collect()
    }

    #[test]
    fn test_render_without_annotations() {
        let record = StructureRecord::from_crystal(&batio3());
        let doc = VestaDocument::new(&record, &Annotations::default());

        let expected = "#VESTA_FORMAT_VERSION 3.3.0\nTITLE\nBa1 Ti1 O3\n\n\
            CELLP\n3.992878 3.992878 3.992878 90.000000 90.000000 90.000000\n 0 0 0 0 0 0\n\n\
            STRUC\n\
            1 Ba Ba1  1.0  0.500000 0.500000 0.500000\n 0.0 0.0 0.0 \n\
            2 Ti Ti2  1.0  0.000000 0.000000 0.000000\n 0.0 0.0 0.0 \n\
            3 O O3  1.0  0.500000 0.000000 0.000000\n 0.0 0.0 0.0 \n\
            4 O O4  1.0  0.000000 0.500000 0.000000\n 0.0 0.0 0.0 \n\
            5 O O5  1.0  0.000000 0.000000 0.500000\n 0.0 0.0 0.0 \n \
            0 0 0 0 0 \n\n\
            SBOND\n1 Ti O 0.00000  \t2.707\t 0  1  1  0  1\n 0 0 0 0 \n\n";

        assert_eq!(keywords(&doc), vec!["TITLE", "CELLP", "STRUC", "SBOND"]);
        assert_eq!(doc.render(), expected);
    }

    #[test]
    fn test_block_order_with_all_annotations() {
        let record = StructureRecord::from_crystal(&batio3());
        let annotations = Annotations {
            visible_bonds: Some(parse_bond_pairs(&["Ti-O"]).unwrap()),
            vectors: Some([(2, [0.0, 0.0, 0.1])].into_iter().collect()),
            boundary: Some(BoundaryBox::default()),
            planes: Some(vec![PlaneSpec::parse("111").unwrap()]),
            style: Some(StyleOptions::new(1.0, RadiusMode::Atomic)),
        };
        let doc = VestaDocument::new(&record, &annotations);

        assert_eq!(
            keywords(&doc),
            vec!["TITLE", "CELLP", "STRUC", "BOUND", "SBOND", "VECTR", "VECTT", "SPLAN", "STYLE"]
        );

        let text = doc.render();
        assert!(text.contains("VECTT\n1 0.5 1 1 1 2\n\nSPLAN\n"));
        assert!(text.contains("\n1 1.000000 1.000000 1.000000 0.908517 255 0 255 80\n"));
        assert!(text.ends_with("ATOMS  0  0  1\n\n"));
    }

    #[test]
    fn test_visible_bonds_filter_everything() {
        let record = StructureRecord::from_crystal(&batio3());
        let annotations = Annotations {
            visible_bonds: Some(parse_bond_pairs(&["Ba-O"]).unwrap()),
            ..Default::default()
        };

        let text = VestaDocument::new(&record, &annotations).render();
        assert!(text.contains("SBOND\n 0 0 0 0 \n\n"));
    }

    #[test]
    fn test_vacancy_document_uses_xx() {
        let crystal = batio3().with_vacancy_inserted([0.25, 0.0, 0.0]);
        let record = StructureRecord::from_crystal(&crystal);
        let text = VestaDocument::new(&record, &Annotations::default()).render();

        assert!(text.contains("6 XX XX6  1.0  0.250000 0.000000 0.000000\n"));
        assert!(text.contains("TITLE\nBa1 Ti1 O3\n"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("BaTiO3");

        let record = StructureRecord::from_crystal(&batio3());
        let doc = VestaDocument::new(&record, &Annotations::default());
        let path = doc.write_file(&stem).unwrap();

        assert_eq!(path, dir.path().join("BaTiO3.vesta"));
        assert_eq!(fs::read_to_string(&path).unwrap(), doc.render());
        assert!(!dir.path().join("BaTiO3.vesta.tmp").exists());
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("missing").join("out");

        let record = StructureRecord::from_crystal(&batio3());
        let result = VestaDocument::new(&record, &Annotations::default()).write_file(&stem);
        assert!(matches!(result, Err(VestaError::FileWriteError { .. })));
    }
}
