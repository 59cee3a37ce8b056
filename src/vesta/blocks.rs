//! # VESTA 数据块
//!
//! 每个块实现 `Display`，输出以 `\n` 结尾的完整文本：
//! ```text
//! TITLE   化学式
//! CELLP   晶胞参数
//! STRUC   位点
//! BOUND   绘图范围
//! SBOND   键
//! VECTR   位点矢量
//! VECTT   矢量样式
//! SPLAN   晶面
//! STYLE   显示样式
//! ```
//!
//! ## 依赖关系
//! - 被 `vesta/document.rs` 使用
//! - 使用 `vesta/format.rs`、`vesta/tables.rs`、`annotations/`

use crate::annotations::{Plane, ResolvedBond, StyleOptions};
use crate::geometry::{BoundaryBox, VectorMap};
use crate::models::Site;
use crate::vesta::format::{format_line, format_real, replace_dummy_species};
use crate::vesta::tables::{CELL_OUTLINE_BOLD, CELL_OUTLINE_THIN};

use std::fmt;

/// 文件格式版本行
pub const FORMAT_VERSION: &str = "#VESTA_FORMAT_VERSION 3.3.0";

/// 每条矢量的结束行
const VECTOR_SEPARATOR: &str = " 0 0 0 0 0 ";

/// 晶面颜色 (RGBA)
const PLANE_COLOR: &str = "255 0 255 80";

#[derive(Debug, Clone)]
pub struct TitleBlock {
    pub formula: String,
}

impl fmt::Display for TitleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", FORMAT_VERSION)?;
        writeln!(f, "TITLE")?;
        writeln!(f, "{}", self.formula)
    }
}

#[derive(Debug, Clone)]
pub struct CellBlock {
    pub parameters: [f64; 6],
}

impl fmt::Display for CellBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CELLP")?;
        writeln!(f, "{}", format_line(&self.parameters))?;
        writeln!(f, " 0 0 0 0 0 0")
    }
}

#[derive(Debug, Clone)]
pub struct SitesBlock {
    pub sites: Vec<Site>,
}

impl SitesBlock {
    fn raw_text(&self) -> String {
        let mut text = String::from("STRUC\n");
        for site in &self.sites {
            text.push_str(&format!(
                "{} {} {}{}  {}  {}\n",
                site.index,
                site.species,
                site.species,
                site.index,
                format_real(site.occupation),
                format_line(&site.frac_coords)
            ));
            text.push_str(" 0.0 0.0 0.0 \n");
        }
        text.push_str(" 0 0 0 0 0 \n");
        text
    }
}

impl fmt::Display for SitesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&replace_dummy_species(&self.raw_text()))
    }
}

#[derive(Debug, Clone)]
pub struct BoundaryBlock {
    pub boundary: BoundaryBox,
}

impl fmt::Display for BoundaryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BOUND")?;
        writeln!(f, "{}", format_line(&self.boundary.values()))?;
        writeln!(f, " 0 0 0 0 0 ")
    }
}

#[derive(Debug, Clone)]
pub struct BondsBlock {
    pub bonds: Vec<ResolvedBond>,
}

impl fmt::Display for BondsBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SBOND")?;
        for (n, bond) in self.bonds.iter().enumerate() {
            writeln!(
                f,
                "{} {} {} {}",
                n + 1,
                bond.species_a,
                bond.species_b,
                bond.length.to_vesta_fields()
            )?;
        }
        writeln!(f, " 0 0 0 0 ")
    }
}

#[derive(Debug, Clone)]
pub struct VectorsBlock {
    pub vectors: VectorMap,
}

impl fmt::Display for VectorsBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VECTR")?;
        if self.vectors.is_empty() {
            return writeln!(f, "{}", VECTOR_SEPARATOR);
        }
        for (site, v) in &self.vectors {
            writeln!(f, "{} {}", site, format_line(v))?;
            writeln!(f, "{}  0 0 0 0 {}", site, VECTOR_SEPARATOR)?;
            writeln!(f, "{}", VECTOR_SEPARATOR)?;
        }
        Ok(())
    }
}

/// 每条矢量一行：半径 0.5，颜色 (1,1,1)，类型 2
#[derive(Debug, Clone)]
pub struct VectorStyleBlock {
    pub count: usize,
}

impl fmt::Display for VectorStyleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VECTT")?;
        for n in 1..=self.count {
            writeln!(f, "{} {} 1 1 1 2", n, format_real(0.5))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PlanesBlock {
    pub planes: Vec<Plane>,
}

impl fmt::Display for PlanesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SPLAN")?;
        for (n, plane) in self.planes.iter().enumerate() {
            let [h, k, l] = plane.hkl;
            writeln!(
                f,
                "{} {} {}",
                n + 1,
                format_line(&[h as f64, k as f64, l as f64, plane.d]),
                PLANE_COLOR
            )?;
        }
        writeln!(f, "  0   0   0   0")
    }
}

#[derive(Debug, Clone)]
pub struct StyleBlock {
    pub options: StyleOptions,
}

impl fmt::Display for StyleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outline = if self.options.bold_cell {
            CELL_OUTLINE_BOLD
        } else {
            CELL_OUTLINE_THIN
        };

        writeln!(f, "STYLE")?;
        writeln!(f, "VECTS  {}", format_real(self.options.amplitude))?;
        writeln!(f, "UCOLP ")?;
        writeln!(f, " {}", outline)?;
        writeln!(f, "ATOMS  {}", self.options.radius.vesta_option())
    }
}

/// 文档中的一个数据块
#[derive(Debug, Clone)]
pub enum Block {
    Title(TitleBlock),
    Cell(CellBlock),
    Sites(SitesBlock),
    Boundary(BoundaryBlock),
    Bonds(BondsBlock),
    Vectors(VectorsBlock),
    VectorStyle(VectorStyleBlock),
    Planes(PlanesBlock),
    Style(StyleBlock),
}

impl Block {
    /// 块关键字
    pub fn keyword(&self) -> &'static str {
        match self {
            Block::Title(_) => "TITLE",
            Block::Cell(_) => "CELLP",
            Block::Sites(_) => "STRUC",
            Block::Boundary(_) => "BOUND",
            Block::Bonds(_) => "SBOND",
            Block::Vectors(_) => "VECTR",
            Block::VectorStyle(_) => "VECTT",
            Block::Planes(_) => "SPLAN",
            Block::Style(_) => "STYLE",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Title(b) => b.fmt(f),
            Block::Cell(b) => b.fmt(f),
            Block::Sites(b) => b.fmt(f),
            Block::Boundary(b) => b.fmt(f),
            Block::Bonds(b) => b.fmt(f),
            Block::Vectors(b) => b.fmt(f),
            Block::VectorStyle(b) => b.fmt(f),
            Block::Planes(b) => b.fmt(f),
            Block::Style(b) => b.fmt(f),
        }
    }
}
