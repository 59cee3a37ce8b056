//! # 生成命令实现
//!
//! 读取结构文件，解析各项注释选项，组装并写出 `.vesta` 文件。
//!
//! ## 流程
//! 1. 读取结构
//! 2. 矢量：矢量文件 → `--diff` → `--defect`，后者覆盖前者
//! 3. `--vacancy`：追加空位占位位点
//! 4. 晶面、可见键、绘图范围（含居中平移）、显示样式
//! 5. 组装文档并写出
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/`、`geometry/`、`annotations/`、`vesta/`
//! - 使用 `utils/output.rs`

use crate::annotations::{
    parse_bond_pairs, parse_planes, parse_vector_file, resolve_bonds, scaled_amplitude, RadiusMode,
    StyleOptions,
};
use crate::cli::generate::GenerateArgs;
use crate::error::{Result, VestaError};
use crate::geometry::{centering_shift, diff_vectors, parse_boundary, BoundaryBox};
use crate::models::defect::{defect_induced_vectors, vacancy_position};
use crate::models::StructureRecord;
use crate::parsers;
use crate::parsers::defect::load_defect;
use crate::utils::output;
use crate::vesta::{Annotations, VestaDocument};

use std::path::{Path, PathBuf};

/// 执行生成命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    let plane_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let document = build_document(&args, &plane_dir)?;

    let stem = args.filename.as_ref().unwrap_or(&args.poscar);
    let path = document.write_file(stem)?;

    output::print_done(&format!("generated {}", path.display()));
    Ok(())
}

/// 按命令行参数组装文档，`plane_dir` 为晶面 `*.txt` 文件所在目录
pub fn build_document(args: &GenerateArgs, plane_dir: &Path) -> Result<VestaDocument> {
    if args.diff.is_some() && args.defect {
        return Err(VestaError::InvalidArgument(
            "--diff and --defect are exclusive".to_string(),
        ));
    }

    let radius: RadiusMode = args.atoms.parse()?;
    let base_boundary = parse_boundary(&args.boundary, &BoundaryBox::default())?;

    output::print_info(&format!("Reading structure from {}", args.poscar.display()));
    let mut crystal = parsers::parse_structure_file(&args.poscar)?;
    output::print_info(&format!(
        "{}: {} ({} sites)",
        crystal.name,
        crystal.formula(),
        crystal.num_sites()
    ));

    // 矢量
    let mut vectors = match &args.vectors {
        Some(path) => Some(parse_vector_file(path, crystal.num_sites())?),
        None => None,
    };

    if vectors.is_some() && (args.diff.is_some() || args.defect) {
        output::print_warning("--vectors is overridden by --diff/--defect");
    }

    if let Some(path) = &args.diff {
        let other = parsers::parse_structure_file(path)?;
        output::print_info(&format!("Displacements relative to {}", path.display()));
        vectors = Some(diff_vectors(&crystal, &other)?);
    }

    let mut defect = None;
    if args.defect {
        let source = load_defect(&args.defect_dir, &crystal)?;
        vectors = Some(defect_induced_vectors(source.as_ref(), args.all_sites)?);
        defect = Some(source);
    }

    if args.vacancy {
        let source = match defect {
            Some(source) => source,
            None => load_defect(&args.defect_dir, &crystal)?,
        };
        let position = vacancy_position(source.as_ref())?;
        output::print_info(&format!(
            "Vacancy at ({:.4}, {:.4}, {:.4})",
            position[0], position[1], position[2]
        ));
        crystal = crystal.with_vacancy_inserted(position);
    }

    // 晶面
    let planes = if args.planes.is_empty() {
        None
    } else {
        Some(parse_planes(&args.planes, plane_dir)?)
    };

    // 可见键
    let visible_bonds = if args.bonds.is_empty() {
        None
    } else {
        Some(parse_bond_pairs(&args.bonds)?)
    };

    let record = StructureRecord::from_crystal(&crystal);
    if resolve_bonds(&record.composition, visible_bonds.as_ref()).is_empty() {
        output::print_warning("No bonds resolved for this composition");
    }

    // 绘图范围
    let boundary = match args.centering {
        Some(index) => {
            let atom = index
                .checked_sub(1)
                .and_then(|i| crystal.atoms.get(i))
                .ok_or_else(|| {
                    VestaError::LookupFailure(format!(
                        "centering site {} is out of range (1..={})",
                        index,
                        crystal.num_sites()
                    ))
                })?;
            base_boundary.shifted(centering_shift(atom.position, &base_boundary))
        }
        None => base_boundary,
    };

    let amplitude = scaled_amplitude(args.amplitude, crystal.volume(), record.num_sites());
    let style = StyleOptions::new(amplitude, radius);
    output::print_info(&format!("Atom radii: {}, vector scale {:.4}", radius, amplitude));

    let annotations = Annotations {
        visible_bonds,
        vectors,
        boundary: Some(boundary),
        planes,
        style: Some(style),
    };

    let document = VestaDocument::new(&record, &annotations);
    let keywords: Vec<&str> = document.blocks().iter().map(|b| b.keyword()).collect();
    output::print_info(&format!("Blocks: {}", keywords.join(" ")));

    Ok(document)
}
