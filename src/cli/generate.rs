//! # 生成 VESTA 文件的 CLI 参数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// 默认绘图范围
pub const DEFAULT_BOUNDARY: &str = "0 1 0 1 0 1";

/// 生成参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Structure file (POSCAR/CONTCAR/*.vasp)
    #[arg(short, long, value_name = "FILE", default_value = "POSCAR")]
    pub poscar: PathBuf,

    /// Vector file: N rows of 'x y z' or rows of 'site x y z'
    #[arg(short, long, value_name = "FILE")]
    pub vectors: Option<PathBuf>,

    /// Second structure file; show the displacement between the two as vectors
    #[arg(long, value_name = "FILE", conflicts_with = "defect")]
    pub diff: Option<PathBuf>,

    /// Show defect-induced displacements as vectors (needs defect_entry.json or defect.json)
    #[arg(long, default_value_t = false)]
    pub defect: bool,

    /// Directory containing defect_entry.json or defect.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub defect_dir: PathBuf,

    /// Add the vacancy site as an XX element
    #[arg(long, default_value_t = false)]
    pub vacancy: bool,

    /// Show defect-induced vectors on all sites instead of the neighboring ones
    #[arg(long, default_value_t = false)]
    pub all_sites: bool,

    /// Vector amplitude, scaled by the cube root of volume / sites
    /// (not the legacy (volume / sites) / 3)
    #[arg(short = 'm', long, default_value_t = 1.0)]
    pub amplitude: f64,

    /// Visible bonds, e.g. Ti-O Ba-O (default: all known pairs)
    #[arg(short, long, value_name = "PAIR", num_args = 1..)]
    pub bonds: Vec<String>,

    /// Atom radii: atomic, ionic or vdw
    #[arg(long, value_name = "MODE", default_value = "atomic", env = "VESTAIO_ATOMS")]
    pub atoms: String,

    /// Plot range 'a_min a_max b_min b_max c_min c_max', or a scale factor such as 1/2
    #[arg(long, value_name = "SPEC", default_value = DEFAULT_BOUNDARY, allow_hyphen_values = true)]
    pub boundary: String,

    /// Center the plot range on this site (1-based)
    #[arg(long, value_name = "INDEX")]
    pub centering: Option<usize>,

    /// Planes as 'hkl' or 'hkl-d' (e.g. 111, 100-3.0); *.txt files are expanded
    #[arg(long, value_name = "TOKEN", num_args = 1..)]
    pub planes: Vec<String>,

    /// Output file stem (default: the structure file path)
    #[arg(short, long, value_name = "STEM")]
    pub filename: Option<PathBuf>,
}
