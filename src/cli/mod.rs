//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。vestaio 只有一个命令：
//! 读取结构文件，附加可选注释，写出 `.vesta` 文件。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate

pub mod generate;

use clap::Parser;

/// vestaio - 晶体结构转 VESTA 文件
#[derive(Parser)]
#[command(name = "vestaio")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Convert crystal structures into VESTA files with bonds, vectors and planes", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: generate::GenerateArgs,
}
