//! # vestaio - 晶体结构转 VESTA 文件
//!
//! 读取 POSCAR 结构，附加键、位移矢量、晶面、空位等注释，
//! 生成可直接用 VESTA 打开的 `.vesta` 文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── parsers/      (POSCAR 与缺陷 JSON 解析)
//!   │     ├── annotations/  (键、晶面、矢量、样式选项)
//!   │     ├── geometry/     (位移矢量与绘图范围)
//!   │     ├── vesta/        (数据块与文档组装)
//!   │     └── models/       (数据模型)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod annotations;
mod cli;
mod commands;
mod error;
mod geometry;
mod models;
mod parsers;
mod utils;
mod vesta;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
