//! # 终端输出工具
//!
//! 统一的带颜色前缀的状态行：
//! `[*]` 流程信息，`[WARN]` 可继续的异常，`[ERR]` 致命错误，`[DONE]` 完成。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}
