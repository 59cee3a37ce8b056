//! # 晶面 (SPLAN)
//!
//! 解析 `--planes` 选项：
//! ```text
//! 111        # (hkl)，d 由倒格子计算
//! 111-3.0    # (hkl) 与显式 d = 3.0 Å
//! planes.txt # 展开为文件中以空白分隔的记号
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`、`vesta/blocks.rs` 使用
//! - 使用 `models/structure.rs` 计算默认 d

use crate::error::{Result, VestaError};
use crate::models::Lattice;

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static PLANE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9])([0-9])([0-9])(?:-(.+))?$").expect("valid plane regex"));

/// 用户指定的晶面，d 可省略
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSpec {
    pub hkl: [i32; 3],
    pub d: Option<f64>,
}

/// d 已确定的晶面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub hkl: [i32; 3],
    pub d: f64,
}

impl PlaneSpec {
    /// 解析单个记号，h/k/l 各为一位数字
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = |reason: &str| VestaError::ParseError {
            format: "planes option".to_string(),
            path: token.to_string(),
            reason: reason.to_string(),
        };

        let caps = PLANE_TOKEN
            .captures(token)
            .ok_or_else(|| invalid("expected 'hkl' or 'hkl-d', e.g. 111 or 111-3.0"))?;

        let digit = |i: usize| -> Result<i32> {
            caps[i]
                .parse()
                .map_err(|_| invalid("Miller index must be an ASCII digit"))
        };
        let hkl = [digit(1)?, digit(2)?, digit(3)?];

        if hkl == [0, 0, 0] {
            return Err(invalid("(000) does not define a plane"));
        }

        let d = match caps.get(4) {
            Some(m) => Some(
                m.as_str()
                    .parse::<f64>()
                    .map_err(|_| invalid("interplanar distance is not a number"))?,
            ),
            None => None,
        };

        Ok(PlaneSpec { hkl, d })
    }

    /// 未给出 d 时取倒格子上的面间距
    pub fn resolve(&self, lattice: &Lattice) -> Plane {
        Plane {
            hkl: self.hkl,
            d: self
                .d
                .unwrap_or_else(|| lattice.reciprocal().d_hkl(self.hkl)),
        }
    }
}

/// 将 `*.txt` 记号展开为文件内容（不递归），不存在的文件保留为字面记号
pub fn expand_plane_tokens<S: AsRef<str>>(tokens: &[S], dir: &Path) -> Result<Vec<String>> {
    let mut expanded = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        let path = dir.join(token);

        if token.ends_with(".txt") && path.is_file() {
            let content = fs::read_to_string(&path).map_err(|e| VestaError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;
            expanded.extend(content.split_whitespace().map(str::to_string));
        } else {
            expanded.push(token.to_string());
        }
    }

    Ok(expanded)
}

/// 展开并解析全部晶面记号
pub fn parse_planes<S: AsRef<str>>(tokens: &[S], dir: &Path) -> Result<Vec<PlaneSpec>> {
    expand_plane_tokens(tokens, dir)?
        .iter()
        .map(|t| PlaneSpec::parse(t))
        .collect()
}
