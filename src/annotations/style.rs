//! # 显示样式 (STYLE)
//!
//! 原子半径模式与矢量缩放等样式选项。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`、`vesta/blocks.rs` 使用
//! - 使用 `vesta/tables.rs` 的样式字面量

use crate::error::{Result, VestaError};
use crate::vesta::tables::{ATOMS_ATOMIC, ATOMS_IONIC, ATOMS_VDW};

use std::str::FromStr;

/// 原子半径模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusMode {
    #[default]
    Atomic,
    Ionic,
    Vdw,
}

impl RadiusMode {
    /// ATOMS 行参数
    pub fn vesta_option(&self) -> &'static str {
        match self {
            RadiusMode::Atomic => ATOMS_ATOMIC,
            RadiusMode::Ionic => ATOMS_IONIC,
            RadiusMode::Vdw => ATOMS_VDW,
        }
    }
}

impl FromStr for RadiusMode {
    type Err = VestaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(RadiusMode::Atomic),
            "ionic" => Ok(RadiusMode::Ionic),
            "vdw" => Ok(RadiusMode::Vdw),
            _ => Err(VestaError::ValidationError(format!(
                "unknown atom radius mode '{}' (choose one of atomic, ionic, vdw)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for RadiusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadiusMode::Atomic => write!(f, "atomic"),
            RadiusMode::Ionic => write!(f, "ionic"),
            RadiusMode::Vdw => write!(f, "vdw"),
        }
    }
}

/// STYLE 块选项
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOptions {
    /// 矢量缩放因子 (VECTS)
    pub amplitude: f64,
    pub radius: RadiusMode,
    /// 晶胞边框加粗 (UCOLP)
    pub bold_cell: bool,
}

impl StyleOptions {
    pub fn new(amplitude: f64, radius: RadiusMode) -> Self {
        StyleOptions {
            amplitude,
            radius,
            bold_cell: true,
        }
    }
}

/// 以每个位点的特征长度 (V/N)^(1/3) 缩放用户给出的振幅
pub fn scaled_amplitude(amplitude: f64, volume: f64, num_sites: usize) -> f64 {
    if num_sites == 0 {
        return amplitude;
    }
    amplitude * (volume / num_sites as f64).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_mode_from_str() {
        assert_eq!("atomic".parse::<RadiusMode>().unwrap(), RadiusMode::Atomic);
        assert_eq!("Ionic".parse::<RadiusMode>().unwrap(), RadiusMode::Ionic);
        assert_eq!("VDW".parse::<RadiusMode>().unwrap(), RadiusMode::Vdw);
    }

    #[test]
    fn test_radius_mode_unknown() {
        assert!(matches!(
            "covalent".parse::<RadiusMode>(),
            Err(VestaError::ValidationError(_))
        ));
    }

    #[test]
    fn test_radius_mode_display_parses_back() {
        for mode in [RadiusMode::Atomic, RadiusMode::Ionic, RadiusMode::Vdw] {
            assert_eq!(mode.to_string().parse::<RadiusMode>().unwrap(), mode);
        }
        assert_eq!(RadiusMode::Vdw.to_string(), "vdw");
    }

    #[test]
    fn test_radius_mode_options() {
        assert_eq!(RadiusMode::Atomic.vesta_option(), "0  0  1");
        assert_eq!(RadiusMode::Ionic.vesta_option(), "1  0  1");
        assert_eq!(RadiusMode::Vdw.vesta_option(), "2  0  1");
    }

    #[test]
    fn test_scaled_amplitude() {
        assert!((scaled_amplitude(2.0, 40.0, 5) - 4.0).abs() < 1e-12);
        assert_eq!(scaled_amplitude(1.5, 10.0, 0), 1.5);
    }
}
