//! # 绘图范围 (BOUND)
//!
//! 解析 `--boundary` 选项并计算以指定原子为中心的平移量。
//!
//! ## 选项格式
//! ```text
//! "0 2 0 2 0 2"   # a_min a_max b_min b_max c_min c_max
//! "1/2"           # 基准范围乘以比例因子
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`、`vesta/blocks.rs` 使用

use crate::error::{Result, VestaError};

/// 绘图范围 (a_min, a_max, b_min, b_max, c_min, c_max)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryBox([f64; 6]);

impl Default for BoundaryBox {
    fn default() -> Self {
        BoundaryBox::new([0.0, 1.0, 0.0, 1.0, 0.0, 1.0])
    }
}

impl BoundaryBox {
    pub fn new(values: [f64; 6]) -> Self {
        BoundaryBox(values)
    }

    /// 从任意长度的切片构造，长度必须为 6
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let values: [f64; 6] = values.try_into().map_err(|_| {
            VestaError::ValidationError(format!(
                "length of boundary must be 6, got {}",
                values.len()
            ))
        })?;
        Ok(BoundaryBox::new(values))
    }

    pub fn values(&self) -> [f64; 6] {
        self.0
    }

    /// 范围的几何中心
    pub fn center(&self) -> [f64; 3] {
        let v = self.0;
        [(v[0] + v[1]) / 2.0, (v[2] + v[3]) / 2.0, (v[4] + v[5]) / 2.0]
    }

    pub fn scaled(&self, factor: f64) -> Self {
        BoundaryBox(self.0.map(|x| x * factor))
    }

    pub fn shifted(&self, shift: [f64; 6]) -> Self {
        let mut values = self.0;
        for (v, s) in values.iter_mut().zip(shift.iter()) {
            *v += s;
        }
        BoundaryBox(values)
    }
}

/// 使 `atom` 位于范围中心所需的平移量，每个轴的 min/max 平移相同
pub fn centering_shift(atom: [f64; 3], boundary: &BoundaryBox) -> [f64; 6] {
    let center = boundary.center();
    let s = [atom[0] - center[0], atom[1] - center[1], atom[2] - center[2]];
    [s[0], s[0], s[1], s[1], s[2], s[2]]
}

/// 解析 `--boundary` 选项
pub fn parse_boundary(text: &str, base: &BoundaryBox) -> Result<BoundaryBox> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.len() {
        6 => {
            let values = tokens
                .iter()
                .map(|t| parse_scale(t, text))
                .collect::<Result<Vec<f64>>>()?;
            BoundaryBox::from_slice(&values)
        }
        1 => Ok(base.scaled(parse_scale(tokens[0], text)?)),
        n => Err(VestaError::ParseError {
            format: "boundary option".to_string(),
            path: text.to_string(),
            reason: format!("expected 6 values or a single scale factor, got {} tokens", n),
        }),
    }
}

/// 解析实数或分数 ("0.5", "-1", "1/2")
fn parse_scale(token: &str, text: &str) -> Result<f64> {
    let invalid = || VestaError::ParseError {
        format: "boundary option".to_string(),
        path: text.to_string(),
        reason: format!("'{}' is not a number or fraction", token),
    };

    match token.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().map_err(|_| invalid())?;
            let den: f64 = den.trim().parse().map_err(|_| invalid())?;
            if den == 0.0 {
                return Err(invalid());
            }
            Ok(num / den)
        }
        None => token.parse().map_err(|_| invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boundary_fraction() {
        let boundary = parse_boundary("1/2", &BoundaryBox::default()).unwrap();
        assert_eq!(boundary.values(), [0.0, 0.5, 0.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_parse_boundary_six_values() {
        let boundary = parse_boundary("0 2 0 2 0 2", &BoundaryBox::default()).unwrap();
        assert_eq!(boundary.values(), [0.0, 2.0, 0.0, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_parse_boundary_custom_base() {
        let base = BoundaryBox::new([-1.0, 1.0, -1.0, 1.0, 0.0, 1.0]);
        let boundary = parse_boundary("2", &base).unwrap();
        assert_eq!(boundary.values(), [-2.0, 2.0, -2.0, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_parse_boundary_wrong_token_count() {
        let result = parse_boundary("0 1 0 1", &BoundaryBox::default());
        assert!(matches!(result, Err(VestaError::ParseError { .. })));
    }

    #[test]
    fn test_parse_boundary_bad_number() {
        for text in ["0 1 0 1 0 x", "1/0", "half"] {
            assert!(matches!(
                parse_boundary(text, &BoundaryBox::default()),
                Err(VestaError::ParseError { .. })
            ));
        }
    }

    #[test]
    fn test_boundary_from_slice_validates_length() {
        assert!(BoundaryBox::from_slice(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0]).is_ok());
        assert!(matches!(
            BoundaryBox::from_slice(&[0.0, 1.0]),
            Err(VestaError::ValidationError(_))
        ));
    }

    #[test]
    fn test_centering_shift() {
        let shift = centering_shift([0.25, 0.25, 0.25], &BoundaryBox::new([0.0, 2.0, 0.0, 2.0, 0.0, 2.0]));
        assert_eq!(shift, [-0.75, -0.75, -0.75, -0.75, -0.75, -0.75]);
    }

    #[test]
    fn test_centering_moves_center_to_atom() {
        let boxes = [
            BoundaryBox::default(),
            BoundaryBox::new([-0.5, 0.5, 0.0, 2.0, 1.0, 1.5]),
            BoundaryBox::new([0.0, 3.0, -1.0, 1.0, -2.0, 0.0]),
        ];
        let atoms = [[0.0, 0.0, 0.0], [0.3, 0.7, 0.1], [1.2, -0.4, 0.5]];

        for boundary in &boxes {
            for atom in &atoms {
                let centered = boundary.shifted(centering_shift(*atom, boundary));
                let center = centered.center();
                for k in 0..3 {
                    assert!((center[k] - atom[k]).abs() < 1e-12);
                }
            }
        }
    }
}
