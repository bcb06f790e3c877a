//! Relief sizing parameters.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// How a height field maps into model space (all lengths in mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliefParams {
    /// Distance between neighboring grid points in X and Y.
    pub scale_xy: f64,
    /// Z height of a sample with value 1.0. Negative values invert the relief.
    pub z_scale: f64,
    /// Thickness of the flat base below z = 0. Sign is ignored.
    pub base_thickness: f64,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            scale_xy: 0.5,
            z_scale: 10.0,
            base_thickness: 2.0,
        }
    }
}

impl ReliefParams {
    /// Create parameters from the three scalars.
    pub fn new(scale_xy: f64, z_scale: f64, base_thickness: f64) -> Self {
        Self {
            scale_xy,
            z_scale,
            base_thickness,
        }
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_xy.is_finite() || self.scale_xy <= 0.0 {
            return Err(MeshError::InvalidParams(format!(
                "scale_xy must be positive and finite, got {}",
                self.scale_xy
            )));
        }
        if !self.z_scale.is_finite() {
            return Err(MeshError::InvalidParams(format!(
                "z_scale must be finite, got {}",
                self.z_scale
            )));
        }
        if !self.base_thickness.is_finite() {
            return Err(MeshError::InvalidParams(format!(
                "base_thickness must be finite, got {}",
                self.base_thickness
            )));
        }
        Ok(())
    }

    /// Z coordinate of the base plane: `-|base_thickness|`.
    pub fn base_z(&self) -> f64 {
        -self.base_thickness.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let p = ReliefParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.base_z(), -2.0);
    }

    #[test]
    fn test_base_z_ignores_sign() {
        assert_eq!(ReliefParams::new(1.0, 1.0, -3.0).base_z(), -3.0);
        assert_eq!(ReliefParams::new(1.0, 1.0, 3.0).base_z(), -3.0);
    }

    #[test]
    fn test_negative_z_scale_allowed() {
        assert!(ReliefParams::new(1.0, -5.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_params() {
        assert!(ReliefParams::new(0.0, 1.0, 1.0).validate().is_err());
        assert!(ReliefParams::new(-1.0, 1.0, 1.0).validate().is_err());
        assert!(ReliefParams::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(ReliefParams::new(1.0, f64::INFINITY, 1.0).validate().is_err());
        assert!(ReliefParams::new(1.0, 1.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let p: ReliefParams = toml::from_str("z_scale = 4.0").unwrap();
        assert_eq!(p.z_scale, 4.0);
        assert_eq!(p.scale_xy, 0.5);
        assert_eq!(p.base_thickness, 2.0);
    }
}
