use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Vector2, Vector3};

use crate::scalar::{EPSILON, SIGMA};

/// A point inside the unit disk together with the density at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: Vector2<f64>,
    pub density: f64,
}

impl Sample {
    /// Builds the sample at radius `r` and angle `theta` around the origin.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let point = Vector2::new(r * theta.cos(), r * theta.sin());
        debug_assert!(point.norm_squared() <= 1.0 + EPSILON);
        Self {
            point,
            density: gaussian_density(point.x, point.y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    pub fn z(&self) -> f64 {
        self.density
    }

    pub fn as_vec3(&self) -> Vector3<f64> {
        Vector3::new(self.point.x, self.point.y, self.density)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_vec3(self.x(), self.y(), self.z()))
    }
}

/// Isotropic 2-D normal density centered at the origin with standard deviation [`SIGMA`].
pub fn gaussian_density(x: f64, y: f64) -> f64 {
    let two_sigma_sq = 2.0 * SIGMA * SIGMA;
    (-(x * x + y * y) / two_sigma_sq).exp() / (PI * two_sigma_sq)
}

pub fn format_vec3(x: f64, y: f64, z: f64) -> String {
    format!("vec3({:6.3}, {:6.3}, {:.3})", x, y, z)
}

pub fn format_scale_factor(factor: f64) -> String {
    format!("scale factor: {:.5}", factor)
}
