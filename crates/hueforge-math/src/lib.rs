#![warn(missing_docs)]

//! Math types for the hueforge relief mesher.
//!
//! Thin wrappers around nalgebra providing the point and vector types
//! used for model-space geometry (millimeters), the facet normal kernel,
//! and an axis-aligned bounding box for reporting model extents.

use nalgebra::Vector3;

/// A point in 3D model space (mm).
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Unit normal of the triangle `(a, b, c)` by the right-hand rule.
///
/// Computes `(b - a) × (c - a)` and scales it to unit length. Collinear or
/// coincident points have a zero-length cross product; those return the
/// zero vector instead of failing.
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vec3 {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len == 0.0 {
        Vec3::zeros()
    } else {
        n / len
    }
}

/// Whether `(a, b, c)` spans zero area.
pub fn is_degenerate(a: &Point3, b: &Point3, c: &Point3) -> bool {
    (b - a).cross(&(c - a)).norm() == 0.0
}

/// Axis-aligned bounding box accumulated from points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Bounds3 {
    /// Bounds of a single point.
    pub fn from_point(p: &Point3) -> Self {
        Self { min: *p, max: *p }
    }

    /// Bounds of a set of points, or `None` if the set is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grow to contain `p`.
    pub fn include(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
