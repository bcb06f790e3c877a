//! Flat bottom rectangle under the relief.

use hueforge_math::Point3;

use crate::facet::Facet;
use crate::params::ReliefParams;

/// The two facets of the base rectangle.
///
/// The rectangle spans `[0, (cols-1)·scale_xy] × [0, (rows-1)·scale_xy]`
/// at `z = -|base_thickness|`, wound `(bl, tr, br)` and `(bl, tl, tr)` so
/// both normals face -Z.
///
/// # Panics
///
/// Panics if `rows < 2` or `cols < 2`.
pub fn build_base(rows: usize, cols: usize, params: &ReliefParams) -> [Facet; 2] {
    assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2, got {rows}x{cols}");
    let x1 = (cols - 1) as f64 * params.scale_xy;
    let y1 = (rows - 1) as f64 * params.scale_xy;
    let zb = params.base_z();

    let bl = Point3::new(0.0, 0.0, zb);
    let br = Point3::new(x1, 0.0, zb);
    let tr = Point3::new(x1, y1, zb);
    let tl = Point3::new(0.0, y1, zb);

    [Facet::new(bl, tr, br), Facet::new(bl, tl, tr)]
}
