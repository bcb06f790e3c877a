//! Side walls joining the top surface boundary to the base.
//!
//! The grid boundary is traced once as a closed loop of `(row, col)`
//! indices. Top and bottom loops are derived from that trace, so they are
//! index-aligned by construction, and each consecutive pair of loop points
//! becomes one wall quad split into two facets.

use hueforge_math::Point3;

use crate::facet::Facet;
use crate::heightfield::HeightField;
use crate::params::ReliefParams;
use crate::surface::top_vertex;

/// Number of boundary grid points: `2·(cols-1) + 2·(rows-1)`.
///
/// # Panics
///
/// Panics if `rows < 2` or `cols < 2`.
pub fn perimeter_len(rows: usize, cols: usize) -> usize {
    assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2, got {rows}x{cols}");
    2 * (cols - 1) + 2 * (rows - 1)
}

/// Boundary grid points as a closed clockwise loop starting at `(0, 0)`.
///
/// Order: top row left to right, right column downward, bottom row right
/// to left, left column upward. Corners appear once; the loop closes
/// implicitly from the last point back to `(0, 0)`.
///
/// # Panics
///
/// Panics if `rows < 2` or `cols < 2`.
pub fn perimeter_indices(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut loop_ = Vec::with_capacity(perimeter_len(rows, cols));

    for j in 0..cols {
        loop_.push((0, j));
    }
    for i in 1..rows {
        loop_.push((i, cols - 1));
    }
    for j in (0..cols - 1).rev() {
        loop_.push((rows - 1, j));
    }
    for i in (1..rows - 1).rev() {
        loop_.push((i, 0));
    }

    loop_
}

/// Wall facets around the whole boundary: `2 · perimeter_len` facets.
///
/// For loop edge `k` with top points `t0, t1` and the base points
/// `b0, b1` directly beneath them, emits `(b0, b1, t1)` then `(b0, t1, t0)`.
pub fn stitch_walls(field: &HeightField, params: &ReliefParams) -> Vec<Facet> {
    let zb = params.base_z();
    let top: Vec<Point3> = perimeter_indices(field.rows(), field.cols())
        .into_iter()
        .map(|(i, j)| top_vertex(field, params, i, j))
        .collect();
    let bottom: Vec<Point3> = top.iter().map(|t| Point3::new(t.x, t.y, zb)).collect();

    let n = top.len();
    let mut facets = Vec::with_capacity(2 * n);
    for k in 0..n {
        let next = (k + 1) % n;
        let (t0, t1) = (top[k], top[next]);
        let (b0, b1) = (bottom[k], bottom[next]);

        facets.push(Facet::new(b0, b1, t1));
        facets.push(Facet::new(b0, t1, t0));
    }
    facets
}
