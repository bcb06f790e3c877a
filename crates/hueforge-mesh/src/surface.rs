//! Top-surface triangulation of a height field.

use hueforge_math::Point3;
use rayon::prelude::*;

use crate::facet::Facet;
use crate::heightfield::HeightField;
use crate::params::ReliefParams;

/// Model-space position of grid point `(row, col)` on the top surface.
pub fn top_vertex(field: &HeightField, params: &ReliefParams, row: usize, col: usize) -> Point3 {
    Point3::new(
        col as f64 * params.scale_xy,
        row as f64 * params.scale_xy,
        field.get(row, col) * params.z_scale,
    )
}

/// Triangulate the top surface: two facets per grid cell.
///
/// Each cell is split along its `v00`–`v11` diagonal into
/// `(v00, v10, v11)` and `(v00, v11, v01)`, where `v10` is one row down.
/// Cells are emitted row-major. Rows are built in parallel and joined in
/// row order, so the result matches a sequential walk facet for facet.
///
/// Returns `2 * (rows - 1) * (cols - 1)` facets.
pub fn triangulate_surface(field: &HeightField, params: &ReliefParams) -> Vec<Facet> {
    let rows: Vec<Vec<Facet>> = (0..field.rows() - 1)
        .into_par_iter()
        .map(|i| triangulate_row(field, params, i))
        .collect();

    let mut facets = Vec::with_capacity(2 * (field.rows() - 1) * (field.cols() - 1));
    for row in rows {
        facets.extend(row);
    }
    facets
}

/// Facets for the cells between grid rows `i` and `i + 1`.
fn triangulate_row(field: &HeightField, params: &ReliefParams, i: usize) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(2 * (field.cols() - 1));
    for j in 0..field.cols() - 1 {
        let v00 = top_vertex(field, params, i, j);
        let v10 = top_vertex(field, params, i + 1, j);
        let v11 = top_vertex(field, params, i + 1, j + 1);
        let v01 = top_vertex(field, params, i, j + 1);

        facets.push(Facet::new(v00, v10, v11));
        facets.push(Facet::new(v00, v11, v01));
    }
    facets
}
