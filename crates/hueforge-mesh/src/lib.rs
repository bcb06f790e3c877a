#![warn(missing_docs)]

//! Height field to watertight triangle solid.
//!
//! Builds a closed solid from a grid of normalized heights in three
//! independent passes, concatenated in this order:
//! 1. the top surface, two facets per grid cell ([`surface`])
//! 2. a flat two-facet base rectangle ([`base`])
//! 3. side walls joining the boundary of the top surface to the base
//!    ([`perimeter`])
//!
//! Every facet carries its own vertex copies and a normal computed from its
//! winding. Normals are not re-oriented: top-surface facets wind toward -Z,
//! base and wall facets wind outward.
//!
//! # Example
//!
//! ```
//! use hueforge_mesh::{build_watertight_mesh, HeightField, ReliefParams};
//!
//! let field = HeightField::from_rows(&[[0.0, 0.0], [0.0, 1.0]]).unwrap();
//! let mesh = build_watertight_mesh(&field, &ReliefParams::new(1.0, 1.0, 1.0)).unwrap();
//! assert_eq!(mesh.len(), 12);
//! ```

pub mod base;
pub mod error;
pub mod facet;
pub mod heightfield;
pub mod params;
pub mod perimeter;
pub mod surface;

pub use base::build_base;
pub use error::{MeshError, Result};
pub use facet::{Facet, FacetMesh};
pub use heightfield::HeightField;
pub use params::ReliefParams;
pub use perimeter::{perimeter_indices, perimeter_len, stitch_walls};
pub use surface::{top_vertex, triangulate_surface};

use tracing::debug;

/// Facet count of the solid for an `rows × cols` field.
///
/// `2·(rows-1)·(cols-1)` top + 2 base + `2·perimeter_len` wall facets.
///
/// # Panics
///
/// Panics if `rows < 2` or `cols < 2`.
pub fn expected_facet_count(rows: usize, cols: usize) -> usize {
    assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2, got {rows}x{cols}");
    2 * (rows - 1) * (cols - 1) + 2 + 2 * perimeter_len(rows, cols)
}

/// Build the closed solid for `field` under `params`.
///
/// Facets are ordered top surface, base, walls. Zero-area facets (for
/// example walls where the top meets a zero-thickness base) keep a zero
/// normal and do not fail the build.
pub fn build_watertight_mesh(field: &HeightField, params: &ReliefParams) -> Result<FacetMesh> {
    params.validate()?;

    let (rows, cols) = (field.rows(), field.cols());
    let mut mesh = FacetMesh::with_capacity(expected_facet_count(rows, cols));

    let top = triangulate_surface(field, params);
    debug!("Top surface: {} facets from {}x{} grid", top.len(), rows, cols);
    mesh.extend(top);

    mesh.extend(build_base(rows, cols, params));

    let walls = stitch_walls(field, params);
    debug!(
        "Side walls: {} facets around {} boundary points",
        walls.len(),
        perimeter_len(rows, cols)
    );
    mesh.extend(walls);

    let degenerate = mesh.degenerate_count();
    if degenerate > 0 {
        debug!("{} degenerate facets written with zero normals", degenerate);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueforge_math::Point3;
    use std::collections::HashMap;

    type Key = [u64; 3];

    fn key(p: &Point3) -> Key {
        // Normalize -0.0 so coincident points hash equal.
        [p.x + 0.0, p.y + 0.0, p.z + 0.0].map(f64::to_bits)
    }

    fn edge_use_counts(mesh: &FacetMesh) -> HashMap<(Key, Key), usize> {
        let mut counts = HashMap::new();
        for f in mesh {
            for e in 0..3 {
                let a = key(&f.vertices[e]);
                let b = key(&f.vertices[(e + 1) % 3]);
                let edge = if a < b { (a, b) } else { (b, a) };
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_facet_count_formula() {
        for (rows, cols) in [(2, 2), (2, 5), (5, 2), (3, 3), (6, 4), (17, 9)] {
            let field = HeightField::from_fn(rows, cols, |i, j| ((i * 7 + j * 3) % 10) as f64 / 10.0)
                .unwrap();
            let mesh = build_watertight_mesh(&field, &ReliefParams::default()).unwrap();
            let expected = 2 * (rows - 1) * (cols - 1) + 2 + 2 * (2 * (cols - 1) + 2 * (rows - 1));
            assert_eq!(mesh.len(), expected, "{rows}x{cols}");
            assert_eq!(mesh.len(), expected_facet_count(rows, cols));
        }
    }

    #[test]
    fn test_minimal_scenario() {
        let field = HeightField::from_rows(&[[0.0, 0.0], [0.0, 1.0]]).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(mesh.len(), 12);

        let top = &mesh.facets[0..2];
        let base = &mesh.facets[2..4];
        let walls = &mesh.facets[4..];
        assert_eq!(walls.len(), 8);

        // Grid point (1, 1) is the raised corner.
        assert!(top
            .iter()
            .flat_map(|f| f.vertices.iter())
            .any(|v| *v == Point3::new(1.0, 1.0, 1.0)));
        assert!(base
            .iter()
            .flat_map(|f| f.vertices.iter())
            .all(|v| v.z == -1.0));
    }

    #[test]
    fn test_minimal_grid_is_edge_manifold() {
        let field = HeightField::from_rows(&[[0.0, 0.3], [0.6, 1.0]]).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(1.0, 2.0, 1.0)).unwrap();
        let counts = edge_use_counts(&mesh);
        for (edge, n) in &counts {
            assert_eq!(*n, 2, "edge {edge:?} used {n} times");
        }
    }

    #[test]
    fn test_top_boundary_edges_shared_with_walls() {
        let field = HeightField::from_fn(4, 5, |i, j| ((i + 2 * j) % 4) as f64 / 4.0).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(1.0, 3.0, 2.0)).unwrap();
        let counts = edge_use_counts(&mesh);

        let params = ReliefParams::new(1.0, 3.0, 2.0);
        let loop_ = perimeter_indices(4, 5);
        for k in 0..loop_.len() {
            let (a, b) = (loop_[k], loop_[(k + 1) % loop_.len()]);
            let ka = key(&top_vertex(&field, &params, a.0, a.1));
            let kb = key(&top_vertex(&field, &params, b.0, b.1));
            let edge = if ka < kb { (ka, kb) } else { (kb, ka) };
            assert_eq!(counts.get(&edge), Some(&2));
        }
    }

    #[test]
    fn test_base_ignores_thickness_sign() {
        let field = HeightField::from_fn(3, 4, |_, _| 0.25).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(0.5, 10.0, -2.0)).unwrap();
        let min_z = mesh.bounds().unwrap().min.z;
        assert_eq!(min_z, -2.0);
        assert!(mesh.facets[2..4]
            .iter()
            .flat_map(|f| f.vertices.iter())
            .all(|v| v.z == -2.0));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let field = HeightField::from_fn(2, 2, |_, _| 0.0).unwrap();
        let err = build_watertight_mesh(&field, &ReliefParams::new(0.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParams(_)));
    }

    #[test]
    fn test_degenerate_facets_do_not_fail() {
        let field = HeightField::from_fn(3, 3, |_, _| 0.0).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(mesh.len(), expected_facet_count(3, 3));
        assert_eq!(mesh.degenerate_count(), 2 * perimeter_len(3, 3));
    }

    #[test]
    fn test_extents() {
        let field = HeightField::from_fn(11, 21, |i, _| if i == 5 { 1.0 } else { 0.0 }).unwrap();
        let mesh = build_watertight_mesh(&field, &ReliefParams::new(0.5, 10.0, 2.0)).unwrap();
        let size = mesh.bounds().unwrap().size();
        assert!((size.x - 10.0).abs() < 1e-12);
        assert!((size.y - 5.0).abs() < 1e-12);
        assert!((size.z - 12.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn test_facet_count_needs_a_cell() {
        expected_facet_count(3, 0);
    }
}
