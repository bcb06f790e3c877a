//! hueforge: height maps to printable reliefs
//!
//! Turns a grid of normalized heights into a closed solid (top surface,
//! flat base, side walls) and writes it as ASCII STL.
//!
//! # Example
//!
//! ```rust,no_run
//! use hueforge::{export_watertight_stl, HeightField, ReliefParams, DEFAULT_SOLID_NAME};
//!
//! let field = HeightField::from_fn(64, 64, |i, j| ((i + j) % 8) as f64 / 7.0).unwrap();
//! let mesh = export_watertight_stl(&field, &ReliefParams::default(), DEFAULT_SOLID_NAME, "relief.stl")
//!     .unwrap();
//! println!("{} facets", mesh.len());
//! ```

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use hueforge_math::{triangle_normal, Bounds3, Point3, Vec3};
pub use hueforge_mesh::{
    build_watertight_mesh, expected_facet_count, perimeter_indices, Facet, FacetMesh,
    HeightField, MeshError, ReliefParams,
};
pub use hueforge_stl::{load_ascii_stl, parse_ascii_stl, ParsedSolid, StlError};

/// Solid name used when the caller does not choose one.
pub const DEFAULT_SOLID_NAME: &str = "hueforge_model";

/// Failure while building or writing a relief.
#[derive(Error, Debug)]
pub enum HueforgeError {
    /// Invalid height field or parameters.
    #[error(transparent)]
    Mesh(#[from] MeshError),
    /// STL output failed.
    #[error(transparent)]
    Stl(#[from] StlError),
}

/// Unit normal of triangle `(a, b, c)`; zero for collinear points.
pub fn normal(a: &Point3, b: &Point3, c: &Point3) -> Vec3 {
    triangle_normal(a, b, c)
}

/// Build the solid for `field` and stream it as ASCII STL to `writer`.
///
/// Returns the mesh that was written.
pub fn write_watertight_stl<W: Write>(
    field: &HeightField,
    params: &ReliefParams,
    solid_name: &str,
    writer: W,
) -> Result<FacetMesh, HueforgeError> {
    let mesh = build_watertight_mesh(field, params)?;
    hueforge_stl::write_ascii_stl(&mesh, solid_name, writer)?;
    Ok(mesh)
}

/// Build the solid for `field` and publish it as ASCII STL at `path`.
///
/// The file appears only once fully written; on error nothing is left at
/// `path` (an existing file there is kept as it was).
pub fn export_watertight_stl(
    field: &HeightField,
    params: &ReliefParams,
    solid_name: &str,
    path: impl AsRef<Path>,
) -> Result<FacetMesh, HueforgeError> {
    let path = path.as_ref();
    let mesh = build_watertight_mesh(field, params)?;
    hueforge_stl::save_ascii_stl(&mesh, solid_name, path)?;

    if let Some(b) = mesh.bounds() {
        let size = b.size();
        info!(
            "Exported {}x{} relief as {:.2} x {:.2} x {:.2} mm",
            field.cols(),
            field.rows(),
            size.x,
            size.y,
            size.z
        );
    }
    Ok(mesh)
}
