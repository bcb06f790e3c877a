#![warn(missing_docs)]

//! ASCII STL output for hueforge facet meshes.
//!
//! [`write_ascii_stl`] streams a [`FacetMesh`](hueforge_mesh::FacetMesh) to
//! any writer; [`save_ascii_stl`] publishes it to a path atomically so a
//! failed export never leaves a truncated file behind. The reader side
//! exists to verify exports and is strict about structure.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Result, StlError};
pub use reader::{load_ascii_stl, parse_ascii_stl, ParsedSolid};
pub use writer::{save_ascii_stl, write_ascii_stl};
