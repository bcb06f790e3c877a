//! ASCII STL serialization.

use std::io::{BufWriter, Write};
use std::path::Path;

use hueforge_mesh::FacetMesh;
use tempfile::Builder;
use tracing::{debug, info};

use crate::error::{Result, StlError};

/// Write `mesh` as an ASCII STL solid named `name`.
///
/// Facets are written in mesh order with no reordering or validation; an
/// empty mesh yields a bare `solid`/`endsolid` pair. Coordinates use the
/// shortest decimal text that parses back to the identical `f64`.
///
/// ```text
/// solid <name>
///  facet normal <nx> <ny> <nz>
///   outer loop
///    vertex <x> <y> <z>
///    vertex <x> <y> <z>
///    vertex <x> <y> <z>
///   endloop
///  endfacet
/// endsolid <name>
/// ```
///
/// # Errors
///
/// Returns [`StlError::InvalidName`] if `name` contains a line break, or
/// [`StlError::Io`] if the writer fails.
pub fn write_ascii_stl<W: Write>(mesh: &FacetMesh, name: &str, mut writer: W) -> Result<()> {
    check_name(name)?;

    writeln!(writer, "solid {name}")?;
    for facet in mesh {
        let n = &facet.normal;
        writeln!(writer, " facet normal {:?} {:?} {:?}", n.x, n.y, n.z)?;
        writeln!(writer, "  outer loop")?;
        for v in &facet.vertices {
            writeln!(writer, "   vertex {:?} {:?} {:?}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "  endloop")?;
        writeln!(writer, " endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;

    Ok(())
}

/// Write `mesh` to `path`, replacing it atomically.
///
/// Output goes to a temp file next to `path` and is renamed over it only
/// after every byte is flushed and synced. On failure the temp file is
/// removed and any existing file at `path` is left untouched.
///
/// A replaced file keeps its permissions. A new file gets the usual
/// `0o666` masked by the process umask.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created or written, or if
/// the final rename fails.
pub fn save_ascii_stl<P: AsRef<Path>>(mesh: &FacetMesh, name: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    check_name(name)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    debug!("Writing {} facets to {}", mesh.len(), tmp.path().display());

    write_ascii_stl(mesh, name, BufWriter::new(&mut tmp))?;
    tmp.as_file().sync_all()?;

    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    tmp.persist(path).map_err(|e| StlError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!("Wrote {} facets to {}", mesh.len(), path.display());
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.contains(['\n', '\r']) {
        return Err(StlError::InvalidName(name.to_string()));
    }
    Ok(())
}
