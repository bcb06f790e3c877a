//! ASCII STL parsing.
//!
//! Reads back the format produced by [`write_ascii_stl`](crate::write_ascii_stl),
//! keeping stored normals as-is. Parsing is strict about block structure:
//! each facet needs a normal, exactly three vertices and matching
//! `endloop`/`endfacet` lines, and the solid must end with `endsolid`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hueforge_math::{Point3, Vec3};
use hueforge_mesh::{Facet, FacetMesh};

use crate::error::{Result, StlError};

/// A solid read from ASCII STL.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSolid {
    /// Name after the `solid` keyword (may be empty).
    pub name: String,
    /// Facets in file order.
    pub mesh: FacetMesh,
}

/// Load an ASCII STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid ASCII STL.
pub fn load_ascii_stl<P: AsRef<Path>>(path: P) -> Result<ParsedSolid> {
    let file = File::open(path)?;
    parse_ascii_stl(BufReader::new(file))
}

/// Parse an ASCII STL solid from `reader`.
///
/// # Errors
///
/// Returns [`StlError::InvalidContent`] for structural problems and
/// [`StlError::ParseFloat`] for malformed numbers.
pub fn parse_ascii_stl<R: BufRead>(reader: R) -> Result<ParsedSolid> {
    let mut name: Option<String> = None;
    let mut mesh = FacetMesh::new();
    let mut normal: Option<Vec3> = None;
    let mut in_loop = false;
    let mut vertices: Vec<Point3> = Vec::with_capacity(3);
    let mut lineno = 0;

    for line in reader.lines() {
        let line = line?;
        lineno += 1;
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        if name.is_none() {
            if keyword != "solid" {
                return Err(StlError::invalid_content(lineno, "expected 'solid'"));
            }
            name = Some(trimmed["solid".len()..].trim().to_string());
            continue;
        }

        match keyword {
            "facet" => {
                if normal.is_some() {
                    return Err(StlError::invalid_content(lineno, "facet inside facet"));
                }
                if parts.next() != Some("normal") {
                    return Err(StlError::invalid_content(lineno, "expected 'facet normal'"));
                }
                let [x, y, z] = parse_xyz(parts, lineno)?;
                normal = Some(Vec3::new(x, y, z));
            }
            "outer" => {
                if normal.is_none() || in_loop || !vertices.is_empty() {
                    return Err(StlError::invalid_content(lineno, "unexpected 'outer loop'"));
                }
                if parts.next() != Some("loop") {
                    return Err(StlError::invalid_content(lineno, "expected 'outer loop'"));
                }
                in_loop = true;
            }
            "vertex" => {
                if !in_loop {
                    return Err(StlError::invalid_content(lineno, "vertex outside loop"));
                }
                if vertices.len() == 3 {
                    return Err(StlError::invalid_content(lineno, "more than three vertices"));
                }
                let [x, y, z] = parse_xyz(parts, lineno)?;
                vertices.push(Point3::new(x, y, z));
            }
            "endloop" => {
                if !in_loop || vertices.len() != 3 {
                    return Err(StlError::invalid_content(
                        lineno,
                        format!("loop closed with {} vertices", vertices.len()),
                    ));
                }
                in_loop = false;
            }
            "endfacet" => {
                let Some(n) = normal.take() else {
                    return Err(StlError::invalid_content(lineno, "unexpected 'endfacet'"));
                };
                if in_loop || vertices.len() != 3 {
                    return Err(StlError::invalid_content(lineno, "facet closed before its loop"));
                }
                mesh.push(Facet::with_normal(n, [vertices[0], vertices[1], vertices[2]]));
                vertices.clear();
            }
            "endsolid" => {
                if normal.is_some() {
                    return Err(StlError::invalid_content(lineno, "solid closed inside facet"));
                }
                return Ok(ParsedSolid {
                    name: name.unwrap_or_default(),
                    mesh,
                });
            }
            other => {
                return Err(StlError::invalid_content(
                    lineno,
                    format!("unknown keyword '{other}'"),
                ));
            }
        }
    }

    Err(StlError::invalid_content(lineno, "missing 'endsolid'"))
}

fn parse_xyz<'a>(mut parts: impl Iterator<Item = &'a str>, line: usize) -> Result<[f64; 3]> {
    let mut out = [0.0; 3];
    for slot in &mut out {
        let token = parts
            .next()
            .ok_or_else(|| StlError::invalid_content(line, "expected three numbers"))?;
        *slot = token.parse()?;
    }
    if parts.next().is_some() {
        return Err(StlError::invalid_content(line, "trailing values"));
    }
    Ok(out)
}
