//! Facet and facet-list types.

use hueforge_math::{is_degenerate, triangle_normal, Bounds3, Point3, Vec3};

/// One triangle with its own vertex copies and a precomputed normal.
///
/// The normal always follows the vertex winding; it is never re-oriented
/// against the enclosing solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    /// Unit normal, or zero for a degenerate triangle.
    pub normal: Vec3,
    /// Vertices in winding order.
    pub vertices: [Point3; 3],
}

impl Facet {
    /// Create a facet, computing its normal from the winding of `a, b, c`.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            normal: triangle_normal(&a, &b, &c),
            vertices: [a, b, c],
        }
    }

    /// Create a facet with a normal supplied by the caller.
    pub fn with_normal(normal: Vec3, vertices: [Point3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Whether this facet has zero area.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = &self.vertices;
        is_degenerate(a, b, c)
    }
}

/// An ordered list of facets.
///
/// Order carries no geometric meaning but is preserved so serialized output
/// is byte-reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetMesh {
    /// Facets in emission order.
    pub facets: Vec<Facet>,
}

impl FacetMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for `n` facets.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            facets: Vec::with_capacity(n),
        }
    }

    /// Number of facets.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Whether the mesh has no facets.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Append one facet.
    pub fn push(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Append facets in iteration order.
    pub fn extend(&mut self, facets: impl IntoIterator<Item = Facet>) {
        self.facets.extend(facets);
    }

    /// Iterate over facets.
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Number of zero-area facets.
    pub fn degenerate_count(&self) -> usize {
        self.facets.iter().filter(|f| f.is_degenerate()).count()
    }

    /// Bounding box of all vertices, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.facets.iter().flat_map(|f| f.vertices.iter()))
    }
}

impl From<Vec<Facet>> for FacetMesh {
    fn from(facets: Vec<Facet>) -> Self {
        Self { facets }
    }
}

impl<'a> IntoIterator for &'a FacetMesh {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}
