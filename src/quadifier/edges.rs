//! Canonical, deduplicated edge table built from a triangle list.
//!
//! Every triangle contributes three [`UniqueEdge`] records. After sorting by
//! `(vertex0, vertex1)` the records of one undirected edge sit next to each
//! other and are merged into a single record that remembers the apex of the
//! first triangle (`vertex2`) and, for interior edges, of the second (`vertex3`).
//! The resulting table stays sorted so edges can be found by binary search.

use crate::float_types::Real;
use nalgebra::Point3;
use std::cmp::Ordering;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `vertex3` of an edge that does not have exactly two triangles.
pub const NO_VERTEX: u32 = u32::MAX;

/// One undirected mesh edge.
///
/// Equality and ordering only look at `(vertex0, vertex1)`.
#[derive(Debug, Clone, Copy)]
pub struct UniqueEdge {
    /// Smaller endpoint
    pub vertex0: u32,
    /// Larger endpoint
    pub vertex1: u32,
    /// Apex of the first triangle owning this edge
    pub vertex2: u32,
    /// Apex of the second triangle, or [`NO_VERTEX`]
    pub vertex3: u32,
    /// Worst |cos| of the interior angles of the quad around this edge
    pub max_angle: Real,
    /// Candidate after canonicalization, accepted diagonal after refinement
    pub is_quad_diagonal: bool,
    /// Reserved, never set by the quadifier
    pub is_used: bool,
}

impl UniqueEdge {
    pub fn new(a: u32, b: u32, apex: u32) -> Self {
        UniqueEdge {
            vertex0: a.min(b),
            vertex1: a.max(b),
            vertex2: apex,
            vertex3: NO_VERTEX,
            max_angle: 0.0,
            is_quad_diagonal: false,
            is_used: false,
        }
    }

    /// The canonical `(min, max)` endpoint pair.
    #[inline]
    pub const fn key(&self) -> (u32, u32) {
        (self.vertex0, self.vertex1)
    }

    /// Whether exactly two triangles share this edge.
    #[inline]
    pub const fn has_two_triangles(&self) -> bool {
        self.vertex3 != NO_VERTEX
    }

    /// Corners of the quad formed by the two triangles, walking around the edge:
    /// `[vertex0, vertex2, vertex1, vertex3]`.
    #[inline]
    pub const fn quad_loop(&self) -> [u32; 4] {
        [self.vertex0, self.vertex2, self.vertex1, self.vertex3]
    }
}

impl PartialEq for UniqueEdge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for UniqueEdge {}

impl PartialOrd for UniqueEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UniqueEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Canonical key for the edge between `a` and `b`.
#[inline]
pub const fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// The three edge records of one triangle.
///
/// The longest edge is flagged as a diagonal candidate when the angle opposite
/// it is close to a right angle, i.e. the triangle looks like half a rectangle
/// split along that edge.
fn triangle_edges(positions: &[Point3<Real>], tri: &[u32], right_angle_cosine: Real) -> [UniqueEdge; 3] {
    let mut edges = [
        UniqueEdge::new(tri[0], tri[1], tri[2]),
        UniqueEdge::new(tri[1], tri[2], tri[0]),
        UniqueEdge::new(tri[0], tri[2], tri[1]),
    ];

    let mut lengths = [0.0; 3];
    let mut cosines = [0.0; 3];
    for (j, edge) in edges.iter().enumerate() {
        let p0 = positions[edge.vertex0 as usize];
        let p1 = positions[edge.vertex1 as usize];
        let apex = positions[edge.vertex2 as usize];

        lengths[j] = (p0 - p1).norm();
        let v1 = apex - p0;
        let v2 = apex - p1;
        cosines[j] = v1.dot(&v2).abs() / (v1.norm() * v2.norm());
    }

    let mut longest = 0;
    for j in 1..3 {
        if lengths[j] > lengths[longest] {
            longest = j;
        }
    }

    // NaN from a degenerate triangle never passes
    if cosines[longest] < right_angle_cosine {
        edges[longest].is_quad_diagonal = true;
    }

    edges
}

/// Merge one run of equal records into a single edge.
fn merge_run(run: &[UniqueEdge]) -> UniqueEdge {
    let mut merged = run[0];
    if run.len() == 1 && merged.has_two_triangles() {
        // already merged
        return merged;
    }
    if run.len() == 2 {
        merged.vertex3 = run[1].vertex2;
        merged.is_quad_diagonal &= run[1].is_quad_diagonal;
    } else {
        // boundary or non-manifold
        merged.is_quad_diagonal = false;
    }
    merged
}

/// Sort `edges` by `(vertex0, vertex1)` and collapse runs of equal records.
///
/// The sort is stable, so `vertex2` of a merged record is the apex of the
/// earliest triangle. Running this on an already canonical table returns it
/// unchanged, flags and scores included.
pub fn canonicalize(edges: &mut Vec<UniqueEdge>) {
    edges.sort();
    let merged: Vec<UniqueEdge> = edges.chunk_by(|a, b| a == b).map(merge_run).collect();
    *edges = merged;
}

/// Build the canonical edge table of a flat triangle list.
pub fn compute_unique_edges(
    positions: &[Point3<Real>],
    triangles: &[u32],
    right_angle_cosine: Real,
) -> Vec<UniqueEdge> {
    #[cfg(feature = "parallel")]
    let mut edges: Vec<UniqueEdge> = triangles
        .par_chunks_exact(3)
        .flat_map_iter(|tri| triangle_edges(positions, tri, right_angle_cosine))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut edges: Vec<UniqueEdge> = triangles
        .chunks_exact(3)
        .flat_map(|tri| triangle_edges(positions, tri, right_angle_cosine))
        .collect();

    canonicalize(&mut edges);
    edges
}

/// Binary search for the edge between `a` and `b`.
///
/// Returns the insertion point, which is the edge's position when it exists.
pub fn find_unique_edge(edges: &[UniqueEdge], a: u32, b: u32) -> usize {
    let key = edge_key(a, b);
    edges.partition_point(|edge| edge.key() < key)
}

/// Lookup from an endpoint pair to a position in a canonical edge table.
///
/// Binary search by default; with the `hashmap` feature the positions are
/// hashed once up front.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    #[cfg(feature = "hashmap")]
    positions: HashMap<(u32, u32), usize>,
}

impl EdgeIndex {
    #[cfg_attr(not(feature = "hashmap"), allow(unused_variables))]
    pub fn new(edges: &[UniqueEdge]) -> Self {
        #[cfg(feature = "hashmap")]
        {
            EdgeIndex {
                positions: edges.iter().enumerate().map(|(i, edge)| (edge.key(), i)).collect(),
            }
        }

        #[cfg(not(feature = "hashmap"))]
        {
            EdgeIndex {}
        }
    }

    /// Position of the edge between `a` and `b` in `edges`.
    ///
    /// The edge must exist; a miss means the table was not built from the
    /// triangles being looked up.
    #[inline]
    pub fn find(&self, edges: &[UniqueEdge], a: u32, b: u32) -> usize {
        #[cfg(feature = "hashmap")]
        let position = match self.positions.get(&edge_key(a, b)) {
            Some(&position) => position,
            None => find_unique_edge(edges, a, b),
        };

        #[cfg(not(feature = "hashmap"))]
        let position = find_unique_edge(edges, a, b);

        debug_assert!(
            position < edges.len() && edges[position].key() == edge_key(a, b),
            "edge ({a}, {b}) is missing from the edge table"
        );
        position
    }
}
