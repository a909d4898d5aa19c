//! Turns accepted diagonals into quads and compacts the leftover triangles.

use super::edges::{EdgeIndex, UniqueEdge};
use log::debug;

/// In-place inclusive prefix sum.
fn prefix_sum(values: &mut [u32]) {
    for i in 1..values.len() {
        values[i] += values[i - 1];
    }
}

/// `(triangle * 3 + slot, edge)` for every side of every triangle.
fn triangle_sides<'a>(
    edges: &'a [UniqueEdge],
    index: &'a EdgeIndex,
    triangles: &'a [u32],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    triangles.chunks_exact(3).enumerate().flat_map(move |(t, tri)| {
        (0..3).map(move |j| (t * 3 + j, index.find(edges, tri[j], tri[(j + 1) % 3])))
    })
}

/// Edge to triangle incidences, grouped per edge by a counting sort.
///
/// `adjacency[offsets[e]..offsets[e + 1]]` holds `triangle * 3 + slot` for every
/// triangle side lying on edge `e`, where side `slot` runs from corner `slot`
/// to corner `(slot + 1) % 3`.
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    pub offsets: Vec<u32>,
    pub adjacency: Vec<u32>,
}

impl EdgeAdjacency {
    pub fn new(edges: &[UniqueEdge], index: &EdgeIndex, triangles: &[u32]) -> Self {
        let mut offsets = vec![0u32; edges.len() + 1];
        for (_, edge) in triangle_sides(edges, index, triangles) {
            offsets[edge] += 1;
        }
        prefix_sum(&mut offsets);

        let mut adjacency = vec![0u32; offsets[edges.len()] as usize];
        for (side, edge) in triangle_sides(edges, index, triangles) {
            offsets[edge] -= 1;
            adjacency[offsets[edge] as usize] = side as u32;
        }

        EdgeAdjacency { offsets, adjacency }
    }

    /// Number of triangle sides on edge `e`.
    pub fn valency(&self, e: usize) -> usize {
        (self.offsets[e + 1] - self.offsets[e]) as usize
    }

    /// The `triangle * 3 + slot` incidences of edge `e`.
    pub fn incident(&self, e: usize) -> &[u32] {
        &self.adjacency[self.offsets[e] as usize..self.offsets[e + 1] as usize]
    }
}

/// Merge the two triangles around every accepted diagonal into a quad.
///
/// Quads are appended to `quads`; `triangles` keeps only the triangles that
/// were not merged, in their original order. Returns the number of quads
/// created.
pub fn quadify_triangles(
    edges: &[UniqueEdge],
    index: &EdgeIndex,
    triangles: &mut Vec<u32>,
    quads: &mut Vec<u32>,
) -> usize {
    let num_triangles = triangles.len() / 3;
    let adjacency = EdgeAdjacency::new(edges, index, triangles);

    let mut consumed = vec![false; num_triangles];
    let mut created = 0;
    for (e, _) in edges.iter().enumerate().filter(|(_, edge)| edge.is_quad_diagonal) {
        // no quads around non-manifold edges
        if adjacency.valency(e) != 2 {
            continue;
        }

        let incident = adjacency.incident(e);
        let (tid0, eid0) = (incident[0] as usize / 3, incident[0] as usize % 3);
        let (tid1, eid1) = (incident[1] as usize / 3, incident[1] as usize % 3);
        let t0 = &triangles[tid0 * 3..tid0 * 3 + 3];
        let t1 = &triangles[tid1 * 3..tid1 * 3 + 3];

        // t0's side runs a -> b, t1 walks it b -> a, so a, apex1, b, apex0
        // keeps the winding of both triangles
        quads.extend_from_slice(&[t0[eid0], t1[(eid1 + 2) % 3], t0[(eid0 + 1) % 3], t0[(eid0 + 2) % 3]]);

        consumed[tid0] = true;
        consumed[tid1] = true;
        created += 1;
    }

    let remaining: Vec<u32> = triangles
        .chunks_exact(3)
        .zip(&consumed)
        .filter(|&(_, &merged)| !merged)
        .flat_map(|(tri, _)| tri.iter().copied())
        .collect();

    debug!(
        "merged {} triangle pairs, {} of {} triangles left",
        created,
        remaining.len() / 3,
        num_triangles
    );

    *triangles = remaining;
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadifier::edges::{compute_unique_edges, find_unique_edge};
    use crate::float_types::Real;
    use nalgebra::Point3;

    fn unit_square() -> (Vec<Point3<Real>>, Vec<u32>) {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        (positions, vec![0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn prefix_sum_is_inclusive() {
        let mut values = [2, 0, 3, 1];
        prefix_sum(&mut values);
        assert_eq!(values, [2, 2, 5, 6]);
    }

    #[test]
    fn adjacency_lists_every_side() {
        let (positions, tris) = unit_square();
        let edges = compute_unique_edges(&positions, &tris, 0.1);
        let index = EdgeIndex::new(&edges);
        let adjacency = EdgeAdjacency::new(&edges, &index, &tris);

        assert_eq!(adjacency.adjacency.len(), 6);
        let diagonal = find_unique_edge(&edges, 0, 2);
        assert_eq!(adjacency.valency(diagonal), 2);
        // triangle 1 side 0 (0 -> 2) lands before triangle 0 side 2 (2 -> 0)
        assert_eq!(adjacency.incident(diagonal), &[3, 2]);

        let side = find_unique_edge(&edges, 0, 1);
        assert_eq!(adjacency.valency(side), 1);
        assert_eq!(adjacency.incident(side), &[0]);
    }

    #[test]
    fn square_becomes_one_quad_with_original_winding() {
        let (positions, mut tris) = unit_square();
        let mut edges = compute_unique_edges(&positions, &tris, 0.1);
        let index = EdgeIndex::new(&edges);
        for edge in edges.iter_mut() {
            edge.is_quad_diagonal = edge.key() == (0, 2);
        }

        let mut quads = Vec::new();
        let created = quadify_triangles(&edges, &index, &mut tris, &mut quads);
        assert_eq!(created, 1);
        assert_eq!(quads, vec![0, 1, 2, 3]);
        assert!(tris.is_empty());
    }

    #[test]
    fn boundary_diagonals_are_skipped() {
        let (positions, mut tris) = unit_square();
        let mut edges = compute_unique_edges(&positions, &tris, 0.1);
        let index = EdgeIndex::new(&edges);
        for edge in edges.iter_mut() {
            edge.is_quad_diagonal = edge.key() == (0, 1);
        }

        let mut quads = vec![9, 9, 9, 9];
        let created = quadify_triangles(&edges, &index, &mut tris, &mut quads);
        assert_eq!(created, 0);
        assert_eq!(quads, vec![9, 9, 9, 9]);
        assert_eq!(tris, vec![0, 1, 2, 0, 2, 3]);
    }
}
