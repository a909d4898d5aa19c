//! Greedy selection of the diagonals that actually get removed.

use super::edges::{EdgeIndex, UniqueEdge};
use crate::float_types::Real;
use log::debug;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of [`refine_unique_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refinement {
    /// Interior edges both of whose triangles nominated them
    pub candidates: usize,
    /// Candidates accepted as quad diagonals
    pub accepted: usize,
}

/// Worst |cos| over the four interior angles of the quad around `edge`.
///
/// 0 for a rectangle, approaching 1 as the quad degenerates. Corners with a
/// zero-length side are skipped.
pub fn quad_max_cosine(positions: &[Point3<Real>], edge: &UniqueEdge) -> Real {
    let corners = edge.quad_loop().map(|v| positions[v as usize]);

    let mut max_angle: Real = 0.0;
    for j in 0..4 {
        let e0 = corners[j] - corners[(j + 1) % 4];
        let e1 = corners[(j + 1) % 4] - corners[(j + 2) % 4];

        let denominator = e0.norm() * e1.norm();
        if denominator != 0.0 {
            max_angle = max_angle.max(e0.dot(&e1).abs() / denominator);
        }
    }
    max_angle
}

fn score(positions: &[Point3<Real>], edge: &mut UniqueEdge) {
    edge.max_angle = if edge.has_two_triangles() {
        quad_max_cosine(positions, edge)
    } else {
        0.0
    };
}

/// Pick a conflict-free set of quad diagonals, best shaped quads first.
///
/// On entry `is_quad_diagonal` marks the candidates found while building the
/// edge table. On exit it marks exactly the accepted diagonals: no side of an
/// accepted quad is itself an accepted diagonal, so the quads never overlap,
/// and no accepted quad has `max_angle > max_quad_cosine`.
pub fn refine_unique_edges(
    edges: &mut [UniqueEdge],
    positions: &[Point3<Real>],
    index: &EdgeIndex,
    max_quad_cosine: Real,
) -> Refinement {
    #[cfg(feature = "parallel")]
    edges.par_iter_mut().for_each(|edge| score(positions, edge));

    #[cfg(not(feature = "parallel"))]
    edges.iter_mut().for_each(|edge| score(positions, edge));

    let mut candidates: Vec<usize> = edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| edge.has_two_triangles() && edge.is_quad_diagonal)
        .map(|(i, _)| i)
        .collect();

    // from here on the flag means "accepted"
    for edge in edges.iter_mut() {
        edge.is_quad_diagonal = false;
    }

    // stable, so equal scores keep edge order
    candidates.sort_by(|&a, &b| edges[a].max_angle.total_cmp(&edges[b].max_angle));

    let mut accepted = 0;
    for &i in &candidates {
        // sorted ascending, everything after this is worse
        if edges[i].max_angle > max_quad_cosine {
            break;
        }

        let corners = edges[i].quad_loop();
        let all_visible = (0..4).all(|j| {
            let side = index.find(edges, corners[j], corners[(j + 1) % 4]);
            !edges[side].is_quad_diagonal
        });

        if all_visible {
            edges[i].is_quad_diagonal = true;
            accepted += 1;
        }
    }

    debug!(
        "refined {} edges: {} diagonal candidates, {} accepted",
        edges.len(),
        candidates.len(),
        accepted
    );

    Refinement {
        candidates: candidates.len(),
        accepted,
    }
}
