//! `Quadifier`: merges pairs of near-right triangles into quads
//!
//! The pipeline runs four stages, each to completion before the next:
//!
//! 1. [`extract`]: copy the descriptor's strided buffers into flat arrays
//! 2. [`edges`]: build the sorted, deduplicated edge table and nominate the
//!    hypotenuse of every near-right triangle as a diagonal candidate
//! 3. [`refine`]: rank the candidates by how square their quad is and greedily
//!    accept those whose sides are not already accepted diagonals
//! 4. [`build`]: pair up the two triangles around every accepted diagonal
//!    and emit the quad, keeping the rest as triangles
//!
//! All scratch state lives on the stack of [`Quadifier::quadify`]; only the
//! output buffers are kept.

use crate::descriptor::{BoundedData, MeshDescriptor};
use crate::errors::QuadifyResult;
use crate::params::QuadifierParams;
use crate::result::QuadifyStats;
use log::info;

pub mod build;
pub mod edges;
pub(crate) mod extract;
pub mod refine;

use edges::{EdgeIndex, compute_unique_edges};
use extract::{Extracted, extract};

/// Converts triangle meshes into mixed triangle/quad meshes.
///
/// A `Quadifier` owns the output of its last [`quadify`](Self::quadify) call,
/// exposed as a 32-bit [`MeshDescriptor`] through [`descriptor`](Self::descriptor).
#[derive(Debug, Clone, Default)]
pub struct Quadifier {
    params: QuadifierParams,
    points: Vec<[f32; 3]>,
    inv_masses: Vec<f32>,
    triangles: Vec<u32>,
    quads: Vec<u32>,
    stats: QuadifyStats,
}

impl Quadifier {
    /// A quadifier with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: QuadifierParams) -> Self {
        Quadifier {
            params,
            ..Default::default()
        }
    }

    pub const fn params(&self) -> &QuadifierParams {
        &self.params
    }

    /// Quadify `desc`, replacing the output of any previous call.
    ///
    /// Fails only if `desc` does not pass [`MeshDescriptor::validate`]; the
    /// previous output is kept in that case. Every valid mesh quadifies
    /// successfully, possibly into zero quads.
    pub fn quadify(&mut self, desc: &MeshDescriptor) -> QuadifyResult<()> {
        desc.validate()?;

        let Extracted {
            points,
            positions,
            inv_masses,
            mut triangles,
            mut quads,
        } = extract(desc);

        let input_triangles = triangles.len() / 3;
        let input_quads = quads.len() / 4;

        let mut edges = compute_unique_edges(&positions, &triangles, self.params.right_angle_cosine());
        let index = EdgeIndex::new(&edges);
        let refinement = refine::refine_unique_edges(
            &mut edges,
            &positions,
            &index,
            self.params.max_quad_cosine,
        );
        let quads_created = build::quadify_triangles(&edges, &index, &mut triangles, &mut quads);

        self.stats = QuadifyStats {
            input_triangles,
            input_quads,
            diagonal_candidates: refinement.candidates,
            accepted_diagonals: refinement.accepted,
            quads_created,
            remaining_triangles: triangles.len() / 3,
        };
        info!("{}", self.stats);

        self.points = points;
        self.inv_masses = inv_masses;
        self.triangles = triangles;
        self.quads = quads;
        Ok(())
    }

    /// Descriptor over the owned output buffers.
    ///
    /// Indices are always 32 bits wide; points and inverse masses are the ones
    /// read from the last input.
    pub fn descriptor(&self) -> MeshDescriptor<'_> {
        MeshDescriptor {
            points: BoundedData::from_slice(&self.points),
            inv_masses: BoundedData::from_slice(&self.inv_masses),
            triangles: BoundedData {
                data: bytemuck::cast_slice(&self.triangles),
                stride: 3 * std::mem::size_of::<u32>(),
                count: self.triangle_count(),
            },
            quads: BoundedData {
                data: bytemuck::cast_slice(&self.quads),
                stride: 4 * std::mem::size_of::<u32>(),
                count: self.quad_count(),
            },
            flags: Default::default(),
        }
    }

    /// Flat triangle indices, 3 per triangle.
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Flat quad indices, 4 per quad.
    pub fn quads(&self) -> &[u32] {
        &self.quads
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len() / 4
    }

    pub const fn stats(&self) -> &QuadifyStats {
        &self.stats
    }
}

/// Quadify `desc` with the default thresholds.
pub fn quadify(desc: &MeshDescriptor) -> QuadifyResult<Quadifier> {
    let mut quadifier = Quadifier::new();
    quadifier.quadify(desc)?;
    Ok(quadifier)
}
