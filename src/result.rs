//! Statistics of a quadification run.

/// What one call to [`Quadifier::quadify`](crate::Quadifier::quadify) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadifyStats {
    /// Triangles in the input descriptor
    pub input_triangles: usize,
    /// Quads already present in the input descriptor
    pub input_quads: usize,
    /// Interior edges nominated as diagonals by both of their triangles
    pub diagonal_candidates: usize,
    /// Candidates accepted by the refinement pass
    pub accepted_diagonals: usize,
    /// Quads built from triangle pairs
    pub quads_created: usize,
    /// Triangles left unmerged
    pub remaining_triangles: usize,
}

impl QuadifyStats {
    /// Total quads in the output.
    pub const fn total_quads(&self) -> usize {
        self.input_quads + self.quads_created
    }

    /// Fraction of input triangles that ended up inside a quad.
    pub fn merged_ratio(&self) -> f64 {
        if self.input_triangles == 0 {
            0.0
        } else {
            (2 * self.quads_created) as f64 / self.input_triangles as f64
        }
    }

    pub const fn was_quadified(&self) -> bool {
        self.quads_created > 0
    }
}

impl std::fmt::Display for QuadifyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quadify: {} triangles, {} quads -> {} triangles, {} quads ({:.1}% merged, {}/{} diagonals accepted)",
            self.input_triangles,
            self.input_quads,
            self.remaining_triangles,
            self.total_quads(),
            self.merged_ratio() * 100.0,
            self.accepted_diagonals,
            self.diagonal_candidates
        )
    }
}
