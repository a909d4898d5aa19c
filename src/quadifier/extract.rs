//! Flattens a descriptor's strided buffers into owned arrays.

use crate::descriptor::{BoundedData, MeshDescriptor};
use crate::float_types::Real;
use nalgebra::Point3;

/// Buffers copied out of a [`MeshDescriptor`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Extracted {
    pub points: Vec<[f32; 3]>,
    pub positions: Vec<Point3<Real>>,
    pub inv_masses: Vec<f32>,
    pub triangles: Vec<u32>,
    pub quads: Vec<u32>,
}

/// Copy `corners` indices per face, widening 16-bit indices to 32 bits.
fn copy_indices(desc: &MeshDescriptor, faces: &BoundedData, corners: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(faces.count * corners);
    for i in 0..faces.count {
        for j in 0..corners {
            indices.push(desc.index(faces, i, j));
        }
    }
    indices
}

/// Copy points, inverse masses, triangles and quads out of `desc`.
///
/// `desc` must have passed [`MeshDescriptor::validate`].
pub(crate) fn extract(desc: &MeshDescriptor) -> Extracted {
    let points: Vec<[f32; 3]> = (0..desc.points.count)
        .map(|i| desc.points.read::<[f32; 3]>(i, 0))
        .collect();

    #[allow(clippy::unnecessary_cast)]
    let positions = points
        .iter()
        .map(|p| Point3::new(p[0] as Real, p[1] as Real, p[2] as Real))
        .collect();

    let inv_masses = (0..desc.inv_masses.count)
        .map(|i| desc.inv_masses.read::<f32>(i, 0))
        .collect();

    Extracted {
        points,
        positions,
        inv_masses,
        triangles: copy_indices(desc, &desc.triangles, 3),
        quads: copy_indices(desc, &desc.quads, 4),
    }
}
