use crate::descriptor::MeshDescriptor;
use crate::errors::{QuadifyError, QuadifyResult};
use std::io::Cursor;

/// An owned, welded triangle mesh read from a file.
///
/// STL stores every triangle with its own three corners; reading merges
/// identical corners so the triangles share vertices and edges again, which
/// is what quadification needs to see any adjacency at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub points: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a TriangleMesh from ASCII or binary STL data using `stl_io`.
    ///
    /// ```rust
    /// # use quadrs::io::stl::TriangleMesh;
    /// # use stl_io::{Normal, Triangle, Vertex};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let up = Normal::new([0.0, 0.0, 1.0]);
    /// let square = [
    ///     Triangle {
    ///         normal: up,
    ///         vertices: [Vertex::new([0.0, 0.0, 0.0]), Vertex::new([1.0, 0.0, 0.0]), Vertex::new([1.0, 1.0, 0.0])],
    ///     },
    ///     Triangle {
    ///         normal: up,
    ///         vertices: [Vertex::new([0.0, 0.0, 0.0]), Vertex::new([1.0, 1.0, 0.0]), Vertex::new([0.0, 1.0, 0.0])],
    ///     },
    /// ];
    /// let mut bytes = Vec::new();
    /// stl_io::write_stl(&mut bytes, square.iter())?;
    ///
    /// let mesh = TriangleMesh::from_stl(&bytes)?;
    /// assert_eq!(mesh.points.len(), 4);
    /// assert_eq!(mesh.triangles.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_stl(stl_data: &[u8]) -> QuadifyResult<TriangleMesh> {
        let mut cursor = Cursor::new(stl_data);
        let stl = stl_io::read_stl(&mut cursor)?;

        let points = stl
            .vertices
            .iter()
            .map(|v| [v[0], v[1], v[2]])
            .collect();

        let triangles = stl
            .faces
            .iter()
            .map(|face| -> QuadifyResult<[u32; 3]> {
                let mut tri = [0u32; 3];
                for (corner, &index) in tri.iter_mut().zip(&face.vertices) {
                    *corner = u32::try_from(index).map_err(|_| {
                        QuadifyError::MalformedInput(format!("vertex index {index} does not fit 32 bits"))
                    })?;
                }
                Ok(tri)
            })
            .collect::<QuadifyResult<Vec<_>>>()?;

        Ok(TriangleMesh { points, triangles })
    }

    /// Descriptor over this mesh, ready for [`Quadifier::quadify`](crate::Quadifier::quadify).
    pub fn descriptor(&self) -> MeshDescriptor<'_> {
        MeshDescriptor::from_slices(&self.points, &self.triangles)
    }
}
