//! Wavefront OBJ export of mixed triangle/quad meshes.
//!
//! STL only knows triangles, so quadified meshes are written as OBJ, where a
//! face simply lists as many corners as it has.

use crate::descriptor::MeshDescriptor;
use crate::errors::QuadifyResult;
use std::io::Write;

/// Export a descriptor to OBJ text.
///
/// Writes one `v` line per point, then an `f` line per triangle and per quad,
/// with OBJ's 1-based indices. `desc` must be valid.
///
/// ```rust
/// # use quadrs::{MeshDescriptor, Quadifier};
/// # use quadrs::io::obj::to_obj;
/// let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
/// let triangles = [[0, 1, 2], [0, 2, 3]];
/// let mut quadifier = Quadifier::new();
/// quadifier.quadify(&MeshDescriptor::from_slices(&points, &triangles)).unwrap();
///
/// let obj = to_obj(&quadifier.descriptor(), "cloth");
/// assert!(obj.contains("f 1 2 3 4\n"));
/// ```
pub fn to_obj(desc: &MeshDescriptor, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("o {name}\n"));

    for i in 0..desc.points.count {
        let p = desc.points.read::<[f32; 3]>(i, 0);
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", p[0], p[1], p[2]));
    }

    for (faces, corners) in [(&desc.triangles, 3), (&desc.quads, 4)] {
        for i in 0..faces.count {
            out.push('f');
            for j in 0..corners {
                out.push_str(&format!(" {}", desc.index(faces, i, j) + 1));
            }
            out.push('\n');
        }
    }

    out
}

/// Write a descriptor as OBJ to `writer`.
pub fn write_obj<W: Write>(desc: &MeshDescriptor, name: &str, writer: &mut W) -> QuadifyResult<()> {
    writer.write_all(to_obj(desc, name).as_bytes())?;
    Ok(())
}
