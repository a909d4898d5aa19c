//! Test support library
//! Provides mesh builders & small geometry helpers for tests.
#![allow(dead_code)]

use quadrs::MeshDescriptor;

/// Points and 32-bit triangles owned by a test.
#[derive(Debug, Clone, Default)]
pub struct TestMesh {
    pub points: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl TestMesh {
    pub fn descriptor(&self) -> MeshDescriptor<'_> {
        MeshDescriptor::from_slices(&self.points, &self.triangles)
    }

    pub fn flat_triangles(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// `nx` x `ny` unit squares in the z = 0 plane, each split into two
/// counter-clockwise right triangles.
///
/// With `alternate` the split direction flips like a checkerboard.
pub fn grid(nx: u32, ny: u32, alternate: bool) -> TestMesh {
    let mut mesh = TestMesh::default();
    for j in 0..=ny {
        for i in 0..=nx {
            mesh.points.push([i as f32, j as f32, 0.0]);
        }
    }

    let id = |i: u32, j: u32| j * (nx + 1) + i;
    for j in 0..ny {
        for i in 0..nx {
            let (v00, v10, v11, v01) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            if alternate && (i + j) % 2 == 1 {
                mesh.triangles.push([v00, v10, v01]);
                mesh.triangles.push([v10, v11, v01]);
            } else {
                mesh.triangles.push([v00, v10, v11]);
                mesh.triangles.push([v00, v11, v01]);
            }
        }
    }
    mesh
}

/// The quads [`grid`] quadifies into: one per square, ordered by diagonal
/// like the edge table, wound like the triangles.
pub fn grid_quads(nx: u32, ny: u32, alternate: bool) -> Vec<u32> {
    let id = |i: u32, j: u32| j * (nx + 1) + i;
    let mut quads: Vec<((u32, u32), [u32; 4])> = Vec::new();
    for j in 0..ny {
        for i in 0..nx {
            let (v00, v10, v11, v01) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            if alternate && (i + j) % 2 == 1 {
                quads.push(((v10, v01), [v01, v00, v10, v11]));
            } else {
                quads.push(((v00, v11), [v00, v10, v11, v01]));
            }
        }
    }
    quads.sort_by_key(|&(diagonal, _)| diagonal);
    quads.into_iter().flat_map(|(_, quad)| quad).collect()
}

/// A grid whose points are nudged around deterministically, so that some
/// squares stay merge-worthy and others do not.
pub fn jittered_grid(nx: u32, ny: u32) -> TestMesh {
    let mut mesh = grid(nx, ny, true);
    for (k, p) in mesh.points.iter_mut().enumerate() {
        let k = k as f32;
        p[0] += 0.2 * (k * 1.7).sin();
        p[1] += 0.2 * (k * 2.3).cos();
        p[2] += 0.3 * (k * 0.9).sin();
    }
    mesh
}

/// A sheet of equilateral triangles, `cols` up/down pairs per row.
pub fn equilateral_sheet(cols: u32, rows: u32) -> TestMesh {
    let mut mesh = TestMesh::default();
    let h = 3.0f32.sqrt() / 2.0;
    for r in 0..=rows {
        let offset = if r % 2 == 0 { 0.0 } else { 0.5 };
        for c in 0..=cols {
            mesh.points.push([c as f32 + offset, r as f32 * h, 0.0]);
        }
    }

    let id = |c: u32, r: u32| r * (cols + 1) + c;
    for r in 0..rows {
        for c in 0..cols {
            if r % 2 == 0 {
                mesh.triangles.push([id(c, r), id(c + 1, r), id(c, r + 1)]);
                mesh.triangles.push([id(c + 1, r), id(c + 1, r + 1), id(c, r + 1)]);
            } else {
                mesh.triangles.push([id(c, r), id(c + 1, r), id(c + 1, r + 1)]);
                mesh.triangles.push([id(c, r), id(c + 1, r + 1), id(c, r + 1)]);
            }
        }
    }
    mesh
}

/// Three right triangles hinged on the edge (0, 1), each with its right
/// angle opposite the hinge.
pub fn hinge() -> TestMesh {
    TestMesh {
        points: vec![
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, -1.0, 0.0],
            [1.0, 0.0, 1.0],
        ],
        triangles: vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]],
    }
}

/// Two right triangles on the unit hypotenuse (0, 1), apexes on the Thales
/// circle at `half_angle_degrees` above and below it.
///
/// The kite's corners at 0 and 1 have interior angles of twice the half
/// angle and 180° minus that.
pub fn kite(half_angle_degrees: f32) -> TestMesh {
    let (s, c) = half_angle_degrees.to_radians().sin_cos();
    TestMesh {
        points: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [c * c, c * s, 0.0], [c * c, -c * s, 0.0]],
        triangles: vec![[0, 1, 2], [1, 0, 3]],
    }
}

/// Twice the signed area of a planar face projected onto z = 0.
pub fn signed_area_z(points: &[[f32; 3]], face: &[u32]) -> f32 {
    let mut area = 0.0;
    for k in 0..face.len() {
        let a = points[face[k] as usize];
        let b = points[face[(k + 1) % face.len()] as usize];
        area += a[0] * b[1] - b[0] * a[1];
    }
    area
}

/// Canonical `(min, max)` sides of a face.
pub fn sides(face: &[u32]) -> Vec<(u32, u32)> {
    (0..face.len())
        .map(|k| {
            let (a, b) = (face[k], face[(k + 1) % face.len()]);
            (a.min(b), a.max(b))
        })
        .collect()
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}
