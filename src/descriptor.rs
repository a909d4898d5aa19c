//! The mesh descriptor handed to and returned from the quadifier
//!
//! A descriptor only borrows its buffers. Each buffer is a [`BoundedData`]: raw
//! bytes, a stride in bytes and an element count, so interleaved vertex layouts
//! and 16-bit index buffers can be consumed without copying them first.

use crate::errors::{QuadifyError, QuadifyResult};
use bytemuck::{AnyBitPattern, Pod};

bitflags::bitflags! {
    /// Flags describing how a descriptor's buffers are laid out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MeshFlags: u32 {
        /// Triangle and quad indices are `u16` instead of `u32`.
        const SIXTEEN_BIT_INDICES = 0b0000_0001;
    }
}

/// A strided view into a byte buffer holding `count` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedData<'a> {
    /// Raw bytes, element `i` starts at `i * stride`
    pub data: &'a [u8],
    /// Distance in bytes between two consecutive elements
    pub stride: usize,
    /// Number of elements
    pub count: usize,
}

impl<'a> BoundedData<'a> {
    /// Tightly packed view over a typed slice.
    pub fn from_slice<T: Pod>(elements: &'a [T]) -> Self {
        BoundedData {
            data: bytemuck::cast_slice(elements),
            stride: std::mem::size_of::<T>(),
            count: elements.len(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bytes of element `i`, at least `len` long.
    ///
    /// Panics if the buffer is shorter than the descriptor claims; run
    /// [`MeshDescriptor::validate`] first.
    #[inline]
    pub fn element(&self, i: usize, len: usize) -> &'a [u8] {
        let start = i * self.stride;
        &self.data[start..start + len]
    }

    /// Read component `j` of element `i` as a `T`.
    #[inline]
    pub fn read<T: AnyBitPattern>(&self, i: usize, j: usize) -> T {
        let size = std::mem::size_of::<T>();
        let bytes = self.element(i, (j + 1) * size);
        bytemuck::pod_read_unaligned(&bytes[j * size..])
    }

    /// Check that `count` elements of `element` bytes each fit into `data`.
    fn check(&self, buffer: &'static str, element: usize) -> QuadifyResult<()> {
        if self.count == 0 {
            return Ok(());
        }
        if self.stride < element {
            return Err(QuadifyError::StrideTooSmall {
                buffer,
                stride: self.stride,
                element,
            });
        }
        let required = (self.count - 1) * self.stride + element;
        if self.data.len() < required {
            return Err(QuadifyError::BufferTooSmall {
                buffer,
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Points, faces and per-point inverse masses of a cloth mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshDescriptor<'a> {
    /// `[f32; 3]` positions
    pub points: BoundedData<'a>,
    /// Optional `f32` inverse masses, one per point when present
    pub inv_masses: BoundedData<'a>,
    /// Triangles, 3 indices each
    pub triangles: BoundedData<'a>,
    /// Quads, 4 indices each
    pub quads: BoundedData<'a>,
    pub flags: MeshFlags,
}

impl<'a> MeshDescriptor<'a> {
    /// Descriptor over tightly packed points and 32-bit triangles.
    pub fn from_slices(points: &'a [[f32; 3]], triangles: &'a [[u32; 3]]) -> Self {
        MeshDescriptor {
            points: BoundedData::from_slice(points),
            triangles: BoundedData::from_slice(triangles),
            ..Default::default()
        }
    }

    /// Descriptor over tightly packed points and 16-bit triangles.
    pub fn from_slices_u16(points: &'a [[f32; 3]], triangles: &'a [[u16; 3]]) -> Self {
        MeshDescriptor {
            points: BoundedData::from_slice(points),
            triangles: BoundedData::from_slice(triangles),
            flags: MeshFlags::SIXTEEN_BIT_INDICES,
            ..Default::default()
        }
    }

    /// Attach existing 32-bit quads.
    pub fn with_quads(mut self, quads: &'a [[u32; 4]]) -> Self {
        self.quads = BoundedData::from_slice(quads);
        self
    }

    /// Attach per-point inverse masses.
    pub fn with_inv_masses(mut self, inv_masses: &'a [f32]) -> Self {
        self.inv_masses = BoundedData::from_slice(inv_masses);
        self
    }

    pub fn has_sixteen_bit_indices(&self) -> bool {
        self.flags.contains(MeshFlags::SIXTEEN_BIT_INDICES)
    }

    /// Size in bytes of one index.
    pub fn index_size(&self) -> usize {
        if self.has_sixteen_bit_indices() { 2 } else { 4 }
    }

    /// Index `j` of face `i` in `faces`, widened to `u32`.
    #[inline]
    pub(crate) fn index(&self, faces: &BoundedData<'a>, i: usize, j: usize) -> u32 {
        if self.has_sixteen_bit_indices() {
            u32::from(faces.read::<u16>(i, j))
        } else {
            faces.read::<u32>(i, j)
        }
    }

    /// Returns `true` if [`validate`](Self::validate) finds nothing wrong
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks buffer sizes, strides and index bounds.
    ///
    /// The quadifier only runs on descriptors that pass this check, which is
    /// what keeps every later lookup in bounds.
    pub fn validate(&self) -> QuadifyResult<()> {
        self.points.check("points", 3 * std::mem::size_of::<f32>())?;

        if !self.inv_masses.is_empty() {
            self.inv_masses.check("inv_masses", std::mem::size_of::<f32>())?;
            if self.inv_masses.count != self.points.count {
                return Err(QuadifyError::InvMassCountMismatch {
                    inv_masses: self.inv_masses.count,
                    points: self.points.count,
                });
            }
        }

        let index_size = self.index_size();
        for (buffer, faces, corners) in [
            ("triangles", &self.triangles, 3),
            ("quads", &self.quads, 4),
        ] {
            faces.check(buffer, corners * index_size)?;
            for element in 0..faces.count {
                for corner in 0..corners {
                    let index = self.index(faces, element, corner);
                    if index as usize >= self.points.count {
                        return Err(QuadifyError::IndexOutOfBounds {
                            buffer,
                            element,
                            index,
                            points: self.points.count,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
