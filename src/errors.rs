//! Descriptor validation and I/O errors

/// All the possible issues we might encounter while reading a mesh descriptor
#[derive(Debug, thiserror::Error)]
pub enum QuadifyError {
    /// (BufferTooSmall) A buffer holds fewer bytes than `count * stride` requires
    #[error("(BufferTooSmall) {buffer} buffer has {actual} bytes, {required} required")]
    BufferTooSmall {
        buffer: &'static str,
        required: usize,
        actual: usize,
    },
    /// (StrideTooSmall) A stride is smaller than one element of the buffer
    #[error("(StrideTooSmall) {buffer} stride {stride} is smaller than the element size {element}")]
    StrideTooSmall {
        buffer: &'static str,
        stride: usize,
        element: usize,
    },
    /// (IndexOutOfBounds) A face references a point that does not exist
    #[error("(IndexOutOfBounds) {buffer} element {element} references point {index}, but only {points} points exist")]
    IndexOutOfBounds {
        buffer: &'static str,
        element: usize,
        index: u32,
        points: usize,
    },
    /// (InvMassCountMismatch) Inverse masses and points disagree in count
    #[error("(InvMassCountMismatch) {inv_masses} inverse masses for {points} points")]
    InvMassCountMismatch { inv_masses: usize, points: usize },
    /// Error bubbled up from reading or writing a mesh file
    #[error("std::io::Error: {0}")]
    Io(#[from] std::io::Error),
    /// The input file contained something we could not interpret
    #[error("Input is malformed: {0}")]
    MalformedInput(String),
}

/// Result type used throughout the crate
pub type QuadifyResult<T> = std::result::Result<T, QuadifyError>;
