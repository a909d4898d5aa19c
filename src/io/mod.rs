//! Mesh file import and export.
//!
//! Formats are behind cargo features; quadification itself never touches a file.

#[cfg(feature = "stl-io")]
pub mod stl;

#[cfg(feature = "obj-io")]
pub mod obj;
