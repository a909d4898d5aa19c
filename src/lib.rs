//! Converts triangulated cloth meshes into **mixed triangle/quad meshes** by merging
//! pairs of adjacent, near-right triangles that share their hypotenuse.
//!
//! Cloth and soft-body solvers behave better on quad-dominant topology: a grid of
//! quads gives one stretch constraint per quad side instead of an extra, stiff
//! constraint along every diagonal. [`Quadifier`] finds those diagonals, ranks the
//! quads they would produce by squareness and merges a conflict-free subset in a
//! single deterministic, greedy pass. No vertices are added, moved or removed.
//!
//! ```rust
//! use quadrs::{MeshDescriptor, Quadifier};
//!
//! let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
//! let triangles = [[0, 1, 2], [0, 2, 3]];
//!
//! let mut quadifier = Quadifier::new();
//! quadifier.quadify(&MeshDescriptor::from_slices(&points, &triangles)).unwrap();
//! assert_eq!(quadifier.quads(), &[0, 1, 2, 3]);
//! assert!(quadifier.triangles().is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import
//! - [**obj-io**](https://en.wikipedia.org/wiki/Wavefront_.obj_file): `.obj` export of triangles and quads
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the per-triangle and per-edge passes
//! - **hashmap**: look edges up through a hashbrown map instead of binary search
//! - **cli**: the `quadrs` command line tool

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod descriptor;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod params;
pub mod quadifier;
pub mod result;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use descriptor::{BoundedData, MeshDescriptor, MeshFlags};
pub use errors::{QuadifyError, QuadifyResult};
pub use params::QuadifierParams;
pub use quadifier::{Quadifier, quadify};
pub use result::QuadifyStats;
