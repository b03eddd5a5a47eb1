//! Math helpers for the voxelizer
//!
//! This module provides:
//! - The `Vec3` value type (vec submodule)
//! - Fast vector and scalar functions (fast submodule)
//! - Bounding box accumulation (bounds submodule)

mod bounds;
mod error;
mod fast;
mod vec;

pub use bounds::*;
pub use error::*;
pub use fast::*;
pub use vec::*;
