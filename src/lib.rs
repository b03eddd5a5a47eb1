//!
//! Voxel-math is the math helper library of a voxelization toolset.
//!
//! It provides fast, simplified versions of the vector and scalar routines the voxelizer needs:
//! cross and dot products, normalization, component wise min/max, approximate equality,
//! an integer log2 and the mapping from world positions to grid indices.
//!
//! All functions are pure and can be called from any thread.

pub mod math;
