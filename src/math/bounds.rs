//! Axis aligned bounding box accumulation
//!
//! The voxelizer grows a box over all mesh vertices before laying out its
//! grid. Growing goes through [`min_vec`] and [`max_vec`] so a point on the
//! boundary leaves the box untouched.

use log::warn;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::fast::{max_vec, min_vec, translate_point};
use super::vec::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// A zero sized box around a single point
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to include `point`
    pub fn encapsulate(&mut self, point: Vec3) {
        self.min = min_vec(point, self.min);
        self.max = max_vec(point, self.max);
    }

    /// Smallest box around all finite points.
    ///
    /// Points with a NaN or infinite component are skipped. Returns `None`
    /// when no finite point is left.
    #[instrument(skip_all, fields(count = points.len()))]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                warn!("Skipping non-finite point {point} at index {index}");
                continue;
            }
            match bounds.as_mut() {
                Some(b) => b.encapsulate(*point),
                None => bounds = Some(Bounds::from_point(*point)),
            }
        }
        trace!(?bounds, "accumulated bounds");
        bounds
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on all sides
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.z >= self.min.z
            && point.x <= self.max.x
            && point.y <= self.max.y
            && point.z <= self.max.z
    }

    /// Grid index of the `max` corner in a grid of `cell_size` cells anchored
    /// at `min`
    pub fn grid_extent(&self, cell_size: f32) -> [i32; 3] {
        translate_point(self.min, self.max, cell_size)
    }
}
