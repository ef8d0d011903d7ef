//! Point and vector aliases

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Component-wise maximum of a vector
pub fn max_component(v: &Vector3f) -> f32 {
    v.x.max(v.y).max(v.z)
}
