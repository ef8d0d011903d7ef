//! Core traits for surfacelab

use crate::{extent::Extent, mesh::TriangleMesh, point::*};

/// Objects with an axis-aligned extent in local space
pub trait Bounded {
    /// Get the bounding extent, computed from the current geometry
    fn extent(&self) -> Extent;

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        self.extent().center()
    }
}

impl Bounded for TriangleMesh {
    fn extent(&self) -> Extent {
        Extent::from_points(&self.vertices)
    }
}

impl Bounded for [Point3f] {
    fn extent(&self) -> Extent {
        Extent::from_points(self)
    }
}
