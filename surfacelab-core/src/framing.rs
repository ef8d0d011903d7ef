//! Auto-framing: recentre a model on its extent and place the camera from its size
//!
//! The camera sits on the +Z axis of the recentred model, slightly below the
//! target, at a distance proportional to the largest dimension. With the
//! default policy a unit-ish convex object fills a consistent fraction of a
//! ~45° vertical field of view regardless of its scale.

use crate::extent::Extent;
use crate::point::*;
use serde::{Deserialize, Serialize};

/// Default camera distance as a multiple of the largest dimension
pub const DEFAULT_DISTANCE_FACTOR: f32 = 2.2;

/// Default vertical camera offset as a multiple of the largest dimension
pub const DEFAULT_ELEVATION_FACTOR: f32 = -0.05;

/// Default floor for the camera distance on zero-size geometry
pub const DEFAULT_MIN_CAMERA_DISTANCE: f32 = 1e-3;

/// Tunable constants used to place the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingPolicy {
    /// Camera distance along +Z per unit of the largest dimension
    pub distance_factor: f32,
    /// Camera height offset per unit of the largest dimension
    pub elevation_factor: f32,
    /// Smallest camera distance ever produced
    pub min_camera_distance: f32,
}

impl Default for FramingPolicy {
    fn default() -> Self {
        Self {
            distance_factor: DEFAULT_DISTANCE_FACTOR,
            elevation_factor: DEFAULT_ELEVATION_FACTOR,
            min_camera_distance: DEFAULT_MIN_CAMERA_DISTANCE,
        }
    }
}

/// Result of framing an extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// Center of the extent before recentring
    pub center: Point3f,
    /// Size of the extent
    pub size: Vector3f,
    /// Translation that moves the extent's center to the origin
    pub recenter_offset: Vector3f,
    pub camera_position: Point3f,
    pub camera_target: Point3f,
}

impl FrameResult {
    /// Largest component of `size`
    pub fn max_dimension(&self) -> f32 {
        max_component(&self.size)
    }

    /// Distance from the camera to its target
    pub fn camera_distance(&self) -> f32 {
        (self.camera_position - self.camera_target).norm()
    }
}

impl FramingPolicy {
    /// Frame an extent with this policy
    pub fn frame(&self, extent: &Extent) -> FrameResult {
        let center = extent.center();
        let recenter_offset = -center.coords;

        // recomputed rather than assumed to be the origin
        let centered = extent.translated(&recenter_offset);
        let target = centered.center();

        let size = extent.size();
        let max_dim = max_component(&size);

        let floor = if self.distance_factor > 0.0 {
            self.min_camera_distance / self.distance_factor
        } else {
            self.min_camera_distance
        };
        let reach = if max_dim.is_finite() { max_dim.max(floor) } else { floor };

        let camera_position = target
            + Vector3f::new(
                0.0,
                self.elevation_factor * reach,
                self.distance_factor * reach,
            );

        log::debug!(
            "framed extent {:?}..{:?}: max_dim={} camera={:?}",
            extent.min, extent.max, max_dim, camera_position
        );

        FrameResult {
            center,
            size,
            recenter_offset,
            camera_position,
            camera_target: target,
        }
    }
}

/// Frame an extent with the default policy
pub fn normalize(extent: &Extent) -> FrameResult {
    FramingPolicy::default().frame(extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube() -> Extent {
        Extent::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_unit_cube_scenario() {
        let frame = normalize(&cube());
        assert_relative_eq!(frame.center, Point3f::origin());
        assert_relative_eq!(frame.size, Vector3f::new(2.0, 2.0, 2.0));
        assert_relative_eq!(frame.max_dimension(), 2.0);
        assert_relative_eq!(frame.camera_target, Point3f::origin());
        assert_relative_eq!(frame.camera_position, Point3f::new(0.0, -0.1, 4.4), epsilon = 1e-6);
    }

    #[test]
    fn test_offset_extent_recenters() {
        let extent = Extent::new(Point3f::new(2.0, 0.0, -4.0), Point3f::new(6.0, 1.0, -2.0));
        let frame = normalize(&extent);
        assert_relative_eq!(frame.center, Point3f::new(4.0, 0.5, -3.0));
        assert_relative_eq!(frame.recenter_offset, Vector3f::new(-4.0, -0.5, 3.0));
        assert_relative_eq!(frame.camera_target, Point3f::origin(), epsilon = 1e-6);
        // largest dimension is x = 4
        assert_relative_eq!(frame.camera_position.z, 8.8, epsilon = 1e-5);
        assert_relative_eq!(frame.camera_position.y, -0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_second_pass_is_already_centered() {
        let extent = Extent::new(Point3f::new(0.3, -7.0, 12.0), Point3f::new(5.1, 2.5, 19.25));
        let first = normalize(&extent);
        let second = normalize(&extent.translated(&first.recenter_offset));
        assert!(second.recenter_offset.norm() < 1e-5);
        assert_relative_eq!(second.size, first.size, epsilon = 1e-5);
        assert_relative_eq!(second.camera_position, first.camera_position, epsilon = 1e-5);
    }

    #[test]
    fn test_scale_equivariance() {
        let base = Extent::new(Point3f::new(-1.0, -0.5, -2.0), Point3f::new(3.0, 1.5, 1.0));
        let frame = normalize(&base);
        for k in [0.25_f32, 0.5, 2.0, 10.0, 123.0] {
            let scaled = normalize(&base.scaled(k));
            assert_relative_eq!(scaled.size, frame.size * k, max_relative = 1e-5);
            assert_relative_eq!(
                scaled.camera_distance(),
                frame.camera_distance() * k,
                max_relative = 1e-5
            );
            let dir_a = (frame.camera_position - frame.camera_target).normalize();
            let dir_b = (scaled.camera_position - scaled.camera_target).normalize();
            assert_relative_eq!(dir_a, dir_b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_degenerate_extent_keeps_camera_off_target() {
        let frame = normalize(&Extent::point(Point3f::new(1.0, 2.0, 3.0)));
        assert_relative_eq!(frame.max_dimension(), 0.0);
        assert!(frame.camera_distance() > 0.0);
        assert!(frame.camera_distance() >= DEFAULT_MIN_CAMERA_DISTANCE * 0.999);
        assert_relative_eq!(frame.camera_target, Point3f::origin());
    }

    #[test]
    fn test_custom_policy() {
        let policy = FramingPolicy {
            distance_factor: 3.0,
            elevation_factor: 0.1,
            min_camera_distance: 0.5,
        };
        let frame = policy.frame(&cube());
        assert_relative_eq!(frame.camera_position, Point3f::new(0.0, 0.2, 6.0), epsilon = 1e-6);

        let degenerate = policy.frame(&Extent::point(Point3f::origin()));
        assert_relative_eq!(degenerate.camera_position.z, 0.5, epsilon = 1e-6);
    }
}
