//! Axis-aligned extents

use crate::point::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a mesh in local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: Point3f,
    pub max: Point3f,
}

impl Extent {
    /// Create an extent from two corners. Components are reordered so that
    /// `min <= max` holds on every axis.
    pub fn new(a: Point3f, b: Point3f) -> Self {
        Self {
            min: Point3f::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3f::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Zero-size extent located at a single point
    pub fn point(p: Point3f) -> Self {
        Self { min: p, max: p }
    }

    /// Compute the extent of a set of points.
    ///
    /// An empty set yields the degenerate extent at the origin.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => *p,
            None => return Self::point(Point3f::origin()),
        };

        let mut min = first;
        let mut max = first;

        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Self { min, max }
    }

    /// Midpoint of the extent
    pub fn center(&self) -> Point3f {
        Point3f::from((self.min.coords + self.max.coords) / 2.0)
    }

    /// Component-wise size (`max - min`)
    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    /// Largest component of the size
    pub fn max_dimension(&self) -> f32 {
        max_component(&self.size())
    }

    /// Extent shifted by `offset`
    pub fn translated(&self, offset: &Vector3f) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Extent with both corners multiplied by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// True when every axis has (near) zero size
    pub fn is_degenerate(&self, epsilon: f32) -> bool {
        self.max_dimension() <= epsilon
    }

    /// Check whether a point lies inside (inclusive)
    pub fn contains(&self, p: &Point3f) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point3f::new(1.0, -2.0, 0.5),
            Point3f::new(-1.0, 4.0, 0.0),
            Point3f::new(0.0, 0.0, 3.0),
        ];
        let extent = Extent::from_points(&points);
        assert_relative_eq!(extent.min, Point3f::new(-1.0, -2.0, 0.0));
        assert_relative_eq!(extent.max, Point3f::new(1.0, 4.0, 3.0));
        assert_relative_eq!(extent.size(), Vector3f::new(2.0, 6.0, 3.0));
        assert_relative_eq!(extent.max_dimension(), 6.0);
        assert!(points.iter().all(|p| extent.contains(p)));
    }

    #[test]
    fn test_empty_points_give_origin() {
        let extent = Extent::from_points(&[]);
        assert_eq!(extent, Extent::point(Point3f::origin()));
        assert!(extent.is_degenerate(0.0));
    }

    #[test]
    fn test_new_orders_corners() {
        let extent = Extent::new(Point3f::new(1.0, 1.0, 1.0), Point3f::new(-1.0, 2.0, 0.0));
        assert_relative_eq!(extent.min, Point3f::new(-1.0, 1.0, 0.0));
        assert_relative_eq!(extent.max, Point3f::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let extent = Extent::new(Point3f::new(2.0, 3.0, 4.0), Point3f::new(4.0, 7.0, 5.0));
        let moved = extent.translated(&Vector3f::new(-3.0, -5.0, -4.5));
        assert_relative_eq!(moved.center(), Point3f::origin());
        assert_relative_eq!(moved.size(), extent.size());
    }
}
