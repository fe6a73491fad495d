//! Geometry kernel: rotated footprints and point rotation.
//!
//! Everything here is a pure function of its inputs. Angles are in degrees,
//! positive values rotate clockwise on screen because the room's y axis
//! points down.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::scene::PlacedObject;

/// A point in either screen or room space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Unrotated width/height of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative, or non-finite extents enclose no area.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Wrap an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp `value` into `[lo, hi]`; the lower bound wins when the range is empty.
#[must_use]
pub fn clamp_to(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Axis-aligned envelope of a `dimensions` rectangle rotated about its center.
#[must_use]
pub fn oriented_bounding_box(dimensions: Dimensions, rotation_deg: f64) -> Dimensions {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let (w, h) = (dimensions.width, dimensions.height);
    Dimensions {
        width: (w * cos).abs() + (h * sin).abs(),
        height: (w * sin).abs() + (h * cos).abs(),
    }
}

/// Rotate `point` about `pivot` by `angle_deg`.
#[must_use]
pub fn rotate_point(point: Point, pivot: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}

/// Corners of a rotated rectangle: local top-left, top-right, bottom-right,
/// bottom-left, in that order.
#[must_use]
pub fn corners(center: Point, dimensions: Dimensions, rotation_deg: f64) -> [Point; 4] {
    let hw = dimensions.width / 2.0;
    let hh = dimensions.height / 2.0;
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(lx, ly)| Point {
        x: center.x + lx * cos - ly * sin,
        y: center.y + lx * sin + ly * cos,
    })
}

/// Corners of a placed object's rotated footprint.
#[must_use]
pub fn oriented_corners(object: &PlacedObject) -> [Point; 4] {
    corners(object.position, object.dimensions, object.rotation)
}

/// Whether `point` lies inside (or on) the object's rotated footprint.
#[must_use]
pub fn contains_point(object: &PlacedObject, point: Point) -> bool {
    let local = rotate_point(point, object.position, -object.rotation);
    (local.x - object.position.x).abs() <= object.dimensions.width / 2.0
        && (local.y - object.position.y).abs() <= object.dimensions.height / 2.0
}

/// Axis-aligned box in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Box of the given extent centered on `center`.
    #[must_use]
    pub fn centered(center: Point, extent: Dimensions) -> Self {
        Self {
            min_x: center.x - extent.width / 2.0,
            min_y: center.y - extent.height / 2.0,
            max_x: center.x + extent.width / 2.0,
            max_y: center.y + extent.height / 2.0,
        }
    }

    /// The object's axis-aligned bounding box at its current rotation.
    #[must_use]
    pub fn of_object(object: &PlacedObject) -> Self {
        Self::centered(object.position, oriented_bounding_box(object.dimensions, object.rotation))
    }

    /// Tightest box around every object, or `None` for an empty set.
    pub fn enclosing<'a, I>(objects: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a PlacedObject>,
    {
        objects
            .into_iter()
            .map(Self::of_object)
            .reduce(|acc, b| acc.union(b))
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}
