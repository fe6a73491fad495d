//! Advisory overlap detection between placed objects.
//!
//! DESIGN
//! ======
//! Every unordered pair of solid objects goes through a cheap axis-aligned
//! rejection on the rotated bounding boxes, then a Separating Axis Theorem
//! test over the edge normals of both rectangles. Floor coverings and
//! objects with no catalog entry are skipped before pairing. The result only
//! drives highlighting; nothing here blocks a placement.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use std::collections::HashSet;

use crate::catalog::{Catalog, ObjectClass};
use crate::geom::{Point, oriented_bounding_box, oriented_corners};
use crate::scene::{ObjectId, PlacedObject};

/// Whether two footprints overlap. Touching edges do not count.
#[must_use]
pub fn intersects(a: &PlacedObject, b: &PlacedObject) -> bool {
    if a.dimensions.is_degenerate() || b.dimensions.is_degenerate() {
        return false;
    }
    broad_phase_overlap(a, b) && polygons_overlap(&oriented_corners(a), &oriented_corners(b))
}

fn broad_phase_overlap(a: &PlacedObject, b: &PlacedObject) -> bool {
    let ea = oriented_bounding_box(a.dimensions, a.rotation);
    let eb = oriented_bounding_box(b.dimensions, b.rotation);
    (a.position.x - b.position.x).abs() < (ea.width + eb.width) / 2.0
        && (a.position.y - b.position.y).abs() < (ea.height + eb.height) / 2.0
}

fn project(corners: &[Point; 4], axis: Point) -> (f64, f64) {
    corners.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let dot = p.x * axis.x + p.y * axis.y;
        (lo.min(dot), hi.max(dot))
    })
}

fn polygons_overlap(a: &[Point; 4], b: &[Point; 4]) -> bool {
    for corners in [a, b] {
        // Opposite edges of a rectangle share a normal, so two edges suffice.
        for i in 0..2 {
            let p1 = corners[i];
            let p2 = corners[i + 1];
            let axis = Point::new(p2.y - p1.y, p1.x - p2.x);
            let (min_a, max_a) = project(a, axis);
            let (min_b, max_b) = project(b, axis);
            if max_a <= min_b || max_b <= min_a {
                return false;
            }
        }
    }
    true
}

/// Whether an object takes part in collision checks.
fn is_solid(object: &PlacedObject, catalog: &dyn Catalog) -> bool {
    match catalog.class_of(&object.type_ref) {
        Some(ObjectClass::FloorCovering) | None => false,
        Some(ObjectClass::Freestanding | ObjectClass::Structural(_)) => true,
    }
}

/// Ids of every solid object that overlaps at least one other solid object.
pub fn colliding_ids<'a, I>(objects: I, catalog: &dyn Catalog) -> HashSet<ObjectId>
where
    I: IntoIterator<Item = &'a PlacedObject>,
{
    let solid: Vec<&PlacedObject> = objects
        .into_iter()
        .filter(|o| is_solid(o, catalog))
        .collect();

    let mut colliding = HashSet::new();
    for (i, a) in solid.iter().enumerate() {
        for b in &solid[i + 1..] {
            if intersects(a, b) {
                colliding.insert(a.id);
                colliding.insert(b.id);
            }
        }
    }
    colliding
}
