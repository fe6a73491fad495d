//! Re-layout of placed objects when the room is resized.
//!
//! DESIGN
//! ======
//! Only the right and bottom walls move on resize, so each resized axis asks
//! one question per object: is it "stuck" to the moving side? Proximity is
//! judged against the old room. Wall openings near the moving wall ride along
//! with it. Furniture near the far edge or the centerline rides along too,
//! and is then pulled back inside the new extent. Nothing here resolves the
//! collisions a resize may create.

#[cfg(test)]
#[path = "relocate_test.rs"]
mod relocate_test;

use crate::catalog::{Catalog, ObjectClass};
use crate::geom::{clamp_to, oriented_bounding_box};
use crate::scene::{ObjectId, Room, Scene};

/// Reposition every object for a change from `old` to `new` room extents.
///
/// Returns the ids of objects whose position changed.
pub fn relocate(scene: &mut Scene, catalog: &dyn Catalog, old: &Room, new: &Room, threshold: f64) -> Vec<ObjectId> {
    let dw = new.width - old.width;
    let dh = new.height - old.height;
    if dw == 0.0 && dh == 0.0 {
        return Vec::new();
    }

    let mut moved = Vec::new();
    for object in scene.iter_mut() {
        let Some(class) = catalog.class_of(&object.type_ref) else {
            continue;
        };
        let before = object.position;
        let extent = oriented_bounding_box(object.dimensions, object.rotation);
        let mut p = object.position;

        if dw != 0.0 {
            p.x = match class {
                ObjectClass::Structural(_) => follow_wall(p.x, old.width, dw, threshold),
                ObjectClass::Freestanding | ObjectClass::FloorCovering => {
                    let x = follow_edge(p.x, extent.width / 2.0, old.width, dw, threshold);
                    keep_inside(x, extent.width / 2.0, new.width)
                }
            };
        }
        if dh != 0.0 {
            p.y = match class {
                ObjectClass::Structural(_) => follow_wall(p.y, old.height, dh, threshold),
                ObjectClass::Freestanding | ObjectClass::FloorCovering => {
                    let y = follow_edge(p.y, extent.height / 2.0, old.height, dh, threshold);
                    keep_inside(y, extent.height / 2.0, new.height)
                }
            };
        }

        if p != before {
            object.position = p;
            moved.push(object.id);
        }
    }
    moved
}

/// Openings within `threshold` of the moving wall keep their offset from it.
fn follow_wall(value: f64, old_span: f64, delta: f64, threshold: f64) -> f64 {
    if (value - old_span).abs() < threshold { value + delta } else { value }
}

/// Furniture near the far edge or the centerline moves with the wall.
fn follow_edge(value: f64, half: f64, old_span: f64, delta: f64, threshold: f64) -> f64 {
    let far_edge = (value + half - old_span).abs();
    let centerline = (value - old_span / 2.0).abs();
    if far_edge < threshold || centerline < threshold { value + delta } else { value }
}

/// Pull a footprint back inside `[0, span]`, flush to whichever edge it crossed.
fn keep_inside(value: f64, half: f64, span: f64) -> f64 {
    clamp_to(value, half, span - half)
}
