#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Camera;
use crate::catalog::Catalog;
use crate::consts::{HANDLE_RADIUS_PX, RESIZE_GRIP_HALF_WIDTH, ROTATE_HANDLE_OFFSET};
use crate::geom::{Bounds, Point, contains_point};
use crate::input::ResizeEdge;
use crate::scene::{ObjectId, Room, Scene};

/// What a pointer-down landed on. Background clicks produce no `Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The selection's rotate handle.
    RotateHandle,
    /// A placed object with a known type.
    Object(ObjectId),
    /// A room resize grip.
    RoomEdge(ResizeEdge),
}

/// Room-space center of the rotate handle drawn above `bounds`.
#[must_use]
pub fn rotate_handle_position(bounds: &Bounds) -> Point {
    Point::new(bounds.center().x, bounds.min_y - ROTATE_HANDLE_OFFSET)
}

/// Object ids back-to-front: class priority first, then id.
///
/// Objects whose type misses the catalog sort with the furniture.
#[must_use]
pub fn draw_order(scene: &Scene, catalog: &dyn Catalog) -> Vec<ObjectId> {
    let mut keyed: Vec<(u8, ObjectId)> = scene
        .iter()
        .map(|o| {
            let priority = catalog.class_of(&o.type_ref).map_or(5, |class| class.draw_priority());
            (priority, o.id)
        })
        .collect();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Test what is under `room_pt`: rotate handle, then objects topmost-first,
/// then room grips.
#[must_use]
pub fn hit_test(
    room_pt: Point,
    scene: &Scene,
    catalog: &dyn Catalog,
    room: &Room,
    camera: &Camera,
    selection_bounds: Option<Bounds>,
) -> Option<Hit> {
    if let Some(bounds) = selection_bounds {
        let handle = rotate_handle_position(&bounds);
        if room_pt.distance(handle) <= camera.screen_dist_to_room(HANDLE_RADIUS_PX) {
            return Some(Hit::RotateHandle);
        }
    }

    let topmost = draw_order(scene, catalog).into_iter().rev().find(|id| {
        scene
            .get(id)
            .is_some_and(|o| catalog.lookup(&o.type_ref).is_some() && contains_point(o, room_pt))
    });
    if let Some(id) = topmost {
        return Some(Hit::Object(id));
    }

    room_edge_at(room_pt, room).map(Hit::RoomEdge)
}

/// Which resize grip, if any, is under `p`. The corner wins where grips overlap.
#[must_use]
pub fn room_edge_at(p: Point, room: &Room) -> Option<ResizeEdge> {
    let g = RESIZE_GRIP_HALF_WIDTH;
    let near_right = (p.x - room.width).abs() < g;
    let near_bottom = (p.y - room.height).abs() < g;
    if near_right && near_bottom {
        Some(ResizeEdge::Corner)
    } else if near_right && (0.0..=room.height).contains(&p.y) {
        Some(ResizeEdge::Right)
    } else if near_bottom && (0.0..=room.width).contains(&p.x) {
        Some(ResizeEdge::Bottom)
    } else {
        None
    }
}
