//! Snap engine for the object being dragged.
//!
//! Structural leaders lock onto the first wall within range (top, bottom,
//! left, right; no chaining) and take that wall's orientation. Everything
//! else snaps each axis to a flush room edge or the room centerline, and
//! falls back to a grid when neither axis found a target.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{Aperture, Catalog, ObjectClass};
use crate::config::SnapConfig;
use crate::geom::{Dimensions, Point, clamp_to, oriented_bounding_box};
use crate::scene::{PlacedObject, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    Horizontal,
    Vertical,
}

/// An alignment line to draw while the leader is snapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    pub orientation: GuideOrientation,
    /// Room coordinate of the line (y for horizontal, x for vertical).
    pub position: f64,
}

impl SnapGuide {
    #[must_use]
    pub fn horizontal(position: f64) -> Self {
        Self { orientation: GuideOrientation::Horizontal, position }
    }

    #[must_use]
    pub fn vertical(position: f64) -> Self {
        Self { orientation: GuideOrientation::Vertical, position }
    }
}

/// Adjusted pose for the leader plus the guides to show.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub position: Point,
    /// New rotation, or `None` to keep the leader's current rotation.
    pub rotation: Option<f64>,
    pub guides: Vec<SnapGuide>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

/// Snap a leader whose unsnapped position would be `candidate`.
///
/// Returns `None` when the leader's type is not in the catalog.
#[must_use]
pub fn snap_leader(
    leader: &PlacedObject,
    candidate: Point,
    catalog: &dyn Catalog,
    room: &Room,
    config: &SnapConfig,
) -> Option<SnapResult> {
    let class = catalog.class_of(&leader.type_ref)?;
    Some(match class {
        ObjectClass::Structural(aperture) => {
            snap_structural(leader.dimensions, aperture, candidate, room, config)
        }
        ObjectClass::Freestanding | ObjectClass::FloorCovering => {
            let extent = oriented_bounding_box(leader.dimensions, leader.rotation);
            snap_freestanding(extent, candidate, room, config)
        }
    })
}

/// First wall, in top/bottom/left/right order, closer than `radius` to `p`.
#[must_use]
pub fn nearest_wall(p: Point, room: &Room, radius: f64) -> Option<Wall> {
    [
        (Wall::Top, p.y),
        (Wall::Bottom, room.height - p.y),
        (Wall::Left, p.x),
        (Wall::Right, room.width - p.x),
    ]
    .into_iter()
    .find(|(_, dist)| dist.abs() < radius)
    .map(|(wall, _)| wall)
}

/// Snap a wall aperture. `dimensions` is the unrotated footprint: width runs
/// along the wall, height goes through it.
#[must_use]
pub fn snap_structural(
    dimensions: Dimensions,
    aperture: Aperture,
    candidate: Point,
    room: &Room,
    config: &SnapConfig,
) -> SnapResult {
    let Some(wall) = nearest_wall(candidate, room, config.structural_radius) else {
        return SnapResult { position: candidate, rotation: None, guides: Vec::new() };
    };

    let half_w = dimensions.width / 2.0;
    let half_h = dimensions.height / 2.0;
    let inset = config.structural_inset;
    let half_wall = room.wall_thickness / 2.0;
    let swing = aperture == Aperture::Swing;

    let (position, rotation, guide) = match wall {
        Wall::Top => {
            let y = if swing { half_h - inset } else { -half_wall };
            let x = clamp_along(candidate.x, half_w, room.width);
            (Point::new(x, y), 0.0, SnapGuide::horizontal(0.0))
        }
        Wall::Bottom => {
            let y = if swing { room.height - half_h + inset } else { room.height + half_wall };
            let x = clamp_along(candidate.x, half_w, room.width);
            (Point::new(x, y), if swing { 180.0 } else { 0.0 }, SnapGuide::horizontal(room.height))
        }
        Wall::Left => {
            let x = if swing { half_h - inset } else { -half_wall };
            let y = clamp_along(candidate.y, half_w, room.height);
            (Point::new(x, y), if swing { 270.0 } else { 90.0 }, SnapGuide::vertical(0.0))
        }
        Wall::Right => {
            let x = if swing { room.width - half_h + inset } else { room.width + half_wall };
            let y = clamp_along(candidate.y, half_w, room.height);
            (Point::new(x, y), 90.0, SnapGuide::vertical(room.width))
        }
    };

    SnapResult { position, rotation: Some(rotation), guides: vec![guide] }
}

/// Keep an aperture's extent along the wall inside the wall's span.
fn clamp_along(value: f64, half: f64, span: f64) -> f64 {
    if span < half * 2.0 { span / 2.0 } else { clamp_to(value, half, span - half) }
}

/// Snap a free-standing leader whose rotated bounding box is `extent`.
#[must_use]
pub fn snap_freestanding(extent: Dimensions, candidate: Point, room: &Room, config: &SnapConfig) -> SnapResult {
    let radius = config.freestanding_radius;
    let snap_x = snap_axis(candidate.x, extent.width / 2.0, room.width, radius);
    let snap_y = snap_axis(candidate.y, extent.height / 2.0, room.height, radius);

    let mut position = candidate;
    let mut guides = Vec::new();
    if let Some((x, line)) = snap_x {
        position.x = x;
        guides.push(SnapGuide::vertical(line));
    }
    if let Some((y, line)) = snap_y {
        position.y = y;
        guides.push(SnapGuide::horizontal(line));
    }

    if guides.is_empty() {
        position = quantize(position, config.grid_cell);
    }

    SnapResult { position, rotation: None, guides }
}

/// Nearest of flush-near-edge, flush-far-edge, or centerline within `radius`.
///
/// Returns the snapped center coordinate and the guide line coordinate.
fn snap_axis(value: f64, half: f64, span: f64, radius: f64) -> Option<(f64, f64)> {
    [(half, 0.0), (span - half, span), (span / 2.0, span / 2.0)]
        .into_iter()
        .map(|(target, line)| ((value - target).abs(), target, line))
        .filter(|(dist, _, _)| *dist < radius)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, target, line)| (target, line))
}

/// Round both coordinates to the nearest multiple of `cell`.
#[must_use]
pub fn quantize(p: Point, cell: f64) -> Point {
    if cell <= 0.0 || !cell.is_finite() {
        return p;
    }
    Point::new((p.x / cell).round() * cell, (p.y / cell).round() * cell)
}
