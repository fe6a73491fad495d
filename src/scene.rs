//! Scene model: placed objects, the room record, and the in-memory store.
//!
//! `Scene` keeps objects in insertion order; duplication and the draw order
//! tie-break both depend on a stable sequence. The controller is the only
//! writer.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Dimensions, Point, normalize_degrees};

/// Unique identifier for a placed object.
pub type ObjectId = Uuid;

/// Identifier shared by rigidly-linked objects.
pub type GroupId = Uuid;

/// An object placed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Unique identifier for this instance.
    pub id: ObjectId,
    /// Group shared with at least one other object, if grouped.
    pub group_id: Option<GroupId>,
    /// Catalog key for the object's type.
    pub type_ref: String,
    /// Center of the footprint in room coordinates.
    pub position: Point,
    /// Clockwise rotation in degrees, kept in `[0, 360)`.
    pub rotation: f64,
    /// Unrotated footprint.
    pub dimensions: Dimensions,
}

impl PlacedObject {
    /// Create an ungrouped object with a fresh id.
    #[must_use]
    pub fn new(type_ref: impl Into<String>, position: Point, rotation: f64, dimensions: Dimensions) -> Self {
        Self {
            id: Uuid::new_v4(),
            group_id: None,
            type_ref: type_ref.into(),
            position,
            rotation: normalize_degrees(rotation),
            dimensions,
        }
    }

    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose { position: self.position, rotation: self.rotation }
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.position = pose.position;
        self.rotation = normalize_degrees(pose.rotation);
    }
}

/// Position and rotation of an object, captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub rotation: f64,
}

/// Rejected numeric room input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoomInputError {
    #[error("room dimension is not a number: {0:?}")]
    NotNumeric(String),
    #[error("room dimension {value} must be greater than {min}")]
    BelowMinimum { value: f64, min: f64 },
}

/// The bounded floor the objects live in. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
}

impl Room {
    #[must_use]
    pub fn new(width: f64, height: f64, wall_thickness: f64) -> Self {
        Self { width, height, wall_thickness }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Parse a room extent typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for text that is not a finite number and
    /// `BelowMinimum` for values `<= min`.
    pub fn parse_extent(raw: &str, min: f64) -> Result<f64, RoomInputError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| RoomInputError::NotNumeric(raw.to_string()))?;
        if !value.is_finite() {
            return Err(RoomInputError::NotNumeric(raw.to_string()));
        }
        if value <= min {
            return Err(RoomInputError::BelowMinimum { value, min });
        }
        Ok(value)
    }
}

/// In-memory store of placed objects.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<PlacedObject>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Append an object, replacing any existing object with the same id in place.
    pub fn insert(&mut self, object: PlacedObject) {
        if let Some(existing) = self.get_mut(&object.id) {
            *existing = object;
        } else {
            self.objects.push(object);
        }
    }

    /// Replace all objects.
    pub fn load(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Remove every listed object, returning the ids that were present.
    pub fn remove_many(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let mut removed = Vec::new();
        self.objects.retain(|o| {
            if ids.contains(&o.id) {
                removed.push(o.id);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlacedObject> {
        self.objects.iter_mut()
    }

    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Ids of every object in `group`, in scene order.
    #[must_use]
    pub fn group_members(&self, group: GroupId) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.group_id == Some(group))
            .map(|o| o.id)
            .collect()
    }

    /// The whole group an object belongs to, or just the object when ungrouped.
    #[must_use]
    pub fn group_of(&self, id: &ObjectId) -> Vec<ObjectId> {
        match self.get(id) {
            Some(PlacedObject { group_id: Some(group), .. }) => self.group_members(*group),
            Some(object) => vec![object.id],
            None => Vec::new(),
        }
    }

    /// Clear `group_id` on objects that are the last member of their group.
    ///
    /// Returns the ids that were modified.
    pub fn prune_singleton_groups(&mut self) -> Vec<ObjectId> {
        let mut counts: HashMap<GroupId, usize> = HashMap::new();
        for group in self.objects.iter().filter_map(|o| o.group_id) {
            *counts.entry(group).or_default() += 1;
        }
        let mut pruned = Vec::new();
        for object in &mut self.objects {
            if let Some(group) = object.group_id {
                if counts.get(&group).copied().unwrap_or_default() < 2 {
                    object.group_id = None;
                    pruned.push(object.id);
                }
            }
        }
        pruned
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
