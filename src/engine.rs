//! Selection & transform controller.
//!
//! `EngineCore` owns the scene, the room, the view, and the current
//! selection, and turns host input events into scene mutations. Every
//! mutation that moves or rotates an object re-runs collision detection
//! before the handler returns. Handlers report what changed as a list of
//! [`Action`]s; the host re-reads whatever state it renders.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::camera::Camera;
use crate::catalog::{Catalog, ObjectClass};
use crate::collision::colliding_ids;
use crate::config::LayoutConfig;
use crate::consts::WHEEL_ZOOM_FACTOR;
use crate::geom::{Bounds, Point, clamp_to, oriented_bounding_box, rotate_point};
use crate::hit::{self, Hit};
use crate::input::{Button, Gesture, Key, Modifiers, Mode, WheelDelta};
use crate::relocate::relocate;
use crate::scene::{GroupId, ObjectId, PlacedObject, Pose, Room, RoomInputError, Scene};
use crate::snap::{GuideOrientation, SnapGuide, SnapResult, snap_leader, snap_structural};

/// What changed as the result of a handler or command.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectsAdded(Vec<ObjectId>),
    ObjectsChanged(Vec<ObjectId>),
    ObjectsRemoved(Vec<ObjectId>),
    SelectionChanged(Vec<ObjectId>),
    /// The colliding-id set changed; read it from [`EngineCore::collisions`].
    CollisionsChanged,
    GuidesChanged(Vec<SnapGuide>),
    RoomChanged(Room),
    ViewChanged(Camera),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("cannot start a gesture while {active}")]
    Busy { active: Mode },
    #[error("nothing is selected")]
    NothingSelected,
    #[error("grouping needs at least two objects, got {0}")]
    GroupTooSmall(usize),
    #[error("unknown object type: {0}")]
    UnknownType(String),
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),
    #[error(transparent)]
    Room(#[from] RoomInputError),
}

/// Room extent addressed by numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAxis {
    Width,
    Height,
}

/// Core engine state.
pub struct EngineCore {
    pub scene: Scene,
    pub room: Room,
    pub camera: Camera,
    /// Selected ids in selection order.
    pub selection: Vec<ObjectId>,
    pub collisions: HashSet<ObjectId>,
    /// Guides for the current drag; empty when not dragging.
    pub guides: Vec<SnapGuide>,
    pub gesture: Gesture,
    pub config: LayoutConfig,
    pub catalog: Box<dyn Catalog>,
    /// Primary drags pan the view while Space is held.
    pub space_held: bool,
    rng: StdRng,
}

impl EngineCore {
    /// Create an engine with an empty scene and an entropy-seeded spawn jitter.
    #[must_use]
    pub fn new(catalog: Box<dyn Catalog>, config: LayoutConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an engine whose spawn jitter is reproducible.
    #[must_use]
    pub fn with_seed(catalog: Box<dyn Catalog>, config: LayoutConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Box<dyn Catalog>, config: LayoutConfig, rng: StdRng) -> Self {
        Self {
            scene: Scene::new(),
            room: Room::new(config.room_width, config.room_height, config.wall_thickness),
            camera: Camera::default(),
            selection: Vec::new(),
            collisions: HashSet::new(),
            guides: Vec::new(),
            gesture: Gesture::Idle,
            config,
            catalog,
            space_held: false,
            rng,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.scene.get(id)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn collisions(&self) -> &HashSet<ObjectId> {
        &self.collisions
    }

    /// Object ids back-to-front for painting.
    #[must_use]
    pub fn draw_order(&self) -> Vec<ObjectId> {
        hit::draw_order(&self.scene, self.catalog.as_ref())
    }

    /// Axis-aligned bounds of the whole selection.
    #[must_use]
    pub fn selection_bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.selection.iter().filter_map(|id| self.scene.get(id)))
    }

    /// Whether any selected object belongs to a group.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.selected_objects().any(|o| o.group_id.is_some())
    }

    /// More than one object selected, and not already exactly one group.
    #[must_use]
    pub fn can_group(&self) -> bool {
        if self.selection.len() < 2 {
            return false;
        }
        let mut groups = self.selected_objects().map(|o| o.group_id);
        let first = groups.next().flatten();
        !(first.is_some() && groups.all(|g| g == first))
    }

    /// Whether any selected object is in the colliding set.
    #[must_use]
    pub fn selection_colliding(&self) -> bool {
        self.selection.iter().any(|id| self.collisions.contains(id))
    }

    fn selected_objects(&self) -> impl Iterator<Item = &PlacedObject> {
        self.selection.iter().filter_map(|id| self.scene.get(id))
    }

    fn selected_poses(&self) -> Vec<(ObjectId, Pose)> {
        self.selected_objects().map(|o| (o.id, o.pose())).collect()
    }

    /// Recompute the colliding set. Returns whether it changed.
    pub fn refresh_collisions(&mut self) -> bool {
        let next = colliding_ids(self.scene.iter(), self.catalog.as_ref());
        if next == self.collisions {
            return false;
        }
        self.collisions = next;
        true
    }

    fn push_collisions(&mut self, actions: &mut Vec<Action>) {
        if self.refresh_collisions() {
            actions.push(Action::CollisionsChanged);
        }
    }

    // --- Scene commands ---

    /// Place the starting door and window.
    pub fn seed_default_scene(&mut self) -> Vec<Action> {
        let bottom_left = Point::new(120.0, self.room.height);
        let top_center = Point::new(self.room.width / 2.0, 0.0);
        let mut added = Vec::new();
        for (type_ref, candidate) in [("door", bottom_left), ("window", top_center)] {
            match self.spawn_structural(type_ref, candidate) {
                Ok(id) => added.push(id),
                Err(err) => warn!(%err, type_ref, "skipping default scene object"),
            }
        }
        let mut actions = Vec::new();
        if !added.is_empty() {
            actions.push(Action::ObjectsAdded(added));
        }
        self.push_collisions(&mut actions);
        actions
    }

    fn spawn_structural(&mut self, type_ref: &str, candidate: Point) -> Result<ObjectId, EngineError> {
        let entry = self
            .catalog
            .lookup(type_ref)
            .ok_or_else(|| EngineError::UnknownType(type_ref.to_string()))?;
        let ObjectClass::Structural(aperture) = entry.class else {
            return Err(EngineError::UnknownType(type_ref.to_string()));
        };
        let dims = entry.default_dimensions;
        let snapped = snap_structural(dims, aperture, candidate, &self.room, &self.config.snap);
        let object = PlacedObject::new(type_ref, snapped.position, snapped.rotation.unwrap_or(0.0), dims);
        let id = object.id;
        self.scene.insert(object);
        Ok(id)
    }

    /// Add a catalog object and select it.
    ///
    /// Wall openings spawn snapped to the top wall; everything else spawns
    /// near the room center with a small random offset.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` when `type_ref` is not in the catalog.
    pub fn add_object(&mut self, type_ref: &str) -> Result<Vec<Action>, EngineError> {
        let Some(entry) = self.catalog.lookup(type_ref) else {
            warn!(type_ref, "add_object: type not in catalog");
            return Err(EngineError::UnknownType(type_ref.to_string()));
        };
        let (class, dims) = (entry.class, entry.default_dimensions);

        let id = if class.is_structural() {
            self.spawn_structural(type_ref, Point::new(self.room.width / 2.0, 0.0))?
        } else {
            let position = self.room.center().offset(self.jitter(), self.jitter());
            let object = PlacedObject::new(type_ref, position, 0.0, dims);
            let id = object.id;
            self.scene.insert(object);
            id
        };
        debug!(%id, type_ref, "object added");

        self.selection = vec![id];
        let mut actions = vec![Action::ObjectsAdded(vec![id]), Action::SelectionChanged(self.selection.clone())];
        self.push_collisions(&mut actions);
        Ok(actions)
    }

    fn jitter(&mut self) -> f64 {
        let j = self.config.spawn_jitter;
        if j.is_finite() && j > 0.0 { self.rng.random_range(-j..=j) } else { 0.0 }
    }

    /// Select an object's whole group.
    ///
    /// With `additive`, the group is toggled in the existing selection.
    /// Without it, an already-selected object keeps the selection as is.
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` for a missing id and `UnknownType` for an
    /// object whose type is not in the catalog.
    pub fn select_object(&mut self, id: ObjectId, additive: bool) -> Result<Vec<Action>, EngineError> {
        let object = self.scene.get(&id).ok_or(EngineError::UnknownObject(id))?;
        if self.catalog.lookup(&object.type_ref).is_none() {
            return Err(EngineError::UnknownType(object.type_ref.clone()));
        }

        let group: Vec<ObjectId> = self
            .scene
            .group_of(&id)
            .into_iter()
            .filter(|member| {
                self.scene
                    .get(member)
                    .is_some_and(|o| self.catalog.lookup(&o.type_ref).is_some())
            })
            .collect();
        let before = self.selection.clone();
        if additive {
            if group.iter().all(|g| self.selection.contains(g)) {
                self.selection.retain(|s| !group.contains(s));
            } else {
                for member in group {
                    if !self.selection.contains(&member) {
                        self.selection.push(member);
                    }
                }
            }
        } else if !self.selection.contains(&id) {
            self.selection = group;
        }

        if self.selection == before {
            Ok(Vec::new())
        } else {
            Ok(vec![Action::SelectionChanged(self.selection.clone())])
        }
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.selection.clear();
        vec![Action::SelectionChanged(Vec::new())]
    }

    /// Move each selected object by `(dx, dy)`, clamping each one inside the room.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` on an empty selection.
    pub fn nudge(&mut self, dx: f64, dy: f64) -> Result<Vec<Action>, EngineError> {
        if self.selection.is_empty() {
            return Err(EngineError::NothingSelected);
        }
        let room = self.room;
        let mut changed = Vec::new();
        for id in &self.selection {
            let Some(object) = self.scene.get_mut(id) else {
                continue;
            };
            let extent = oriented_bounding_box(object.dimensions, object.rotation);
            let (hw, hh) = (extent.width / 2.0, extent.height / 2.0);
            object.position = Point::new(
                clamp_to(object.position.x + dx, hw, room.width - hw),
                clamp_to(object.position.y + dy, hh, room.height - hh),
            );
            changed.push(*id);
        }
        let mut actions = vec![Action::ObjectsChanged(changed)];
        self.push_collisions(&mut actions);
        Ok(actions)
    }

    /// Rotate the selection rigidly about its bounds' center.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` on an empty selection.
    pub fn rotate_selection(&mut self, delta_deg: f64) -> Result<Vec<Action>, EngineError> {
        let pivot = self.selection_bounds().ok_or(EngineError::NothingSelected)?.center();
        let initial = self.selected_poses();
        Ok(self.apply_rotation(&initial, pivot, delta_deg))
    }

    fn apply_rotation(&mut self, initial: &[(ObjectId, Pose)], pivot: Point, delta_deg: f64) -> Vec<Action> {
        let mut changed = Vec::new();
        for (id, pose) in initial {
            if let Some(object) = self.scene.get_mut(id) {
                object.set_pose(Pose {
                    position: rotate_point(pose.position, pivot, delta_deg),
                    rotation: pose.rotation + delta_deg,
                });
                changed.push(*id);
            }
        }
        let mut actions = vec![Action::ObjectsChanged(changed)];
        self.push_collisions(&mut actions);
        actions
    }

    /// Put every selected object into one new group.
    ///
    /// # Errors
    ///
    /// Returns `GroupTooSmall` when fewer than two objects are selected.
    pub fn group_selection(&mut self) -> Result<Vec<Action>, EngineError> {
        if self.selection.len() < 2 {
            return Err(EngineError::GroupTooSmall(self.selection.len()));
        }
        let group: GroupId = Uuid::new_v4();
        for id in &self.selection {
            if let Some(object) = self.scene.get_mut(id) {
                object.group_id = Some(group);
            }
        }
        let mut changed = self.selection.clone();
        merge_ids(&mut changed, self.scene.prune_singleton_groups());
        info!(%group, members = self.selection.len(), "grouped selection");
        Ok(vec![Action::ObjectsChanged(changed)])
    }

    /// Clear the group of every selected object.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` on an empty selection.
    pub fn ungroup_selection(&mut self) -> Result<Vec<Action>, EngineError> {
        if self.selection.is_empty() {
            return Err(EngineError::NothingSelected);
        }
        let mut changed = Vec::new();
        for id in &self.selection {
            if let Some(object) = self.scene.get_mut(id)
                && object.group_id.take().is_some()
            {
                changed.push(*id);
            }
        }
        merge_ids(&mut changed, self.scene.prune_singleton_groups());
        if changed.is_empty() {
            return Ok(Vec::new());
        }
        debug!(count = changed.len(), "ungrouped selection");
        Ok(vec![Action::ObjectsChanged(changed)])
    }

    /// Clone the selection at a fixed offset and select the clones.
    ///
    /// Clones of one source group share one new group.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` on an empty selection.
    pub fn duplicate_selection(&mut self) -> Result<Vec<Action>, EngineError> {
        if self.selection.is_empty() {
            return Err(EngineError::NothingSelected);
        }
        let offset = self.config.duplicate_offset;
        let mut remap: HashMap<GroupId, GroupId> = HashMap::new();
        let clones: Vec<PlacedObject> = self
            .selected_objects()
            .map(|source| PlacedObject {
                id: Uuid::new_v4(),
                group_id: source.group_id.map(|g| *remap.entry(g).or_insert_with(Uuid::new_v4)),
                position: source.position.offset(offset, offset),
                ..source.clone()
            })
            .collect();

        let added: Vec<ObjectId> = clones.iter().map(|o| o.id).collect();
        for clone in clones {
            self.scene.insert(clone);
        }
        let pruned = self.scene.prune_singleton_groups();
        debug!(count = added.len(), "duplicated selection");

        self.selection = added.clone();
        let mut actions = vec![Action::ObjectsAdded(added), Action::SelectionChanged(self.selection.clone())];
        if !pruned.is_empty() {
            actions.push(Action::ObjectsChanged(pruned));
        }
        self.push_collisions(&mut actions);
        Ok(actions)
    }

    /// Remove the listed objects and clear the selection.
    pub fn delete(&mut self, ids: &[ObjectId]) -> Vec<Action> {
        let removed = self.scene.remove_many(ids);
        let mut actions = Vec::new();
        if !removed.is_empty() {
            debug!(count = removed.len(), "deleted objects");
            actions.push(Action::ObjectsRemoved(removed));
        }
        let pruned = self.scene.prune_singleton_groups();
        if !pruned.is_empty() {
            actions.push(Action::ObjectsChanged(pruned));
        }
        actions.extend(self.clear_selection());
        self.push_collisions(&mut actions);
        actions
    }

    /// # Errors
    ///
    /// Returns `NothingSelected` on an empty selection.
    pub fn delete_selection(&mut self) -> Result<Vec<Action>, EngineError> {
        if self.selection.is_empty() {
            return Err(EngineError::NothingSelected);
        }
        let ids = self.selection.clone();
        Ok(self.delete(&ids))
    }

    // --- Room ---

    /// Resize the room and relocate objects stuck to the moving walls.
    ///
    /// # Errors
    ///
    /// Rejects non-finite extents and extents not above the numeric input minimum.
    pub fn resize_room(&mut self, width: f64, height: f64) -> Result<Vec<Action>, EngineError> {
        let min = self.config.min_room_input;
        for value in [width, height] {
            if !value.is_finite() {
                return Err(RoomInputError::NotNumeric(value.to_string()).into());
            }
            if value <= min {
                return Err(RoomInputError::BelowMinimum { value, min }.into());
            }
        }
        Ok(self.apply_room(width, height))
    }

    fn apply_room(&mut self, width: f64, height: f64) -> Vec<Action> {
        let old = self.room;
        let new = Room::new(width, height, old.wall_thickness);
        if new == old {
            return Vec::new();
        }
        let moved = relocate(&mut self.scene, self.catalog.as_ref(), &old, &new, self.config.resize_threshold);
        self.room = new;
        info!(width, height, moved = moved.len(), "room resized");

        let mut actions = vec![Action::RoomChanged(new)];
        if !moved.is_empty() {
            actions.push(Action::ObjectsChanged(moved));
        }
        self.push_collisions(&mut actions);
        actions
    }

    /// Set one room extent from text typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `Room` for non-numeric input or values not above the minimum;
    /// the room is left unchanged.
    pub fn set_room_dimension_from_input(&mut self, axis: RoomAxis, raw: &str) -> Result<Vec<Action>, EngineError> {
        let value = Room::parse_extent(raw, self.config.min_room_input).inspect_err(|err| {
            warn!(%err, ?axis, "rejected room dimension input");
        })?;
        let (width, height) = match axis {
            RoomAxis::Width => (value, self.room.height),
            RoomAxis::Height => (self.room.width, value),
        };
        Ok(self.apply_room(width, height))
    }

    // --- View ---

    pub fn fit_to_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.camera.fit_to_viewport(width, height, &self.room);
        vec![Action::ViewChanged(self.camera)]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.pointer_down(screen_pt, button, modifiers).unwrap_or_else(|err| {
            debug!(%err, "pointer down ignored");
            Vec::new()
        })
    }

    fn pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Result<Vec<Action>, EngineError> {
        if !self.gesture.is_idle() {
            return Err(EngineError::Busy { active: self.gesture.mode() });
        }

        let pans = button == Button::Middle || (button == Button::Primary && self.space_held);
        if pans {
            self.gesture = Gesture::Panning {
                start_screen: screen_pt,
                initial_pan: Point::new(self.camera.pan_x, self.camera.pan_y),
            };
            debug!("pan started");
            return Ok(Vec::new());
        }
        if button != Button::Primary {
            return Ok(Vec::new());
        }

        let room_pt = self.camera.screen_to_room(screen_pt);
        let hit = hit::hit_test(
            room_pt,
            &self.scene,
            self.catalog.as_ref(),
            &self.room,
            &self.camera,
            self.selection_bounds(),
        );

        match hit {
            Some(Hit::RotateHandle) => {
                let pivot = self.selection_bounds().ok_or(EngineError::NothingSelected)?.center();
                self.gesture = Gesture::Rotating {
                    pivot,
                    start_angle: pointer_angle(room_pt, pivot),
                    initial: self.selected_poses(),
                };
                debug!(count = self.selection.len(), "rotate started");
                Ok(Vec::new())
            }
            Some(Hit::Object(id)) => {
                let actions = self.select_object(id, modifiers.shift)?;
                if self.selection.contains(&id) {
                    if let Some(bounds) = self.selection_bounds() {
                        self.gesture = Gesture::Dragging {
                            leader: id,
                            start_screen: screen_pt,
                            initial: self.selected_poses(),
                            bounds,
                        };
                        debug!(leader = %id, count = self.selection.len(), "drag started");
                    }
                }
                Ok(actions)
            }
            Some(Hit::RoomEdge(edge)) => {
                self.gesture = Gesture::ResizingRoom {
                    edge,
                    start_screen: screen_pt,
                    start_width: self.room.width,
                    start_height: self.room.height,
                };
                debug!(?edge, "room resize started");
                Ok(Vec::new())
            }
            None => Ok(self.clear_selection()),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        let actions = match &gesture {
            Gesture::Idle => Vec::new(),
            Gesture::Panning { start_screen, initial_pan } => {
                self.camera.pan_x = initial_pan.x + (screen_pt.x - start_screen.x);
                self.camera.pan_y = initial_pan.y + (screen_pt.y - start_screen.y);
                vec![Action::ViewChanged(self.camera)]
            }
            Gesture::Dragging { leader, start_screen, initial, bounds } => {
                let dx = self.camera.screen_dist_to_room(screen_pt.x - start_screen.x);
                let dy = self.camera.screen_dist_to_room(screen_pt.y - start_screen.y);
                self.drag_to(*leader, initial, bounds, dx, dy)
            }
            Gesture::Rotating { pivot, start_angle, initial } => {
                let raw = pointer_angle(self.camera.screen_to_room(screen_pt), *pivot) - start_angle;
                let step = self.config.rotation_step_deg;
                let delta = (raw / step).round() * step;
                self.apply_rotation(initial, *pivot, delta)
            }
            Gesture::ResizingRoom { edge, start_screen, start_width, start_height } => {
                let floor = self.config.min_room_drag;
                let width = if edge.affects_width() {
                    let dx = self.camera.screen_dist_to_room(screen_pt.x - start_screen.x);
                    (start_width + dx).max(floor).round()
                } else {
                    self.room.width
                };
                let height = if edge.affects_height() {
                    let dy = self.camera.screen_dist_to_room(screen_pt.y - start_screen.y);
                    (start_height + dy).max(floor).round()
                } else {
                    self.room.height
                };
                self.apply_room(width, height)
            }
        };
        self.gesture = gesture;
        actions
    }

    fn drag_to(&mut self, leader: ObjectId, initial: &[(ObjectId, Pose)], bounds: &Bounds, dx: f64, dy: f64) -> Vec<Action> {
        let Some(leader_pose) = initial.iter().find(|(id, _)| *id == leader).map(|(_, p)| *p) else {
            return Vec::new();
        };
        let Some(leader_obj) = self.scene.get(&leader) else {
            return Vec::new();
        };
        let Some(class) = self.catalog.class_of(&leader_obj.type_ref) else {
            return Vec::new();
        };

        let (offset, rotation_delta, snapped) = if let ObjectClass::Structural(aperture) = class {
            let candidate = leader_pose.position.offset(dx, dy);
            let snap = snap_structural(leader_obj.dimensions, aperture, candidate, &self.room, &self.config.snap);
            let offset = (snap.position.x - leader_pose.position.x, snap.position.y - leader_pose.position.y);
            let rotation_delta = snap.rotation.map_or(0.0, |r| r - leader_pose.rotation);
            (offset, rotation_delta, snap)
        } else {
            let (cdx, cdy) = clamp_delta(bounds, dx, dy, &self.room);
            let candidate = leader_pose.position.offset(cdx, cdy);
            let snap = snap_leader(leader_obj, candidate, self.catalog.as_ref(), &self.room, &self.config.snap)
                .unwrap_or(SnapResult { position: candidate, rotation: None, guides: Vec::new() });
            let raw = (snap.position.x - leader_pose.position.x, snap.position.y - leader_pose.position.y);
            let clamped = clamp_delta(bounds, raw.0, raw.1, &self.room);
            let mut snap = snap;
            // A guide only stands if the clamp left its axis on the snapped line.
            snap.guides.retain(|g| match g.orientation {
                GuideOrientation::Vertical => same(clamped.0, raw.0),
                GuideOrientation::Horizontal => same(clamped.1, raw.1),
            });
            (clamped, 0.0, snap)
        };

        let mut changed = Vec::new();
        for (id, pose) in initial {
            if let Some(object) = self.scene.get_mut(id) {
                object.set_pose(Pose {
                    position: pose.position.offset(offset.0, offset.1),
                    rotation: pose.rotation + rotation_delta,
                });
                changed.push(*id);
            }
        }

        let mut actions = vec![Action::ObjectsChanged(changed)];
        if snapped.guides != self.guides {
            self.guides = snapped.guides;
            actions.push(Action::GuidesChanged(self.guides.clone()));
        }
        self.push_collisions(&mut actions);
        actions
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        debug!(mode = %gesture.mode(), "gesture ended");
        let mut actions = Vec::new();
        if !self.guides.is_empty() {
            self.guides.clear();
            actions.push(Action::GuidesChanged(Vec::new()));
        }
        actions
    }

    pub fn on_wheel(&mut self, _screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            self.camera
                .zoom_by(-delta.dy * WHEEL_ZOOM_FACTOR, self.config.min_zoom, self.config.max_zoom);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::ViewChanged(self.camera)]
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.key_down(&key, modifiers).unwrap_or_else(|err| {
            debug!(%err, key = %key.0, "key ignored");
            Vec::new()
        })
    }

    fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Result<Vec<Action>, EngineError> {
        if is_space(key) {
            self.space_held = true;
            return Ok(Vec::new());
        }
        if !self.gesture.is_idle() || self.selection.is_empty() {
            return Ok(Vec::new());
        }

        let step = if modifiers.shift { self.config.nudge_step_coarse } else { self.config.nudge_step };
        match key.0.as_str() {
            "Escape" => Ok(self.clear_selection()),
            "ArrowUp" => self.nudge(0.0, -step),
            "ArrowDown" => self.nudge(0.0, step),
            "ArrowLeft" => self.nudge(-step, 0.0),
            "ArrowRight" => self.nudge(step, 0.0),
            "Delete" | "Backspace" => self.delete_selection(),
            _ if modifiers.command() && key.is_char('d') => self.duplicate_selection(),
            _ if modifiers.command() && key.is_char('g') && modifiers.shift => self.ungroup_selection(),
            _ if modifiers.command() && key.is_char('g') => self.group_selection(),
            _ if !modifiers.command() && key.is_char('r') => self.rotate_selection(self.config.quick_rotate_deg),
            _ => Ok(Vec::new()),
        }
    }

    pub fn on_key_up(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if is_space(&key) {
            self.space_held = false;
        }
        Vec::new()
    }
}

fn is_space(key: &Key) -> bool {
    matches!(key.0.as_str(), " " | "Space" | "Spacebar")
}

/// Pointer angle about `pivot` in degrees, clockwise on screen.
fn pointer_angle(p: Point, pivot: Point) -> f64 {
    (p.y - pivot.y).atan2(p.x - pivot.x).to_degrees()
}

/// Restrict a translation so the selection's captured bounds stay inside the room.
fn clamp_delta(bounds: &Bounds, dx: f64, dy: f64, room: &Room) -> (f64, f64) {
    (
        clamp_to(dx, -bounds.min_x, room.width - bounds.max_x),
        clamp_to(dy, -bounds.min_y, room.height - bounds.max_y),
    )
}

fn same(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

fn merge_ids(into: &mut Vec<ObjectId>, more: Vec<ObjectId>) {
    for id in more {
        if !into.contains(&id) {
            into.push(id);
        }
    }
}
