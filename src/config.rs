//! Layout tunables parsed from environment variables.
//!
//! Every field falls back to its [`crate::consts`] default when the variable
//! is absent. An unparseable or non-positive value is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Wall proximity that captures a structural leader.
    pub structural_radius: f64,
    /// Inset of a swing aperture's center from the wall line.
    pub structural_inset: f64,
    /// Edge/centerline proximity that captures a freestanding leader.
    pub freestanding_radius: f64,
    /// Fallback grid cell for freestanding leaders.
    pub grid_cell: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub room_width: f64,
    pub room_height: f64,
    pub wall_thickness: f64,
    pub min_room_input: f64,
    pub min_room_drag: f64,
    pub snap: SnapConfig,
    pub rotation_step_deg: f64,
    pub quick_rotate_deg: f64,
    pub nudge_step: f64,
    pub nudge_step_coarse: f64,
    pub duplicate_offset: f64,
    pub spawn_jitter: f64,
    pub resize_threshold: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_width: consts::DEFAULT_ROOM_WIDTH,
            room_height: consts::DEFAULT_ROOM_HEIGHT,
            wall_thickness: consts::DEFAULT_WALL_THICKNESS,
            min_room_input: consts::MIN_ROOM_INPUT,
            min_room_drag: consts::MIN_ROOM_DRAG,
            snap: SnapConfig {
                structural_radius: consts::STRUCTURAL_SNAP_RADIUS,
                structural_inset: consts::STRUCTURAL_INSET,
                freestanding_radius: consts::FREESTANDING_SNAP_RADIUS,
                grid_cell: consts::GRID_CELL,
            },
            rotation_step_deg: consts::ROTATION_STEP_DEG,
            quick_rotate_deg: consts::QUICK_ROTATE_DEG,
            nudge_step: consts::NUDGE_STEP,
            nudge_step_coarse: consts::NUDGE_STEP_COARSE,
            duplicate_offset: consts::DUPLICATE_OFFSET,
            spawn_jitter: consts::SPAWN_JITTER,
            resize_threshold: consts::RESIZE_STICKY_THRESHOLD,
            min_zoom: consts::MIN_ZOOM,
            max_zoom: consts::MAX_ZOOM,
        }
    }
}

impl LayoutConfig {
    /// Build the config from environment variables.
    ///
    /// Optional (defaults in [`crate::consts`]):
    /// - `ROOMPLAN_ROOM_WIDTH`, `ROOMPLAN_ROOM_HEIGHT`, `ROOMPLAN_WALL_THICKNESS`
    /// - `ROOMPLAN_MIN_ROOM_INPUT`, `ROOMPLAN_MIN_ROOM_DRAG`
    /// - `ROOMPLAN_STRUCTURAL_SNAP_RADIUS`, `ROOMPLAN_STRUCTURAL_INSET`
    /// - `ROOMPLAN_FREESTANDING_SNAP_RADIUS`, `ROOMPLAN_GRID_CELL`
    /// - `ROOMPLAN_ROTATION_STEP_DEG`, `ROOMPLAN_QUICK_ROTATE_DEG`
    /// - `ROOMPLAN_NUDGE_STEP`, `ROOMPLAN_NUDGE_STEP_COARSE`
    /// - `ROOMPLAN_DUPLICATE_OFFSET`, `ROOMPLAN_SPAWN_JITTER`
    /// - `ROOMPLAN_RESIZE_THRESHOLD`
    /// - `ROOMPLAN_MIN_ZOOM`, `ROOMPLAN_MAX_ZOOM`
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        let min_zoom = env_positive("ROOMPLAN_MIN_ZOOM", d.min_zoom);
        let max_zoom = env_positive("ROOMPLAN_MAX_ZOOM", d.max_zoom).max(min_zoom);
        Self {
            room_width: env_positive("ROOMPLAN_ROOM_WIDTH", d.room_width),
            room_height: env_positive("ROOMPLAN_ROOM_HEIGHT", d.room_height),
            wall_thickness: env_positive("ROOMPLAN_WALL_THICKNESS", d.wall_thickness),
            min_room_input: env_positive("ROOMPLAN_MIN_ROOM_INPUT", d.min_room_input),
            min_room_drag: env_positive("ROOMPLAN_MIN_ROOM_DRAG", d.min_room_drag),
            snap: SnapConfig {
                structural_radius: env_positive("ROOMPLAN_STRUCTURAL_SNAP_RADIUS", d.snap.structural_radius),
                structural_inset: env_parse("ROOMPLAN_STRUCTURAL_INSET", d.snap.structural_inset),
                freestanding_radius: env_positive("ROOMPLAN_FREESTANDING_SNAP_RADIUS", d.snap.freestanding_radius),
                grid_cell: env_positive("ROOMPLAN_GRID_CELL", d.snap.grid_cell),
            },
            rotation_step_deg: env_positive("ROOMPLAN_ROTATION_STEP_DEG", d.rotation_step_deg),
            quick_rotate_deg: env_parse("ROOMPLAN_QUICK_ROTATE_DEG", d.quick_rotate_deg),
            nudge_step: env_positive("ROOMPLAN_NUDGE_STEP", d.nudge_step),
            nudge_step_coarse: env_positive("ROOMPLAN_NUDGE_STEP_COARSE", d.nudge_step_coarse),
            duplicate_offset: env_parse("ROOMPLAN_DUPLICATE_OFFSET", d.duplicate_offset),
            spawn_jitter: env_parse("ROOMPLAN_SPAWN_JITTER", d.spawn_jitter).max(0.0),
            resize_threshold: env_positive("ROOMPLAN_RESIZE_THRESHOLD", d.resize_threshold),
            min_zoom,
            max_zoom,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, raw = %raw, "ignoring unparseable layout setting");
            default
        }
    }
}

fn env_positive(key: &str, default: f64) -> f64 {
    let value = env_parse(key, default);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!(key, value, "layout setting must be positive; using default");
        default
    }
}
