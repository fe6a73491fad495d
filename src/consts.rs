//! Default values for the layout tunables.
//!
//! Every value here can be overridden at runtime through
//! [`crate::config::LayoutConfig`].

// ── Room ────────────────────────────────────────────────────────

/// Initial room width in room units.
pub const DEFAULT_ROOM_WIDTH: f64 = 600.0;

/// Initial room height in room units.
pub const DEFAULT_ROOM_HEIGHT: f64 = 600.0;

/// Wall thickness; only structural placement math depends on it.
pub const DEFAULT_WALL_THICKNESS: f64 = 8.0;

/// Numeric room input must be strictly greater than this.
pub const MIN_ROOM_INPUT: f64 = 100.0;

/// Floor for room extents produced by dragging a resize handle.
pub const MIN_ROOM_DRAG: f64 = 200.0;

// ── Snapping ────────────────────────────────────────────────────

/// Wall proximity that captures a structural leader.
pub const STRUCTURAL_SNAP_RADIUS: f64 = 50.0;

/// Inset of a swing aperture's center from the wall line.
pub const STRUCTURAL_INSET: f64 = 10.0;

/// Edge/centerline proximity that captures a freestanding leader.
pub const FREESTANDING_SNAP_RADIUS: f64 = 20.0;

/// Grid cell used when a freestanding leader snaps to nothing.
pub const GRID_CELL: f64 = 10.0;

// ── Transforms ──────────────────────────────────────────────────

/// Rotation gesture quantization step in degrees.
pub const ROTATION_STEP_DEG: f64 = 15.0;

/// Rotation applied by the quick-rotate command.
pub const QUICK_ROTATE_DEG: f64 = 45.0;

/// Arrow-key nudge distance.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge distance with Shift held.
pub const NUDGE_STEP_COARSE: f64 = 10.0;

/// Offset applied on both axes to duplicated objects.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Maximum center jitter on each axis for newly spawned furniture.
pub const SPAWN_JITTER: f64 = 20.0;

// ── Resize relocation ───────────────────────────────────────────

/// Distance within which an object follows a moving wall.
pub const RESIZE_STICKY_THRESHOLD: f64 = 100.0;

// ── View ────────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.2;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom change per wheel pixel while Ctrl/Meta is held.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.005;

/// Lowest effective view scale.
pub const MIN_VIEW_SCALE: f64 = 0.1;

/// Largest fit scale chosen by `fit_to_viewport`.
pub const MAX_FIT_SCALE: f64 = 1.2;

/// Viewport padding on each side when fitting the room.
pub const FIT_PADDING_PX: f64 = 80.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for the rotate handle.
pub const HANDLE_RADIUS_PX: f64 = 10.0;

/// Distance from the selection's top edge to the rotate handle, in room units.
pub const ROTATE_HANDLE_OFFSET: f64 = 40.0;

/// Half-width of the room resize grip bands, in room units.
pub const RESIZE_GRIP_HALF_WIDTH: f64 = 20.0;
