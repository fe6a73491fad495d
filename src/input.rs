//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Modifiers`, `Button`, `Key`, and `WheelDelta` describe a raw host event.
//! `Gesture` is the active pointer gesture tracked between pointer-down and
//! pointer-up. Each active variant carries the capture record needed to
//! compute the next frame from the gesture's start, never from the previous
//! frame, so rounding never accumulates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use crate::geom::{Bounds, Point};
use crate::scene::{ObjectId, Pose};

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the browser reports it (e.g. `"Delete"`, `"ArrowUp"`, `"r"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Case-insensitive match for single-character keys.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(k), None) if k.eq_ignore_ascii_case(&c))
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Which room handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Right wall: changes width.
    Right,
    /// Bottom wall: changes height.
    Bottom,
    /// Bottom-right corner: changes both.
    Corner,
}

impl ResizeEdge {
    #[must_use]
    pub fn affects_width(self) -> bool {
        matches!(self, Self::Right | Self::Corner)
    }

    #[must_use]
    pub fn affects_height(self) -> bool {
        matches!(self, Self::Bottom | Self::Corner)
    }
}

/// Interaction mode, without the gesture's capture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
    Rotating,
    ResizingRoom,
    Panning,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Rotating => "rotating",
            Self::ResizingRoom => "resizing-room",
            Self::Panning => "panning",
        };
        f.write_str(name)
    }
}

/// The active pointer gesture.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view.
    Panning {
        /// Screen-space pointer position at gesture start.
        start_screen: Point,
        /// Camera pan at gesture start.
        initial_pan: Point,
    },
    /// The user is moving the selection.
    Dragging {
        /// The object under the pointer; the one that snaps.
        leader: ObjectId,
        /// Screen-space pointer position at gesture start.
        start_screen: Point,
        /// Pose of every selected object at gesture start.
        initial: Vec<(ObjectId, Pose)>,
        /// Axis-aligned bounds of the whole selection at gesture start.
        bounds: Bounds,
    },
    /// The user is rotating the selection by its handle.
    Rotating {
        /// Room-space rotation center: the selection bounds' center at gesture start.
        pivot: Point,
        /// Pointer angle about the pivot at gesture start, in degrees.
        start_angle: f64,
        /// Pose of every selected object at gesture start.
        initial: Vec<(ObjectId, Pose)>,
    },
    /// The user is dragging a room resize handle.
    ResizingRoom {
        /// Which handle is held.
        edge: ResizeEdge,
        /// Screen-space pointer position at gesture start.
        start_screen: Point,
        /// Room width at gesture start.
        start_width: f64,
        /// Room height at gesture start.
        start_height: f64,
    },
}

impl Gesture {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Panning { .. } => Mode::Panning,
            Self::Dragging { .. } => Mode::Dragging,
            Self::Rotating { .. } => Mode::Rotating,
            Self::ResizingRoom { .. } => Mode::ResizingRoom,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
