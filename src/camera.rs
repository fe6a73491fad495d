#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{FIT_PADDING_PX, MAX_FIT_SCALE, MIN_VIEW_SCALE};
use crate::geom::{Point, clamp_to};
use crate::scene::Room;

/// View transform between screen pixels and room units.
///
/// `pan_x` / `pan_y` are in CSS pixels: the screen position of the room origin.
/// `zoom` is the user's zoom factor (1.0 = fitted).
/// `fit_scale` is the pixels-per-unit that fits the room into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub fit_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0, fit_scale: 1.0 }
    }
}

impl Camera {
    /// Effective pixels per room unit, never below [`MIN_VIEW_SCALE`].
    #[must_use]
    pub fn scale(&self) -> f64 {
        (self.fit_scale * self.zoom).max(MIN_VIEW_SCALE)
    }

    /// Convert a screen-space point (CSS pixels) to room coordinates.
    #[must_use]
    pub fn screen_to_room(&self, screen: Point) -> Point {
        let scale = self.scale();
        Point {
            x: (screen.x - self.pan_x) / scale,
            y: (screen.y - self.pan_y) / scale,
        }
    }

    /// Convert a room-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn room_to_screen(&self, room: Point) -> Point {
        let scale = self.scale();
        Point {
            x: room.x * scale + self.pan_x,
            y: room.y * scale + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to room units.
    #[must_use]
    pub fn screen_dist_to_room(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Add `delta` to the zoom factor, clamped to `[min, max]`.
    /// An inverted range yields `min`.
    pub fn zoom_by(&mut self, delta: f64, min: f64, max: f64) {
        self.zoom = clamp_to(self.zoom + delta, min, max);
    }

    /// Fit `room` into a `width` x `height` viewport with padding, reset the
    /// user zoom, and center the room.
    pub fn fit_to_viewport(&mut self, width: f64, height: f64, room: &Room) {
        let pad = FIT_PADDING_PX * 2.0;
        self.fit_scale = ((width - pad) / room.width)
            .min((height - pad) / room.height)
            .min(MAX_FIT_SCALE);
        self.zoom = 1.0;
        let scale = self.scale();
        self.pan_x = (width - room.width * scale) / 2.0;
        self.pan_y = (height - room.height * scale) / 2.0;
    }
}
