//! Spatial layout engine for the room planner.
//!
//! The engine owns the placed objects inside a rectangular room and keeps
//! them consistent while the user drags, rotates, nudges, groups, duplicates,
//! and deletes them, and while the room itself is resized. It computes
//! rotated footprints, flags overlapping objects, and publishes snap guides.
//! Rendering, the asset catalog's artwork, and persistence live in the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Selection & transform controller ([`engine::EngineCore`]) |
//! | [`scene`] | Placed objects, the room record, and the object store |
//! | [`catalog`] | Read-only catalog lookup trait and the stock catalog |
//! | [`geom`] | Rotated bounding boxes, oriented corners, point rotation |
//! | [`collision`] | Broad-phase + SAT overlap detection |
//! | [`snap`] | Wall and edge snapping for the dragged leader |
//! | [`relocate`] | Heuristic re-layout when the room is resized |
//! | [`camera`] | View pan/zoom and screen ↔ room conversion |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against handles, objects, and room edges |
//! | [`config`] | Tunables loaded from the environment |
//! | [`consts`] | Default values for every tunable |

pub mod camera;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod relocate;
pub mod scene;
pub mod snap;
