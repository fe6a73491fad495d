//! Catalog lookup: placement class and default size for each object type.
//!
//! The engine never owns the catalog. Hosts inject any [`Catalog`]
//! implementation; [`StaticCatalog::stock`] carries the stock room-planner
//! set and is what the command-line driver and tests use.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::geom::Dimensions;

/// How a structural opening behaves when snapped to a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aperture {
    /// Hinged door: sits inset from the wall and turns to face into the room.
    Swing,
    /// Window or sliding door: centered on the wall line.
    Fixed,
}

/// Placement class governing snap, collision, and relocation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    /// Wall-mounted aperture.
    Structural(Aperture),
    /// Furniture standing on the floor.
    Freestanding,
    /// Rugs; never collide.
    FloorCovering,
}

impl ObjectClass {
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Structural(_))
    }

    /// Back-to-front paint priority: rugs, then furniture, then wall openings.
    #[must_use]
    pub fn draw_priority(self) -> u8 {
        match self {
            Self::FloorCovering => 0,
            Self::Freestanding => 5,
            Self::Structural(_) => 10,
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
    pub class: ObjectClass,
    pub default_dimensions: Dimensions,
}

/// Read-only type lookup.
pub trait Catalog {
    /// Entry for `type_ref`, or `None` when the type is unknown.
    fn lookup(&self, type_ref: &str) -> Option<&CatalogEntry>;

    /// Placement class for `type_ref`.
    fn class_of(&self, type_ref: &str) -> Option<ObjectClass> {
        self.lookup(type_ref).map(|entry| entry.class)
    }
}

/// A fixed list of entries.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The stock room-planner assets.
    #[must_use]
    pub fn stock() -> Self {
        use Aperture::{Fixed, Swing};
        use ObjectClass::{FloorCovering, Freestanding, Structural};

        let rows: [(&str, &str, ObjectClass, f64, f64); 12] = [
            ("door", "Door", Structural(Swing), 90.0, 90.0),
            ("door-sliding", "Sliding Door", Structural(Fixed), 160.0, 15.0),
            ("window", "Window", Structural(Fixed), 120.0, 15.0),
            ("stairs-u", "Stairs (U-Turn)", Freestanding, 180.0, 200.0),
            ("bed-double", "Double Bed", Freestanding, 160.0, 200.0),
            ("bed-single", "Single Bed", Freestanding, 90.0, 200.0),
            ("nightstand", "Nightstand", Freestanding, 45.0, 45.0),
            ("wardrobe", "Wardrobe", Freestanding, 120.0, 60.0),
            ("desk", "Desk", Freestanding, 120.0, 60.0),
            ("rug-round", "Round Rug", FloorCovering, 150.0, 150.0),
            ("rug-rect", "Rect Rug", FloorCovering, 200.0, 150.0),
            ("plant", "Potted Plant", Freestanding, 45.0, 45.0),
        ];
        Self::new(
            rows.into_iter()
                .map(|(key, name, class, width, height)| CatalogEntry {
                    key: key.to_string(),
                    name: name.to_string(),
                    class,
                    default_dimensions: Dimensions::new(width, height),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, type_ref: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == type_ref)
    }
}
