use std::fmt;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

/// Stable identifier of a plot, unique within one generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum PlotId {
    /// Grid cell at column `x`, row `z`. Displayed as `"x-z"`.
    Grid {
        /// Column index.
        x: i32,
        /// Row index.
        z: i32,
    },
    /// Voronoi cell generated from site `index`.
    Cell(usize),
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { x, z } => write!(f, "{x}-{z}"),
            Self::Cell(index) => write!(f, "{index}"),
        }
    }
}

/// Closed set of plot classifications across all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum Category {
    /// Basic grid: plot on sale.
    Unsold,
    /// City: vacant lot.
    Empty,
    /// City: low building.
    Residential,
    /// City: tall building.
    Commercial,
    /// Natural map: grassland.
    Grass,
    /// Natural map: bare soil.
    Dirt,
    /// Natural map: water along the map margins.
    Water,
    /// Voronoi map: green area.
    Park,
    /// Voronoi map: built-up area.
    City,
}

impl Category {
    /// Human-readable label used by the overlay.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsold => "Unsold",
            Self::Empty => "Empty",
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Grass => "Grass",
            Self::Dirt => "Dirt",
            Self::Water => "Water",
            Self::Park => "Park",
            Self::City => "City",
        }
    }
}

/// Ground outline of a plot.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub enum Footprint {
    /// Axis-aligned square tile centred on the plot position.
    Square {
        /// Edge length in world units.
        size: f32,
    },
    /// Closed boundary in world XZ coordinates (`Vec2.y` is world Z).
    ///
    /// Empty when the cell was clipped away entirely.
    Polygon(Vec<Vec2>),
}

impl Footprint {
    /// Whether the outline can be turned into a mesh.
    ///
    /// Polygons need at least three points; squares always qualify.
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Square { size } => *size > 0.0,
            Self::Polygon(points) => points.len() >= 3,
        }
    }
}

/// One generated unit of land.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct PlotRecord {
    /// Stable id within the scene.
    pub id: PlotId,
    /// World-space anchor: grid cell centre or Voronoi site.
    pub position: Vec3,
    /// Ground outline.
    pub footprint: Footprint,
    /// Immutable classification.
    pub category: Category,
    /// Building height; `0.0` when the category has no building.
    pub height: f32,
    /// Name shown in labels and the info panel.
    pub display_name: String,
}

impl PlotRecord {
    /// Whether the renderer should draw this record.
    pub fn is_renderable(&self) -> bool {
        self.footprint.is_renderable()
    }
}

/// Seed of the random source used for plot generation.
#[derive(Resource, Clone, Copy, Debug, Reflect)]
pub struct PlotSeed(pub u64);

/// All plots of the running scene, read-only after startup.
#[derive(Resource, Default)]
pub struct Plots {
    records: Vec<PlotRecord>,
    index: HashMap<PlotId, usize>,
}

impl Plots {
    /// Wraps generated records, indexing them by id.
    pub fn new(records: Vec<PlotRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id, i))
            .collect();
        Self { records, index }
    }

    /// Record with the given id.
    pub fn get(&self, id: PlotId) -> Option<&PlotRecord> {
        self.index.get(&id).map(|&i| &self.records[i])
    }

    /// All records, in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &PlotRecord> {
        self.records.iter()
    }

    /// Records the renderer draws; unrenderable outlines are left out.
    pub fn renderable(&self) -> impl Iterator<Item = &PlotRecord> {
        self.records.iter().filter(|record| record.is_renderable())
    }

    /// Number of records, renderable or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether generation produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
