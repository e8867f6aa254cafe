use bevy::prelude::*;

use super::entities::{Category, PlotId};

/// Largest grid edge accepted; keeps `count²` well inside memory and `i32`.
pub const MAX_GRID_COUNT: i32 = 512;

/// The four built-in scenes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum Variant {
    /// Uniform grid of unsold plots.
    Basic,
    /// Grid with randomly placed residential and commercial buildings.
    #[default]
    City,
    /// Grid of grass and dirt surrounded by water on two margins.
    Natural,
    /// Irregular Voronoi map of parks and city blocks.
    Map,
}

/// How plot positions and outlines are produced.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub enum PlotLayout {
    /// `count × count` square tiles.
    Grid {
        /// Cells per edge; `<= 0` yields no plots.
        count: i32,
        /// Tile edge length.
        size: f32,
        /// Spacing between adjacent tiles.
        gap: f32,
    },
    /// Voronoi cells from uniformly random sites, clipped to a square.
    Voronoi {
        /// Number of generating sites.
        sites: usize,
        /// Half the edge length of the bounding square centred on the origin.
        half_extent: f32,
    },
}

/// A uniform draw strictly above `above` selects `category`.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct CategoryBand {
    /// Exclusive lower threshold in `[0, 1)`.
    pub above: f32,
    /// Category assigned when the threshold is exceeded.
    pub category: Category,
}

/// Per-plot category assignment.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub enum CategoryRule {
    /// Every plot gets the same category; no random draw.
    Fixed(Category),
    /// One uniform draw per plot, tested against `bands` in order.
    Bands {
        /// Checked first to last; the first band whose threshold is exceeded wins.
        bands: Vec<CategoryBand>,
        /// Category when no band matches.
        fallback: Category,
    },
}

impl CategoryRule {
    /// Category for a uniform draw in `[0, 1)`.
    pub fn classify(&self, draw: f32) -> Category {
        match self {
            Self::Fixed(category) => *category,
            Self::Bands { bands, fallback } => bands
                .iter()
                .find(|band| draw > band.above)
                .map_or(*fallback, |band| band.category),
        }
    }

    /// Whether [`classify`](Self::classify) consumes a random draw.
    pub fn needs_draw(&self) -> bool {
        matches!(self, Self::Bands { .. })
    }
}

/// Grid cells near the map edges that bypass [`CategoryRule`].
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct MarginRule {
    /// Columns with `x < x_below` belong to the margin.
    pub x_below: i32,
    /// Rows with `z > z_above` belong to the margin.
    pub z_above: i32,
    /// Category of margin cells.
    pub category: Category,
}

impl MarginRule {
    /// Whether grid cell `(x, z)` falls in the margin.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x < self.x_below || z > self.z_above
    }
}

/// Building height drawn uniformly from `[min, max)` for one category.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct HeightRange {
    /// Category the range applies to.
    pub category: Category,
    /// Inclusive lower bound.
    pub min: f32,
    /// Exclusive upper bound.
    pub max: f32,
}

/// Base color of one category.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct CategoryColor {
    /// Category the color applies to.
    pub category: Category,
    /// Unhighlighted surface color.
    pub color: Color,
}

/// Colors keyed by category and highlight state.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Palette {
    /// Base color per category.
    pub base: Vec<CategoryColor>,
    /// Color of the plot under the pointer.
    pub hovered: Color,
    /// Color of the selected plot; wins over `hovered`.
    pub selected: Color,
    /// Color for categories missing from `base`.
    pub fallback: Color,
}

impl Palette {
    /// Base color of `category`.
    pub fn base_color(&self, category: Category) -> Color {
        self.base
            .iter()
            .find(|entry| entry.category == category)
            .map_or(self.fallback, |entry| entry.color)
    }
}

/// How display names are derived from plot ids.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub enum Naming {
    /// `"Plot x-z"` / `"Plot n"`.
    PlotId,
    /// `"<name> <kind>"` with both words picked by `index mod 10`.
    WordLists {
        /// First word, indexed by id.
        names: Vec<String>,
        /// Second word, indexed by id.
        kinds: Vec<String>,
    },
}

impl Naming {
    /// Display name for `id`.
    pub fn display_name(&self, id: PlotId) -> String {
        match (self, id) {
            (Self::WordLists { names, kinds }, PlotId::Cell(index))
                if !names.is_empty() && !kinds.is_empty() =>
            {
                let slot = index % 10;
                format!(
                    "{} {}",
                    names[slot % names.len()],
                    kinds[slot % kinds.len()]
                )
            }
            _ => format!("Plot {id}"),
        }
    }
}

/// Everything that distinguishes one scene from another.
#[derive(Resource, Clone, Debug, PartialEq, Reflect)]
pub struct VariantConfig {
    /// Which built-in scene this was derived from.
    pub variant: Variant,
    /// Window and overlay title.
    pub title: String,
    /// Position/outline generation.
    pub layout: PlotLayout,
    /// Optional edge override applied before `category_rule` (grid layouts only).
    pub margin: Option<MarginRule>,
    /// Category assignment for non-margin plots.
    pub category_rule: CategoryRule,
    /// Per-category building height ranges; missing categories get height 0.
    pub heights: Vec<HeightRange>,
    /// Color table.
    pub palette: Palette,
    /// Display-name scheme.
    pub naming: Naming,
    /// Also label the selected plot, not only the hovered one.
    pub label_selected: bool,
    /// Thickness of the ground tile / polygon slab.
    pub tile_thickness: f32,
}

impl VariantConfig {
    /// Height range configured for `category`.
    pub fn height_range(&self, category: Category) -> Option<&HeightRange> {
        self.heights.iter().find(|h| h.category == category)
    }

    /// Same config with `count` cells per grid edge, capped at [`MAX_GRID_COUNT`].
    /// No effect on Voronoi layouts.
    pub fn with_grid_count(mut self, count: i32) -> Self {
        if let PlotLayout::Grid { count: c, .. } = &mut self.layout {
            *c = count.min(MAX_GRID_COUNT);
        }
        self
    }

    /// Same config with `sites` Voronoi sites. No effect on grid layouts.
    pub fn with_sites(mut self, sites: usize) -> Self {
        if let PlotLayout::Voronoi { sites: s, .. } = &mut self.layout {
            *s = sites;
        }
        self
    }
}

const MAP_NAMES: [&str; 10] = [
    "Maple", "Cedar", "Harbor", "Summit", "Willow", "Granite", "Meadow", "Copper", "Lantern",
    "Orchard",
];
const MAP_KINDS: [&str; 10] = [
    "Park", "Plaza", "Heights", "Square", "Gardens", "Commons", "Terrace", "Grove", "Point",
    "Court",
];

const HOVER_GOLD: Color = Color::srgb(1.0, 0.85, 0.3);
const SELECT_ORANGE: Color = Color::srgb(1.0, 0.45, 0.2);

fn base(category: Category, color: Color) -> CategoryColor {
    CategoryColor { category, color }
}

impl Variant {
    /// Built-in configuration of this scene.
    pub fn config(self) -> VariantConfig {
        match self {
            Self::Basic => VariantConfig {
                variant: self,
                title: "Land Plots".into(),
                layout: PlotLayout::Grid {
                    count: 10,
                    size: 1.0,
                    gap: 0.1,
                },
                margin: None,
                category_rule: CategoryRule::Fixed(Category::Unsold),
                heights: vec![],
                palette: Palette {
                    base: vec![base(Category::Unsold, Color::srgb(0.3, 0.7, 0.4))],
                    hovered: HOVER_GOLD,
                    selected: SELECT_ORANGE,
                    fallback: Color::srgb(0.5, 0.5, 0.5),
                },
                naming: Naming::PlotId,
                label_selected: false,
                tile_thickness: 0.1,
            },
            Self::City => VariantConfig {
                variant: self,
                title: "City Plots".into(),
                layout: PlotLayout::Grid {
                    count: 12,
                    size: 1.0,
                    gap: 0.15,
                },
                margin: None,
                category_rule: CategoryRule::Bands {
                    bands: vec![
                        CategoryBand {
                            above: 0.85,
                            category: Category::Commercial,
                        },
                        CategoryBand {
                            above: 0.6,
                            category: Category::Residential,
                        },
                    ],
                    fallback: Category::Empty,
                },
                heights: vec![
                    HeightRange {
                        category: Category::Commercial,
                        min: 1.5,
                        max: 3.5,
                    },
                    HeightRange {
                        category: Category::Residential,
                        min: 0.5,
                        max: 1.3,
                    },
                ],
                palette: Palette {
                    base: vec![
                        base(Category::Empty, Color::srgb(0.35, 0.38, 0.35)),
                        base(Category::Residential, Color::srgb(0.55, 0.7, 0.9)),
                        base(Category::Commercial, Color::srgb(0.3, 0.45, 0.75)),
                    ],
                    hovered: HOVER_GOLD,
                    selected: SELECT_ORANGE,
                    fallback: Color::srgb(0.5, 0.5, 0.5),
                },
                naming: Naming::PlotId,
                label_selected: false,
                tile_thickness: 0.1,
            },
            Self::Natural => VariantConfig {
                variant: self,
                title: "Natural Map".into(),
                layout: PlotLayout::Grid {
                    count: 16,
                    size: 1.0,
                    gap: 0.05,
                },
                margin: Some(MarginRule {
                    x_below: 3,
                    z_above: 12,
                    category: Category::Water,
                }),
                category_rule: CategoryRule::Bands {
                    bands: vec![CategoryBand {
                        above: 0.9,
                        category: Category::Dirt,
                    }],
                    fallback: Category::Grass,
                },
                heights: vec![],
                palette: Palette {
                    base: vec![
                        base(Category::Grass, Color::srgb(0.35, 0.65, 0.25)),
                        base(Category::Dirt, Color::srgb(0.55, 0.4, 0.25)),
                        base(Category::Water, Color::srgb(0.2, 0.45, 0.8)),
                    ],
                    hovered: HOVER_GOLD,
                    selected: SELECT_ORANGE,
                    fallback: Color::srgb(0.5, 0.5, 0.5),
                },
                naming: Naming::PlotId,
                label_selected: false,
                tile_thickness: 0.1,
            },
            Self::Map => VariantConfig {
                variant: self,
                title: "Plot Map".into(),
                layout: PlotLayout::Voronoi {
                    sites: 120,
                    half_extent: 20.0,
                },
                margin: None,
                category_rule: CategoryRule::Bands {
                    bands: vec![CategoryBand {
                        above: 0.85,
                        category: Category::Park,
                    }],
                    fallback: Category::City,
                },
                heights: vec![],
                palette: Palette {
                    base: vec![
                        base(Category::Park, Color::srgb(0.45, 0.75, 0.45)),
                        base(Category::City, Color::srgb(0.85, 0.85, 0.82)),
                    ],
                    hovered: Color::srgb(0.55, 0.7, 1.0),
                    selected: Color::srgb(0.25, 0.5, 1.0),
                    fallback: Color::srgb(0.5, 0.5, 0.5),
                },
                naming: Naming::WordLists {
                    names: MAP_NAMES.iter().map(|s| s.to_string()).collect(),
                    kinds: MAP_KINDS.iter().map(|s| s.to_string()).collect(),
                },
                label_selected: true,
                tile_thickness: 0.05,
            },
        }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}
