//! Plot data: records, per-variant rules, and the one-shot generator.
//!
//! Generation is a pure function of a [`VariantConfig`] and a seeded random
//! source. [`PlotsPlugin`] runs it once at startup and stores the result in the
//! read-only [`Plots`] resource.

mod entities;
mod generator;
mod systems;
mod variant;
mod voronoi;

pub use entities::{Category, Footprint, PlotId, PlotRecord, PlotSeed, Plots};
pub use generator::generate;
pub use variant::{
    CategoryBand, CategoryColor, CategoryRule, HeightRange, MAX_GRID_COUNT, MarginRule, Naming,
    Palette, PlotLayout, Variant, VariantConfig,
};
pub use voronoi::voronoi_cells;

use bevy::prelude::*;

/// System set that produces the [`Plots`] resource.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratePlots;

/// Plot generation at startup.
pub struct PlotsPlugin {
    /// Scene rules.
    pub variant: VariantConfig,
    /// Seed for the generator's random source.
    pub seed: u64,
}

impl Plugin for PlotsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<VariantConfig>()
            .register_type::<PlotSeed>()
            .register_type::<PlotId>()
            .register_type::<Category>()
            .insert_resource(self.variant.clone())
            .insert_resource(PlotSeed(self.seed))
            .add_systems(Startup, systems::generate_plots.in_set(GeneratePlots));
    }
}
