//! Scene rendering: lights, plot meshes, highlight materials, floating labels.
//!
//! One renderer for every variant; what differs (palette, outlines, label
//! policy) comes from [`crate::plots::VariantConfig`].

mod entities;
mod meshes;
mod startup_systems;
mod systems;

pub use entities::{Building, Ground, PlotMaterials, PlotTile};
pub use meshes::{fan_indices, ground_half_extent, polygon_mesh};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::interaction::SyncHighlight;
use crate::plots::GeneratePlots;

/// Per-plugin configuration for the plot scene.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SceneConfig {
    /// Background clear color.
    pub clear_color: Color,
    /// Color of the ground plane.
    pub ground_color: Color,
    /// Ground extends this far beyond the outermost plot.
    pub ground_margin: f32,
    /// Illuminance of the main directional light (lux).
    pub sun_illuminance: f32,
    /// Building width as a fraction of the tile size.
    pub building_footprint: f32,
    /// Label text size in points.
    pub label_font_size: f32,
    /// Gap between the top of a plot and its label.
    pub label_lift: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb(0.53, 0.73, 0.89),
            ground_color: Color::srgb(0.18, 0.2, 0.18),
            ground_margin: 2.0,
            sun_illuminance: 9000.0,
            building_footprint: 0.7,
            label_font_size: 14.0,
            label_lift: 0.4,
        }
    }
}

/// Spawns the plot scene from the generated [`crate::plots::Plots`].
pub struct ScenePlugin(pub SceneConfig);

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .register_type::<PlotTile>()
            .register_type::<Building>()
            .register_type::<Ground>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(
                Startup,
                (
                    startup_systems::setup_lighting,
                    (
                        startup_systems::build_plot_materials,
                        startup_systems::spawn_plots,
                    )
                        .chain()
                        .after(GeneratePlots),
                    startup_systems::spawn_ground,
                ),
            )
            .add_systems(
                Update,
                systems::apply_plot_materials
                    .after(SyncHighlight)
                    .run_if(resource_exists::<PlotMaterials>),
            )
            .add_systems(
                EguiPrimaryContextPass,
                systems::draw_plot_labels.run_if(resource_exists::<crate::plots::Plots>),
            );
    }
}
