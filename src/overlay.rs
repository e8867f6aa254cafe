//! Screen-space panels drawn with egui: title, search box, plot info, zoom.
//!
//! The panels only display [`crate::interaction::InteractionState`]; the
//! search box and the BUY NOW button trigger nothing.

mod entities;
mod systems;

pub use entities::OverlayState;
pub use systems::plot_details;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::UiFocus;

/// Per-plugin configuration for the overlay panels.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct OverlayConfig {
    /// Distance of panels from the window edges (points).
    pub margin: f32,
    /// Width of the info panel and search box (points).
    pub panel_width: f32,
    /// Static price line of the info panel.
    pub price_text: String,
    /// Static owner line of the info panel.
    pub owner_text: String,
    /// Show the +/- zoom buttons.
    pub zoom_buttons: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            margin: 12.0,
            panel_width: 220.0,
            price_text: "0.25 ETH".into(),
            owner_text: "Unclaimed".into(),
            zoom_buttons: false,
        }
    }
}

/// egui overlay panels.
pub struct OverlayPlugin(pub OverlayConfig);

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OverlayConfig>()
            .register_type::<OverlayState>()
            .insert_resource(self.0.clone())
            .register_type::<UiFocus>()
            .init_resource::<OverlayState>()
            .init_resource::<UiFocus>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    (
                        systems::draw_title,
                        systems::draw_plot_info,
                        systems::draw_zoom_buttons,
                    )
                        .run_if(resource_exists::<crate::plots::Plots>),
                    systems::track_ui_focus,
                )
                    .chain(),
            );
    }
}
