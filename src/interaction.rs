//! Hover and selection driven by mesh picking.
//!
//! Hover is a single shared value in [`InteractionState`], so at most one plot
//! is ever hovered. Observers are attached per plot tile by the scene.

mod entities;
mod systems;

pub use entities::{InteractionState, PlotHighlight, PlotMesh};
pub use systems::{on_plot_click, on_plot_out, on_plot_over};

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use crate::UiFocus;

/// Runs after pointer observers have updated [`InteractionState`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncHighlight;

/// Pointer interaction: picking backend, shared state, highlight sync.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<MeshPickingPlugin>() {
            app.add_plugins(MeshPickingPlugin);
        }
        app.register_type::<InteractionState>()
            .register_type::<PlotHighlight>()
            .register_type::<PlotMesh>()
            .init_resource::<InteractionState>()
            .init_resource::<UiFocus>()
            .add_systems(
                Update,
                systems::sync_plot_highlight
                    .in_set(SyncHighlight)
                    .run_if(resource_changed::<InteractionState>),
            );
    }
}
