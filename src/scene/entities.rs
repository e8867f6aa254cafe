use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::interaction::PlotHighlight;
use crate::plots::Category;

/// Material handle for every `(category, highlight)` pair present in the scene.
#[derive(Resource, Default)]
pub struct PlotMaterials {
    /// Lookup from category and highlight to the shared material.
    pub map: HashMap<(Category, PlotHighlight), Handle<StandardMaterial>>,
}

impl PlotMaterials {
    /// Shared material for a plot in the given state.
    pub fn get(
        &self,
        category: Category,
        highlight: PlotHighlight,
    ) -> Option<Handle<StandardMaterial>> {
        self.map.get(&(category, highlight)).cloned()
    }
}

/// Marker on the ground tile entity of each plot (the one carrying pointer observers).
#[derive(Component, Reflect)]
pub struct PlotTile;

/// Marker on building boxes stacked on grid tiles.
#[derive(Component, Reflect)]
pub struct Building;

/// Marker on the ground plane under all plots.
#[derive(Component, Reflect)]
pub struct Ground;
