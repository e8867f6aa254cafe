use bevy::prelude::*;

use crate::plots::{Category, PlotId};

/// Scene-wide pointer state: at most one hovered and one selected plot.
///
/// Written only by the pointer observers in [`super::systems`].
#[derive(Resource, Default, Clone, Debug, PartialEq, Eq, Reflect)]
pub struct InteractionState {
    hovered: Option<PlotId>,
    selected: Option<PlotId>,
}

impl InteractionState {
    /// Plot currently under the pointer.
    pub fn hovered(&self) -> Option<PlotId> {
        self.hovered
    }

    /// Plot selected by the last click, if any.
    pub fn selected(&self) -> Option<PlotId> {
        self.selected
    }

    /// Pointer entered `id`. Replaces any previous hover.
    pub fn pointer_enter(&mut self, id: PlotId) {
        self.hovered = Some(id);
    }

    /// Pointer left `id`. A stale leave for a plot no longer hovered is ignored.
    pub fn pointer_leave(&mut self, id: PlotId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Click on `id`: it becomes the selection, replacing any previous one.
    ///
    /// There is no toggle-off; clicking the selected plot again changes nothing.
    pub fn click(&mut self, id: PlotId) {
        self.selected = Some(id);
    }

    /// Highlight for `id`: selection beats hover.
    pub fn highlight(&self, id: PlotId) -> PlotHighlight {
        if self.selected == Some(id) {
            PlotHighlight::Selected
        } else if self.hovered == Some(id) {
            PlotHighlight::Hovered
        } else {
            PlotHighlight::Base
        }
    }
}

/// Resolved display state of one plot mesh.
#[derive(Component, Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum PlotHighlight {
    /// Category color.
    #[default]
    Base,
    /// Under the pointer.
    Hovered,
    /// Selected by click.
    Selected,
}

/// Every mesh belonging to a plot: the ground tile and, if any, its building.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[require(PlotHighlight)]
pub struct PlotMesh {
    /// Plot this mesh draws.
    pub id: PlotId,
    /// Category, for material lookup.
    pub category: Category,
}
