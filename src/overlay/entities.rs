use bevy::prelude::*;

/// Local UI state of the overlay panels.
#[derive(Resource, Default, Reflect)]
pub struct OverlayState {
    /// Contents of the search box. Shown but never used to filter plots.
    pub search: String,
}
