#![warn(missing_docs)]
//! Land plot viewer.
//!
//! Generates a grid or Voronoi map of land plots, renders them as 3D tiles and
//! buildings, and lets the user hover and select plots with the pointer.

pub mod camera;
pub mod interaction;
pub mod math;
pub mod overlay;
pub mod plots;
pub mod scene;

use bevy::prelude::*;

/// Application-wide view state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum ViewState {
    /// Normal interaction: camera steering, hover, selection.
    #[default]
    Exploring,
    /// World inspector open (Tab to toggle); camera input paused.
    Inspecting,
}

/// What egui claimed during the last UI pass.
///
/// World input (camera keys, hotkeys, plot clicks) is ignored while the UI
/// owns the matching device.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct UiFocus {
    /// A text field has keyboard focus.
    pub keyboard: bool,
    /// The pointer is over a panel or dragging a widget.
    pub pointer: bool,
}

/// Run condition: the keyboard belongs to the world, not to a text field.
pub fn keyboard_free(focus: Res<UiFocus>) -> bool {
    !focus.keyboard
}

/// Run condition: the pointer is not over a UI panel.
pub fn pointer_free(focus: Res<UiFocus>) -> bool {
    !focus.pointer
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn input_is_free_without_ui_focus() {
        let mut world = World::new();
        world.init_resource::<UiFocus>();
        assert!(world.run_system_once(keyboard_free).unwrap());
        assert!(world.run_system_once(pointer_free).unwrap());
    }

    #[test]
    fn focused_text_field_blocks_keyboard_only() {
        let mut world = World::new();
        world.insert_resource(UiFocus {
            keyboard: true,
            pointer: false,
        });
        assert!(!world.run_system_once(keyboard_free).unwrap());
        assert!(world.run_system_once(pointer_free).unwrap());
    }
}
