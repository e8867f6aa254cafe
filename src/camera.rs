//! Scene camera: orbit rig or top-down pan rig, with a clamped zoom range.
//!
//! The rig state lives in [`CameraRig`]; input systems edit it and
//! `apply_rig` rebuilds the camera transform from it every frame.

mod entities;
mod systems;

pub use entities::CameraRig;

use bevy::prelude::*;

use crate::{UiFocus, ViewState, keyboard_free, pointer_free};

/// How the user steers the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum CameraMode {
    /// Right-drag orbits around the focus; WASD pans.
    #[default]
    Orbit,
    /// Fixed top-down pitch; WASD pans.
    Pan,
}

/// Per-plugin configuration for the camera rig.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// Steering mode.
    pub mode: CameraMode,
    /// Closest allowed eye distance.
    pub min_zoom: f32,
    /// Farthest allowed eye distance.
    pub max_zoom: f32,
    /// Distance change per zoom button press.
    pub zoom_step: f32,
    /// Distance change per scroll line.
    pub scroll_sensitivity: f32,
    /// Lerp factor easing the current distance towards the target.
    pub zoom_lerp: f32,
    /// Starting eye distance.
    pub initial_distance: f32,
    /// Starting yaw (radians).
    pub initial_yaw: f32,
    /// Starting pitch (radians); fixed in [`CameraMode::Pan`].
    pub initial_pitch: f32,
    /// Lowest orbit elevation (radians).
    pub min_pitch: f32,
    /// Highest orbit elevation (radians).
    pub max_pitch: f32,
    /// Orbit radians per pixel of mouse motion.
    pub orbit_sensitivity: f32,
    /// Focus speed in world-units per second at maximum zoom.
    pub pan_speed: f32,
    /// Focus stays within `±pan_limit` on each axis.
    pub pan_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Orbit,
            min_zoom: 10.0,
            max_zoom: 50.0,
            zoom_step: 5.0,
            scroll_sensitivity: 2.0,
            zoom_lerp: 0.15,
            initial_distance: 22.0,
            initial_yaw: std::f32::consts::FRAC_PI_4,
            initial_pitch: 0.85,
            min_pitch: 0.15,
            max_pitch: 1.45,
            orbit_sensitivity: 0.005,
            pan_speed: 30.0,
            pan_limit: 25.0,
        }
    }
}

impl CameraConfig {
    /// Top-down map camera used by the Voronoi scene.
    pub fn top_down() -> Self {
        Self {
            mode: CameraMode::Pan,
            initial_distance: 35.0,
            initial_yaw: 0.0,
            initial_pitch: 1.25,
            ..default()
        }
    }
}

/// Camera spawn and steering.
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraConfig>()
            .register_type::<CameraRig>()
            .insert_resource(self.0.clone())
            .init_resource::<UiFocus>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                (
                    systems::orbit
                        .run_if(|cfg: Res<CameraConfig>| cfg.mode == CameraMode::Orbit)
                        .run_if(pointer_free),
                    systems::pan.run_if(keyboard_free),
                    systems::scroll_zoom.run_if(pointer_free),
                )
                    .before(systems::apply_rig)
                    .run_if(in_state(ViewState::Exploring)),
            )
            .add_systems(Update, systems::apply_rig);
    }
}
