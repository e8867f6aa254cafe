use bevy::prelude::*;

use super::CameraConfig;
use crate::math;

/// Orbit/pan state of the scene camera. The transform is derived from it every frame.
#[derive(Component, Clone, Debug, Reflect)]
pub struct CameraRig {
    /// Point the camera looks at, on the ground plane.
    pub focus: Vec3,
    /// Rotation around +Y in radians.
    pub yaw: f32,
    /// Elevation above the ground plane in radians.
    pub pitch: f32,
    /// Current eye distance from `focus`, eased towards `target_distance`.
    pub distance: f32,
    /// Requested zoom distance, always inside the configured zoom range.
    pub target_distance: f32,
}

impl CameraRig {
    /// Rig at the configured starting pose.
    pub fn from_config(cfg: &CameraConfig) -> Self {
        let distance = cfg.initial_distance.clamp(cfg.min_zoom, cfg.max_zoom);
        Self {
            focus: Vec3::ZERO,
            yaw: cfg.initial_yaw,
            pitch: cfg.initial_pitch,
            distance,
            target_distance: distance,
        }
    }

    /// Moves the zoom target by `delta`, clamped to the configured range.
    pub fn zoom_by(&mut self, delta: f32, cfg: &CameraConfig) {
        self.target_distance =
            math::step_zoom(self.target_distance, delta, cfg.min_zoom, cfg.max_zoom);
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        self.focus + math::orbit_offset(self.yaw, self.pitch, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_distance_is_clamped_into_zoom_range() {
        let cfg = CameraConfig {
            initial_distance: 200.0,
            ..default()
        };
        let rig = CameraRig::from_config(&cfg);
        assert_eq!(rig.target_distance, cfg.max_zoom);
    }

    #[test]
    fn zoom_by_respects_limits() {
        let cfg = CameraConfig::default();
        let mut rig = CameraRig::from_config(&cfg);
        rig.zoom_by(-1000.0, &cfg);
        assert_eq!(rig.target_distance, 10.0);
        rig.zoom_by(1000.0, &cfg);
        assert_eq!(rig.target_distance, 50.0);
    }

    #[test]
    fn eye_is_distance_away_from_focus() {
        let cfg = CameraConfig::default();
        let mut rig = CameraRig::from_config(&cfg);
        rig.focus = Vec3::new(3.0, 0.0, -2.0);
        assert!((rig.eye().distance(rig.focus) - rig.distance).abs() < 1e-4);
    }
}
