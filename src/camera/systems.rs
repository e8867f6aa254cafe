use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::entities::CameraRig;
use super::{CameraConfig, CameraMode};
use crate::math;

/// Spawns the Camera3d entity with its [`CameraRig`].
pub fn spawn_camera(mut commands: Commands, cfg: Res<CameraConfig>) {
    let rig = CameraRig::from_config(&cfg);
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(rig.eye()).looking_at(rig.focus, Vec3::Y),
        rig,
    ));
}

/// Right-drag rotates the orbit rig.
pub fn orbit(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    mut rigs: Query<&mut CameraRig>,
    cfg: Res<CameraConfig>,
) {
    let dragging = buttons.pressed(MouseButton::Right);
    let delta: Vec2 = motion.read().map(|ev| ev.delta).sum();
    if !dragging || delta == Vec2::ZERO {
        return;
    }
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    rig.yaw -= delta.x * cfg.orbit_sensitivity;
    rig.pitch = math::clamp_pitch(
        rig.pitch,
        delta.y * cfg.orbit_sensitivity,
        cfg.min_pitch,
        cfg.max_pitch,
    );
}

/// WASD / arrow keys slide the focus across the ground plane.
pub fn pan(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut rigs: Query<&mut CameraRig>,
    cfg: Res<CameraConfig>,
) {
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    // Screen-aligned axes on the ground plane
    let forward = -Vec3::new(rig.yaw.sin(), 0.0, rig.yaw.cos());
    let right = Vec3::new(-forward.z, 0.0, forward.x);

    let mut direction = Vec3::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction += forward;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction -= forward;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction += right;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction -= right;
    }

    if direction != Vec3::ZERO {
        // Scale with zoom so panning feels the same at every distance
        let speed = cfg.pan_speed * rig.distance / cfg.max_zoom;
        rig.focus += direction.normalize() * speed * time.delta_secs();
        rig.focus = rig
            .focus
            .clamp(Vec3::splat(-cfg.pan_limit), Vec3::splat(cfg.pan_limit));
    }
}

/// Mouse wheel zooms in both modes.
pub fn scroll_zoom(
    mut scroll: MessageReader<MouseWheel>,
    mut rigs: Query<&mut CameraRig>,
    cfg: Res<CameraConfig>,
) {
    let lines: f32 = scroll
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        })
        .sum();
    if lines == 0.0 {
        return;
    }
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };
    rig.zoom_by(-lines * cfg.scroll_sensitivity, &cfg);
}

/// Eases the zoom and writes the rig pose into the camera transform.
pub fn apply_rig(
    mut query: Query<(&mut CameraRig, &mut Transform)>,
    cfg: Res<CameraConfig>,
) {
    let Ok((mut rig, mut transform)) = query.single_mut() else {
        return;
    };
    if cfg.mode == CameraMode::Pan {
        rig.pitch = cfg.initial_pitch;
    }
    let gap = rig.target_distance - rig.distance;
    rig.distance = if gap.abs() > 1e-3 {
        rig.distance + gap * cfg.zoom_lerp
    } else {
        rig.target_distance
    };

    *transform = Transform::from_translation(rig.eye()).looking_at(rig.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{UiFocus, keyboard_free};

    fn pan_world(focus: UiFocus) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyS);
        world.insert_resource(keys);
        world.insert_resource(CameraConfig::default());
        world.insert_resource(focus);
        world.spawn(CameraRig::from_config(&CameraConfig::default()));
        world
    }

    fn focus_after_pan(world: &mut World) -> Vec3 {
        let mut schedule = Schedule::default();
        schedule.add_systems(pan.run_if(keyboard_free));
        schedule.run(world);
        world
            .query::<&CameraRig>()
            .single(world)
            .map(|rig| rig.focus)
            .unwrap()
    }

    #[test]
    fn movement_keys_pan_the_focus() {
        let mut world = pan_world(UiFocus::default());
        assert_ne!(focus_after_pan(&mut world), Vec3::ZERO);
    }

    #[test]
    fn typing_into_a_text_field_does_not_pan() {
        let mut world = pan_world(UiFocus {
            keyboard: true,
            pointer: false,
        });
        assert_eq!(focus_after_pan(&mut world), Vec3::ZERO);
    }
}
