//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / `Vec3` inputs, making them straightforward to unit-test.

use bevy::prelude::{Vec2, Vec3};

/// World-space offset of grid column/row `index` in a centred grid of `count` cells.
///
/// `pitch` is the distance between adjacent cell centres (`size + gap`). The grid
/// is centred on the origin, so for two cells the offsets are `±pitch / 2`.
///
/// # Examples
/// ```
/// # use land_plots::math::grid_offset;
/// assert!((grid_offset(0, 2, 1.1) + 0.55).abs() < 1e-6);
/// assert!((grid_offset(1, 2, 1.1) - 0.55).abs() < 1e-6);
/// assert_eq!(grid_offset(1, 3, 2.0), 0.0);
/// ```
pub fn grid_offset(index: i32, count: i32, pitch: f32) -> f32 {
    (index as f32 - (count - 1) as f32 / 2.0) * pitch
}

/// Signed area of a simple polygon (shoelace formula).
///
/// Positive for counter-clockwise winding in the XY plane, negative for clockwise,
/// zero for degenerate input (fewer than 3 points or collinear points).
pub fn polygon_signed_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area / 2.0
}

/// Clips a convex polygon against a half-plane.
///
/// Keeps the part of `polygon` where `(p - origin) · normal <= 0` and inserts the
/// intersection points on the boundary. Returns an empty `Vec` when the whole
/// polygon lies outside.
pub fn clip_to_half_plane(polygon: &[Vec2], origin: Vec2, normal: Vec2) -> Vec<Vec2> {
    let side = |p: Vec2| (p - origin).dot(normal);
    let mut out = Vec::with_capacity(polygon.len() + 1);

    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let d_cur = side(current);
        let d_next = side(next);

        if d_cur <= 0.0 {
            out.push(current);
        }
        // Edge crosses the boundary: emit the crossing point
        if (d_cur < 0.0 && d_next > 0.0) || (d_cur > 0.0 && d_next < 0.0) {
            let t = d_cur / (d_cur - d_next);
            out.push(current + (next - current) * t);
        }
    }
    out
}

/// Camera position relative to its focus for an orbit rig.
///
/// `yaw` rotates around +Y (0 looks from +Z), `pitch` is the elevation above the
/// ground plane in radians, `distance` the length of the returned vector.
pub fn orbit_offset(yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    let horizontal = distance * pitch.cos();
    Vec3::new(
        horizontal * yaw.sin(),
        distance * pitch.sin(),
        horizontal * yaw.cos(),
    )
}

/// Applies `delta` to an elevation angle and clamps it into `[min, max]`.
pub fn clamp_pitch(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    (current + delta).clamp(min, max)
}

/// Steps a zoom distance by `delta`, clamped to `[min, max]`.
///
/// # Examples
/// ```
/// # use land_plots::math::step_zoom;
/// assert_eq!(step_zoom(45.0, 10.0, 10.0, 50.0), 50.0);
/// assert_eq!(step_zoom(20.0, -5.0, 10.0, 50.0), 15.0);
/// ```
pub fn step_zoom(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    (current + delta).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    // ── grid_offset ─────────────────────────────────────────────────

    #[test]
    fn grid_is_centred_on_origin() {
        let sum: f32 = (0..5).map(|i| grid_offset(i, 5, 1.1)).sum();
        assert!(sum.abs() < 1e-5);
    }

    #[test]
    fn adjacent_cells_are_one_pitch_apart() {
        let a = grid_offset(3, 10, 1.1);
        let b = grid_offset(4, 10, 1.1);
        assert!((b - a - 1.1).abs() < 1e-5);
    }

    #[test]
    fn single_cell_sits_at_origin() {
        assert_eq!(grid_offset(0, 1, 1.1), 0.0);
    }

    // ── polygon_signed_area ─────────────────────────────────────────

    #[test]
    fn ccw_square_has_positive_area() {
        assert!((polygon_signed_area(&unit_square()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cw_square_has_negative_area() {
        let mut sq = unit_square();
        sq.reverse();
        assert!((polygon_signed_area(&sq) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn too_few_points_have_zero_area() {
        assert_eq!(polygon_signed_area(&[]), 0.0);
        assert_eq!(polygon_signed_area(&[Vec2::ZERO, Vec2::X]), 0.0);
    }

    // ── clip_to_half_plane ──────────────────────────────────────────

    #[test]
    fn clip_keeps_polygon_fully_inside() {
        let clipped = clip_to_half_plane(&unit_square(), Vec2::new(2.0, 0.0), Vec2::X);
        assert_eq!(clipped, unit_square());
    }

    #[test]
    fn clip_removes_polygon_fully_outside() {
        let clipped = clip_to_half_plane(&unit_square(), Vec2::new(-1.0, 0.0), Vec2::X);
        assert!(clipped.is_empty());
    }

    #[test]
    fn clip_halves_square() {
        let clipped = clip_to_half_plane(&unit_square(), Vec2::new(0.5, 0.0), Vec2::X);
        assert_eq!(clipped.len(), 4);
        assert!((polygon_signed_area(&clipped) - 0.5).abs() < 1e-6);
        assert!(clipped.iter().all(|p| p.x <= 0.5 + 1e-6));
    }

    #[test]
    fn clip_through_corner_leaves_triangle() {
        // Diagonal x + y <= 1 keeps the lower-left triangle
        let clipped = clip_to_half_plane(
            &unit_square(),
            Vec2::new(0.5, 0.5),
            Vec2::new(1.0, 1.0),
        );
        assert_eq!(clipped.len(), 3);
        assert!((polygon_signed_area(&clipped) - 0.5).abs() < 1e-6);
    }

    // ── orbit_offset ────────────────────────────────────────────────

    #[test]
    fn orbit_offset_has_requested_length() {
        let v = orbit_offset(0.7, 0.9, 25.0);
        assert!((v.length() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_at_zero_yaw_looks_from_positive_z() {
        let v = orbit_offset(0.0, 0.0, 10.0);
        assert!((v - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn orbit_straight_down_is_above_focus() {
        let v = orbit_offset(1.2, std::f32::consts::FRAC_PI_2, 10.0);
        assert!((v.y - 10.0).abs() < 1e-4);
        assert!(Vec2::new(v.x, v.z).length() < 1e-4);
    }

    // ── clamp_pitch / step_zoom ─────────────────────────────────────

    #[test]
    fn small_pitch_delta_passes_through() {
        assert!((clamp_pitch(0.5, 0.1, 0.2, 1.4) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn pitch_clamps_at_both_limits() {
        assert_eq!(clamp_pitch(1.3, 0.5, 0.2, 1.4), 1.4);
        assert_eq!(clamp_pitch(0.3, -0.5, 0.2, 1.4), 0.2);
    }

    #[test]
    fn zoom_never_leaves_range() {
        let mut zoom = 30.0;
        for _ in 0..20 {
            zoom = step_zoom(zoom, -5.0, 10.0, 50.0);
        }
        assert_eq!(zoom, 10.0);
        for _ in 0..20 {
            zoom = step_zoom(zoom, 5.0, 10.0, 50.0);
        }
        assert_eq!(zoom, 50.0);
    }
}
