//! Mesh builders for plot outlines.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use crate::math;
use crate::plots::PlotLayout;

/// Triangle-fan indices for a convex outline, wound so faces point up (+Y)
/// once `Vec2.y` is mapped to world Z.
///
/// Returns an empty `Vec` for outlines with fewer than 3 points.
pub fn fan_indices(points: &[Vec2]) -> Vec<u32> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let counter_clockwise = math::polygon_signed_area(points) > 0.0;
    let mut indices = Vec::with_capacity((n - 2) * 3);
    for i in 1..(n as u32 - 1) {
        if counter_clockwise {
            indices.extend([0, i + 1, i]);
        } else {
            indices.extend([0, i, i + 1]);
        }
    }
    indices
}

/// Flat mesh of a plot outline lying in the XZ plane at height `y`.
///
/// `None` for outlines that cannot be drawn (fewer than 3 points).
pub fn polygon_mesh(points: &[Vec2], y: f32) -> Option<Mesh> {
    let indices = fan_indices(points);
    if indices.is_empty() {
        return None;
    }

    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, y, p.y]).collect();
    let normals = vec![[0.0, 1.0, 0.0]; points.len()];
    let uvs: Vec<[f32; 2]> = points.iter().map(|p| [p.x * 0.05, p.y * 0.05]).collect();

    Some(
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices)),
    )
}

/// Half edge length of a ground plane that covers every plot plus `margin`.
pub fn ground_half_extent(layout: &PlotLayout, margin: f32) -> f32 {
    match *layout {
        PlotLayout::Grid { count, size, gap } => count.max(0) as f32 * (size + gap) / 2.0 + margin,
        PlotLayout::Voronoi { half_extent, .. } => half_extent + margin,
    }
}
