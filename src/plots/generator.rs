use bevy::prelude::*;
use rand::Rng;

use super::entities::{Footprint, PlotId, PlotRecord};
use super::variant::{PlotLayout, VariantConfig};
use super::voronoi::voronoi_cells;
use crate::math;

/// Generates every plot of a scene.
///
/// Pure in `(cfg, rng)`: the same seeded random source yields the same plots.
pub fn generate(cfg: &VariantConfig, rng: &mut impl Rng) -> Vec<PlotRecord> {
    match cfg.layout {
        PlotLayout::Grid { count, size, gap } => generate_grid(cfg, count, size, gap, rng),
        PlotLayout::Voronoi { sites, half_extent } => {
            generate_voronoi(cfg, sites, half_extent, rng)
        }
    }
}

fn generate_grid(
    cfg: &VariantConfig,
    count: i32,
    size: f32,
    gap: f32,
    rng: &mut impl Rng,
) -> Vec<PlotRecord> {
    let pitch = size + gap;
    let mut plots = Vec::with_capacity(grid_len(count));

    for x in 0..count {
        for z in 0..count {
            let id = PlotId::Grid { x, z };
            let category = match &cfg.margin {
                Some(margin) if margin.contains(x, z) => margin.category,
                _ => classify(cfg, rng),
            };
            plots.push(PlotRecord {
                id,
                position: Vec3::new(
                    math::grid_offset(x, count, pitch),
                    0.0,
                    math::grid_offset(z, count, pitch),
                ),
                footprint: Footprint::Square { size },
                category,
                height: building_height(cfg, category, rng),
                display_name: cfg.naming.display_name(id),
            });
        }
    }
    plots
}

/// Number of cells in a `count × count` grid; zero for `count <= 0`.
fn grid_len(count: i32) -> usize {
    (count.max(0) as usize).saturating_pow(2)
}

fn generate_voronoi(
    cfg: &VariantConfig,
    sites: usize,
    half_extent: f32,
    rng: &mut impl Rng,
) -> Vec<PlotRecord> {
    let points: Vec<Vec2> = (0..sites)
        .map(|_| {
            Vec2::new(
                rng.random_range(-half_extent..=half_extent),
                rng.random_range(-half_extent..=half_extent),
            )
        })
        .collect();

    voronoi_cells(&points, half_extent)
        .into_iter()
        .zip(&points)
        .enumerate()
        .map(|(index, (cell, site))| {
            let id = PlotId::Cell(index);
            let category = classify(cfg, rng);
            PlotRecord {
                id,
                position: Vec3::new(site.x, 0.0, site.y),
                footprint: Footprint::Polygon(cell),
                category,
                height: building_height(cfg, category, rng),
                display_name: cfg.naming.display_name(id),
            }
        })
        .collect()
}

fn classify(cfg: &VariantConfig, rng: &mut impl Rng) -> super::Category {
    let draw = if cfg.category_rule.needs_draw() {
        rng.random::<f32>()
    } else {
        0.0
    };
    cfg.category_rule.classify(draw)
}

fn building_height(cfg: &VariantConfig, category: super::Category, rng: &mut impl Rng) -> f32 {
    match cfg.height_range(category) {
        Some(range) if range.max > range.min => rng.random_range(range.min..range.max),
        Some(range) => range.min,
        None => 0.0,
    }
}
