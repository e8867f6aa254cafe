use bevy::picking::Pickable;
use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

use super::SceneConfig;
use super::entities::{Building, Ground, PlotMaterials, PlotTile};
use super::meshes::{ground_half_extent, polygon_mesh};
use crate::interaction::{PlotHighlight, PlotMesh, on_plot_click, on_plot_out, on_plot_over};
use crate::plots::{Footprint, Plots, VariantConfig};

// ── Startup ─────────────────────────────────────────────────────────

/// Sun and fill lights.
pub fn setup_lighting(mut commands: Commands, cfg: Res<SceneConfig>) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: cfg.sun_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(12.0, 25.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Fill"),
        DirectionalLight {
            illuminance: cfg.sun_illuminance * 0.25,
            ..default()
        },
        Transform::from_xyz(-10.0, 12.0, -14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Creates one shared material per `(category, highlight)` used by the plots.
pub fn build_plot_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    plots: Res<Plots>,
    variant: Res<VariantConfig>,
) {
    let palette = &variant.palette;
    let categories: HashSet<_> = plots.iter().map(|p| p.category).collect();

    let mut lookup = PlotMaterials::default();
    for category in categories {
        for highlight in [
            PlotHighlight::Base,
            PlotHighlight::Hovered,
            PlotHighlight::Selected,
        ] {
            let color = match highlight {
                PlotHighlight::Base => palette.base_color(category),
                PlotHighlight::Hovered => palette.hovered,
                PlotHighlight::Selected => palette.selected,
            };
            let handle = materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.9,
                cull_mode: None,
                ..default()
            });
            lookup.map.insert((category, highlight), handle);
        }
    }
    commands.insert_resource(lookup);
}

/// Spawns a ground tile (plus building) or polygon slab for each renderable plot.
///
/// Records whose outline cannot be meshed are skipped.
pub fn spawn_plots(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    plots: Res<Plots>,
    lookup: Res<PlotMaterials>,
    variant: Res<VariantConfig>,
    cfg: Res<SceneConfig>,
) {
    let thickness = variant.tile_thickness;
    let unit_cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    // Tiles stay unscaled so building children keep their own proportions
    let mut tile_meshes: HashMap<u32, Handle<Mesh>> = HashMap::new();

    let root = commands
        .spawn((
            Name::new("Plots"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let mut spawned = 0usize;
    for record in plots.renderable() {
        let Some(material) = lookup.get(record.category, PlotHighlight::Base) else {
            continue;
        };
        let plot = PlotMesh {
            id: record.id,
            category: record.category,
        };

        let (mesh, transform) = match &record.footprint {
            Footprint::Square { size } => (
                tile_meshes
                    .entry(size.to_bits())
                    .or_insert_with(|| meshes.add(Cuboid::new(*size, thickness, *size)))
                    .clone(),
                Transform::from_translation(record.position + Vec3::Y * thickness / 2.0),
            ),
            Footprint::Polygon(points) => {
                let Some(mesh) = polygon_mesh(points, 0.0) else {
                    continue;
                };
                (meshes.add(mesh), Transform::from_xyz(0.0, thickness, 0.0))
            }
        };

        let tile = commands
            .spawn((
                PlotTile,
                plot,
                Name::new(format!("Plot({})", record.id)),
                Mesh3d(mesh),
                MeshMaterial3d(material.clone()),
                transform,
            ))
            .observe(on_plot_over)
            .observe(on_plot_out)
            .observe(on_plot_click)
            .id();
        commands.entity(root).add_child(tile);
        spawned += 1;

        // Building stacked on the tile; pointer events bubble up to the tile
        if let Footprint::Square { size } = record.footprint
            && record.height > 0.0
        {
            let width = size * cfg.building_footprint;
            let local_center = Vec3::Y * (thickness + record.height) / 2.0;
            let building = commands
                .spawn((
                    Building,
                    plot,
                    Name::new(format!("Building({})", record.id)),
                    Mesh3d(unit_cube.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(local_center).with_scale(Vec3::new(
                        width,
                        record.height,
                        width,
                    )),
                ))
                .id();
            commands.entity(tile).add_child(building);
        }
    }

    debug!("Spawned {spawned} plot entities");
}

/// Non-pickable ground plane beneath all plots.
pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    variant: Res<VariantConfig>,
    cfg: Res<SceneConfig>,
) {
    let half = ground_half_extent(&variant.layout, cfg.ground_margin);
    commands.spawn((
        Ground,
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(half * 2.0, half * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: cfg.ground_color,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.01, 0.0),
        Pickable::IGNORE,
    ));
}
