//! Land plot viewer binary.

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use land_plots::{ViewState, keyboard_free};
use land_plots::camera::{CameraConfig, CameraPlugin};
use land_plots::interaction::InteractionPlugin;
use land_plots::overlay::{OverlayConfig, OverlayPlugin};
#[cfg(feature = "native")]
use land_plots::plots::MAX_GRID_COUNT;
use land_plots::plots::{PlotsPlugin, Variant, VariantConfig};
use land_plots::scene::{SceneConfig, ScenePlugin};

/// Command-line options.
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about = "3D land plot viewer")]
struct Cli {
    /// Scene to show.
    #[arg(long, value_enum, default_value_t = Variant::City)]
    variant: Variant,
    /// Generator seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Grid edge length in plots (grid scenes only).
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(..=i64::from(MAX_GRID_COUNT))
    )]
    size: Option<i32>,
    /// Number of Voronoi sites (map scene only).
    #[arg(long)]
    sites: Option<usize>,
}

#[cfg(feature = "native")]
fn scene_settings() -> (VariantConfig, Option<u64>) {
    use clap::Parser;

    let cli = Cli::parse();
    let mut cfg = cli.variant.config();
    if let Some(size) = cli.size {
        cfg = cfg.with_grid_count(size);
    }
    if let Some(sites) = cli.sites {
        cfg = cfg.with_sites(sites);
    }
    (cfg, cli.seed)
}

#[cfg(not(feature = "native"))]
fn scene_settings() -> (VariantConfig, Option<u64>) {
    (Variant::default().config(), None)
}

fn main() -> AppExit {
    let (variant, seed) = scene_settings();
    let seed = seed.unwrap_or_else(rand::random);

    let (camera, overlay) = match variant.variant {
        Variant::Map => (
            CameraConfig::top_down(),
            OverlayConfig {
                zoom_buttons: true,
                ..default()
            },
        ),
        _ => (CameraConfig::default(), OverlayConfig::default()),
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: variant.title.clone(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<ViewState>()
    .init_state::<ViewState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(PlotsPlugin { variant, seed })
    .add_plugins(InteractionPlugin)
    .add_plugins(ScenePlugin(SceneConfig::default()))
    .add_plugins(CameraPlugin(camera))
    .add_plugins(OverlayPlugin(overlay))
    .add_systems(Update, (exit_on_esc, toggle_inspector).run_if(keyboard_free))
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(ViewState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run()
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewState>>,
    mut next: ResMut<NextState<ViewState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            ViewState::Exploring => ViewState::Inspecting,
            ViewState::Inspecting => ViewState::Exploring,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
