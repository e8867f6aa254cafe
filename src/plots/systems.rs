use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::entities::{PlotSeed, Plots};
use super::generator::generate;
use super::variant::VariantConfig;

/// Generates the scene's plots once from [`VariantConfig`] and [`PlotSeed`].
pub fn generate_plots(mut commands: Commands, cfg: Res<VariantConfig>, seed: Res<PlotSeed>) {
    let mut rng = StdRng::seed_from_u64(seed.0);
    let plots = Plots::new(generate(&cfg, &mut rng));

    info!(
        variant = ?cfg.variant,
        seed = seed.0,
        plots = plots.len(),
        renderable = plots.renderable().count(),
        "Generated plots"
    );
    commands.insert_resource(plots);
}
