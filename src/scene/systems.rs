use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::SceneConfig;
use super::entities::PlotMaterials;
use crate::camera::CameraRig;
use crate::interaction::{InteractionState, PlotHighlight, PlotMesh};
use crate::plots::{PlotId, Plots, VariantConfig};

// ── Update: materials ───────────────────────────────────────────────

/// Plot meshes whose highlight changed since the last material pass.
type ChangedHighlights<'w, 's> = Query<
    'w,
    's,
    (
        &'static PlotMesh,
        &'static PlotHighlight,
        &'static mut MeshMaterial3d<StandardMaterial>,
    ),
    Changed<PlotHighlight>,
>;

/// Swaps in the shared material matching each mesh's new highlight.
pub fn apply_plot_materials(lookup: Res<PlotMaterials>, mut changed: ChangedHighlights) {
    for (plot, highlight, mut material) in &mut changed {
        if let Some(handle) = lookup.get(plot.category, *highlight)
            && material.0 != handle
        {
            material.0 = handle;
        }
    }
}

// ── Egui: labels ────────────────────────────────────────────────────

/// Plots that get a floating label: the hovered one and, when the variant
/// asks for it, the selected one.
pub fn labelled_plots(state: &InteractionState, label_selected: bool) -> Vec<PlotId> {
    let mut ids: Vec<PlotId> = state.hovered().into_iter().collect();
    if label_selected
        && let Some(selected) = state.selected()
        && !ids.contains(&selected)
    {
        ids.push(selected);
    }
    ids
}

/// Paints a name tag above the labelled plots, projected to screen space.
///
/// Painted on the background layer, so it never captures pointer input.
pub fn draw_plot_labels(
    mut contexts: EguiContexts,
    camera_q: Query<(&Camera, &GlobalTransform), With<CameraRig>>,
    state: Res<InteractionState>,
    plots: Res<Plots>,
    variant: Res<VariantConfig>,
    cfg: Res<SceneConfig>,
) {
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let painter = ctx.layer_painter(egui::LayerId::background());

    for id in labelled_plots(&state, variant.label_selected) {
        let Some(record) = plots.get(id) else {
            continue;
        };
        let anchor = record.position
            + Vec3::Y * (variant.tile_thickness + record.height + cfg.label_lift);
        let Ok(viewport) = camera.world_to_viewport(cam_gt, anchor) else {
            continue;
        };

        let galley = painter.layout_no_wrap(
            record.display_name.clone(),
            egui::FontId::proportional(cfg.label_font_size),
            egui::Color32::WHITE,
        );
        let rect = egui::Align2::CENTER_BOTTOM
            .anchor_size(egui::pos2(viewport.x, viewport.y), galley.size())
            .expand(4.0);
        painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(180));
        painter.galley(rect.min + egui::vec2(4.0, 4.0), galley, egui::Color32::WHITE);
    }
}
