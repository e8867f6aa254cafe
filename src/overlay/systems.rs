use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::OverlayConfig;
use super::entities::OverlayState;
use crate::UiFocus;
use crate::camera::{CameraConfig, CameraRig};
use crate::interaction::InteractionState;
use crate::plots::{PlotRecord, Plots, VariantConfig};

/// Label/value rows shown in the info panel for a selected plot.
pub fn plot_details(record: &PlotRecord, cfg: &OverlayConfig) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Plot", record.id.to_string()),
        ("Type", record.category.label().to_string()),
    ];
    if record.height > 0.0 {
        rows.push(("Height", format!("{:.1}", record.height)));
    }
    rows.push(("Price", cfg.price_text.clone()));
    rows.push(("Owner", cfg.owner_text.clone()));
    rows
}

/// Title and the search box. The search text is kept but never applied.
pub fn draw_title(
    mut contexts: EguiContexts,
    mut overlay: ResMut<OverlayState>,
    variant: Res<VariantConfig>,
    cfg: Res<OverlayConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("title")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, [cfg.margin, cfg.margin])
        .show(ctx, |ui| {
            ui.heading(&variant.title);
            ui.add(
                egui::TextEdit::singleline(&mut overlay.search)
                    .hint_text("Search plots")
                    .desired_width(cfg.panel_width),
            );
        });
}

/// Details of the selected plot with a disabled BUY NOW button.
pub fn draw_plot_info(
    mut contexts: EguiContexts,
    state: Res<InteractionState>,
    plots: Res<Plots>,
    cfg: Res<OverlayConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("plot_info")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-cfg.margin, -cfg.margin])
        .show(ctx, |ui| {
            ui.set_width(cfg.panel_width);
            let Some(record) = state.selected().and_then(|id| plots.get(id)) else {
                ui.label("Click a plot to see its details");
                return;
            };
            ui.heading(&record.display_name);
            egui::Grid::new("plot_details").show(ui, |ui| {
                for (label, value) in plot_details(record, &cfg) {
                    ui.label(label);
                    ui.strong(value);
                    ui.end_row();
                }
            });
            ui.separator();
            ui.add_enabled(false, egui::Button::new("BUY NOW"));
        });
}

/// +/- buttons stepping the camera zoom within its clamp.
pub fn draw_zoom_buttons(
    mut contexts: EguiContexts,
    cfg: Res<OverlayConfig>,
    cam_cfg: Res<CameraConfig>,
    mut rigs: Query<&mut CameraRig>,
) {
    if !cfg.zoom_buttons {
        return;
    }
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("zoom")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-cfg.margin, cfg.margin])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("+").clicked() {
                    rig.zoom_by(-cam_cfg.zoom_step, &cam_cfg);
                }
                if ui.button("-").clicked() {
                    rig.zoom_by(cam_cfg.zoom_step, &cam_cfg);
                }
                ui.label(format!("{:.0}", rig.target_distance));
            });
        });
}

/// Records whether egui owns the keyboard or the pointer after this pass.
pub fn track_ui_focus(mut contexts: EguiContexts, mut focus: ResMut<UiFocus>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    focus.set_if_neq(UiFocus {
        keyboard: ctx.wants_keyboard_input(),
        pointer: ctx.is_pointer_over_area() || ctx.wants_pointer_input(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::{Category, Footprint, PlotId};

    fn record(height: f32) -> PlotRecord {
        PlotRecord {
            id: PlotId::Grid { x: 4, z: 2 },
            position: Vec3::ZERO,
            footprint: Footprint::Square { size: 1.0 },
            category: Category::Commercial,
            height,
            display_name: "Plot 4-2".into(),
        }
    }

    fn row<'a>(rows: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn details_show_id_type_and_static_trade_fields() {
        let cfg = OverlayConfig::default();
        let rows = plot_details(&record(0.0), &cfg);
        assert_eq!(row(&rows, "Plot"), Some("4-2"));
        assert_eq!(row(&rows, "Type"), Some("Commercial"));
        assert_eq!(row(&rows, "Price"), Some(cfg.price_text.as_str()));
        assert_eq!(row(&rows, "Owner"), Some(cfg.owner_text.as_str()));
    }

    #[test]
    fn height_row_only_for_buildings() {
        let cfg = OverlayConfig::default();
        assert_eq!(row(&plot_details(&record(0.0), &cfg), "Height"), None);
        assert_eq!(row(&plot_details(&record(2.0), &cfg), "Height"), Some("2.0"));
    }
}
