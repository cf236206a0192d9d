use bevy_egui::{egui, EguiContexts};

pub fn apply_workbench_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark neutral background with a steel-blue accent
    let panel = egui::Color32::from_rgb(32, 34, 40);
    let inactive = egui::Color32::from_rgb(48, 52, 60);
    let hover = egui::Color32::from_rgb(66, 74, 90);
    let active = egui::Color32::from_rgb(74, 144, 226);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(26, 28, 34);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(40, 42, 50);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
