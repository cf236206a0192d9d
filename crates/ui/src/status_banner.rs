//! Top status banner: catalog availability, validation notices, compute
//! progress and failures. All error surfacing is text in this bar; nothing
//! here is fatal and the rest of the UI stays interactive.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::catalog::{CatalogStatus, MaterialCatalog};
use engine::compute::{ComputeLifecycle, ValidationNotice};

const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);
const COLOR_WARN: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);
const COLOR_INFO: egui::Color32 = egui::Color32::from_rgb(210, 210, 210);

pub fn status_banner_ui(
    mut contexts: EguiContexts,
    catalog: Res<MaterialCatalog>,
    lifecycle: Res<ComputeLifecycle>,
    notice: Res<ValidationNotice>,
) {
    let mut lines: Vec<(egui::Color32, String)> = Vec::new();

    if let CatalogStatus::Unavailable(message) = &catalog.status {
        lines.push((COLOR_ERROR, message.clone()));
    }
    if let Some(message) = &notice.0 {
        lines.push((COLOR_WARN, message.clone()));
    }
    if lifecycle.is_loading() {
        lines.push((COLOR_INFO, "Calculating...".to_string()));
    }
    if let Some(message) = lifecycle.error() {
        lines.push((COLOR_ERROR, message.to_string()));
    }

    if lines.is_empty() {
        return;
    }

    egui::TopBottomPanel::top("status_banner").show(contexts.ctx_mut(), |ui| {
        for (color, text) in &lines {
            ui.colored_label(*color, text);
        }
    });
}
