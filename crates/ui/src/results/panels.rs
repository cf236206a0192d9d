//! Individual panel rendering for the results dashboard.

use bevy_egui::egui;

use engine::results::ComparisonResult;
use engine::waterfall::{SegmentRole, WaterfallSegment};

// =============================================================================
// Colors
// =============================================================================

const COLOR_ANCHOR: egui::Color32 = egui::Color32::from_rgb(74, 144, 226);
const COLOR_CREDIT: egui::Color32 = egui::Color32::from_rgb(126, 211, 33);
const COLOR_PENALTY: egui::Color32 = egui::Color32::from_rgb(208, 2, 27);
const COLOR_CARD_BG: egui::Color32 = egui::Color32::from_rgb(42, 44, 52);
const COLOR_CHART_BG: egui::Color32 = egui::Color32::from_rgb(26, 28, 34);
const COLOR_ZERO_LINE: egui::Color32 = egui::Color32::from_gray(110);

pub(super) const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);

fn role_color(role: SegmentRole) -> egui::Color32 {
    match role {
        SegmentRole::Anchor => COLOR_ANCHOR,
        SegmentRole::Credit => COLOR_CREDIT,
        SegmentRole::Penalty => COLOR_PENALTY,
    }
}

// =============================================================================
// VIU summary cards
// =============================================================================

/// Renders the three $/net-ton summary cards (A / Blended / B).
pub(super) fn render_summary(ui: &mut egui::Ui, result: &ComparisonResult) {
    ui.heading("VIU Summary ($/Net Ton)");
    let cards = [
        (result.names.material1.as_str(), result.material1.cost_per_net_ton),
        ("Blended", result.blend.cost_per_net_ton),
        (result.names.material2.as_str(), result.material2.cost_per_net_ton),
    ];
    let card_width = (ui.available_width() - 16.0) / 3.0;
    ui.horizontal(|ui| {
        for (title, cost) in cards {
            egui::Frame::new()
                .fill(COLOR_CARD_BG)
                .inner_margin(egui::Margin::same(6))
                .corner_radius(egui::CornerRadius::same(4))
                .show(ui, |ui| {
                    ui.set_width(card_width - 12.0);
                    ui.vertical_centered(|ui| {
                        ui.small(title);
                        // Engine-supplied precision; no extra rounding.
                        ui.strong(format!("{cost} USD"));
                    });
                });
        }
    });
}

// =============================================================================
// KPI table
// =============================================================================

/// Renders the KPI table with one column per scenario.
pub(super) fn render_kpi_table(ui: &mut egui::Ui, result: &ComparisonResult) {
    ui.heading("Key Performance Indicators");
    egui::Grid::new("kpi_table")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            ui.label("KPI");
            ui.strong(&result.names.material1);
            ui.strong(&result.names.material2);
            ui.strong("Blended");
            ui.end_row();

            let rows = [
                (
                    "Yield (%)",
                    result.material1.kpis.yield_pct,
                    result.material2.kpis.yield_pct,
                    result.blend.kpis.yield_pct,
                ),
                (
                    "Slag Volume (kg/t)",
                    result.material1.kpis.slag_volume_kg_per_ton,
                    result.material2.kpis.slag_volume_kg_per_ton,
                    result.blend.kpis.slag_volume_kg_per_ton,
                ),
                (
                    "Energy Credit (kWh/t)",
                    result.material1.kpis.kwh_credit_per_ton,
                    result.material2.kpis.kwh_credit_per_ton,
                    result.blend.kpis.kwh_credit_per_ton,
                ),
            ];
            for (label, a, b, blend) in rows {
                ui.label(label);
                ui.label(format!("{a}"));
                ui.label(format!("{b}"));
                ui.label(format!("{blend}"));
                ui.end_row();
            }
        });
}

// =============================================================================
// Waterfall chart
// =============================================================================

/// Value-axis bounds for a set of segments, always including zero.
pub(super) fn value_bounds(segments: &[WaterfallSegment]) -> (f64, f64) {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for segment in segments {
        min = min.min(segment.range[0]).min(segment.range[1]);
        max = max.max(segment.range[0]).max(segment.range[1]);
    }
    if max - min < f64::EPSILON {
        max = min + 1.0;
    }
    (min, max)
}

/// Pixel rect of one bar. `range` is in value space; `bounds` is the value
/// axis from [`value_bounds`]. Bars are laid out left to right in segment
/// order, each centered in an equal horizontal slot.
pub(super) fn bar_rect(
    plot: egui::Rect,
    index: usize,
    count: usize,
    range: [f64; 2],
    bounds: (f64, f64),
) -> egui::Rect {
    let (min, max) = bounds;
    let span = max - min;
    let y_of = |value: f64| {
        plot.max.y - ((value - min) / span) as f32 * plot.height()
    };

    let slot = plot.width() / count as f32;
    let bar_width = slot * 0.72;
    let x_center = plot.min.x + (index as f32 + 0.5) * slot;

    let hi = range[0].max(range[1]);
    let lo = range[0].min(range[1]);
    egui::Rect::from_min_max(
        egui::pos2(x_center - bar_width / 2.0, y_of(hi)),
        egui::pos2(x_center + bar_width / 2.0, y_of(lo)),
    )
}

/// Renders the waterfall chart: one bar per segment, stacked at its
/// cumulative offset, colored by role, with a zero baseline.
pub(super) fn render_waterfall(ui: &mut egui::Ui, segments: &[WaterfallSegment]) {
    let width = ui.available_width().min(520.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 240.0), egui::Sense::hover());
    let plot = rect.shrink2(egui::vec2(4.0, 16.0));

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, COLOR_CHART_BG);

    let bounds = value_bounds(segments);
    let count = segments.len();

    // Zero baseline
    let zero = bar_rect(plot, 0, 1, [0.0, 0.0], bounds).max.y;
    painter.line_segment(
        [egui::pos2(plot.min.x, zero), egui::pos2(plot.max.x, zero)],
        egui::Stroke::new(1.0, COLOR_ZERO_LINE),
    );

    for (index, segment) in segments.iter().enumerate() {
        let bar = bar_rect(plot, index, count, segment.range, bounds);
        let color = role_color(segment.role);
        painter.rect_filled(bar, 2.0, color);

        // Impact value above the bar, component name below the plot.
        painter.text(
            egui::pos2(bar.center().x, bar.min.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.2}", segment.value),
            egui::FontId::proportional(9.0),
            color,
        );
        painter.text(
            egui::pos2(bar.center().x, rect.max.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            &segment.name,
            egui::FontId::proportional(9.0),
            egui::Color32::from_gray(200),
        );
    }

    ui.horizontal(|ui| {
        ui.colored_label(COLOR_ANCHOR, "Anchor");
        ui.colored_label(COLOR_CREDIT, "Credit");
        ui.colored_label(COLOR_PENALTY, "Penalty");
        ui.label("(Cost $/ton)");
    });
}
