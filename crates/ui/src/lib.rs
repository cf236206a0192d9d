use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod config_panel;
pub mod results;
pub mod status_banner;
pub mod theme;
pub mod workbench;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<config_panel::ConfigPanelVisible>()
            .add_systems(Startup, theme::apply_workbench_theme)
            .add_systems(
                Update,
                (
                    status_banner::status_banner_ui,
                    workbench::workbench_ui,
                    config_panel::config_panel_ui,
                ),
            )
            .add_plugins(results::ResultsDashboardPlugin);
    }
}
