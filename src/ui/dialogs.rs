use crate::app::GanttApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([420.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Equipment Gantt").strong());
                ui.label(RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).color(theme::TEXT_SECONDARY));
            });
            ui.add_space(10.0);

            let data_file = app
                .data_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string());
            let categories = app.colors.len();
            egui::Grid::new("about_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Data file").color(theme::TEXT_SECONDARY));
                    ui.label(data_file);
                    ui.end_row();

                    ui.label(RichText::new("Equipment").color(theme::TEXT_SECONDARY));
                    ui.label(app.catalog.len().to_string());
                    ui.end_row();

                    ui.label(RichText::new("Categories colored").color(theme::TEXT_SECONDARY));
                    ui.label(format!("{categories} of {} palette colors", app.config.colors.palette.len()));
                    ui.end_row();

                    ui.label(RichText::new("Config folder").color(theme::TEXT_SECONDARY));
                    if ui.link(app.store.dir().display().to_string()).clicked() {
                        app.open_config_folder();
                    }
                    ui.end_row();
                });

            ui.add_space(14.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
