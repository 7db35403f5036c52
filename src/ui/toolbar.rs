use crate::app::GanttApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut GanttApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{} Open data CSV...", icons::FOLDER_OPEN)).clicked() {
                app.open_data();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{} Reload chart config", icons::ARROW_CLOCKWISE)).clicked() {
                app.reload_config();
                ui.close_menu();
            }
            if ui.button(format!("{} Open config folder", icons::GEAR)).clicked() {
                app.open_config_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.zoom(true);
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.zoom(false);
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{} One week back", icons::CARET_LEFT)).clicked() {
                app.shift_range(-7);
                ui.close_menu();
            }
            if ui.button(format!("{} One week ahead", icons::CARET_RIGHT)).clicked() {
                app.shift_range(7);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned data file name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let name = app
                .data_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "no data loaded".to_string());
            ui.label(RichText::new(name).size(11.0).weak());
        });
    });
}
