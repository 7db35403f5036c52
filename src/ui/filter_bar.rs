use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::ui::theme;
use equip_gantt::io::ResourceFilter;
use equip_gantt::model::ResourceCatalog;

/// Date range and equipment picked in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub resource: ResourceFilter,
}

impl FilterState {
    /// One week back, two weeks ahead.
    pub fn around(today: NaiveDate) -> Self {
        Self {
            from: today - chrono::Duration::days(7),
            to: today + chrono::Duration::days(14),
            resource: ResourceFilter::All,
        }
    }
}

/// Render the filter row. Returns true when "View" was pressed.
pub fn show_filter_bar(filter: &mut FilterState, catalog: &ResourceCatalog, ui: &mut Ui) -> bool {
    let mut view = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new("From").color(theme::TEXT_SECONDARY));
        ui.add(egui_extras::DatePickerButton::new(&mut filter.from).id_salt("filter_from"));

        ui.label(RichText::new("To").color(theme::TEXT_SECONDARY));
        ui.add(egui_extras::DatePickerButton::new(&mut filter.to).id_salt("filter_to"));

        ui.add_space(8.0);
        ui.label(RichText::new("Equipment").color(theme::TEXT_SECONDARY));

        let selected = match &filter.resource {
            ResourceFilter::All => "All equipment".to_string(),
            ResourceFilter::Only(id) => resource_entry(catalog, id),
        };
        egui::ComboBox::from_id_salt("filter_resource")
            .width(220.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.resource, ResourceFilter::All, "All equipment");
                for id in catalog.ids() {
                    ui.selectable_value(
                        &mut filter.resource,
                        ResourceFilter::Only(id.to_string()),
                        resource_entry(catalog, id),
                    );
                }
            });

        ui.add_space(8.0);
        let button = egui::Button::new(
            RichText::new(format!("{} View", egui_phosphor::regular::CHART_BAR_HORIZONTAL)).color(egui::Color32::WHITE),
        )
        .fill(theme::ACCENT);
        if ui.add(button).clicked() {
            view = true;
        }
    });
    view
}

fn resource_entry(catalog: &ResourceCatalog, id: &str) -> String {
    let name = catalog.display_name(id);
    if name == id {
        id.to_string()
    } else {
        format!("{id}  {name}")
    }
}
