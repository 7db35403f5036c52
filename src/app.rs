use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::ui;
use crate::ui::filter_bar::FilterState;
use equip_gantt::config::{AppSettings, ChartConfig, ConfigStore};
use equip_gantt::interaction::InteractionController;
use equip_gantt::io::{CsvSource, EventQuery, EventSource, MemorySource, ResourceFilter};
use equip_gantt::model::{Event, ResourceCatalog, TimeWindow};
use equip_gantt::render::{build_scene, ColorAssigner, RenderModel};

/// Main application state.
pub struct GanttApp {
    pub source: Box<dyn EventSource>,
    pub catalog: ResourceCatalog,
    pub data_path: Option<PathBuf>,

    pub store: ConfigStore,
    pub settings: AppSettings,
    pub config: ChartConfig,

    // Category colors live for the whole session
    pub colors: ColorAssigner,

    pub filter: FilterState,
    pub window: Option<TimeWindow>,
    pub events: Vec<Event>,
    pub scene: Option<RenderModel>,
    pub interaction: InteractionController,

    // Text of the last clicked bar
    pub info: String,
    pub status_message: String,
    pub show_about: bool,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        let store = ConfigStore::discover();
        let config = store.load_chart();
        let settings = store.load_settings();

        let mut app = Self {
            source: Box::new(MemorySource::default()),
            catalog: ResourceCatalog::new(),
            data_path: None,
            colors: ColorAssigner::new(config.colors.palette.clone()),
            interaction: InteractionController::new(config.hover_brightness),
            store,
            settings,
            config,
            filter: FilterState::around(Local::now().date_naive()),
            window: None,
            events: Vec::new(),
            scene: None,
            info: String::new(),
            status_message: "Ready".to_string(),
            show_about: false,
        };

        if let Some(path) = app.settings.last_data_file.clone() {
            app.load_data(path);
        }
        app.view();
        app
    }

    // --- Data ---

    pub fn open_data(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            if self.load_data(path.clone()) {
                self.settings.last_data_file = Some(path);
                if let Err(e) = self.store.save_settings(&self.settings) {
                    warn!(error = %e, "could not save settings");
                }
                self.view();
            }
        }
    }

    fn load_data(&mut self, path: PathBuf) -> bool {
        match CsvSource::open(&path) {
            Ok(source) => {
                self.status_message = if source.skipped() > 0 {
                    format!("Loaded {} events ({} rows skipped)", source.len(), source.skipped())
                } else {
                    format!("Loaded {} events", source.len())
                };
                self.catalog = source.catalog();
                self.source = Box::new(source);
                self.data_path = Some(path);
                if let ResourceFilter::Only(id) = &self.filter.resource {
                    if !self.catalog.ids().any(|known| known == id) {
                        self.filter.resource = ResourceFilter::All;
                    }
                }
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load data file");
                self.status_message = format!("Could not load data: {e}");
                false
            }
        }
    }

    // --- Config ---

    pub fn reload_config(&mut self) {
        self.config = self.store.load_chart();
        self.colors = ColorAssigner::new(self.config.colors.palette.clone());
        self.interaction.set_brightness(self.config.hover_brightness);
        self.window = None;
        self.view();
        self.status_message = "Chart config reloaded".to_string();
    }

    pub fn open_config_folder(&mut self) {
        let dir = self.store.dir().to_path_buf();
        let opened = std::fs::create_dir_all(&dir).and_then(|_| open::that(&dir));
        if let Err(e) = opened {
            warn!(dir = %dir.display(), error = %e, "could not open config folder");
            self.status_message = format!("Could not open {}: {e}", dir.display());
        }
    }

    // --- Chart ---

    /// Query the source for the filter's range and rebuild the chart.
    pub fn view(&mut self) {
        let pixels_per_day = self
            .window
            .map(|w| w.pixels_per_day())
            .unwrap_or(self.config.sizing.day_width);
        let window = match TimeWindow::new(self.filter.from, self.filter.to, pixels_per_day) {
            Ok(window) => window,
            Err(e) => {
                self.status_message = e.to_string();
                return;
            }
        };

        let query = EventQuery::new(self.filter.resource.clone(), self.filter.from, self.filter.to);
        match self.source.query(&query) {
            Ok(events) => {
                info!(events = events.len(), from = %self.filter.from, to = %self.filter.to, "viewing range");
                self.events = events;
                self.window = Some(window);
                self.rebuild();
            }
            Err(e) => {
                warn!(error = %e, "query failed");
                self.status_message = format!("Query failed: {e}");
            }
        }
    }

    /// Rebuild the scene from the current events and window.
    fn rebuild(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let scene = build_scene(
            &self.events,
            window,
            &self.catalog,
            &self.config,
            &mut self.colors,
            Local::now().date_naive(),
        );
        self.interaction.reset();
        self.info.clear();
        self.scene = Some(scene);
    }

    pub fn zoom(&mut self, zoom_in: bool) {
        if let Some(window) = &mut self.window {
            if zoom_in {
                window.zoom_in();
            } else {
                window.zoom_out();
            }
            self.rebuild();
        }
    }

    /// Move the viewed window by `days` and query again.
    pub fn shift_range(&mut self, days: i64) {
        let Some(mut window) = self.window else {
            return;
        };
        window.scroll_days(days);
        self.filter.from = window.start();
        self.filter.to = window.end();
        self.window = Some(window);
        self.view();
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: menu
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Filter row
        let mut view_requested = false;
        egui::TopBottomPanel::top("filter_bar")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_TOOLBAR)
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0)),
            )
            .show(ctx, |ui| {
                view_requested = ui::filter_bar::show_filter_bar(&mut self.filter, &self.catalog, ui);
            });
        if view_requested {
            self.view();
        }

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let bars = self.scene.as_ref().map_or(0, RenderModel::bar_count);
                        ui.label(
                            egui::RichText::new(format!("Bars: {bars}"))
                                .size(10.5)
                                .color(ui::theme::TEXT_SECONDARY),
                        );
                        if let Some(window) = &self.window {
                            ui.label(egui::RichText::new(" · ").size(10.5));
                            ui.label(
                                egui::RichText::new(format!(
                                    "Zoom: {:.0}%",
                                    window.pixels_per_day() / self.config.sizing.day_width * 100.0
                                ))
                                .size(10.5)
                                .color(ui::theme::TEXT_SECONDARY),
                            );
                        }
                    });
                });
            });

        // Info label for the clicked bar
        egui::TopBottomPanel::bottom("info_bar")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_CANVAS)
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE))
                    .inner_margin(egui::Margin::symmetric(10.0, 4.0)),
            )
            .show(ctx, |ui| {
                let text = if self.info.is_empty() { "Click a bar for details" } else { self.info.as_str() };
                ui.label(egui::RichText::new(text).color(ui::theme::TEXT_PRIMARY));
            });

        // Central panel: chart
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_CANVAS)
            .inner_margin(egui::Margin::ZERO);
        let mut rebuild = false;
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let (Some(scene), Some(window)) = (&self.scene, &mut self.window) else {
                return;
            };
            let result = ui::gantt_chart::show_gantt_chart(scene, &self.config, window, &mut self.interaction, ui);
            if let Some(info) = result.clicked_info {
                self.info = info;
            }
            if let Some(event) = result.clicked_event.and_then(|r| self.events.get(r.0)) {
                self.status_message = event.summary();
            }
            rebuild = result.window_changed;
        });
        if rebuild {
            self.rebuild();
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
