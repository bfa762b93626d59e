use eframe::egui;
use egui::{Button, Color32, RichText, Stroke};

use crate::calendar::{day_style, format_day, format_month, month_grid, WEEKDAYS};
use crate::catalog::{Catalog, JsonFileCatalog};
use crate::record::WallpaperRecord;
use crate::resolver::Resolver;
use crate::state::{save_settings, Settings};
use crate::theme;
use crate::view::{View, ViewState};

const USAGE_TIP: &str = "💡 Tip: \"Download\" opens the full-resolution image in your browser. \
Save it from there and set it as your wallpaper.";

pub struct WallpaperApp {
    resolver: Resolver,
    state: ViewState,
    settings: Settings,
    load_error: Option<String>,
}

impl WallpaperApp {
    pub fn new(resolver: Resolver, settings: Settings) -> Self {
        let state = ViewState::new(&resolver, settings.dark_mode);
        Self {
            resolver,
            state,
            settings,
            load_error: None,
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("🖼 Daily Wallpaper").color(theme::accent(self.state.dark_mode)));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if self.state.dark_mode { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                    self.toggle_dark_mode(ui.ctx());
                }
                if ui
                    .button("📂")
                    .on_hover_text("Open a wallpaper catalog (JSON)")
                    .clicked()
                {
                    self.pick_catalog();
                }
                ui.separator();
                if ui
                    .selectable_label(self.state.view == View::Calendar, "📅 History")
                    .clicked()
                {
                    self.state.show_calendar();
                }
                if ui
                    .selectable_label(self.state.view == View::Today, "Today")
                    .clicked()
                {
                    self.state.show_today();
                }
            });
        });
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = self.state.toggle_dark_mode();
        ctx.set_visuals(theme::visuals(dark_mode));
        self.settings.dark_mode = dark_mode;
        save_settings(&self.settings);
    }

    fn pick_catalog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Wallpaper catalog", &["json"])
            .pick_file()
        else {
            return;
        };

        match Catalog::load(&JsonFileCatalog::new(path.clone())) {
            Ok(catalog) => {
                self.resolver.set_catalog(catalog);
                self.state.refresh(&self.resolver);
                self.settings.catalog_path = Some(path);
                save_settings(&self.settings);
                self.load_error = None;
            }
            Err(err) => {
                log::error!("{err}");
                self.load_error = Some(err.to_string());
            }
        }
    }

    fn today_view(&mut self, ui: &mut egui::Ui) {
        let today = self.resolver.today();

        let Some(record) = self.state.selected.clone() else {
            if self.state.selected_date == today {
                empty_state(ui, "No wallpaper for today yet", "Check back tomorrow for a new one!");
            } else {
                let title = format!("No wallpaper for {}", format_day(self.state.selected_date));
                empty_state(ui, &title, "Pick another day in the calendar.");
            }
            if self.state.selected_date != today && ui.button("Back to today").clicked() {
                self.state.jump_to_today(&self.resolver);
            }
            return;
        };

        let max_height = ui.ctx().screen_rect().height() * 0.7;
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Image::new(record.image_url.as_str())
                    .max_height(max_height)
                    .rounding(10.0)
                    .show_loading_spinner(true),
            );
            ui.add_space(8.0);
            wallpaper_details(ui, &record);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add(Button::new(RichText::new("⬇ Download").size(16.0)))
                    .clicked()
                {
                    log::info!("Opening {} for download", record.image_url);
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&record.image_url));
                }
                if self.state.selected_date != today && ui.button("Back to today").clicked() {
                    self.state.jump_to_today(&self.resolver);
                }
            });
        });

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(USAGE_TIP);
        });
    }

    fn calendar_view(&mut self, ui: &mut egui::Ui) {
        let today = self.resolver.today();
        let wallpaper_days = self.resolver.dates_with_records();
        let dark_mode = self.state.dark_mode;

        ui.heading("Pick a day to see its wallpaper");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.state.prev_month();
            }
            ui.label(RichText::new(format_month(self.state.month)).strong());
            if ui
                .add_enabled(self.state.can_go_next_month(today), Button::new("▶"))
                .clicked()
            {
                self.state.next_month(today);
            }
            if ui.button("Jump to today").clicked() {
                self.state.jump_to_today(&self.resolver);
            }
        });
        ui.add_space(6.0);

        let (year, month) = self.state.month;
        let mut picked = None;
        egui::Grid::new("month_grid")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                ui.label("");
                for weekday in WEEKDAYS {
                    ui.strong(weekday.to_string());
                }
                ui.end_row();

                for week in month_grid(year, month) {
                    ui.weak(week.number.to_string());
                    for day in week.days {
                        let style = day_style(
                            day,
                            self.state.month,
                            today,
                            self.state.selected_date,
                            &wallpaper_days,
                        );

                        let mut text = RichText::new(day.format("%-d").to_string());
                        if !style.in_month {
                            text = text.weak();
                        }
                        if style.selected {
                            text = text.strong();
                        }

                        let mut button = Button::new(text).min_size(egui::vec2(36.0, 28.0));
                        if style.selected {
                            button = button.fill(ui.visuals().selection.bg_fill);
                        } else if style.has_wallpaper {
                            button = button.fill(theme::wallpaper_day_fill(dark_mode));
                        }
                        if style.is_today {
                            button = button.stroke(Stroke::new(1.5, theme::accent(dark_mode)));
                        }

                        if ui.add_enabled(!style.disabled, button).clicked() {
                            picked = Some(day);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(day) = picked {
            self.state.select_date(&self.resolver, day);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 3.0, theme::wallpaper_day_fill(dark_mode));
            ui.label("Highlighted days have a wallpaper");
        });
        ui.add_space(12.0);

        match self.state.selected.clone() {
            Some(record) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.add(
                        egui::Image::new(record.thumbnail_url())
                            .max_height(240.0)
                            .rounding(8.0)
                            .show_loading_spinner(true),
                    );
                    ui.label(RichText::new(&record.title).size(18.0).strong());
                    ui.label(format_day(record.date));
                    if ui.button("View full wallpaper").clicked() {
                        self.state.show_today();
                    }
                });
            }
            None => {
                ui.label(format!(
                    "No wallpaper for {}",
                    format_day(self.state.selected_date)
                ));
            }
        }
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.load_error.clone() else {
            return;
        };
        egui::Window::new("Could not open catalog")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(Color32::from_rgb(220, 38, 38)));
                ui.label("The current catalog is still in use.");
                if ui.button("OK").clicked() {
                    self.load_error = None;
                }
            });
    }
}

impl eframe::App for WallpaperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.header(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.weak("A hand-picked wallpaper for every day");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.view {
                View::Today => self.today_view(ui),
                View::Calendar => self.calendar_view(ui),
            });
        });

        self.error_window(ctx);
    }
}

fn wallpaper_details(ui: &mut egui::Ui, record: &WallpaperRecord) {
    ui.label(RichText::new(&record.title).size(26.0).strong());
    if let Some(description) = &record.description {
        ui.label(RichText::new(description).size(16.0));
    }
    if let Some(photographer) = &record.photographer {
        ui.label(format!("📷 {photographer}"));
    }
    ui.label(format_day(record.date));
    if let Some(source) = &record.source {
        ui.weak(format!("via {source}"));
    }
}

fn empty_state(ui: &mut egui::Ui, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("📅").size(56.0));
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(22.0).strong());
        ui.label(hint);
        ui.add_space(16.0);
    });
}

pub fn run_gui(resolver: Resolver, settings: Settings) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 780.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Daily Wallpaper",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(theme::visuals(settings.dark_mode));
            Box::new(WallpaperApp::new(resolver, settings))
        }),
    )
}
