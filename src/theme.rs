use eframe::egui;
use egui::Color32;

pub fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

/// Fill for calendar days that have a wallpaper.
pub fn wallpaper_day_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(30, 64, 125)
    } else {
        Color32::from_rgb(191, 219, 254)
    }
}

pub fn accent(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(147, 197, 253)
    } else {
        Color32::from_rgb(37, 99, 235)
    }
}
