//! Demo app state

use crate::settings::Settings;
use eframe::egui;
use progress_button::{theme, ProgressState};
use std::path::PathBuf;

pub struct App {
    pub(crate) plain: ProgressState,
    pub(crate) flagged: ProgressState,
    pub(crate) force_error: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            plain: ProgressState::new(),
            flagged: ProgressState::new(),
            force_error: settings.force_error,
            window_pos: None,
            window_size: None,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            force_error: self.force_error,
        };
        settings.save(&self.data_dir);
    }
}
