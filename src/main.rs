#![windows_subsystem = "windows"]
//! Progress button demo - Main entry point

mod app;
mod settings;

use app::App;
use eframe::egui;
use progress_button::{theme, ProgressButton};
use std::path::PathBuf;
use tracing::info;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "progress-button-demo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,progress_button=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Progress Button Demo");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Progress button demo starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(420.0, 380.0)))
        .with_min_inner_size([320.0, 300.0])
        .with_title("Progress Button");

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Progress Button",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings, data_dir)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Progress Button")
                            .size(theme::FONT_TITLE)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("click to run a simulated operation")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_LG);

                theme::card_frame().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("SIMULATED OPERATION")
                                .color(theme::TEXT_DIM)
                                .size(theme::FONT_SMALL),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.add(ProgressButton::new(&mut self.plain));
                });

                ui.add_space(theme::SPACING_LG);

                theme::card_frame().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("EXTERNAL ERROR OVERRIDE")
                                .color(theme::TEXT_DIM)
                                .size(theme::FONT_SMALL),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.add(ProgressButton::new(&mut self.flagged).error(self.force_error));
                    ui.add_space(theme::SPACING_MD);
                    if ui.checkbox(&mut self.force_error, "Force error").changed() {
                        self.save_settings();
                    }
                });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Demo shutting down");
        self.save_settings();
    }
}
