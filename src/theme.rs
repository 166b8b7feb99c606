//! Centralized theme constants for the progress button
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Button states
// =============================================================================
pub const BTN_IDLE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const BTN_IDLE_HOVER: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const BTN_COMPLETED: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const BTN_COMPLETED_HOVER: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a); // green-600
pub const BTN_ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500
pub const BTN_ERROR_HOVER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// COLORS - Fill bar
// =============================================================================
// Premultiplied equivalents of from_rgba_unmultiplied(...) — that constructor is not
// const in egui 0.31, so the gamma-correct premultiplied bytes are precomputed here.
pub const FILL_NEUTRAL: Color32 = Color32::from_rgba_premultiplied(124, 124, 124, 51); // white @ 20%
pub const FILL_ERROR: Color32 = Color32::from_rgba_premultiplied(123, 109, 109, 51); // red-100 @ 20%

// =============================================================================
// COLORS - Demo chrome
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Button
// =============================================================================
pub const BTN_MIN_WIDTH: f32 = 200.0;
pub const BTN_HEIGHT: f32 = 48.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_BUTTON: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 150))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_BUTTON)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}
