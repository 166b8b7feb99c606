//! The progress button widget
//!
//! Renders a [`ProgressState`] and feeds clicks and ticks back into it. All
//! visuals are derived from the state each frame; nothing is stored here.

use crate::state::{Phase, ProgressState, TICK_INTERVAL};
use crate::theme;
use egui::{Color32, CornerRadius, FontId, Rect, Response, Sense, Ui, Vec2, Widget};
use std::time::Instant;

/// Horizontal text padding inside the button
const PAD_X: f32 = 24.0;

/// Seconds the fill bar takes to ease toward a new width
const FILL_ANIM_SECS: f32 = 0.3;

/// Button that runs a simulated operation when clicked.
///
/// Borrows its [`ProgressState`] so the embedding app owns the lifecycle. The
/// `error` flag is the caller-imposed override: it forces error colors and
/// blocks interaction but is never cleared by the widget, and it leaves the
/// label and progress alone. Every other interaction event (hover, context
/// menus, tooltips) is available on the returned [`egui::Response`].
#[must_use = "pass the widget to ui.add(...)"]
pub struct ProgressButton<'a> {
    state: &'a mut ProgressState,
    has_error: bool,
    min_size: Vec2,
    corner_radius: CornerRadius,
    font: FontId,
}

impl<'a> ProgressButton<'a> {
    pub fn new(state: &'a mut ProgressState) -> Self {
        Self {
            state,
            has_error: false,
            min_size: Vec2::new(theme::BTN_MIN_WIDTH, theme::BTN_HEIGHT),
            corner_radius: CornerRadius::same(theme::RADIUS_BUTTON as u8),
            font: FontId::proportional(theme::FONT_BODY),
        }
    }

    /// Caller-imposed error override.
    pub fn error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn corner_radius(mut self, corner_radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }
}

/// Whether the control accepts clicks.
///
/// A run in flight and the external override both block interaction; idle,
/// completed and failed stay clickable so a click can start or restart a run.
fn accepts_click(state: &ProgressState, has_error: bool) -> bool {
    !state.is_running() && !has_error
}

/// Background fill: error wins over completed, everything else is the idle
/// blue. Hover shades one step darker.
fn background(state: &ProgressState, has_error: bool, hovered: bool) -> Color32 {
    if state.has_failed() || has_error {
        if hovered {
            theme::BTN_ERROR_HOVER
        } else {
            theme::BTN_ERROR
        }
    } else if state.is_completed() {
        if hovered {
            theme::BTN_COMPLETED_HOVER
        } else {
            theme::BTN_COMPLETED
        }
    } else if hovered {
        theme::BTN_IDLE_HOVER
    } else {
        theme::BTN_IDLE
    }
}

fn fill_tint(state: &ProgressState, has_error: bool) -> Color32 {
    if state.has_failed() || has_error {
        theme::FILL_ERROR
    } else {
        theme::FILL_NEUTRAL
    }
}

/// Label and icon for the internal phase. The external override never
/// changes the text, only colors and interactivity.
fn label(state: &ProgressState) -> String {
    match state.phase() {
        Phase::Failed => format!("{} Error", egui_phosphor::regular::X),
        Phase::Completed => format!("{} Completed", egui_phosphor::regular::CHECK),
        Phase::Running(_) => "Loading...".to_owned(),
        Phase::Idle => "Click to Start".to_owned(),
    }
}

impl Widget for ProgressButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let ProgressButton {
            state,
            has_error,
            min_size,
            corner_radius,
            font,
        } = self;

        let now = Instant::now();
        state.poll(now);

        let text = label(state);
        let galley = ui.fonts(|f| f.layout_no_wrap(text.clone(), font, theme::TEXT_PRIMARY));
        let desired = Vec2::new(
            min_size.x.max(galley.size().x + 2.0 * PAD_X),
            min_size.y.max(galley.size().y),
        );
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        let enabled = accepts_click(state, has_error);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, &text));

        if response.hovered() {
            ui.ctx().set_cursor_icon(if enabled {
                egui::CursorIcon::PointingHand
            } else {
                egui::CursorIcon::NotAllowed
            });
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = background(state, has_error, enabled && response.hovered());
            painter.rect_filled(rect, corner_radius, fill);

            // Fill bar eases toward the live progress, like the original CSS
            // transition; left corners track the button radius.
            let target = state.progress() as f32 / 100.0;
            let shown =
                ui.ctx()
                    .animate_value_with_time(response.id.with("fill"), target, FILL_ANIM_SECS);
            if shown > 0.0 {
                let bar = Rect::from_min_size(
                    rect.min,
                    Vec2::new(rect.width() * shown.clamp(0.0, 1.0), rect.height()),
                );
                let bar_radius = if shown >= 1.0 {
                    corner_radius
                } else {
                    CornerRadius {
                        nw: corner_radius.nw,
                        sw: corner_radius.sw,
                        ne: 0,
                        se: 0,
                    }
                };
                painter.rect_filled(bar, bar_radius, fill_tint(state, has_error));
            }

            let text_pos = rect.center() - galley.size() / 2.0;
            painter.galley(text_pos, galley, theme::TEXT_PRIMARY);
        }

        if enabled && response.clicked() {
            state.click(now);
            ui.ctx().request_repaint();
        }
        if state.is_running() {
            ui.ctx().request_repaint_after(TICK_INTERVAL);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_outcome(failed: bool) -> ProgressState {
        let mut state = ProgressState::with_sampler(move || failed);
        let t0 = Instant::now();
        state.click(t0);
        state.poll(t0 + TICK_INTERVAL * 50);
        state
    }

    fn running() -> ProgressState {
        let mut state = ProgressState::with_sampler(|| false);
        state.click(Instant::now());
        state
    }

    #[test]
    fn click_gating_follows_phase_and_override() {
        assert!(accepts_click(&ProgressState::new(), false));
        assert!(accepts_click(&run_to_outcome(false), false));
        assert!(accepts_click(&run_to_outcome(true), false));
        assert!(!accepts_click(&running(), false));

        // the external override disables everything, even idle
        assert!(!accepts_click(&ProgressState::new(), true));
        assert!(!accepts_click(&run_to_outcome(false), true));
    }

    #[test]
    fn background_precedence_is_error_then_completed_then_idle() {
        assert_eq!(background(&ProgressState::new(), false, false), theme::BTN_IDLE);
        assert_eq!(background(&running(), false, false), theme::BTN_IDLE);
        assert_eq!(
            background(&run_to_outcome(false), false, false),
            theme::BTN_COMPLETED
        );
        assert_eq!(
            background(&run_to_outcome(true), false, false),
            theme::BTN_ERROR
        );

        // external override forces red regardless of the internal phase
        assert_eq!(background(&ProgressState::new(), true, false), theme::BTN_ERROR);
        assert_eq!(
            background(&run_to_outcome(false), true, false),
            theme::BTN_ERROR
        );
    }

    #[test]
    fn hover_shades_one_step_darker() {
        assert_eq!(
            background(&ProgressState::new(), false, true),
            theme::BTN_IDLE_HOVER
        );
        assert_eq!(
            background(&run_to_outcome(false), false, true),
            theme::BTN_COMPLETED_HOVER
        );
        assert_eq!(
            background(&run_to_outcome(true), false, true),
            theme::BTN_ERROR_HOVER
        );
    }

    #[test]
    fn fill_tint_reddens_for_either_error_flag() {
        assert_eq!(fill_tint(&ProgressState::new(), false), theme::FILL_NEUTRAL);
        assert_eq!(fill_tint(&run_to_outcome(true), false), theme::FILL_ERROR);
        assert_eq!(fill_tint(&ProgressState::new(), true), theme::FILL_ERROR);
    }

    #[test]
    fn label_tracks_internal_phase_only() {
        assert_eq!(label(&ProgressState::new()), "Click to Start");
        assert_eq!(label(&running()), "Loading...");
        assert!(label(&run_to_outcome(false)).ends_with("Completed"));
        assert!(label(&run_to_outcome(true)).ends_with("Error"));
    }
}
