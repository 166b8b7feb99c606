//! Simulated-progress button widget for egui
//!
//! A click starts a fake asynchronous operation that ticks to 100 % and then
//! settles as completed or failed on a weighted coin flip. [`ProgressState`]
//! holds the run state machine, [`ProgressButton`] paints it; the embedding
//! app may force error presentation with [`ProgressButton::error`].

pub mod state;
pub mod theme;
pub mod widget;

pub use state::{Phase, ProgressState, Run, FAILURE_RATE, PROGRESS_STEP, TICK_INTERVAL};
pub use widget::ProgressButton;
