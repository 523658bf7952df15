//! Application-level coordination.
//!
//! Translates panel interactions into screen operations and keeps the
//! per-frame background work (image results, toast timers) moving.

use crate::app::AppState;
use log::debug;
use std::time::Instant;
use usercards::RowEvent;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies finished image fetches.
    ///
    /// Called once per frame in the update loop, before rendering.
    pub fn poll_images(state: &mut AppState, ctx: &egui::Context) {
        let loader = state.screen.renderer_mut().loader_mut();
        let applied = loader.poll(ctx);
        if applied > 0 {
            debug!(
                "event=images_applied module=coordinator count={} pending={}",
                applied,
                loader.pending_count()
            );
        }
    }

    /// Handles a tap on a list row.
    ///
    /// Deletions take effect in the next render pass, so a repaint is requested.
    pub fn handle_row_event(state: &mut AppState, event: RowEvent, ctx: &egui::Context) {
        state.screen.handle_event(event);
        if matches!(event, RowEvent::DeleteRequested(_)) {
            ctx.request_repaint();
        }
    }

    /// Makes sure the frame after the current toast expires gets drawn.
    pub fn schedule_toast_repaint(state: &mut AppState, ctx: &egui::Context) {
        let now = Instant::now();
        let toasts = state.screen.sink_mut();
        if toasts.current(now).is_some() {
            if let Some(remaining) = toasts.remaining(now) {
                ctx.request_repaint_after(remaining);
            }
        }
    }
}
