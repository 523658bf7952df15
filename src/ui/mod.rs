//! UI panel rendering subsystem
//!
//! - User list panel (virtual scrolling over realized rows)
//! - Toast overlay (transient messages)
//! - Panel manager (panel orchestration and layout)

pub mod user_list_panel;
pub mod toast_overlay;
pub mod panel_manager;
