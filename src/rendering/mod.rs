//! Rendering subsystem for drawing list rows
//!
//! - User card rendering (photo, name, status, delete control)
//! - Text utilities (text measurement and truncation)

pub mod user_card_renderer;
pub mod text_utils;
