//! User Cards GUI Application
//!
//! A single-screen viewer that renders a scrollable list of synthetic users as
//! cards with a photo, a name, a status line and a delete control, using the
//! egui framework.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `io/` - Background image fetching
//! - `ui/` - Panel rendering and layout
//! - `rendering/` - Low-level card drawing and text measurement
//!
//! Usage: `usercards-gui [config.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use log::warn;
use std::path::PathBuf;
use std::sync::Arc;
use usercards::strings::APP_NAME;
use usercards::{logging, AppConfig, StringLookup, StringTable};

mod app;
mod io;
mod rendering;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::image_loader::ImageFetcher;
use io::{AsyncImageLoader, HttpImageFetcher};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that loads configuration and launches the GUI.
fn main() -> eframe::Result {
    // Optional first argument: JSON config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = AppConfig::load(config_path.as_deref())
        .map_err(|err| eframe::Error::AppCreation(err.into()))?;

    if let Err(err) = logging::init_logging(&config.log_level) {
        eprintln!("logging disabled: {err:#}");
    }

    let fetcher: Arc<dyn ImageFetcher> = Arc::new(
        HttpImageFetcher::new(config.image_timeout())
            .map_err(|err| eframe::Error::AppCreation(err.into()))?,
    );

    let app_title = StringTable::english().resolve(APP_NAME, &[]);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(app_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &app_title,
        options,
        Box::new(move |cc| Ok(Box::new(UserCardsApp::new(cc, config, fetcher)))),
    )
}

/// The main application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles row events, image polling and toast timers
/// - `ThemeCoordinator` applies the visual theme
/// - `PanelManager` handles UI panel layout and rendering
struct UserCardsApp {
    /// Centralized application state
    state: AppState,
}

impl UserCardsApp {
    fn new(cc: &eframe::CreationContext, config: AppConfig, fetcher: Arc<dyn ImageFetcher>) -> Self {
        ThemeCoordinator::apply_theme(&cc.egui_ctx);

        let mut loader = AsyncImageLoader::new(fetcher, config.image_workers);
        loader.set_repaint_context(&cc.egui_ctx);

        if config.record_count == 0 {
            warn!("event=empty_list module=app record_count=0");
        }

        Self {
            state: AppState::new(&config, loader),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::Row(event) => {
                ApplicationCoordinator::handle_row_event(&mut self.state, event, ctx);
            }
        }
    }
}

impl eframe::App for UserCardsApp {
    /// Main update loop.
    ///
    /// 1. Apply finished image fetches
    /// 2. Render all panels via PanelManager (sync + layout happen inside)
    /// 3. Handle the frame's row interaction
    /// 4. Keep toasts ticking
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::poll_images(&mut self.state, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }

        ApplicationCoordinator::schedule_toast_repaint(&mut self.state, ctx);
    }
}
