//! BOOKSHELF: a virtual bookshelf
//!
//! - Left click to pick up and drag books
//! - Release books over a shelf slot or the trash
//! - Right click a book to rate it

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod logging;
mod shelf;
mod ui;

use app::AppState;
use macroquad::prelude::*;
use shelf::ShelfLayout;
use tracing::{info, warn};
use ui::{PointerTracker, ScreenCanvas};

/// On-disk layout that overrides the compiled-in one (native only)
#[cfg(not(target_arch = "wasm32"))]
const LAYOUT_PATH: &str = "assets/bookshelf.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Bookshelf v{}", VERSION),
        window_width: 400,
        window_height: 400,
        window_resizable: false,
        ..Default::default()
    }
}

/// Disk override if present and valid, otherwise the built-in layout
fn load_layout() -> Option<ShelfLayout> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::path::Path::new(LAYOUT_PATH);
        if path.exists() {
            match ShelfLayout::load(path) {
                Ok(layout) => {
                    info!("Loaded layout from {}", LAYOUT_PATH);
                    return Some(layout);
                }
                Err(e) => warn!("Failed to load {}: {}, using built-in layout", LAYOUT_PATH, e),
            }
        }
    }

    match ShelfLayout::builtin() {
        Ok(layout) => Some(layout),
        Err(e) => {
            tracing::error!("Built-in layout is invalid: {}", e);
            None
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init();

    // Scatter differs per launch unless the layout pins a seed
    macroquad::rand::srand(miniquad::date::now() as u64);

    let Some(layout) = load_layout() else {
        return;
    };

    let mut app = AppState::new(&layout);
    let mut pointer = PointerTracker::new();
    let mut canvas = ScreenCanvas::new();

    info!("=== BOOKSHELF v{} ===", VERSION);

    loop {
        app.set_canvas_size(screen_width(), screen_height());

        let (sample, events) = pointer.poll();
        for event in events {
            app.handle(event, &sample);
        }

        app.draw(&mut canvas);

        next_frame().await;
    }
}
