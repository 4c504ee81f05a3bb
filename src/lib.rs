//! Procedural glyph field: a character grid over the viewport whose glyphs
//! and opacities follow a time-driven wave pattern and the pointer.
//!
//! The numeric core (everything outside `wasm`) is target independent; the
//! browser front-end is only compiled for wasm32.

pub mod config;
pub mod field;
pub mod palette;
pub mod pattern;
pub mod scheduler;
pub mod state;

pub use config::{ConfigError, RenderConfig};
pub use field::{noise, render_frame, sample_cell, CellSample, GlyphSurface};
pub use pattern::{Pattern, PatternSelector, PatternSet, TouchLevel};
pub use scheduler::{Scheduler, TickReport};
pub use state::{Grid, InputEvent, RenderState, Viewport};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::RenderConfig;

    mod input;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let config = RenderConfig::from_attributes(|name| canvas.get_attribute(name))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!(
            "glyph field starting: {:?} patterns, {}x{} px cells",
            config.patterns,
            config.cell_width,
            config.cell_height
        );

        render::start(canvas, config)?;
        Ok(())
    }
}
