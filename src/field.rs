//! Per-cell sampling of the glyph field.

use crate::config::RenderConfig;
use crate::palette::Palette;
use crate::pattern::PatternInput;
use crate::state::{RenderState, Viewport};

/// Base noise, in `[0, 1]` for any finite input.
pub fn noise(x: f64, y: f64, t: f64) -> f64 {
    (x * 0.1 + t * 0.3).sin() * (y * 0.1 + t * 0.2).cos() * 0.5 + 0.5
}

/// One painted cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSample {
    pub glyph: char,
    /// Combined intensity, clamped to `[0, 1]`.
    pub val: f64,
    /// Unclamped opacity; the surface clamps when painting.
    pub alpha: f64,
    pub px: f64,
    pub py: f64,
}

/// Where frames are painted.
pub trait GlyphSurface {
    type Error;

    /// Clear to background before the first cell of a frame.
    fn begin_frame(&mut self, viewport: Viewport) -> Result<(), Self::Error>;

    fn paint(&mut self, cell: &CellSample) -> Result<(), Self::Error>;
}

pub fn sample_cell(state: &RenderState, config: &RenderConfig, x: usize, y: usize) -> CellSample {
    let (x, y) = (x as f64, y as f64);
    let time = state.clock.time();
    let n = noise(x, y, time);

    let (mouse_x, mouse_y) = state.pointer_cell(config);
    let dx = (mouse_x - x) * 0.02;
    let dy = (mouse_y - y) * 0.02;
    let dist = ((x - mouse_x).powi(2) + (y - mouse_y).powi(2)).sqrt();
    let influence = (1.0 - dist * config.influence_falloff).max(0.0);

    let level = state.pointer.level;
    let touch = level.factor();
    let input = PatternInput {
        x,
        y,
        time,
        dx,
        dy,
        grid_w: state.grid.width as f64,
        grid_h: state.grid.height as f64,
        motion: level.motion(),
    };
    let (wave, depth) = state.selector.current().eval(&input);

    let val = ((n + wave + depth + influence * (0.4 * touch)) / 2.0).clamp(0.0, 1.0);
    let glyph = Palette::select(state.pointer.shuffle).glyph_for(val);
    let alpha = (val * 0.8 + influence * 0.3 * touch) * config.alpha_scale;

    CellSample {
        glyph,
        val,
        alpha,
        px: x * config.cell_width,
        py: y * config.cell_height,
    }
}

/// Paint one full frame, row by row. Returns the number of cells painted.
pub fn render_frame<S: GlyphSurface>(
    state: &RenderState,
    config: &RenderConfig,
    surface: &mut S,
) -> Result<usize, S::Error> {
    surface.begin_frame(state.viewport)?;
    for y in 0..state.grid.height {
        for x in 0..state.grid.width {
            surface.paint(&sample_cell(state, config, x, y))?;
        }
    }
    Ok(state.grid.cells())
}
