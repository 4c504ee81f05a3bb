use std::convert::Infallible;

use glyph_field::palette::{Palette, LARGE, SMALL};
use glyph_field::{
    noise, render_frame, sample_cell, CellSample, GlyphSurface, InputEvent, PatternSelector,
    PatternSet, RenderConfig, RenderState, TouchLevel, Viewport,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Recorder {
    frames: usize,
    cells: Vec<CellSample>,
}

impl GlyphSurface for Recorder {
    type Error = Infallible;

    fn begin_frame(&mut self, _viewport: Viewport) -> Result<(), Infallible> {
        self.frames += 1;
        self.cells.clear();
        Ok(())
    }

    fn paint(&mut self, cell: &CellSample) -> Result<(), Infallible> {
        self.cells.push(*cell);
        Ok(())
    }
}

#[test]
fn centre_cell_at_time_zero_is_reproducible() {
    let cfg = RenderConfig::default();
    let state = RenderState::new(&cfg, Viewport::new(800.0, 480.0));
    assert_eq!(state.pointer_cell(&cfg), (50.0, 15.0));

    let (x, y, t) = (50.0_f64, 15.0_f64, 0.0_f64);
    let (speed, wi, touch, influence) = (1.0_f64, 0.3_f64, 1.0_f64, 1.0_f64);
    let n = (x * 0.1 + t * 0.3).sin() * (y * 0.1 + t * 0.2).cos() * 0.5 + 0.5;
    let wave = ((x + t * 0.5 * speed + 0.0 * 10.0) * 0.1).sin() * wi + 0.3;
    let depth = ((y - t * 0.3 * speed + 0.0 * 10.0) * 0.15).sin() * (wi + 0.1) + 0.4;
    let val = ((n + wave + depth + influence * (0.4 * touch)) / 2.0).clamp(0.0, 1.0);
    let alpha = (val * 0.8 + influence * 0.3 * touch) * 0.68;

    let cell = sample_cell(&state, &cfg, 50, 15);
    assert_eq!(cell.val.to_bits(), val.to_bits());
    assert_eq!(cell.alpha.to_bits(), alpha.to_bits());
    assert_eq!(cell.glyph, '│');
    assert_eq!((cell.px, cell.py), (400.0, 240.0));
    assert!((cell.val - 0.794_818).abs() < 1e-5, "val = {}", cell.val);
    assert!((cell.alpha - 0.636_38).abs() < 1e-5, "alpha = {}", cell.alpha);
}

#[test]
fn origin_noise_seed() {
    assert_eq!(noise(0.0, 0.0, 0.0), 0.5);
}

#[test]
fn val_and_index_bounded_for_every_mode() {
    let cfg_sets = [PatternSet::Classic, PatternSet::Progress];
    for set in cfg_sets {
        let cfg = RenderConfig {
            patterns: set,
            ..RenderConfig::default()
        };
        let mut state = RenderState::new(&cfg, Viewport::new(320.0, 160.0));
        for contacts in [0usize, 1, 2, 4] {
            state.apply(&cfg, InputEvent::TouchMove { contacts, x: 17.0, y: 93.0 });
            for time in [0.0, 0.016, 12.5, 9_999.9] {
                state.clock = glyph_field::state::AnimationClock::at(time);
                for _ in 0..state.selector.len() {
                    let palette = Palette::select(state.pointer.shuffle);
                    for y in 0..state.grid.height {
                        for x in 0..state.grid.width {
                            let cell = sample_cell(&state, &cfg, x, y);
                            assert!((0.0..=1.0).contains(&cell.val));
                            let idx = palette.index_for(cell.val);
                            assert!(idx < palette.len());
                            assert_eq!(cell.glyph, if state.pointer.shuffle { LARGE[idx] } else { SMALL[idx] });
                        }
                    }
                    state.apply(&cfg, InputEvent::DoubleClick);
                }
            }
        }
    }
}

#[test]
fn frame_covers_grid_in_row_order() {
    let cfg = RenderConfig::default();
    let state = RenderState::new(&cfg, Viewport::new(100.0, 50.0));
    let mut surface = Recorder::default();

    let painted = render_frame(&state, &cfg, &mut surface).unwrap();

    assert_eq!(painted, 12 * 3);
    assert_eq!(surface.frames, 1);
    assert_eq!(surface.cells.len(), 36);
    assert_eq!((surface.cells[0].px, surface.cells[0].py), (0.0, 0.0));
    assert_eq!((surface.cells[1].px, surface.cells[1].py), (8.0, 0.0));
    assert_eq!((surface.cells[12].px, surface.cells[12].py), (0.0, 16.0));
    assert_eq!((surface.cells[35].px, surface.cells[35].py), (88.0, 32.0));
}

#[test]
fn tiny_viewport_paints_nothing() {
    let cfg = RenderConfig::default();
    let state = RenderState::new(&cfg, Viewport::new(7.0, 15.0));
    let mut surface = Recorder::default();
    assert_eq!(render_frame(&state, &cfg, &mut surface).unwrap(), 0);
    assert_eq!(surface.frames, 1);
}

#[test]
fn selector_returns_to_start_after_full_cycle() {
    for set in [PatternSet::Classic, PatternSet::Progress] {
        let mut sel = PatternSelector::new(set);
        let start = sel.current();
        let n = sel.len();
        assert_eq!(n, if set == PatternSet::Classic { 3 } else { 5 });
        for _ in 0..n {
            sel.advance();
        }
        assert_eq!(sel.current(), start);
        assert_eq!(sel.index(), 0);
    }
}

#[test]
fn touch_raises_pointer_weight() {
    let cfg = RenderConfig::default();
    let mut state = RenderState::new(&cfg, Viewport::new(800.0, 480.0));
    let idle = sample_cell(&state, &cfg, 50, 15);

    state.apply(&cfg, InputEvent::TouchMove { contacts: 2, x: 400.0, y: 240.0 });
    assert_eq!(state.pointer.level, TouchLevel::Multi);
    let multi = sample_cell(&state, &cfg, 50, 15);

    assert!(multi.alpha > idle.alpha);
    assert!(LARGE.contains(&multi.glyph));
}
