#![cfg(target_arch = "wasm32")]

use std::convert::Infallible;

use glyph_field::{CellSample, GlyphSurface, InputEvent, RenderConfig, Scheduler, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct Count(usize);

impl GlyphSurface for Count {
    type Error = Infallible;

    fn begin_frame(&mut self, _viewport: Viewport) -> Result<(), Infallible> {
        self.0 = 0;
        Ok(())
    }

    fn paint(&mut self, _cell: &CellSample) -> Result<(), Infallible> {
        self.0 += 1;
        Ok(())
    }
}

#[wasm_bindgen_test]
fn config_from_canvas_attributes() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_attribute("data-patterns", "progress").unwrap();
    canvas.set_attribute("data-cell-width", "10").unwrap();

    let cfg = RenderConfig::from_attributes(|name| canvas.get_attribute(name)).unwrap();
    assert_eq!(cfg.cell_width, 10.0);
    assert_eq!(cfg.patterns, glyph_field::PatternSet::Progress);
}

#[wasm_bindgen_test]
fn window_sized_frame() {
    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap();
    let h = window.inner_height().unwrap().as_f64().unwrap();

    let mut scheduler = Scheduler::new(RenderConfig::default(), Viewport::new(1.0, 1.0));
    scheduler.push(InputEvent::Resize { width: w, height: h });
    let mut count = Count(0);
    let report = scheduler.tick(&mut count).unwrap();

    assert_eq!(count.0, report.cells_painted);
    assert_eq!(report.cells_painted, (w / 8.0).floor() as usize * (h / 16.0).floor() as usize);
}
