use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use super::input;
use crate::config::RenderConfig;
use crate::field::{CellSample, GlyphSurface};
use crate::scheduler::Scheduler;
use crate::state::Viewport;

/// 2D canvas painter: black background, white glyphs.
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
    letter_spacing: String,
    glyph: String,
}

impl GlyphSurface for CanvasSurface {
    type Error = JsValue;

    fn begin_frame(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
        self.ctx.set_font(&self.font);
        // letterSpacing is not in web-sys' stable bindings.
        js_sys::Reflect::set(
            &self.ctx,
            &JsValue::from_str("letterSpacing"),
            &JsValue::from_str(&self.letter_spacing),
        )?;
        Ok(())
    }

    fn paint(&mut self, cell: &CellSample) -> Result<(), JsValue> {
        let alpha = cell.alpha.clamp(0.0, 1.0);
        self.ctx
            .set_fill_style_str(&format!("rgba(255, 255, 255, {alpha})"));
        self.glyph.clear();
        self.glyph.push(cell.glyph);
        self.ctx.fill_text(&self.glyph, cell.px, cell.py)
    }
}

fn window_size() -> Result<Viewport, JsValue> {
    let w = window().ok_or("no window")?;
    let width = w.inner_width()?.as_f64().unwrap_or(0.0);
    let height = w.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

/// Size the canvas to the window, wire input and start the frame loop.
pub fn start(canvas: HtmlCanvasElement, config: RenderConfig) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    let viewport = window_size()?;
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);

    let mut surface = CanvasSurface {
        ctx,
        font: config.font.clone(),
        letter_spacing: config.letter_spacing.clone(),
        glyph: String::with_capacity(4),
    };
    let scheduler = Rc::new(RefCell::new(Scheduler::new(config, viewport)));
    input::attach(&canvas, &scheduler)?;

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match scheduler.borrow_mut().tick(&mut surface) {
            Ok(report) if report.frame == 1 => {
                log::info!("first frame: {} cells", report.cells_painted);
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("frame failed: {e:?}");
                return;
            }
        }

        // schedule next
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().ok_or("no frame callback")?.as_ref().unchecked_ref())?;

    Ok(())
}
