//! DOM listeners. Each one only translates the browser event into an
//! [`InputEvent`] and queues it; the frame loop applies them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, DeviceOrientationEvent, EventTarget, HtmlCanvasElement,
    MouseEvent, TouchEvent,
};

use crate::scheduler::Scheduler;
use crate::state::InputEvent;

type Shared = Rc<RefCell<Scheduler>>;

fn listen<E, F>(target: &EventTarget, kind: &str, passive: Option<bool>, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        if let Ok(evt) = evt.dyn_into::<E>() {
            handler(evt);
        }
    }) as Box<dyn FnMut(_)>);
    match passive {
        Some(passive) => {
            let opts = AddEventListenerOptions::new();
            opts.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )?;
        }
        None => {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        }
    }
    closure.forget();
    Ok(())
}

fn first_touch(evt: &TouchEvent) -> (usize, f64, f64) {
    let touches = evt.touches();
    let contacts = touches.length() as usize;
    match touches.get(0) {
        Some(t) => (contacts, f64::from(t.client_x()), f64::from(t.client_y())),
        None => (contacts, 0.0, 0.0),
    }
}

pub fn attach(canvas: &HtmlCanvasElement, scheduler: &Shared) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let document: EventTarget = win.document().ok_or("no document")?.into();
    let win_target: EventTarget = win.clone().into();

    {
        let s = scheduler.clone();
        listen(&document, "mousemove", None, move |e: MouseEvent| {
            s.borrow_mut().push(InputEvent::PointerMove {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
            });
        })?;
    }
    {
        let s = scheduler.clone();
        listen(&document, "dblclick", None, move |e: MouseEvent| {
            e.prevent_default();
            s.borrow_mut().push(InputEvent::DoubleClick);
        })?;
    }
    {
        let s = scheduler.clone();
        listen(&document, "touchstart", None, move |e: TouchEvent| {
            s.borrow_mut().push(InputEvent::TouchStart {
                timestamp_ms: e.time_stamp(),
            });
        })?;
    }
    {
        let s = scheduler.clone();
        // Non-passive so preventDefault can stop page scrolling.
        listen(&document, "touchmove", Some(false), move |e: TouchEvent| {
            let (contacts, x, y) = first_touch(&e);
            s.borrow_mut().push(InputEvent::TouchMove { contacts, x, y });
            e.prevent_default();
        })?;
    }
    {
        let s = scheduler.clone();
        listen(&document, "touchend", None, move |e: TouchEvent| {
            s.borrow_mut().push(InputEvent::TouchEnd {
                remaining: e.touches().length() as usize,
            });
        })?;
    }
    {
        let s = scheduler.clone();
        listen(&win_target, "deviceorientation", None, move |e: DeviceOrientationEvent| {
            if let (Some(beta), Some(gamma)) = (e.beta(), e.gamma()) {
                s.borrow_mut().push(InputEvent::Orientation { beta, gamma });
            }
        })?;
    }
    {
        let s = scheduler.clone();
        let canvas = canvas.clone();
        let win = win.clone();
        listen(&win_target, "resize", None, move |_: web_sys::Event| {
            let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            s.borrow_mut().push(InputEvent::Resize { width: w, height: h });
        })?;
    }

    Ok(())
}
