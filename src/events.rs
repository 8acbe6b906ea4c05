use crate::constants::{POINTER_MOVE_EVENT, RESIZE_EVENT};
use crate::dom;
use crate::input;
use afterglow_core::AmbientEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners feeding the engine. Dropping this deregisters them.
pub struct Listeners {
    window: web::Window,
    pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
}

pub fn wire(
    engine: Rc<RefCell<AmbientEngine>>,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<Listeners> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    // Initial size before the first tick.
    let viewport = dom::fit_canvas_to_window(&canvas);
    engine.borrow_mut().resized(viewport);

    let pointer_move = {
        let engine = engine.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas.get_bounding_client_rect();
            let pos = input::client_to_canvas(
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
            );
            match engine.try_borrow_mut() {
                Ok(mut e) => e.pointer_moved(pos.x, pos.y),
                Err(_) => log::debug!("[input] engine busy, pointer sample dropped"),
            }
        }) as Box<dyn FnMut(_)>)
    };

    let resize = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move || {
            let viewport = dom::fit_canvas_to_window(&canvas);
            match engine.try_borrow_mut() {
                Ok(mut e) => e.resized(viewport),
                Err(_) => log::warn!("[input] engine busy, resize dropped"),
            }
        }) as Box<dyn FnMut()>)
    };

    // Built first so a failed registration is undone by Drop.
    let listeners = Listeners {
        window,
        pointer_move,
        resize,
    };
    listeners
        .window
        .add_event_listener_with_callback(
            POINTER_MOVE_EVENT,
            listeners.pointer_move.as_ref().unchecked_ref(),
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    listeners
        .window
        .add_event_listener_with_callback(RESIZE_EVENT, listeners.resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(listeners)
}

impl Drop for Listeners {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            POINTER_MOVE_EVENT,
            self.pointer_move.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.resize.as_ref().unchecked_ref());
        log::debug!("[input] listeners removed");
    }
}
