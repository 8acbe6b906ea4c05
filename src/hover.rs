use afterglow_core::{AmbientEngine, PendingHide};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The browser-side half of the hover release: one `setTimeout` at most.
#[derive(Default)]
pub struct HoverTimer {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl HoverTimer {
    /// Replace any pending timeout with one that reports `pending` back to
    /// the engine when it elapses.
    pub fn arm(&mut self, engine: &Rc<RefCell<AmbientEngine>>, pending: PendingHide) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let engine = engine.clone();
        let token = pending.token;
        let callback = Closure::wrap(Box::new(move || {
            // A busy engine is fine: the next tick polls the same deadline.
            if let Ok(mut e) = engine.try_borrow_mut() {
                e.expire_hover(token);
            }
        }) as Box<dyn FnMut()>);
        let delay_ms = pending.delay.as_millis().min(i32::MAX as u128) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.callback = Some(callback);
            }
            Err(e) => log::warn!("[hover] setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.callback = None;
    }
}

impl Drop for HoverTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
