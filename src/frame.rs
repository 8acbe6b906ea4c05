use crate::canvas::CanvasSurface;
use afterglow_core::AmbientEngine;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be stopped.
///
/// The frame closure re-requests itself each frame; `cancel` clears the
/// pending frame id and drops the closure, breaking the self-reference.
pub struct RenderLoop {
    window: web::Window,
    tick: TickCell,
    frame_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl RenderLoop {
    pub fn start(
        engine: Rc<RefCell<AmbientEngine>>,
        mut surface: CanvasSurface,
    ) -> anyhow::Result<RenderLoop> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let tick: TickCell = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let frame_id_tick = frame_id.clone();
        let running_tick = running.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_id_tick.set(None);
            if !running_tick.get() {
                return;
            }
            match engine.try_borrow_mut() {
                Ok(mut e) => e.tick(&mut surface, Instant::now()),
                Err(_) => log::warn!("[loop] engine busy, frame skipped"),
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id_tick.set(Some(id)),
                    Err(e) => log::error!("[loop] could not schedule frame: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("{:?}", e))?,
            None => anyhow::bail!("frame closure missing"),
        };
        frame_id.set(Some(first));
        log::info!("[loop] started");

        Ok(RenderLoop {
            window,
            tick,
            frame_id,
            running,
        })
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.frame_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[loop] cancelled");
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
