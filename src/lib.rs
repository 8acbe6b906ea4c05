#![cfg(target_arch = "wasm32")]
use afterglow_core::{AmbientEngine, AmbientParams, TriggerOutcome, ViewMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod hover;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("afterglow-web loaded");
    Ok(())
}

/// Handle returned to the page. Owns the render loop, the window listeners
/// and the hover timeout; `destroy()` (or `free()`) tears all of them down.
#[wasm_bindgen]
pub struct AmbientFx {
    engine: Rc<RefCell<AmbientEngine>>,
    render_loop: Option<frame::RenderLoop>,
    listeners: Option<events::Listeners>,
    hover_timer: hover::HoverTimer,
}

#[wasm_bindgen]
impl AmbientFx {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>, spotlight_id: Option<String>) -> Result<AmbientFx, JsValue> {
        let canvas_id = canvas_id.as_deref().unwrap_or(constants::DEFAULT_CANVAS_ID);
        let spotlight_id = spotlight_id
            .as_deref()
            .unwrap_or(constants::DEFAULT_SPOTLIGHT_ID);
        activate(canvas_id, spotlight_id).map_err(|e| {
            log::error!("[fx] activation failed: {:#}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    /// Request a firework burst. Refused silently while cooling down or in
    /// scene mode.
    #[wasm_bindgen(js_name = triggerEffect)]
    pub fn trigger_effect(&self) {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            return;
        };
        match engine.trigger_effect(Instant::now()) {
            TriggerOutcome::Launched(_) => {}
            refused => log::debug!("[fx] trigger refused: {:?}", refused),
        }
    }

    #[wasm_bindgen(js_name = setHoverIntent)]
    pub fn set_hover_intent(&mut self, is_hovering: bool) {
        let pending = match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.set_hover_intent(is_hovering, Instant::now()),
            Err(_) => return,
        };
        match pending {
            Some(pending) => self.hover_timer.arm(&self.engine, pending),
            None => self.hover_timer.cancel(),
        }
    }

    /// `"abstract"` or `"scene"`.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) {
        let mode = match mode.parse::<ViewMode>() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[fx] {} (known: {:?})", e, constants::MODE_NAMES);
                return;
            }
        };
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.set_mode(mode);
        }
    }

    pub fn destroy(&mut self) {
        self.teardown();
    }
}

impl AmbientFx {
    fn teardown(&mut self) {
        let had_loop = self.render_loop.is_some();
        if let Some(mut render_loop) = self.render_loop.take() {
            render_loop.cancel();
        }
        self.listeners = None;
        self.hover_timer.cancel();
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.shutdown();
        }
        if had_loop {
            log::info!("[fx] torn down");
        }
    }
}

impl Drop for AmbientFx {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn activate(canvas_id: &str, spotlight_id: &str) -> anyhow::Result<AmbientFx> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let spotlight = dom::html_element_by_id(&document, spotlight_id);
    if spotlight.is_none() {
        log::info!("[fx] no #{} element, spotlight disabled", spotlight_id);
    }

    let engine = Rc::new(RefCell::new(AmbientEngine::new(AmbientParams::default())));
    let listeners = events::wire(engine.clone(), canvas.clone())?;

    let surface = canvas::CanvasSurface::new(canvas, spotlight);
    if !surface.is_ready() {
        log::warn!("[fx] 2d context unavailable, frames will be skipped");
    }
    let render_loop = frame::RenderLoop::start(engine.clone(), surface)?;

    {
        let e = engine.borrow();
        let vp = e.viewport();
        log::info!("[fx] active on #{} ({}x{}, {})", canvas_id, vp.width, vp.height, e.mode());
    }

    Ok(AmbientFx {
        engine,
        render_loop: Some(render_loop),
        listeners: Some(listeners),
        hover_timer: hover::HoverTimer::default(),
    })
}
