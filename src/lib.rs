#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wavesculpt_core::{LightRenderer, ParamBus, ParamEvent, SculptSession, SessionConfig, Viewport};
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::{LIGHTS_CANVAS_ID, PREVIEW_CANVAS_ID, SURFACE_CANVAS_ID};
use dom::Listener;
use frame::{FrameContext, FrameLoop, SharedSession};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavesculpt-web starting");
    Ok(())
}

/// One mounted sculpting surface with its light layer. Create it after the
/// page markup exists; call `dispose` before removing the markup.
#[wasm_bindgen]
pub struct WaveSculpt {
    app: Option<App>,
}

#[wasm_bindgen]
impl WaveSculpt {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WaveSculpt, JsValue> {
        match init() {
            Ok(app) => Ok(WaveSculpt { app: Some(app) }),
            Err(e) => {
                log::error!("init error: {:?}", e);
                Err(JsValue::from_str(&format!("{e:#}")))
            }
        }
    }

    /// Forward an effect change from outside the page controls, e.g.
    /// `setParam("delayChange", 0.4)`.
    #[wasm_bindgen(js_name = setParam)]
    pub fn set_param(&self, topic: &str, value: Option<f64>) -> Result<(), JsValue> {
        let Some(app) = self.app.as_ref() else {
            return Ok(());
        };
        let ev = ParamEvent::from_raw(topic, value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.bus.publish(ev);
        Ok(())
    }

    /// Export payload for the current waveform as JSON, if any.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Option<String> {
        let payload = self.app.as_ref()?.session.borrow().export_payload()?;
        match payload.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("[export] {e}");
                None
            }
        }
    }

    pub fn dispose(&mut self) {
        if let Some(app) = self.app.take() {
            app.dispose();
        }
    }
}

impl Drop for WaveSculpt {
    fn drop(&mut self) {
        self.dispose();
    }
}

struct App {
    bus: ParamBus,
    session: SharedSession,
    lights: Rc<RefCell<LightRenderer>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl App {
    fn dispose(mut self) {
        // Unwire input first so no handler runs against a half-torn-down app.
        self.listeners.clear();
        self.frame_loop.stop();
        self.frame_ctx.borrow_mut().stop();
        self.session.borrow_mut().dispose();
        self.lights.borrow_mut().dispose();
        log::info!(
            "wavesculpt-web disposed (bus subscribers left: {})",
            self.bus.subscriber_count()
        );
    }
}

fn wire_canvas_resize(
    canvases: Vec<web::HtmlCanvasElement>,
    surface_dirty: Rc<Cell<bool>>,
) -> anyhow::Result<Listener> {
    for c in &canvases {
        dom::sync_canvas_backing_size(c);
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    Listener::new(&window, "resize", move |_ev: web::Event| {
        for c in &canvases {
            dom::sync_canvas_backing_size(c);
        }
        surface_dirty.set(true);
    })
}

fn init() -> anyhow::Result<App> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let surface_canvas = dom::canvas_by_id(&document, SURFACE_CANVAS_ID)?;
    let lights_canvas = dom::canvas_by_id(&document, LIGHTS_CANVAS_ID)?;
    let preview_canvas = dom::canvas_by_id(&document, PREVIEW_CANVAS_ID)?;

    let surface_dirty = Rc::new(Cell::new(false));
    let mut listeners = vec![wire_canvas_resize(
        vec![
            surface_canvas.clone(),
            lights_canvas.clone(),
            preview_canvas.clone(),
        ],
        surface_dirty.clone(),
    )?];

    // Audio: oscillator -> gain -> destination, silent until the first press.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow!("{:?}", e))?;
    let sink = audio::WebWaveSink::new(&audio_ctx)?;
    let session: SharedSession = Rc::new(RefCell::new(SculptSession::new(
        sink,
        SessionConfig::default(),
    )));

    let bus = ParamBus::new();
    let lights = Rc::new(RefCell::new(LightRenderer::init(
        &bus,
        Viewport::new(lights_canvas.width() as f32, lights_canvas.height() as f32),
    )));

    listeners.extend(events::wire_pointer_handlers(&events::PointerWiring {
        canvas: surface_canvas.clone(),
        session: session.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    })?);
    listeners.push(events::wire_export_drag(&preview_canvas, &session)?);
    listeners.extend(events::wire_param_controls(&document, &bus));

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        session: session.clone(),
        lights: lights.clone(),
        scheduler: Default::default(),
        surface: dom::context_2d(&surface_canvas)?,
        preview: dom::context_2d(&preview_canvas)?,
        lights_ctx: dom::context_2d(&lights_canvas)?,
        lights_canvas,
        surface_dirty,
    }));
    let frame_loop = FrameLoop::start(frame_ctx.clone());

    log::info!(
        "[init] wired {} listeners, {} bus subscribers",
        listeners.len(),
        bus.subscriber_count()
    );
    Ok(App {
        bus,
        session,
        lights,
        frame_ctx,
        frame_loop,
        listeners,
    })
}
