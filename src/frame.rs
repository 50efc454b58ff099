use crate::audio::WebWaveSink;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavesculpt_core::{FrameScheduler, LightRenderer, SculptSession, Viewport};
use web_sys as web;

pub type SharedSession = Rc<RefCell<SculptSession<WebWaveSink>>>;

/// Everything one animation frame touches.
pub struct FrameContext {
    pub session: SharedSession,
    pub lights: Rc<RefCell<LightRenderer>>,
    pub scheduler: FrameScheduler,

    pub surface: web::CanvasRenderingContext2d,
    pub preview: web::CanvasRenderingContext2d,
    pub lights_canvas: web::HtmlCanvasElement,
    pub lights_ctx: web::CanvasRenderingContext2d,

    // Set by resize; the canvases lose their pixels when the backing size changes.
    pub surface_dirty: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let Some(dt) = self.scheduler.step(Instant::now()) else {
            return;
        };

        let viewport = Viewport::new(
            self.lights_canvas.width() as f32,
            self.lights_canvas.height() as f32,
        );
        let commands = {
            let mut lights = self.lights.borrow_mut();
            if lights.viewport() != viewport {
                lights.resize(viewport);
            }
            lights.tick(dt)
        };
        render::paint_lights(&self.lights_ctx, &commands);

        // Pointer samples between frames collapse to the newest waveform here.
        let fresh = self.session.borrow_mut().take_redraw();
        if fresh.is_none() && !self.surface_dirty.replace(false) {
            return;
        }
        let session = self.session.borrow();
        let Some(cached) = session.cache().current() else {
            return;
        };
        let waveform = fresh.as_ref().unwrap_or(&cached.waveform);
        render::paint_surface(&self.surface, waveform, Some(cached.position));
        render::paint_preview(&self.preview, waveform);
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be cancelled. The callback holds only a
/// weak handle on itself, so dropping the loop releases the closure.
pub struct FrameLoop {
    tick: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        frame_ctx.borrow_mut().scheduler.start();
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            frame_ctx.borrow_mut().frame();
            if let Some(tick) = tick_weak.upgrade() {
                handle_tick.set(request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        log::info!("[frame] loop started");
        Self { tick, handle }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Cancel the pending frame request and drop the callback.
    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}
