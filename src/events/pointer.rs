use crate::constants::EXPORT_MIME;
use crate::dom::Listener;
use crate::frame::SharedSession;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wavesculpt_core::Position2D;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: SharedSession,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Control-surface handlers. Dropping the returned listeners unwires them.
pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointerdown(w)?,
        wire_pointermove(w)?,
        wire_pointerup(w, "pointerup")?,
        wire_pointerup(w, "pointercancel")?,
    ])
}

fn event_position(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Position2D {
    let rect = canvas.get_bounding_client_rect();
    input::surface_position(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn wire_pointerdown(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(&w.canvas.clone(), "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        ev.prevent_default();
        {
            let mut ps = w.pointer.borrow_mut();
            ps.down = true;
            ps.pointer_id = Some(ev.pointer_id());
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());

        let pos = event_position(ev, &w.canvas);
        let mut session = w.session.borrow_mut();
        if let Some(sink) = session.sink() {
            sink.resume();
        }
        session.press(pos);
    })
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(&w.canvas.clone(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let ps = *w.pointer.borrow();
        if !ps.down || ps.pointer_id != Some(ev.pointer_id()) {
            return;
        }
        // Applied right away; only the redraw waits for the next frame.
        let pos = event_position(ev, &w.canvas);
        w.session.borrow_mut().drag(pos);
    })
}

fn wire_pointerup(w: &PointerWiring, kind: &'static str) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(&w.canvas.clone(), kind, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let was_down = {
            let mut ps = w.pointer.borrow_mut();
            if ps.pointer_id.is_some() && ps.pointer_id != Some(ev.pointer_id()) {
                return;
            }
            let was_down = ps.down;
            *ps = PointerState::default();
            was_down
        };
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if was_down {
            w.session.borrow_mut().release();
        }
    })
}

/// Make the preview draggable; the drag carries the current spectrum as JSON.
pub fn wire_export_drag(
    preview: &web::HtmlCanvasElement,
    session: &SharedSession,
) -> anyhow::Result<Listener> {
    preview.set_draggable(true);
    let session = session.clone();
    Listener::new(preview, "dragstart", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DragEvent>() else {
            return;
        };
        let payload = session.borrow().export_payload();
        let Some(payload) = payload else {
            // nothing synthesized yet
            ev.prevent_default();
            return;
        };
        let json = match payload.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("[export] {e}");
                ev.prevent_default();
                return;
            }
        };
        if let Some(dt) = ev.data_transfer() {
            _ = dt.set_data(EXPORT_MIME, &json);
            _ = dt.set_data("text/plain", &json);
            log::debug!("[export] drag started ({} bytes)", json.len());
        }
    })
}
