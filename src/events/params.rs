use crate::constants::PARAM_CONTROLS;
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use wavesculpt_core::{ParamBus, ParamEvent};
use web_sys as web;

fn publish_from(input: &web::HtmlInputElement, topic: &str, bus: &ParamBus) {
    match ParamEvent::from_raw(topic, Some(input.value_as_number())) {
        Ok(ev) => {
            bus.publish(ev);
        }
        Err(e) => log::error!("[params] {e}"),
    }
}

/// Publish range-control changes onto `bus`. Controls missing from the page
/// are skipped; each present control also publishes its initial value.
pub fn wire_param_controls(document: &web::Document, bus: &ParamBus) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(PARAM_CONTROLS.len());
    for (id, topic) in PARAM_CONTROLS {
        let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            log::warn!("[params] no range input #{id}");
            continue;
        };
        publish_from(&input, topic, bus);

        let bus = bus.clone();
        let input_ev = input.clone();
        match Listener::new(&input, "input", move |_ev: web::Event| {
            publish_from(&input_ev, topic, &bus);
        }) {
            Ok(l) => listeners.push(l),
            Err(e) => log::error!("[params] {e:?}"),
        }
    }
    listeners
}
