mod params;
mod pointer;

pub use params::wire_param_controls;
pub use pointer::{wire_export_drag, wire_pointer_handlers, PointerWiring};
