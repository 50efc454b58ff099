use crate::constants::*;
use crate::input;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use wavesculpt_core::{DrawCommand, Position2D, Waveform};
use web_sys as web;

// ---------------- Light layer ----------------
/// Clear the light canvas and paint one tick of commands additively.
pub fn paint_lights(ctx: &web::CanvasRenderingContext2d, commands: &[DrawCommand]) {
    let canvas_w = ctx.canvas().map(|c| c.width() as f64).unwrap_or(0.0);
    let canvas_h = ctx.canvas().map(|c| c.height() as f64).unwrap_or(0.0);
    ctx.clear_rect(0.0, 0.0, canvas_w, canvas_h);
    if commands.is_empty() {
        return;
    }
    ctx.save();
    _ = ctx.set_global_composite_operation(LIGHTS_COMPOSITE_OP);
    for cmd in commands {
        if let Err(e) = paint_command(ctx, cmd) {
            log::warn!("[render] draw command failed: {:?}", e);
            break;
        }
    }
    ctx.restore();
}

#[allow(deprecated)]
fn paint_command(ctx: &web::CanvasRenderingContext2d, cmd: &DrawCommand) -> Result<(), JsValue> {
    match *cmd {
        DrawCommand::GradientBand {
            origin,
            size,
            skew,
            top,
            bottom,
            ..
        } => {
            let (x, y) = (origin.x as f64, origin.y as f64);
            let (w, h) = (size.x as f64, size.y as f64);
            let grad = ctx.create_linear_gradient(x, y, x, y + h);
            grad.add_color_stop(0.0, &input::css_rgba(top))?;
            grad.add_color_stop(1.0, &input::css_rgba(bottom))?;
            ctx.set_fill_style(&grad);
            ctx.begin_path();
            ctx.move_to(x, y);
            ctx.line_to(x + w, y);
            ctx.line_to(x + w + skew as f64, y + h);
            ctx.line_to(x + skew as f64, y + h);
            ctx.close_path();
            ctx.fill();
        }
        DrawCommand::RadialBlob {
            center,
            radius,
            inner,
            outer,
        } => {
            let (cx, cy, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
            let grad = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r)?;
            grad.add_color_stop(0.0, &input::css_rgba(inner))?;
            grad.add_color_stop(1.0, &input::css_rgba(outer))?;
            ctx.set_fill_style(&grad);
            ctx.begin_path();
            ctx.arc(cx, cy, r, 0.0, TAU)?;
            ctx.fill();
        }
        DrawCommand::Particle {
            center,
            radius,
            color,
        } => {
            ctx.set_fill_style(&JsValue::from_str(&input::css_rgba(color)));
            ctx.begin_path();
            ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)?;
            ctx.fill();
        }
    }
    Ok(())
}

// ---------------- Waveform views ----------------
/// Full control-surface redraw: centre axis, the cycle and the handle.
#[allow(deprecated)]
pub fn paint_surface(
    ctx: &web::CanvasRenderingContext2d,
    waveform: &Waveform,
    position: Option<Position2D>,
) {
    let Some(canvas) = ctx.canvas() else {
        return;
    };
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

    ctx.set_stroke_style(&JsValue::from_str(&input::css_rgba_arr(AXIS_RGBA)));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(0.0, h as f64 * 0.5);
    ctx.line_to(w as f64, h as f64 * 0.5);
    ctx.stroke();

    stroke_polyline(ctx, &waveform.polyline(w, h), WAVE_LINE_WIDTH);

    if let Some(p) = position {
        let at = input::handle_px(p, w, h);
        ctx.set_fill_style(&JsValue::from_str(&input::css_rgba_arr(HANDLE_RGBA)));
        ctx.begin_path();
        if ctx
            .arc(at.x as f64, at.y as f64, HANDLE_RADIUS_PX, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }
}

/// Small preview of the last cycle, used as the export drag source.
pub fn paint_preview(ctx: &web::CanvasRenderingContext2d, waveform: &Waveform) {
    let Some(canvas) = ctx.canvas() else {
        return;
    };
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    stroke_polyline(ctx, &waveform.polyline(w, h), PREVIEW_LINE_WIDTH);
}

#[allow(deprecated)]
fn stroke_polyline(ctx: &web::CanvasRenderingContext2d, points: &[Vec2], line_width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.set_stroke_style(&JsValue::from_str(&input::css_rgba_arr(WAVE_STROKE_RGBA)));
    ctx.set_line_width(line_width);
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.stroke();
}
