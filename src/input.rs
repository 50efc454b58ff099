use glam::{Vec2, Vec4};
use wavesculpt_core::Position2D;

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub down: bool,
    pub pointer_id: Option<i32>,
}

// ---------------- Surface mapping ----------------
/// Map a CSS-pixel offset inside the control surface to a position: left to
/// right is sharpness, bottom to top is warmth. A collapsed surface maps to
/// the centre.
#[inline]
pub fn surface_position(x_css: f32, y_css: f32, width: f32, height: f32) -> Position2D {
    if width > 0.0 && height > 0.0 {
        Position2D::clamped(x_css / width, 1.0 - y_css / height)
    } else {
        Position2D::new(0.5, 0.5)
    }
}

/// Pixel location of the handle for `position` on a `width` x `height` surface.
#[inline]
pub fn handle_px(position: Position2D, width: f32, height: f32) -> Vec2 {
    Vec2::new(position.sharpness * width, (1.0 - position.warmth) * height)
}

// ---------------- Color helpers ----------------
/// CSS `rgba()` string for a straight-alpha color in 0..1.
pub fn css_rgba(color: Vec4) -> String {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE);
    format!(
        "rgba({},{},{},{:.3})",
        (c.x * 255.0).round() as u8,
        (c.y * 255.0).round() as u8,
        (c.z * 255.0).round() as u8,
        c.w
    )
}

#[inline]
pub fn css_rgba_arr(color: [f32; 4]) -> String {
    css_rgba(Vec4::from_array(color))
}
