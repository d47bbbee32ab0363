//! Tint to CSS color conversion

use game_core::Tint;

/// CSS `rgba(...)` string for a tint
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn css_rgba(tint: Tint) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(tint[0]),
        channel(tint[1]),
        channel(tint[2]),
        tint[3].clamp(0.0, 1.0)
    )
}
