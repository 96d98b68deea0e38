//! Timing helpers for the page's entrance and count-up animations.

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_STEPS: u32 = 60;

/// Value shown by a count-up counter after `elapsed_ms`.
pub fn count_up(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (progress * target as f64).floor() as u32
}

/// Entrance delay in seconds for the `index`th item of a staggered list.
pub fn stagger(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

/// Inline style for a staggered CSS entrance animation.
pub fn stagger_style(index: usize, base: f64, step: f64) -> String {
    format!("animation-delay: {:.2}s", stagger(index, base, step))
}
