//! Animation and timer durations.

use std::time::Duration;

/// Loading screen text fades in.
pub const LOADING_CONTENT_DELAY: Duration = Duration::from_millis(500);
/// Loading screen starts its exit.
pub const LOADING_COMPLETE: Duration = Duration::from_millis(3000);
/// Panels finish sliding away.
pub const LOADING_EXIT: Duration = Duration::from_millis(1500);

/// Per-panel slide duration, in seconds.
pub const LAYER_SLIDE_SECS: f32 = 0.9;
/// Slide delays for the primary, secondary and tertiary panels.
pub const LAYER_DELAYS_SECS: [f32; 3] = [0.4, 0.2, 0.0];

pub const TOOLTIP_LEAVE: Duration = Duration::from_millis(300);
pub const TOOLTIP_AFTER_CLICK: Duration = Duration::from_millis(1500);
pub const THEME_FLASH: Duration = Duration::from_millis(1000);

pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(4000);
pub const CONTACT_RESET: Duration = Duration::from_millis(1000);

/// Scroll offset in px past which the navbar gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

const HEADING_LETTER_STAGGER: f32 = 0.08;
const WORD_STAGGER: f32 = 0.15;

/// Scale a duration, e.g. to speed animations up for demos. Non-positive or
/// non-finite factors leave it untouched; products too large for a
/// [`Duration`] saturate.
pub fn scaled(duration: Duration, factor: f32) -> Duration {
    if !(factor.is_finite() && factor > 0.0) {
        return duration;
    }
    Duration::try_from_secs_f64(duration.as_secs_f64() * f64::from(factor))
        .unwrap_or(Duration::MAX)
}

/// `animation-delay` for the `index`th letter of a revealed heading.
pub fn letter_delay(index: usize) -> String {
    format!("{:.2}s", index as f32 * HEADING_LETTER_STAGGER)
}

/// `animation-delay` for the `index`th word, after an initial `base` offset.
pub fn word_delay(base: f32, index: usize) -> String {
    format!("{:.2}s", base + index as f32 * WORD_STAGGER)
}

/// CSS `transition` for one loading panel.
pub fn layer_transition(layer: usize) -> String {
    let delay = LAYER_DELAYS_SECS.get(layer).copied().unwrap_or(0.0);
    format!("transform {LAYER_SLIDE_SECS}s cubic-bezier(0.22, 1, 0.36, 1) {delay}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_outlasts_slowest_panel() {
        let slowest = LAYER_DELAYS_SECS
            .iter()
            .map(|d| d + LAYER_SLIDE_SECS)
            .fold(0.0f32, f32::max);
        assert!(LOADING_EXIT.as_secs_f32() >= slowest);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(CAROUSEL_INTERVAL, 0.5), Duration::from_millis(2000));
        assert_eq!(scaled(CAROUSEL_INTERVAL, 0.0), CAROUSEL_INTERVAL);
        assert_eq!(scaled(CAROUSEL_INTERVAL, f32::NAN), CAROUSEL_INTERVAL);
    }

    #[test]
    fn test_scaled_saturates_on_overflow() {
        assert_eq!(scaled(CAROUSEL_INTERVAL, 1e30), Duration::MAX);
        assert_eq!(scaled(Duration::MAX, 2.0), Duration::MAX);
        assert_eq!(scaled(CAROUSEL_INTERVAL, f32::MAX), Duration::MAX);
    }

    #[test]
    fn test_delays() {
        assert_eq!(letter_delay(0), "0.00s");
        assert_eq!(letter_delay(5), "0.40s");
        assert_eq!(word_delay(0.5, 2), "0.80s");
        assert!(layer_transition(0).ends_with(" 0.4s"));
        assert!(layer_transition(9).ends_with(" 0s"));
    }
}
