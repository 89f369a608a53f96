//! Scroll-driven motion math.

use super::timing::NAV_SCROLL_THRESHOLD;

const PARALLAX_MAX_OFFSET: f64 = 30.0;

/// Progress of an element through the viewport: 0 as it enters from below,
/// 1 once it has left at the top.
pub fn scroll_progress(
    scroll_y: f64,
    container_top: f64,
    container_height: f64,
    viewport_height: f64,
) -> f64 {
    let span = container_height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y + viewport_height - container_top) / span).clamp(0.0, 1.0)
}

/// Horizontal px offset of the `index`th intro line. Even lines drift left,
/// odd lines right; zero at the midpoint of the scroll.
pub fn parallax_offset(index: usize, progress: f64) -> f64 {
    let direction = if index % 2 == 0 { -1.0 } else { 1.0 };
    direction * PARALLAX_MAX_OFFSET * ((progress - 0.5).abs() * 2.0)
}

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(5000.0, 2000.0, 500.0, 800.0), 1.0);
        let mid = scroll_progress(1850.0, 2000.0, 500.0, 800.0);
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(scroll_progress(10.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0, 0.5), 0.0);
        assert_eq!(parallax_offset(0, 0.0), -30.0);
        assert_eq!(parallax_offset(1, 1.0), 30.0);
    }

    #[test]
    fn test_nav_threshold() {
        assert!(!nav_is_scrolled(50.0));
        assert!(nav_is_scrolled(50.5));
    }
}
