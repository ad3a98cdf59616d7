//! Aspect-preserving fit of the pitch into the available window area.

use super::coordinates::FieldDimensions;
use crate::config::ViewportConfig;

/// Largest pitch that fits `available_w` x `available_h` at the configured
/// aspect ratio, capped at `max_width`.
///
/// The floors (`min_width`, `min_height`) win over the ratio: on a very small
/// window the pitch keeps a usable size even if it no longer fits.
/// Pure: same inputs give the same output.
pub fn fit_viewport(available_w: f64, available_h: f64, viewport: &ViewportConfig) -> FieldDimensions {
    let ratio = viewport.aspect_ratio;

    let mut width = available_w.min(viewport.max_width);
    let mut height = width / ratio;

    if height > available_h {
        height = available_h;
        width = height * ratio;
    }

    FieldDimensions {
        width: width.max(viewport.min_width),
        height: height.max(viewport.min_height),
    }
}

/// Pitch size for a whole window, after subtracting the side panel and chrome.
pub fn field_dimensions_for_window(
    window_w: f64,
    window_h: f64,
    sidebar_open: bool,
    viewport: &ViewportConfig,
) -> FieldDimensions {
    let sidebar = if sidebar_open { viewport.sidebar_width } else { 0.0 };
    let available_w = window_w - sidebar - viewport.horizontal_padding;
    let available_h = window_h - viewport.vertical_chrome;

    fit_viewport(available_w, available_h, viewport)
}
