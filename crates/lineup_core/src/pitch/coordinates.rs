//! Coordinate transforms between board space and surface pixels
//!
//! ## Coordinate Systems
//!
//! **Board/Percentage Coordinates** (stored on every `Player`):
//! - X: 0 = left touchline, 100 = right touchline
//! - Y: 0 = top goal line, 100 = bottom goal line
//!
//! **Pixel Coordinates** (whatever surface is drawing the pitch):
//! - X: 0..width, Y: 0..height, origin top-left
//!
//! Percentages make a layout independent of the window it was built in.

use crate::config::DragBounds;
use crate::models::Player;

/// Position in board percentages (x, y)
pub type PercentPos = (f64, f64);

/// Position in surface pixels (x, y)
pub type PixelPos = (f64, f64);

/// Lower edge of the drop region (percent)
pub const CLAMP_MIN: f64 = 5.0;
/// Upper edge of the drop region (percent)
pub const CLAMP_MAX: f64 = 95.0;

/// Pixel size of the drawn pitch.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldDimensions {
    pub width: f64,
    pub height: f64,
}

impl FieldDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

/// Percentage of an extent to pixels
#[inline]
pub fn to_pixels(percentage: f64, extent_px: f64) -> f64 {
    (percentage / 100.0) * extent_px
}

/// Pixels to percentage of an extent.
///
/// A non-positive extent yields 0 so that a collapsed surface never feeds
/// NaN or infinity into the store.
#[inline]
pub fn to_percentage(pixels: f64, extent_px: f64) -> f64 {
    if extent_px <= 0.0 {
        return 0.0;
    }
    (pixels / extent_px) * 100.0
}

/// Clamp one axis into the default drop region [5, 95].
#[inline]
pub fn clamp_percentage(percentage: f64) -> f64 {
    clamp_to(percentage, CLAMP_MIN, CLAMP_MAX)
}

/// Clamp one axis into `[min, max]`. NaN maps to `min`.
#[inline]
pub fn clamp_to(percentage: f64, min: f64, max: f64) -> f64 {
    if percentage.is_nan() {
        return min;
    }
    percentage.min(max).max(min)
}

/// Board position of a player in surface pixels
pub fn player_pixels(player: &Player, dims: FieldDimensions) -> PixelPos {
    (to_pixels(player.x, dims.width), to_pixels(player.y, dims.height))
}

/// Where a card dropped at pixel (x, y) lands on the board.
///
/// Both axes are converted and clamped independently; the result is what a
/// drag-end handler passes to `move_player`.
pub fn drop_position(
    pixel_x: f64,
    pixel_y: f64,
    dims: FieldDimensions,
    bounds: DragBounds,
) -> PercentPos {
    (
        clamp_to(to_percentage(pixel_x, dims.width), bounds.min, bounds.max),
        clamp_to(to_percentage(pixel_y, dims.height), bounds.min, bounds.max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerDraft, PlayerId};

    #[test]
    fn test_to_pixels() {
        assert_eq!(to_pixels(50.0, 800.0), 400.0);
        assert_eq!(to_pixels(0.0, 800.0), 0.0);
        assert_eq!(to_pixels(100.0, 600.0), 600.0);
    }

    #[test]
    fn test_to_percentage_degenerate_extent() {
        assert_eq!(to_percentage(120.0, 0.0), 0.0);
        assert_eq!(to_percentage(120.0, -10.0), 0.0);
    }

    #[test]
    fn test_clamp_edges() {
        assert_eq!(clamp_percentage(-20.0), 5.0);
        assert_eq!(clamp_percentage(4.999), 5.0);
        assert_eq!(clamp_percentage(50.0), 50.0);
        assert_eq!(clamp_percentage(95.0), 95.0);
        assert_eq!(clamp_percentage(140.0), 95.0);
        assert_eq!(clamp_percentage(f64::NAN), 5.0);
        assert_eq!(clamp_percentage(f64::INFINITY), 95.0);
    }

    #[test]
    fn test_drop_position_clamps_axes_independently() {
        let dims = FieldDimensions::new(800.0, 600.0);
        let pos = drop_position(-30.0, 300.0, dims, DragBounds::default());
        assert_eq!(pos, (5.0, 50.0));

        let pos = drop_position(400.0, 1000.0, dims, DragBounds::default());
        assert_eq!(pos, (50.0, 95.0));
    }

    #[test]
    fn test_player_pixels() {
        let player = Player::from_draft(
            PlayerId::new("gk"),
            PlayerDraft::new("Keeper", "GK", 1).at(50.0, 90.0),
        );
        let (x, y) = player_pixels(&player, FieldDimensions::new(800.0, 600.0));
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 540.0).abs() < 1e-9);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: pixels -> percentage undoes percentage -> pixels
            #[test]
            fn prop_round_trip(p in 0.0f64..=100.0, extent in 1.0f64..10_000.0) {
                let back = to_percentage(to_pixels(p, extent), extent);
                prop_assert!((back - p).abs() < 1e-9);
            }

            /// Property: clamping is idempotent and always lands in [5, 95]
            #[test]
            fn prop_clamp_idempotent(v in -1.0e6f64..1.0e6) {
                let once = clamp_percentage(v);
                prop_assert_eq!(clamp_percentage(once), once);
                prop_assert!((CLAMP_MIN..=CLAMP_MAX).contains(&once));
            }

            /// Property: any drop lands inside the configured bounds
            #[test]
            fn prop_drop_in_bounds(
                px in -5_000.0f64..5_000.0,
                py in -5_000.0f64..5_000.0,
                w in 1.0f64..4_000.0,
                h in 1.0f64..4_000.0
            ) {
                let (x, y) = drop_position(px, py, FieldDimensions::new(w, h), DragBounds::default());
                prop_assert!((CLAMP_MIN..=CLAMP_MAX).contains(&x));
                prop_assert!((CLAMP_MIN..=CLAMP_MAX).contains(&y));
            }
        }
    }
}
