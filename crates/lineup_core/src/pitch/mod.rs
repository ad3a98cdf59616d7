//! Pitch geometry: percentage <-> pixel transforms, drop clamping and
//! viewport fitting. Stateless.

pub mod coordinates;
pub mod viewport;

pub use coordinates::{
    clamp_percentage, clamp_to, drop_position, player_pixels, to_percentage, to_pixels,
    FieldDimensions, PercentPos, PixelPos, CLAMP_MAX, CLAMP_MIN,
};
pub use viewport::{field_dimensions_for_window, fit_viewport};
