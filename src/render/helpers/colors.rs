use printpdf::Rgb;

use crate::config::FontColor;

/// Convert a configured (r, g, b) triple to a PDF color
pub fn to_rgb(color: FontColor) -> Rgb {
    let (r, g, b) = color;
    Rgb::new(r, g, b, None)
}
