/// Panel loaders shared by the per-file and combined plotting modes.
use image::{GrayImage, RgbImage};
use std::error::Error;
use std::path::Path;

use crate::colormap;

/// Depth panel: the 16-bit depth channel, min-max normalized and recolored
/// with reversed inferno so near surfaces read bright.
pub fn depth_panel(path: &Path) -> Result<RgbImage, Box<dyn Error>> {
    let depth = image::open(path)?.to_luma16();

    let (min, max) = depth
        .pixels()
        .fold((u16::MAX, u16::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));
    let span = f32::from(max.saturating_sub(min)).max(1.0);

    Ok(RgbImage::from_fn(depth.width(), depth.height(), |x, y| {
        let t = f32::from(depth.get_pixel(x, y)[0] - min) / span;
        image::Rgb(colormap::inferno_reversed(t))
    }))
}

/// Instance panel: the single meaningful channel, left uncolormapped since
/// instance ids are arbitrary labels with no meaningful ordering.
pub fn instance_panel(path: &Path) -> Result<GrayImage, Box<dyn Error>> {
    let rgb = image::open(path)?.to_rgb8();
    Ok(GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        image::Luma([rgb.get_pixel(x, y)[1]])
    }))
}

/// Color panel, passed through as-is.
pub fn rgb_panel(path: &Path) -> Result<RgbImage, Box<dyn Error>> {
    Ok(image::open(path)?.to_rgb8())
}
