/// Encodes render results into the on-disk image triple.
use image::{ImageBuffer, Luma, RgbImage};
use std::path::Path;

use crate::error::SynthesisError;
use crate::providers::{ColorBuffer, RenderResult};

/// Convert a BGR byte buffer into an RGB image for encoding. Render buffers
/// arrive in the backend's BGR order; files are written RGB.
pub fn bgr_to_rgb_image(width: u32, height: u32, data: &[u8]) -> Result<RgbImage, SynthesisError> {
    if data.len() != (width * height * 3) as usize {
        return Err(SynthesisError::Backend(
            "color buffer does not match framebuffer size".to_string(),
        ));
    }
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let i = ((y * width + x) * 3) as usize;
        image::Rgb([data[i + 2], data[i + 1], data[i]])
    }))
}

/// Widen per-pixel depth in meters to 16-bit millimeters. Returns the pixel
/// data and the number of samples that hit the encoding ceiling.
///
/// Depths at or beyond 65.535 m clamp to `u16::MAX`; the cap is a format
/// limitation of the 16-bit millimeter encoding.
pub fn depth_to_millimeters(depth: &[f32]) -> (Vec<u16>, usize) {
    let mut clamped = 0usize;
    let data = depth
        .iter()
        .map(|&meters| {
            let mm = meters * conventions::MILLIMETERS_PER_METER;
            if mm > f32::from(u16::MAX) {
                clamped += 1;
                u16::MAX
            } else {
                mm as u16
            }
        })
        .collect();
    (data, clamped)
}

/// Write the color/instance/depth triple for one scene, plus the optional
/// human-viewable composite. All files share the `name` stem.
pub fn save(
    result: &RenderResult,
    name: &str,
    output_dir: &Path,
    composite: Option<&ColorBuffer>,
) -> Result<(), SynthesisError> {
    let rgb = bgr_to_rgb_image(result.width, result.height, &result.color)?;
    rgb.save(output_dir.join(conventions::rgb_file_name(name)))?;

    // Instance ids beyond u16::MAX would collide here; the 65535-instance
    // ceiling is implicit in the file format and not enforced.
    let instance: Vec<u16> = result.instance.iter().map(|&id| id as u16).collect();
    let instance_image: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(result.width, result.height, instance).ok_or_else(|| {
            SynthesisError::Backend("instance buffer does not match framebuffer size".to_string())
        })?;
    instance_image.save(output_dir.join(conventions::instance_file_name(name)))?;

    let (depth_mm, clamped) = depth_to_millimeters(&result.depth);
    if clamped > 0 {
        log::warn!(
            "scene {name}: {clamped} depth samples beyond {} m clamped to the 16-bit ceiling",
            conventions::MAX_ENCODABLE_DEPTH_METERS
        );
    }
    let depth_image: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(result.width, result.height, depth_mm).ok_or_else(|| {
            SynthesisError::Backend("depth buffer does not match framebuffer size".to_string())
        })?;
    depth_image.save(output_dir.join(conventions::depth_file_name(name)))?;

    if let Some(vis) = composite {
        bgr_to_rgb_image(vis.width, vis.height, &vis.data)?
            .save(output_dir.join(conventions::composite_file_name(name)))?;
    }

    Ok(())
}
