/// Per-file and combined plotting over a directory of rendered images.
use image::{DynamicImage, RgbImage, imageops};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::panels;

fn progress_bar(len: u64, msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.green/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap()
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message(msg);
    pb
}

/// Rendered image file names in the input directory, sorted for
/// deterministic processing order.
fn image_file_names(input: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if conventions::is_image_file(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Recolor every depth image and re-save every instance image under its
/// original name. Other files pass through untouched (not copied).
pub fn plot_per_file(input: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let names = image_file_names(input)?;
    let pb = progress_bar(names.len() as u64, "Recoloring images");

    for name in &names {
        if name.contains(conventions::DEPTH_SUFFIX) {
            panels::depth_panel(&input.join(name))?.save(output.join(name))?;
        } else if name.contains(conventions::INSTANCE_SUFFIX) {
            panels::instance_panel(&input.join(name))?.save(output.join(name))?;
        } else {
            log::debug!("skipping {name}: neither a depth nor an instance image");
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    Ok(())
}

/// One vertically stacked RGB/instance/depth figure per scene identifier.
/// A missing panel file for an identifier aborts the run.
pub fn plot_combined(input: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let ids: BTreeSet<String> = image_file_names(input)?
        .iter()
        .map(|name| conventions::base_scene_id(name))
        .collect();

    let pb = progress_bar(ids.len() as u64, "Combining figures");
    for id in &ids {
        let rgb = panels::rgb_panel(&input.join(conventions::rgb_file_name(id)))?;
        let instance =
            DynamicImage::ImageLuma8(panels::instance_panel(&input.join(conventions::instance_file_name(id)))?)
                .to_rgb8();
        let depth = panels::depth_panel(&input.join(conventions::depth_file_name(id)))?;

        let figure = stack_panels(&[rgb, instance, depth]);
        figure.save(output.join(conventions::combined_file_name(id)))?;
        pb.inc(1);
    }
    pb.finish_with_message("done");

    Ok(())
}

/// Stack panels top to bottom with zero padding between them.
fn stack_panels(panels: &[RgbImage]) -> RgbImage {
    let width = panels.iter().map(|p| p.width()).max().unwrap_or(0);
    let height = panels.iter().map(|p| p.height()).sum();

    let mut canvas = RgbImage::new(width, height);
    let mut y = 0i64;
    for panel in panels {
        imageops::replace(&mut canvas, panel, 0, y);
        y += i64::from(panel.height());
    }
    canvas
}
