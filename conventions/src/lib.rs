//! Shared output conventions for scene synthesis and presentation plotting.
//!
//! The synthesis driver and the plotter only couple through the files on
//! disk, so the naming scheme and the encoding constants live here.

/// Instance id tagged onto the vehicle placement.
pub const VEHICLE_INSTANCE_ID: u32 = 1000;

/// First instance id for building placements; the i-th building gets `BASE + i`.
pub const BUILDING_INSTANCE_ID_BASE: u32 = 2000;

/// Depth files store millimeters; render buffers carry meters.
pub const MILLIMETERS_PER_METER: f32 = 1000.0;

/// Largest depth a 16-bit millimeter file can encode without clamping.
pub const MAX_ENCODABLE_DEPTH_METERS: f32 = 65.535;

pub const RGB_SUFFIX: &str = "_rgb";
pub const INSTANCE_SUFFIX: &str = "_inst";
pub const DEPTH_SUFFIX: &str = "_depth";
pub const COMBINED_SUFFIX: &str = "_combined";

/// Extensions the plotter accepts as rendered images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Color output file name for a scene id.
pub fn rgb_file_name(id: &str) -> String {
    format!("{id}{RGB_SUFFIX}.jpg")
}

/// Instance map file name for a scene id (16-bit PNG).
pub fn instance_file_name(id: &str) -> String {
    format!("{id}{INSTANCE_SUFFIX}.png")
}

/// Depth map file name for a scene id (16-bit PNG, millimeters).
pub fn depth_file_name(id: &str) -> String {
    format!("{id}{DEPTH_SUFFIX}.png")
}

/// Human-viewable composite file name for a scene id.
pub fn composite_file_name(id: &str) -> String {
    format!("{id}_vis(inst_rgb_depth).jpg")
}

/// Combined presentation figure file name for a scene id.
pub fn combined_file_name(id: &str) -> String {
    format!("{id}{COMBINED_SUFFIX}.jpg")
}

/// Strip the extension and the rgb/inst/depth suffixes to recover the scene id.
pub fn base_scene_id(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.replace(INSTANCE_SUFFIX, "")
        .replace(DEPTH_SUFFIX, "")
        .replace(RGB_SUFFIX, "")
}

/// Check whether a directory entry looks like a rendered image file.
pub fn is_image_file(file_name: &str) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_triple_convention() {
        assert_eq!(rgb_file_name("42"), "42_rgb.jpg");
        assert_eq!(instance_file_name("42"), "42_inst.png");
        assert_eq!(depth_file_name("42"), "42_depth.png");
        assert_eq!(composite_file_name("42"), "42_vis(inst_rgb_depth).jpg");
        assert_eq!(combined_file_name("42"), "42_combined.jpg");
    }

    #[test]
    fn base_scene_id_strips_suffix_and_extension() {
        assert_eq!(base_scene_id("7_rgb.jpg"), "7");
        assert_eq!(base_scene_id("7_inst.png"), "7");
        assert_eq!(base_scene_id("7_depth.png"), "7");
        assert_eq!(base_scene_id("scene_a_depth.png"), "scene_a");
    }

    #[test]
    fn image_file_detection_is_case_insensitive_on_extension() {
        assert!(is_image_file("7_rgb.jpg"));
        assert!(is_image_file("7_depth.PNG"));
        assert!(is_image_file("7.jpeg"));
        assert!(!is_image_file("meta_data.db"));
        assert!(!is_image_file("noextension"));
    }
}
