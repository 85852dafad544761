/// Headless stand-in for the host engine collaborators.
///
/// Records placements and rasterizes them as a flat top-down footprint
/// splat so the full pipeline can run and be tested without a host 3D
/// engine attached. It is a placeholder, not a renderer: no materials, no
/// perspective, no occlusion.
use std::collections::HashMap;

use crate::composer::Placement;
use crate::constants::{
    BUILDING_GROUP, ORTHO_HALF_EXTENT_M, RENDER_HEIGHT, RENDER_WIDTH, VEHICLE_GROUP,
};
use crate::error::SynthesisError;
use crate::providers::{ColorBuffer, RenderProvider, RenderResult, SceneGraphProvider};

/// Footprint radius used when splatting a vehicle (meters)
const VEHICLE_FOOTPRINT_M: f64 = 2.5;

/// Footprint radius used when splatting a building (meters)
const BUILDING_FOOTPRINT_M: f64 = 7.0;

/// Background shade for the color buffer (BGR)
const BACKGROUND_BGR: [u8; 3] = [40, 40, 40];

pub struct HeadlessEngine {
    groups: HashMap<String, Vec<String>>,
    placements: Vec<Placement>,
    camera_position: [f64; 3],
    camera_target: Option<u32>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::with_groups(default_groups())
    }

    pub fn with_groups(groups: HashMap<String, Vec<String>>) -> Self {
        Self {
            groups,
            placements: Vec::new(),
            camera_position: [15.0, 15.0, 1.7],
            camera_target: None,
        }
    }

    /// Number of instances currently placed in the scene.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    fn footprint_radius(placement: &Placement) -> f64 {
        if placement.instance_id == conventions::VEHICLE_INSTANCE_ID {
            VEHICLE_FOOTPRINT_M
        } else {
            BUILDING_FOOTPRINT_M
        }
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn default_groups() -> HashMap<String, Vec<String>> {
    let vehicles = ["MuleHatchback", "MuleSedan", "MuleVan"];
    let buildings = [
        "HouseBrick",
        "HouseGable",
        "HousePanel",
        "OfficeBlock",
        "Warehouse",
        "CornerShop",
    ];
    HashMap::from([
        (
            VEHICLE_GROUP.to_string(),
            vehicles.iter().map(|s| s.to_string()).collect(),
        ),
        (
            BUILDING_GROUP.to_string(),
            buildings.iter().map(|s| s.to_string()).collect(),
        ),
    ])
}

/// Deterministic BGR color for an instance id.
fn palette_bgr(instance_id: u32) -> [u8; 3] {
    let h = instance_id.wrapping_mul(2_654_435_761);
    [
        (h >> 16) as u8 | 0x40,
        (h >> 8) as u8 | 0x40,
        h as u8 | 0x40,
    ]
}

impl SceneGraphProvider for HeadlessEngine {
    fn asset_group(&self, name: &str) -> Result<Vec<String>, SynthesisError> {
        self.groups
            .get(name)
            .cloned()
            .ok_or_else(|| SynthesisError::MissingAssetGroup(name.to_string()))
    }

    fn clear_scene(&mut self) -> Result<(), SynthesisError> {
        self.placements.clear();
        self.camera_target = None;
        Ok(())
    }

    fn place_instance(&mut self, placement: &Placement) -> Result<(), SynthesisError> {
        self.placements.push(placement.clone());
        Ok(())
    }

    fn attach_camera_tracking(&mut self, target_instance_id: u32) -> Result<(), SynthesisError> {
        self.camera_target = Some(target_instance_id);
        Ok(())
    }

    fn set_camera_position(&mut self, position: [f64; 3]) -> Result<(), SynthesisError> {
        self.camera_position = position;
        Ok(())
    }
}

impl RenderProvider for HeadlessEngine {
    fn render(&mut self) -> Result<RenderResult, SynthesisError> {
        if self.camera_target.is_none() {
            return Err(SynthesisError::Backend("camera has no aim target".to_string()));
        }

        let width = RENDER_WIDTH as usize;
        let height = RENDER_HEIGHT as usize;
        let mut color = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            color.extend_from_slice(&BACKGROUND_BGR);
        }
        let mut instance = vec![0u32; width * height];
        let mut depth = vec![0.0f32; width * height];

        let cam = self.camera_position;
        for py in 0..height {
            let wy = ((py as f64 + 0.5) / height as f64 * 2.0 - 1.0) * ORTHO_HALF_EXTENT_M;
            for px in 0..width {
                let wx = ((px as f64 + 0.5) / width as f64 * 2.0 - 1.0) * ORTHO_HALF_EXTENT_M;

                // Nearest footprint wins the pixel.
                let mut hit: Option<(f64, &Placement)> = None;
                for placement in &self.placements {
                    let dx = wx - placement.position[0];
                    let dy = wy - placement.position[1];
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist <= Self::footprint_radius(placement)
                        && hit.is_none_or(|(best, _)| dist < best)
                    {
                        hit = Some((dist, placement));
                    }
                }

                if let Some((_, placement)) = hit {
                    let i = py * width + px;
                    instance[i] = placement.instance_id;
                    let dx = wx - cam[0];
                    let dy = wy - cam[1];
                    depth[i] = (dx * dx + dy * dy + cam[2] * cam[2]).sqrt() as f32;
                    color[i * 3..i * 3 + 3].copy_from_slice(&palette_bgr(placement.instance_id));
                }
            }
        }

        Ok(RenderResult {
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            color,
            instance,
            depth,
        })
    }

    fn render_composite(&mut self) -> Result<ColorBuffer, SynthesisError> {
        let result = self.render()?;
        let width = result.width as usize;
        let height = result.height as usize;

        let max_instance = result.instance.iter().copied().max().unwrap_or(0).max(1);
        let max_depth = result.depth.iter().copied().fold(0.0f32, f32::max).max(1.0);

        // inst | rgb | depth panels side by side, matching the composite
        // file name convention.
        let mut data = vec![0u8; width * 3 * height * 3];
        let row_stride = width * 3 * 3;
        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;

                let inst_shade =
                    (u64::from(result.instance[i]) * 255 / u64::from(max_instance)) as u8;
                let depth_shade = (result.depth[i] / max_depth * 255.0) as u8;

                let inst_at = y * row_stride + x * 3;
                data[inst_at..inst_at + 3].copy_from_slice(&[inst_shade; 3]);

                let rgb_at = y * row_stride + (width + x) * 3;
                data[rgb_at..rgb_at + 3].copy_from_slice(&result.color[i * 3..i * 3 + 3]);

                let depth_at = y * row_stride + (2 * width + x) * 3;
                data[depth_at..depth_at + 3].copy_from_slice(&[depth_shade; 3]);
            }
        }

        Ok(ColorBuffer {
            width: result.width * 3,
            height: result.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle_at_origin() -> Placement {
        Placement {
            asset: "MuleSedan".to_string(),
            instance_id: conventions::VEHICLE_INSTANCE_ID,
            position: [0.0, 0.0, 0.0],
            yaw: 0.0,
        }
    }

    #[test]
    fn render_requires_an_aim_target() {
        let mut engine = HeadlessEngine::new();
        engine.place_instance(&vehicle_at_origin()).unwrap();
        assert!(engine.render().is_err());
    }

    #[test]
    fn center_pixel_hits_the_vehicle() {
        let mut engine = HeadlessEngine::new();
        engine.place_instance(&vehicle_at_origin()).unwrap();
        engine
            .attach_camera_tracking(conventions::VEHICLE_INSTANCE_ID)
            .unwrap();
        engine.set_camera_position([12.0, 16.0, 1.7]).unwrap();

        let result = engine.render().unwrap();
        let center = (RENDER_HEIGHT as usize / 2) * RENDER_WIDTH as usize
            + RENDER_WIDTH as usize / 2;
        assert_eq!(result.instance[center], conventions::VEHICLE_INSTANCE_ID);
        // Camera is roughly 20 m from the origin.
        assert!((19.0..21.0).contains(&result.depth[center]));
    }

    #[test]
    fn composite_is_three_panels_wide() {
        let mut engine = HeadlessEngine::new();
        engine.place_instance(&vehicle_at_origin()).unwrap();
        engine
            .attach_camera_tracking(conventions::VEHICLE_INSTANCE_ID)
            .unwrap();

        let vis = engine.render_composite().unwrap();
        assert_eq!(vis.width, RENDER_WIDTH * 3);
        assert_eq!(vis.height, RENDER_HEIGHT);
        assert_eq!(vis.data.len(), (vis.width * vis.height * 3) as usize);
    }
}
