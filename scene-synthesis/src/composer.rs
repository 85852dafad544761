/// Randomized scene composition, deterministic per seed.
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::Serialize;
use std::f64::consts::PI;

use crate::assets::AssetCatalog;
use crate::constants::{
    BUILDING_COUNT_MAX, BUILDING_COUNT_MIN, BUILDING_GROUP, BUILDING_RADIUS_MAX_M,
    BUILDING_RADIUS_MIN_M, CAMERA_HEIGHT_STEP_M, CAMERA_RADIUS_MAX_M, CAMERA_RADIUS_MIN_M,
    VEHICLE_GROUP,
};
use crate::error::SynthesisError;
use crate::providers::SceneGraphProvider;

/// One placed object: asset template, instance-id tag and transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub asset: String,
    pub instance_id: u32,
    pub position: [f64; 3],
    /// Rotation around the vertical axis, radians.
    pub yaw: f64,
}

/// The full set of placements composed for one seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneInstance {
    pub seed: u64,
    pub vehicle: Placement,
    pub buildings: Vec<Placement>,
    pub camera_position: [f64; 3],
}

/// Generates a coordinate whose magnitude lies in [min, max) with a random sign.
fn random_radius(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * rng.random_range(min..max)
}

/// Uniform draw from an asset group, with replacement across draws.
fn choose<'a>(
    rng: &mut StdRng,
    names: &'a [String],
    group: &str,
) -> Result<&'a String, SynthesisError> {
    if names.is_empty() {
        return Err(SynthesisError::EmptyAssetGroup(group.to_string()));
    }
    Ok(&names[rng.random_range(0..names.len())])
}

/// Clear the previous scene and compose a fresh one for `seed`.
///
/// The generator is owned and seeded here, so the same seed always
/// reproduces the same set of placements and the same provider calls.
pub fn compose<S: SceneGraphProvider>(
    seed: u64,
    catalog: &AssetCatalog,
    scene: &mut S,
) -> Result<SceneInstance, SynthesisError> {
    let mut rng = StdRng::seed_from_u64(seed);

    scene.clear_scene()?;

    // Vehicle at the origin, identity rotation.
    let vehicle_name = choose(&mut rng, &catalog.vehicles, VEHICLE_GROUP)?;
    let vehicle = Placement {
        asset: vehicle_name.clone(),
        instance_id: conventions::VEHICLE_INSTANCE_ID,
        position: [0.0, 0.0, 0.0],
        yaw: 0.0,
    };
    scene.place_instance(&vehicle)?;

    // Buildings scattered around the vehicle, sampled with replacement.
    let count = rng.random_range(BUILDING_COUNT_MIN..BUILDING_COUNT_MAX);
    let mut buildings = Vec::with_capacity(count as usize);
    for i in 0..count {
        let name = choose(&mut rng, &catalog.buildings, BUILDING_GROUP)?;
        let building = Placement {
            asset: name.clone(),
            instance_id: conventions::BUILDING_INSTANCE_ID_BASE + i,
            position: [
                random_radius(&mut rng, BUILDING_RADIUS_MIN_M, BUILDING_RADIUS_MAX_M),
                random_radius(&mut rng, BUILDING_RADIUS_MIN_M, BUILDING_RADIUS_MAX_M),
                0.0,
            ],
            yaw: rng.random_range(0.0..2.0 * PI),
        };
        scene.place_instance(&building)?;
        buildings.push(building);
    }

    // Keep the vehicle centered and upright in frame, then place the camera
    // at a randomized offset with a quantized height.
    scene.attach_camera_tracking(vehicle.instance_id)?;
    let camera_position = [
        random_radius(&mut rng, CAMERA_RADIUS_MIN_M, CAMERA_RADIUS_MAX_M),
        random_radius(&mut rng, CAMERA_RADIUS_MIN_M, CAMERA_RADIUS_MAX_M),
        f64::from(rng.random_range(1..=2u32)) * CAMERA_HEIGHT_STEP_M,
    ];
    scene.set_camera_position(camera_position)?;

    Ok(SceneInstance {
        seed,
        vehicle,
        buildings,
        camera_position,
    })
}
