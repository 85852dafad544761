/// Asset group lookup from the scene graph.
use crate::constants::{BUILDING_GROUP, VEHICLE_GROUP};
use crate::error::SynthesisError;
use crate::providers::SceneGraphProvider;

/// Placeable asset templates resolved from the scene graph at startup.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    pub vehicles: Vec<String>,
    pub buildings: Vec<String>,
}

/// Resolve the vehicle and building groups. A missing or empty group is a
/// fatal precondition failure for synthesis.
pub fn locate_assets<S: SceneGraphProvider>(scene: &S) -> Result<AssetCatalog, SynthesisError> {
    let vehicles = scene.asset_group(VEHICLE_GROUP)?;
    let buildings = scene.asset_group(BUILDING_GROUP)?;

    if vehicles.is_empty() {
        return Err(SynthesisError::EmptyAssetGroup(VEHICLE_GROUP.to_string()));
    }
    if buildings.is_empty() {
        return Err(SynthesisError::EmptyAssetGroup(BUILDING_GROUP.to_string()));
    }

    Ok(AssetCatalog { vehicles, buildings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessEngine;
    use std::collections::HashMap;

    #[test]
    fn default_backend_exposes_both_groups() {
        let engine = HeadlessEngine::new();
        let catalog = locate_assets(&engine).unwrap();
        assert!(!catalog.vehicles.is_empty());
        assert!(!catalog.buildings.is_empty());
    }

    #[test]
    fn missing_group_is_fatal() {
        let groups = HashMap::from([(VEHICLE_GROUP.to_string(), vec!["MuleSedan".to_string()])]);
        let engine = HeadlessEngine::with_groups(groups);
        match locate_assets(&engine) {
            Err(SynthesisError::MissingAssetGroup(name)) => assert_eq!(name, BUILDING_GROUP),
            other => panic!("expected missing group error, got {other:?}"),
        }
    }

    #[test]
    fn empty_group_is_fatal() {
        let groups = HashMap::from([
            (VEHICLE_GROUP.to_string(), Vec::new()),
            (BUILDING_GROUP.to_string(), vec!["HouseBrick".to_string()]),
        ]);
        let engine = HeadlessEngine::with_groups(groups);
        match locate_assets(&engine) {
            Err(SynthesisError::EmptyAssetGroup(name)) => assert_eq!(name, VEHICLE_GROUP),
            other => panic!("expected empty group error, got {other:?}"),
        }
    }
}
