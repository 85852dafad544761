/// Shared configuration for scene composition and rendering

/// Scene-graph group holding the vehicle asset templates
pub const VEHICLE_GROUP: &str = "Vehicles";

/// Scene-graph group holding the building asset templates
pub const BUILDING_GROUP: &str = "Buildings";

/// Building count per scene is sampled from [MIN, MAX)
pub const BUILDING_COUNT_MIN: u32 = 5;
pub const BUILDING_COUNT_MAX: u32 = 10;

/// Building placement radius per axis (meters)
pub const BUILDING_RADIUS_MIN_M: f64 = 35.0;
pub const BUILDING_RADIUS_MAX_M: f64 = 95.0;

/// Camera placement radius per horizontal axis (meters)
pub const CAMERA_RADIUS_MIN_M: f64 = 10.0;
pub const CAMERA_RADIUS_MAX_M: f64 = 25.0;

/// Camera height is a multiple (1 or 2) of this step (meters)
pub const CAMERA_HEIGHT_STEP_M: f64 = 1.7;

/// Headless backend framebuffer resolution
pub const RENDER_WIDTH: u32 = 640;
pub const RENDER_HEIGHT: u32 = 480;

/// Half extent of the headless backend's top-down view (meters)
pub const ORTHO_HALF_EXTENT_M: f64 = 120.0;

/// Default metadata store file name inside the output directory
pub const DEFAULT_DATABASE_FILE: &str = "meta_data.db";
