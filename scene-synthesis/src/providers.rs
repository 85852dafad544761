/// Capability traits for the host engine collaborators.
///
/// The scene graph and the renderer belong to the host engine; everything
/// the synthesis loop needs from them is expressed through these two traits
/// so the orchestration stays testable without an engine attached.
use crate::composer::Placement;
use crate::error::SynthesisError;

/// Tightly packed 3-byte pixels in the backend's native BGR channel order.
#[derive(Debug, Clone)]
pub struct ColorBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Buffers extracted from the renderer for the current scene state.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub width: u32,
    pub height: u32,
    /// BGR interleaved, 3 bytes per pixel.
    pub color: Vec<u8>,
    /// Per-pixel instance id, 0 where no instance was hit.
    pub instance: Vec<u32>,
    /// Distance from the camera in meters, 0.0 where no instance was hit.
    pub depth: Vec<f32>,
}

pub trait SceneGraphProvider {
    /// Enumerate the asset template names in a named group.
    fn asset_group(&self, name: &str) -> Result<Vec<String>, SynthesisError>;

    /// Remove every synthesized instance. Safe to call on an empty scene.
    fn clear_scene(&mut self) -> Result<(), SynthesisError>;

    /// Instantiate a named asset at a transform with an instance-id tag.
    fn place_instance(&mut self, placement: &Placement) -> Result<(), SynthesisError>;

    /// Attach or refresh the camera aim constraint targeting the given
    /// instance. Up axis and track axis follow the fixed engine convention
    /// (+Y up, -Z forward) so the target stays centered and upright.
    fn attach_camera_tracking(&mut self, target_instance_id: u32) -> Result<(), SynthesisError>;

    fn set_camera_position(&mut self, position: [f64; 3]) -> Result<(), SynthesisError>;
}

pub trait RenderProvider {
    /// Produce the color, instance-id and depth buffers for the current scene.
    fn render(&mut self) -> Result<RenderResult, SynthesisError>;

    /// Produce a human-viewable composite (inst | rgb | depth side by side).
    fn render_composite(&mut self) -> Result<ColorBuffer, SynthesisError>;
}
