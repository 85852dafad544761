/// Error taxonomy for the synthesis pipeline.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("asset group '{0}' not found in the scene graph")]
    MissingAssetGroup(String),

    #[error("asset group '{0}' contains no assets")]
    EmptyAssetGroup(String),

    #[error("render backend: {0}")]
    Backend(String),

    #[error("image encoding: {0}")]
    Image(#[from] image::ImageError),

    #[error("metadata store: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
