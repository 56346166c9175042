#[derive(Debug, thiserror::Error)]
pub enum RasterFieldError {
    #[error("Sub-process error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("SDF renderer error: {0}")]
    SdfFieldError(#[from] sdf_field_renderer::SdfFieldError),
}
