use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdfFieldError {
    #[error("Invalid mask dimensions {0}x{1}: both sides must be at least one cell.")]
    InvalidDimensions(usize, usize),

    #[error("Invalid mask data: the data length must be equal to {0} = {1}, but is equal to {2}.")]
    InvalidDataLength(&'static str, usize, usize),

    #[error("Could not reserve {0} bytes of working memory.")]
    AllocationFailure(usize),

    #[error("The computation was cancelled before completion.")]
    Cancelled,

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
