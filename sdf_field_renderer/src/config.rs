use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::SdfFieldError;

/// The distance-field engine to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Exhaustive scan of every opposite cell; quadratic, but simple enough
    /// to serve as the correctness oracle for the other engines.
    Brute,
    /// Best-first wavefront propagation from the boundary.
    Brushfire,
    /// Separable two-pass transform, linear in the cell count.
    Linear,
}

/// Queue layout for the brushfire engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushfireVariant {
    /// One global priority queue.
    SingleQueue,
    /// One queue per polar sector around the image center, with the global
    /// minimum selected across queue heads on every step.
    MultiQueuePolar,
}

/// Rendering options shared by every engine.
///
/// The defaults (linear engine, parallel, one worker per hardware thread)
/// are right for almost all uses; construct variations with struct-update
/// syntax:
///
/// ```
/// use sdf_field_renderer::{Engine, SdfConfig};
///
/// let config = SdfConfig {
///     engine: Engine::Brushfire,
///     ..SdfConfig::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct SdfConfig {
    pub engine: Engine,
    /// When false, every loop runs on the calling thread.
    pub parallel: bool,
    /// Size of the worker pool used while rendering.
    pub thread_count: usize,
    /// Only consulted by [`Engine::Brushfire`].
    pub brushfire_variant: BrushfireVariant,
    /// Optional cooperative cancellation flag. Engines poll it at row,
    /// column, and extraction-batch boundaries and bail out with
    /// [`SdfFieldError::Cancelled`] once it reads `true`.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SdfConfig {
    fn default() -> Self {
        SdfConfig {
            engine: Engine::Linear,
            parallel: true,
            thread_count: num_cpus::get(),
            brushfire_variant: BrushfireVariant::SingleQueue,
            cancel: None,
        }
    }
}

impl SdfConfig {
    pub(crate) fn check_cancelled(&self) -> Result<(), SdfFieldError> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(SdfFieldError::Cancelled),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SdfConfig::default();
        assert_eq!(config.engine, Engine::Linear);
        assert!(config.parallel);
        assert!(config.thread_count >= 1);
        assert_eq!(config.brushfire_variant, BrushfireVariant::SingleQueue);
        assert!(config.cancel.is_none());
    }

    #[test]
    fn test_cancellation_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = SdfConfig {
            cancel: Some(flag.clone()),
            ..SdfConfig::default()
        };
        assert!(config.check_cancelled().is_ok());
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(
            config.check_cancelled(),
            Err(SdfFieldError::Cancelled)
        ));
    }
}
