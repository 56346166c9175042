use crate::{brushfire, brute, linear};
use crate::{BitmapMask, DistanceField, Engine, SdfConfig, SdfFieldError};

/// Runs `job` inside a dedicated worker pool of `config.thread_count`
/// threads, or on the calling thread when parallelism is off.
fn with_pool<T, F>(config: &SdfConfig, job: F) -> Result<T, SdfFieldError>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    if config.parallel && config.thread_count > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()?;
        Ok(pool.install(job))
    } else {
        Ok(job())
    }
}

/// `UDF(source = interior) - UDF(source = exterior)`.
///
/// The two unsigned fields are independent, so they run as a pair of
/// concurrent jobs when a pool is available. The subtraction leaves
/// interior cells negative and exterior cells positive; a uniform mask
/// cancels to all zeros because the sourceless transform stays zero.
fn signed_from_udf<F>(
    mask: &BitmapMask,
    config: &SdfConfig,
    udf: F,
) -> Result<DistanceField, SdfFieldError>
where
    F: Fn(&BitmapMask, bool) -> Result<DistanceField, SdfFieldError> + Sync,
{
    let (interior_sourced, exterior_sourced) = if config.parallel && config.thread_count > 1 {
        rayon::join(|| udf(mask, false), || udf(mask, true))
    } else {
        (udf(mask, false), udf(mask, true))
    };
    let interior_sourced = interior_sourced?;
    let exterior_sourced = exterior_sourced?;

    let values = interior_sourced
        .values()
        .iter()
        .zip(exterior_sourced.values())
        .map(|(toward_interior, toward_exterior)| toward_interior - toward_exterior)
        .collect();
    Ok(DistanceField::from_values(
        values,
        mask.width(),
        mask.height(),
    ))
}

fn dispatch(mask: &BitmapMask, config: &SdfConfig) -> Result<DistanceField, SdfFieldError> {
    match config.engine {
        Engine::Brute => brute::compute_sdf(mask, config),
        Engine::Brushfire => {
            signed_from_udf(mask, config, |m, invert| {
                brushfire::compute_udf(m, invert, config)
            })
        }
        Engine::Linear => {
            signed_from_udf(mask, config, |m, invert| linear::compute_udf(m, invert, config))
        }
    }
}

/// Renders the signed distance field for `mask` with the engine selected by
/// `config`.
pub fn render_sdf(mask: &BitmapMask, config: &SdfConfig) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || dispatch(mask, config))?
}

/// Renders the signed field with the brute-force reference engine.
pub fn brute_sdf(mask: &BitmapMask, config: &SdfConfig) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || brute::compute_sdf(mask, config))?
}

/// Renders the signed field with the brushfire engine.
pub fn brushfire_sdf(
    mask: &BitmapMask,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || {
        signed_from_udf(mask, config, |m, invert| {
            brushfire::compute_udf(m, invert, config)
        })
    })?
}

/// Renders the signed field with the linear-time engine.
pub fn linear_sdf(mask: &BitmapMask, config: &SdfConfig) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || {
        signed_from_udf(mask, config, |m, invert| linear::compute_udf(m, invert, config))
    })?
}

/// Unsigned distances to the nearest source cell by brushfire propagation.
/// Sources are interior cells, or exterior cells when `invert` is set.
pub fn brushfire_udf(
    mask: &BitmapMask,
    invert: bool,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || brushfire::compute_udf(mask, invert, config))?
}

/// Unsigned distances to the nearest source cell by the separable two-pass
/// transform. Sources are interior cells, or exterior cells when `invert`
/// is set.
pub fn linear_udf(
    mask: &BitmapMask,
    invert: bool,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    with_pool(config, || linear::compute_udf(mask, invert, config))?
}
