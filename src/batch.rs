//! Generate several passwords with one configuration.

use crate::error::GenerateError;
use crate::generator::{generate, GeneratorConfig, Password};
use crate::random::RandomSource;

const PREALLOC_LIMIT: usize = 1024;

/// Call [`generate`] `count` times. The first error aborts the whole batch.
pub fn generate_batch<R>(
    config: &GeneratorConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let mut out = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        out.push(generate(config, rng)?);
    }
    tracing::debug!(count, "generated batch");
    Ok(out)
}
