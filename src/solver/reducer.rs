use log::debug;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::solver::errors::SolverError;
use crate::utils::ChunkedExt;

/// Reduce a lazy stream to one element using a bounded pool of workers.
///
/// The stream is cut into contiguous chunks of `chunk_size`. Workers of a
/// dedicated pool of `concurrency` threads pull one chunk at a time, fold it
/// left to right with `operation`, and the chunk winners are folded again into
/// the result. At most one chunk per worker is materialised at once.
///
/// Returns `Ok(None)` for an empty stream.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created.
pub fn parallel_reduce<I, T, F>(
    items: I,
    operation: F,
    chunk_size: usize,
    concurrency: usize,
) -> Result<Option<T>, SolverError>
where
    I: Iterator<Item = T> + Send,
    T: Send,
    F: Fn(T, T) -> T + Send + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(concurrency.max(1))
        .thread_name(|i| format!("countdown-worker-{}", i))
        .build()?;
    debug!(
        "Reducing in chunks of {} across {} workers",
        chunk_size,
        pool.current_num_threads()
    );

    let operation = &operation;
    let result = pool.install(|| {
        items
            .chunked(chunk_size)
            .par_bridge()
            .filter_map(|chunk| chunk.into_iter().reduce(operation))
            .reduce_with(operation)
    });

    Ok(result)
}
