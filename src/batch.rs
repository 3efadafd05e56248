//! Multi-channel compression.
//!
//! Image and audio callers hand over one flat sequence per channel (color
//! plane, audio channel). Every channel is an independent codec call, so
//! channels can be spread across worker threads:
//! - Main thread: queue one job per channel, collect results by index
//! - Worker pool: run the codec on whole channels

use crossbeam::channel::{bounded, Receiver, Sender};

use crate::error::{Error, Result};
use crate::registry::{Codec, EncodedBlock};

/// Configuration for channel batches
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto, 1 = sequential)
    pub num_threads: usize,
}

impl BatchConfig {
    pub fn sequential() -> Self {
        Self { num_threads: 1 }
    }

    fn effective_threads(&self) -> usize {
        match self.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }
}

/// Compress each channel with `codec`; output order matches input order
pub fn compress_channels(
    codec: &Codec,
    channels: &[Vec<u8>],
    config: &BatchConfig,
) -> Result<Vec<EncodedBlock>> {
    run_batch(channels, config, |symbols: &Vec<u8>| codec.compress(symbols))
}

/// Decompress each block with `codec`; output order matches input order
pub fn decompress_channels(
    codec: &Codec,
    blocks: &[EncodedBlock],
    config: &BatchConfig,
) -> Result<Vec<Vec<u8>>> {
    run_batch(blocks, config, |block: &EncodedBlock| codec.decompress(block))
}

/// Apply `job` to every input, returning the first error in input order
fn run_batch<I, O, F>(inputs: &[I], config: &BatchConfig, job: F) -> Result<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> Result<O> + Sync,
{
    let num_threads = config.effective_threads().min(inputs.len());
    tracing::debug!(channels = inputs.len(), threads = num_threads, "running channel batch");

    if num_threads <= 1 {
        return inputs.iter().map(&job).collect();
    }

    // Every index is queued up front, so the job channel never blocks
    let (job_tx, job_rx): (Sender<usize>, Receiver<usize>) = bounded(inputs.len());
    let (result_tx, result_rx): (Sender<(usize, Result<O>)>, Receiver<(usize, Result<O>)>) =
        bounded(inputs.len());
    for index in 0..inputs.len() {
        job_tx.send(index).map_err(|_| Error::Internal("Job queue closed".to_string()))?;
    }
    drop(job_tx);

    let job = &job;
    let slots = crossbeam::scope(|scope| {
        for _ in 0..num_threads {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();

            scope.spawn(move |_| worker_thread(inputs, job, job_rx, result_tx));
        }

        // Drop our copy so the result iterator ends when the workers finish
        drop(result_tx);

        let mut slots: Vec<Option<Result<O>>> = (0..inputs.len()).map(|_| None).collect();
        for (index, result) in result_rx.iter() {
            slots[index] = Some(result);
        }
        slots
    })
    .map_err(|_| Error::Internal("Thread panicked".to_string()))?;

    slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| Err(Error::Internal("Channel result missing".to_string())))
        })
        .collect()
}

fn worker_thread<I, O, F>(
    inputs: &[I],
    job: &F,
    job_rx: Receiver<usize>,
    result_tx: Sender<(usize, Result<O>)>,
) where
    F: Fn(&I) -> Result<O>,
{
    for index in job_rx.iter() {
        if result_tx.send((index, job(&inputs[index]))).is_err() {
            break;
        }
    }
}
