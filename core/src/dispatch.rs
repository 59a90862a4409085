//! Per-run delivery of segmented text to a speech sink.
//!
//! The text-to-speech side consumes one script run at a time so each run can
//! go to its own voice. Cancellation is cooperative: nothing in the pipeline
//! blocks, so a stop request simply takes effect at the next run boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::segment::{segment, TextRun};

/// Consumer of script runs, one voice call per run.
pub trait RunSink {
    fn speak(&mut self, run: &TextRun);
}

/// Hands segmented runs to a sink, checking the shared stop flag between
/// runs. Clones share the flag, so any thread holding a clone can cancel an
/// utterance in progress.
#[derive(Clone, Default)]
pub struct Dispatcher {
    stop: Arc<AtomicBool>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the current utterance to stop after the run now being spoken.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Segment `text` and deliver each run to `sink` in order. Starting a
    /// new utterance clears any stop request left over from the previous
    /// one. Returns the number of runs delivered.
    pub fn dispatch<S: RunSink>(&self, text: &str, sink: &mut S) -> usize {
        self.stop.store(false, Ordering::Relaxed);
        let mut delivered = 0;
        for run in segment(text) {
            if self.stop.load(Ordering::Relaxed) {
                debug!(delivered, "utterance stopped between runs");
                break;
            }
            sink.speak(&run);
            delivered += 1;
        }
        delivered
    }
}
