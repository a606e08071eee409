use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, after, bounded, select};
use tracing::{debug, warn};

use super::{Frame, Simulation};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("simulation worker panicked")]
    WorkerPanicked,
}

/// Runner drives a `Simulation` from a background thread.
///
/// Each iteration waits one interval, steps, and hands the frame to the
/// callback. The wait is armed only after the previous step returned, so
/// steps never overlap. The loop ends when `stop()` is called or the runner
/// is dropped.
pub struct Runner {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<Simulation>>,
}

impl Runner {
    pub fn spawn<F>(mut simulation: Simulation, mut on_frame: F) -> Self
    where
        F: FnMut(Frame) + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        simulation.run();

        let handle = thread::spawn(move || {
            debug!("runner started");
            loop {
                let timeout = after(simulation.interval());
                select! {
                    // A message or a disconnected sender both mean stop
                    recv(stop_rx) -> _ => break,
                    recv(timeout) -> _ => {
                        let frame = simulation.step();
                        on_frame(frame);
                    }
                }
            }
            simulation.stop();
            debug!(generation = simulation.generation(), "runner finished");
            simulation
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Signal the loop to end and hand the simulation back
    pub fn stop(mut self) -> Result<Simulation, RunnerError> {
        self.shutdown().ok_or(RunnerError::WorkerPanicked)
    }

    fn shutdown(&mut self) -> Option<Simulation> {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.try_send(());
        }
        self.handle.take()?.join().ok()
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        if self.handle.is_some() && self.shutdown().is_none() {
            warn!("simulation worker panicked");
        }
    }
}
