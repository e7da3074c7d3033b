//! Native worker backed by a dedicated `std::thread`.

use std::io;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use revsim_core::SimulationRequest;

use crate::platform::worker::{
    LatestRequest, RequestId, SimulationWorker, WorkerMessage, WorkerResponse, execute,
};

/// Background worker that runs simulations on a separate thread
pub struct ThreadWorker {
    request_tx: Sender<WorkerMessage>,
    response_rx: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl ThreadWorker {
    /// Spawn the worker thread.
    ///
    /// Fails only if the OS refuses to create the thread.
    pub fn spawn(latest: LatestRequest) -> io::Result<Self> {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let ctx = WorkerContext {
            response_tx,
            latest,
        };

        let thread = thread::Builder::new()
            .name("revsim-worker".to_string())
            .spawn(move || ctx.run(request_rx))?;

        Ok(Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        })
    }

    /// True once the worker thread has exited
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl SimulationWorker for ThreadWorker {
    fn send(&self, id: RequestId, request: SimulationRequest) -> Result<(), SimulationRequest> {
        self.request_tx
            .send(WorkerMessage::Run { id, request })
            .map_err(|err| match err.0 {
                WorkerMessage::Run { request, .. } => request,
                WorkerMessage::Shutdown => unreachable!("only Run messages are sent here"),
            })
    }

    fn try_recv(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    fn shutdown(&self) {
        let _ = self.request_tx.send(WorkerMessage::Shutdown);
    }
}

impl Drop for ThreadWorker {
    fn drop(&mut self) {
        self.shutdown();
        // A run in flight finishes on its own and its response goes nowhere
        // once `response_rx` is dropped; never block the caller on it.
        if self.is_finished() {
            if let Some(thread) = self.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

/// State owned by the background worker thread.
struct WorkerContext {
    response_tx: Sender<WorkerResponse>,
    latest: LatestRequest,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<WorkerMessage>) {
        while let Ok(message) = request_rx.recv() {
            match message {
                WorkerMessage::Shutdown => break,

                WorkerMessage::Run { id, request } => {
                    if self.latest.is_disposed() {
                        break;
                    }

                    let response = execute(id, request, &self.latest);
                    if self.response_tx.send(response).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Simulation worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use revsim_core::{Claim, ClaimStatus, ProbabilityMap};

    use super::*;

    fn recv_within(worker: &ThreadWorker, timeout: Duration) -> Option<WorkerResponse> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(response) = worker.try_recv() {
                return Some(response);
            }
            thread::sleep(Duration::from_millis(2));
        }
        None
    }

    fn request() -> SimulationRequest {
        SimulationRequest::new(
            vec![
                Claim::new("A", 100.0, ClaimStatus::Approved),
                Claim::new("B", 200.0, ClaimStatus::Denied),
            ],
            ProbabilityMap::default(),
        )
        .iterations(200)
        .seed(9)
    }

    #[test]
    fn test_runs_on_background_thread() {
        let latest = LatestRequest::new();
        let worker = ThreadWorker::spawn(latest.clone()).unwrap();

        latest.mark(RequestId(1));
        assert!(worker.send(RequestId(1), request()).is_ok());

        match recv_within(&worker, Duration::from_secs(10)) {
            Some(WorkerResponse::Complete { id, summary }) => {
                assert_eq!(id, RequestId(1));
                assert_eq!(summary.distribution_total(), 200);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_disposed_worker_delivers_nothing() {
        let latest = LatestRequest::new();
        let worker = ThreadWorker::spawn(latest.clone()).unwrap();

        latest.dispose();
        let _ = worker.send(RequestId(1), request());

        assert!(recv_within(&worker, Duration::from_millis(200)).is_none());
    }

    #[test]
    fn test_send_after_shutdown_returns_request() {
        let worker = ThreadWorker::spawn(LatestRequest::new()).unwrap();
        worker.shutdown();

        // Wait for the thread to drain the shutdown message and exit
        let deadline = Instant::now() + Duration::from_secs(10);
        while !worker.is_finished() {
            assert!(Instant::now() < deadline, "worker thread did not stop");
            thread::sleep(Duration::from_millis(2));
        }

        let returned = worker.send(RequestId(1), request());
        assert_eq!(returned.err().map(|r| r.iterations), Some(200));
    }
}
