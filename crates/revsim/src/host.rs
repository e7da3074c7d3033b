//! Non-blocking front end to the simulation engine.
//!
//! [`SimulationHost`] hands each request to a worker and reports back through
//! [`SimulationHost::poll`]. Only the newest request counts: when requests are
//! submitted in quick succession (a user dragging a probability slider),
//! earlier ones are reported as [`HostEvent::Discarded`] and the "current"
//! summary slot is only ever filled from the latest request.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use revsim_core::{SimulationError, SimulationRequest, SimulationSummary};

use crate::platform::{
    DeferredWorker, LatestRequest, RequestId, SimulationWorker, ThreadWorker, WorkerResponse,
};

/// Sleep between polls in [`SimulationHost::wait_for`]
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Outcome of one accepted request, reported exactly once
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The latest request finished; its summary is now current
    Completed {
        id: RequestId,
        summary: Arc<SimulationSummary>,
    },
    /// A newer request was submitted before this one was delivered
    Discarded { id: RequestId },
    /// The engine rejected the request
    Failed {
        id: RequestId,
        error: SimulationError,
    },
}

impl HostEvent {
    pub fn id(&self) -> RequestId {
        match self {
            HostEvent::Completed { id, .. }
            | HostEvent::Discarded { id }
            | HostEvent::Failed { id, .. } => *id,
        }
    }
}

/// Runs simulations off the caller's thread and tracks the latest result.
pub struct SimulationHost {
    worker: Box<dyn SimulationWorker>,
    latest: LatestRequest,
    next_id: u64,
    latest_id: Option<RequestId>,
    pending: bool,
    current: Option<Arc<SimulationSummary>>,
    /// Events settled outside `poll`, delivered before new worker responses
    ready: VecDeque<HostEvent>,
}

impl SimulationHost {
    /// Create a host backed by a background thread.
    ///
    /// Falls back to deferred same-thread execution if the thread cannot be
    /// spawned.
    pub fn new() -> Self {
        let latest = LatestRequest::new();
        let worker: Box<dyn SimulationWorker> = match ThreadWorker::spawn(latest.clone()) {
            Ok(worker) => Box::new(worker),
            Err(err) => {
                tracing::warn!(error = %err, "Worker thread unavailable, using deferred execution");
                Box::new(DeferredWorker::new(latest.clone()))
            }
        };
        Self::from_parts(worker, latest)
    }

    /// Create a host that always runs simulations on the polling thread.
    pub fn deferred() -> Self {
        let latest = LatestRequest::new();
        Self::from_parts(Box::new(DeferredWorker::new(latest.clone())), latest)
    }

    fn from_parts(worker: Box<dyn SimulationWorker>, latest: LatestRequest) -> Self {
        Self {
            worker,
            latest,
            next_id: 0,
            latest_id: None,
            pending: false,
            current: None,
            ready: VecDeque::new(),
        }
    }

    /// Submit a request, superseding any request still in flight.
    ///
    /// The iteration count is checked here so an invalid request fails
    /// synchronously and never reaches the worker.
    pub fn submit(&mut self, request: SimulationRequest) -> Result<RequestId, SimulationError> {
        if request.iterations == 0 {
            return Err(SimulationError::InvalidIterationCount);
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest.mark(id);
        self.latest_id = Some(id);
        self.pending = true;

        tracing::debug!(
            request = id.0,
            claims = request.claims.len(),
            iterations = request.iterations,
            "Submitting simulation"
        );

        if let Err(request) = self.worker.send(id, request) {
            tracing::warn!(
                request = id.0,
                "Worker thread gone, switching to deferred execution"
            );
            let fallback = DeferredWorker::new(self.latest.clone());
            // Queueing on a deferred worker cannot fail
            let _ = fallback.send(id, request);
            let dead = std::mem::replace(&mut self.worker, Box::new(fallback));

            // Responses the thread sent before exiting still get their event
            while let Some(response) = dead.try_recv() {
                let event = self.settle(response);
                self.ready.push_back(event);
            }
        }

        Ok(id)
    }

    /// Take the next finished event, if any (non-blocking).
    ///
    /// On the deferred path this is where the simulation actually runs.
    pub fn poll(&mut self) -> Option<HostEvent> {
        if let Some(event) = self.ready.pop_front() {
            return Some(event);
        }
        let response = self.worker.try_recv()?;
        Some(self.settle(response))
    }

    /// Take every event that is ready now
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::iter::from_fn(|| self.poll()).collect()
    }

    /// Poll until `id` is settled or `timeout` elapses.
    ///
    /// Blocks the calling thread; meant for scripts and tests rather than an
    /// interactive event loop. Events for other requests are consumed.
    pub fn wait_for(&mut self, id: RequestId, timeout: Duration) -> Option<HostEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            while let Some(event) = self.poll() {
                if event.id() == id {
                    return Some(event);
                }
            }
            if Instant::now() >= deadline {
                return None;
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn settle(&mut self, response: WorkerResponse) -> HostEvent {
        let id = response.id();
        let is_latest = self.latest_id == Some(id);
        if is_latest {
            self.pending = false;
        }

        match response {
            WorkerResponse::Complete { id, summary } if is_latest => {
                let summary = Arc::new(*summary);
                self.current = Some(summary.clone());
                HostEvent::Completed { id, summary }
            }
            WorkerResponse::Complete { id, .. } | WorkerResponse::Cancelled { id } => {
                tracing::debug!(request = id.0, "Discarding superseded simulation");
                HostEvent::Discarded { id }
            }
            WorkerResponse::Error { id, error } => HostEvent::Failed { id, error },
        }
    }

    /// Summary from the most recently completed latest request
    pub fn current(&self) -> Option<&Arc<SimulationSummary>> {
        self.current.as_ref()
    }

    /// True while the latest request has not been reported
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_id
    }

    /// True when running on the same-thread fallback
    pub fn is_deferred(&self) -> bool {
        self.worker.is_deferred()
    }

    /// Tear down the execution context.
    ///
    /// A run in flight is left to finish in the background and its result is
    /// never delivered.
    pub fn dispose(self) {}
}

impl Default for SimulationHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SimulationHost {
    fn drop(&mut self) {
        self.latest.dispose();
        self.worker.shutdown();
        tracing::debug!(pending = self.pending, "Simulation host disposed");
    }
}
