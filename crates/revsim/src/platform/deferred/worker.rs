//! Same-thread fallback worker.
//!
//! Used when a background thread cannot be created. Requests are queued on
//! `send` and only run inside a later `try_recv`, so the caller's current call
//! stack has unwound before any simulation starts.

use std::cell::RefCell;
use std::collections::VecDeque;

use revsim_core::SimulationRequest;

use crate::platform::worker::{
    LatestRequest, RequestId, SimulationWorker, WorkerResponse, execute,
};

/// Worker that runs queued simulations synchronously on the polling thread.
pub struct DeferredWorker {
    queue: RefCell<VecDeque<(RequestId, SimulationRequest)>>,
    latest: LatestRequest,
}

impl DeferredWorker {
    pub fn new(latest: LatestRequest) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            latest,
        }
    }

    /// Number of requests waiting for the next poll
    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl SimulationWorker for DeferredWorker {
    fn send(&self, id: RequestId, request: SimulationRequest) -> Result<(), SimulationRequest> {
        self.queue.borrow_mut().push_back((id, request));
        Ok(())
    }

    fn try_recv(&self) -> Option<WorkerResponse> {
        let (id, request) = self.queue.borrow_mut().pop_front()?;
        Some(execute(id, request, &self.latest))
    }

    fn shutdown(&self) {
        self.queue.borrow_mut().clear();
    }

    fn is_deferred(&self) -> bool {
        true
    }
}
