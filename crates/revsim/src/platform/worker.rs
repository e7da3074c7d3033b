//! Background worker abstraction for simulation execution.
//!
//! This module defines the [`SimulationWorker`] trait and the message types
//! exchanged between the host and its execution context. Two backends
//! implement the trait: a dedicated thread ([`super::ThreadWorker`]) and a
//! deferred same-thread fallback ([`super::DeferredWorker`]).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use revsim_core::{SimulationError, SimulationRequest, SimulationSummary};

/// Identifier assigned by the host to each accepted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Message sent to the background worker
#[derive(Debug)]
pub enum WorkerMessage {
    /// Run a simulation on an owned copy of the inputs
    Run {
        id: RequestId,
        request: SimulationRequest,
    },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum WorkerResponse {
    /// Simulation completed (boxed to keep the enum small)
    Complete {
        id: RequestId,
        summary: Box<SimulationSummary>,
    },
    /// Request was superseded before it started
    Cancelled { id: RequestId },
    /// Engine rejected the request
    Error {
        id: RequestId,
        error: SimulationError,
    },
}

impl WorkerResponse {
    pub fn id(&self) -> RequestId {
        match self {
            WorkerResponse::Complete { id, .. }
            | WorkerResponse::Cancelled { id }
            | WorkerResponse::Error { id, .. } => *id,
        }
    }
}

/// Platform-independent simulation worker interface.
pub trait SimulationWorker {
    /// Hand a request to the execution context.
    ///
    /// Returns the request back if the context is gone.
    fn send(&self, id: RequestId, request: SimulationRequest) -> Result<(), SimulationRequest>;

    /// Try to receive a response (non-blocking)
    fn try_recv(&self) -> Option<WorkerResponse>;

    /// Stop accepting work and drop anything queued
    fn shutdown(&self);

    /// True when simulations run on the caller's thread
    fn is_deferred(&self) -> bool {
        false
    }
}

const NO_REQUEST: u64 = 0;
const DISPOSED: u64 = u64::MAX;

/// Id of the newest request, shared between the host and its worker.
///
/// The worker consults it before starting a queued request so superseded work
/// is skipped rather than computed and thrown away.
#[derive(Debug, Clone)]
pub struct LatestRequest(Arc<AtomicU64>);

impl LatestRequest {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU64::new(NO_REQUEST)))
    }

    pub fn mark(&self, id: RequestId) {
        self.0.store(id.0, Ordering::SeqCst);
    }

    pub fn is_superseded(&self, id: RequestId) -> bool {
        self.0.load(Ordering::SeqCst) != id.0
    }

    /// Supersede every request, past and future
    pub fn dispose(&self) {
        self.0.store(DISPOSED, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.load(Ordering::SeqCst) == DISPOSED
    }
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one request unless it has already been superseded.
pub(crate) fn execute(
    id: RequestId,
    request: SimulationRequest,
    latest: &LatestRequest,
) -> WorkerResponse {
    if latest.is_superseded(id) {
        tracing::debug!(request = id.0, "Skipping superseded simulation");
        return WorkerResponse::Cancelled { id };
    }

    let started = Instant::now();
    match revsim_core::monte_carlo_simulate(&request) {
        Ok(summary) => {
            tracing::info!(
                request = id.0,
                claims = request.claims.len(),
                iterations = request.iterations,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Simulation complete"
            );
            WorkerResponse::Complete {
                id,
                summary: Box::new(summary),
            }
        }
        Err(error) => {
            tracing::warn!(request = id.0, error = %error, "Simulation failed");
            WorkerResponse::Error { id, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revsim_core::{Claim, ClaimStatus, ProbabilityMap};

    fn request() -> SimulationRequest {
        SimulationRequest::new(
            vec![Claim::new("A", 100.0, ClaimStatus::Approved)],
            ProbabilityMap::default(),
        )
        .iterations(50)
        .seed(3)
    }

    #[test]
    fn test_latest_request_tracking() {
        let latest = LatestRequest::new();
        latest.mark(RequestId(1));
        assert!(!latest.is_superseded(RequestId(1)));

        latest.mark(RequestId(2));
        assert!(latest.is_superseded(RequestId(1)));
        assert!(!latest.is_disposed());

        latest.dispose();
        assert!(latest.is_superseded(RequestId(2)));
        assert!(latest.is_disposed());
    }

    #[test]
    fn test_execute_skips_superseded() {
        let latest = LatestRequest::new();
        latest.mark(RequestId(2));

        let response = execute(RequestId(1), request(), &latest);
        assert!(matches!(response, WorkerResponse::Cancelled { id } if id == RequestId(1)));
    }

    #[test]
    fn test_execute_reports_engine_error() {
        let latest = LatestRequest::new();
        latest.mark(RequestId(1));

        let response = execute(RequestId(1), request().iterations(0), &latest);
        assert!(matches!(
            response,
            WorkerResponse::Error {
                error: SimulationError::InvalidIterationCount,
                ..
            }
        ));
    }

    #[test]
    fn test_execute_completes_latest() {
        let latest = LatestRequest::new();
        latest.mark(RequestId(4));

        match execute(RequestId(4), request(), &latest) {
            WorkerResponse::Complete { id, summary } => {
                assert_eq!(id, RequestId(4));
                assert_eq!(summary.iterations, 50);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }
}
