//! Execution contexts for simulation requests.
//!
//! [`SimulationWorker`] abstracts where a simulation runs:
//! - [`ThreadWorker`]: a dedicated background thread (normal path)
//! - [`DeferredWorker`]: the caller's own thread, at the next poll (fallback
//!   when no thread can be created)

mod worker;

pub mod deferred;
pub mod native;

pub use deferred::DeferredWorker;
pub use native::ThreadWorker;
pub use worker::{LatestRequest, RequestId, SimulationWorker, WorkerMessage, WorkerResponse};
