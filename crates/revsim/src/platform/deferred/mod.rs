//! Same-thread execution context for targets without threads.

mod worker;

pub use worker::DeferredWorker;
