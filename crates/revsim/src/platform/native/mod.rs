//! Native execution context using a background thread.

mod worker;

pub use worker::ThreadWorker;
