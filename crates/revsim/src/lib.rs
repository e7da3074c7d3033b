//! Claims revenue forecasting host
//!
//! Runs the `revsim_core` Monte Carlo engine without blocking the caller:
//! - [`SimulationHost`] dispatches requests to a background worker thread and
//!   keeps only the newest result
//! - [`config::ForecastFile`] loads claims and probabilities from YAML
//! - [`report`] renders summaries as plain text

// ============================================================================
// Core modules
// ============================================================================

pub mod host;
pub mod platform;

// ============================================================================
// Application modules
// ============================================================================

pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use host::{HostEvent, SimulationHost};
pub use logging::init_logging;
pub use platform::RequestId;
