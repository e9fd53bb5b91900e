//! System utilities
//!
//! Native capability probing: GPU detection and memory/CPU lookup. This is
//! one possible source of [`SystemCapabilities`](crate::types::SystemCapabilities);
//! the estimator itself never probes.

pub mod gpu;
pub mod probe;
pub mod resources;

pub use probe::{capabilities_from, probe_host, ProbeReport};
