//! Jinro core: everything between the transcript and the wire that does not
//! care which browser API or HTTP client carries the bytes.

pub mod ports;
pub mod history;
pub mod accumulate;
pub mod event_bus;
pub mod runtime;
