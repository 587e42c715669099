//! Inbound/outbound adapters around the application layer.

pub mod csv;
