//! Inbound and outbound adapters for batch routing.

pub mod csv;
