//! Domain types for processor routing.
//!
//! Everything here is plain data plus the two ports (`ProcessorCatalog` and
//! `PaymentProcessor`) that the application layer depends on.

pub mod outcome;
pub mod ports;
pub mod processor;
pub mod score;
pub mod transaction;
pub mod weights;
