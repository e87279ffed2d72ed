//! Application layer containing the routing logic.
//!
//! `SelectionRouter` is the synchronous, stateless selection algorithm.
//! `PaymentDispatcher` composes it with the catalog's processor handles to
//! take a transaction all the way to a `ProcessOutcome`.

pub mod dispatcher;
pub mod router;
