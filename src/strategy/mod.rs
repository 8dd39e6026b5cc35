//! Reference strategies.
//!
//! Move selection is deliberately outside the core's correctness surface;
//! this module only ships the illustrative random player used by the demo
//! driver and the integration tests.

mod random;

pub use random::RandomPlayer;
