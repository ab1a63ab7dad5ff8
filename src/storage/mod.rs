//! Event storage.
//!
//! The store is the only owner of recorded events for the process lifetime.
//! State is transient: a restart clears everything.
//!
//! # Modules
//!
//! - [`event_store`] - `EventStore` trait and in-memory implementation

pub mod event_store;
