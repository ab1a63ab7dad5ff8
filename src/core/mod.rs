//! Core domain types: event records, normalization, formatting, and errors.
//!
//! Every webhook delivery flows through this module twice: once on the write
//! path (raw payload → [`events::EventRecord`] via [`normalize`]) and once on
//! the read path (store snapshot → display strings via [`format`]).
//!
//! # Key Concepts
//!
//! ## Records
//!
//! An [`EventRecord`](events::EventRecord) is the normalized form of one
//! repository event. Records are:
//! - **Immutable**: Once created, never modified
//! - **Append-only**: New records are added, never removed
//!
//! ## Errors
//!
//! Normalization failures carry the rejected field path so the webhook
//! boundary can answer with a client error instead of crashing. Server and
//! CLI failures use the structured [`RepowatchError`](error::RepowatchError)
//! with a category, code, message, and origin.
//!
//! # Modules
//!
//! - [`events`] - Event record definitions
//! - [`normalize`] - Webhook payload normalization
//! - [`format`] - Read-side display formatting
//! - [`error`] - Structured error types

pub mod error;
pub mod events;
pub mod format;
pub mod normalize;
