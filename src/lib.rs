//! Repowatch - a webhook listener for repository push and pull-request events.
//!
//! This crate provides the core library functionality for repowatch.

pub mod cli;
pub mod core;
pub mod server;
pub mod storage;
