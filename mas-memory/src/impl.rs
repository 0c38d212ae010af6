//! Port implementations for the in-memory backend.
//!
//! This module contains the implementations of the repository, optimizer and identity
//! traits defined in `mas-core`.

mod exercise;
mod identity;
mod optimizer;
mod submission;

pub use identity::StaticIdentity;
