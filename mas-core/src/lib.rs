#![warn(missing_docs)]
//! Models and ports for the modeling assessment dashboard.
//!
//! The dashboard itself lives in `mas-dashboard`; this crate only describes
//! the data it works on and the collaborators it talks to. Backends (the REST
//! API, an in-memory store for tests and demos) implement the traits in
//! [`ports`], while the dashboard is written purely against them.

/// Core domain models for assessment distribution.
///
/// This module contains the fundamental data structures that represent the domain entities:
/// submissions, their results and participations, exercises and courses.
///
/// The models in this module are primarily data structures with minimal business logic,
/// following the principles of the hexagonal architecture to separate domain entities
/// from their persistence and processing implementations.
pub mod models;

/// Interface traits for the assessment dashboard.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the dashboard workflow and external adapters
/// (the REST backend, the router, alert and dialog surfaces) without specifying
/// implementation details. This separation allows for easier testing and the ability
/// to swap out infrastructure components without affecting the workflow itself.
pub mod ports;
