#![warn(missing_docs)]
//! The optimal-submission distribution workflow of the modeling assessment dashboard.
//!
//! The workflow keeps the submitted work of one exercise, asks the server-side optimizer
//! which submissions are most valuable to assess next, and routes assessors to one of
//! them while making sure two assessors are not sent to the same submission.
//!
//! Every external collaborator is reached through the ports in [`mas_core::ports`],
//! bundled in a [`Session`](mas_core::ports::Session).

mod config;
pub use config::DashboardConfig;

mod controller;
pub use controller::{AssessOutcome, CancelOutcome, DashboardController, DashboardState};

mod error;
pub use error::DashboardError;

mod events;
pub use events::{ResultListEvents, Subscription};

mod optimal;
pub use optimal::{OptimalIdSet, OptimalSetClient};

mod policy;
pub use policy::{AssessmentLockPolicy, is_eligible};

mod store;
pub use store::{Partition, SubmissionStore};

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
