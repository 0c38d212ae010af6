#![warn(missing_docs)]
//! A simple, reference in-memory backend for the modeling assessment dashboard.
//!
//! [`MemoryBackend`] implements the repository and optimizer ports of `mas-core` over a
//! [`Fixture`](fixture::Fixture) held in memory. It is meant for tests and demonstrations:
//! the optimizer is a deterministic stand-in for the real model comparison, proposing
//! ungraded, unlocked submissions in id order.

use mas_core::models::{AssessmentResult, CourseId, ExerciseId, SubmissionId, UserRef};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::{Level, event};

pub mod config;
pub mod fixture;
mod r#impl;

pub use r#impl::StaticIdentity;

use config::MemoryConfig;
use fixture::{ExerciseFixture, Fixture};

/// The ways the in-memory backend may fail.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The fixture file could not be read
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
    /// The fixture file is not valid
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
    /// No course with this id exists
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),
    /// No exercise with this id exists
    #[error("unknown exercise {0}")]
    UnknownExercise(ExerciseId),
    /// No submission with this id exists
    #[error("unknown submission {0}")]
    UnknownSubmission(SubmissionId),
    /// The assessment is complete and can no longer be cancelled
    #[error("the assessment of submission {0} is already complete")]
    AlreadyAssessed(SubmissionId),
    /// The optimizer has been switched off
    #[error("optimizer unavailable")]
    OptimizerUnavailable,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) fixture: Fixture,
    /// Cached optimizer proposals per exercise, dropped on reset
    pub(crate) proposals: HashMap<ExerciseId, Vec<SubmissionId>>,
}

impl State {
    pub(crate) fn exercise(&self, exercise_id: ExerciseId) -> Option<&ExerciseFixture> {
        self.fixture
            .exercises
            .iter()
            .find(|entry| entry.exercise.id == exercise_id)
    }

    pub(crate) fn submission_mut(
        &mut self,
        submission_id: SubmissionId,
    ) -> Option<&mut mas_core::models::Submission> {
        self.fixture
            .exercises
            .iter_mut()
            .flat_map(|entry| entry.submissions.iter_mut())
            .find(|submission| submission.id == submission_id)
    }
}

/// In-memory implementation of the dashboard's backend ports.
///
/// Clones share the same data, so one clone can be handed to a dashboard while another
/// plays the part of other assessors.
///
/// # Example
///
/// ```no_run
/// # use mas_memory::{MemoryBackend, config::MemoryConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MemoryBackend::open(&MemoryConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    pub(crate) state: Arc<RwLock<State>>,
    pub(crate) optimizer_online: Arc<AtomicBool>,
    pub(crate) optimal_batch_size: usize,
}

impl MemoryBackend {
    /// Open a backend, seeded from the configured fixture if there is one.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the fixture cannot be read or parsed.
    pub async fn open(config: &MemoryConfig) -> Result<Self, MemoryError> {
        let fixture = match &config.fixture_path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                let fixture: Fixture = serde_json::from_str(&raw)?;
                event!(
                    Level::INFO,
                    path = %path.display(),
                    courses = fixture.courses.len(),
                    exercises = fixture.exercises.len(),
                    "loaded fixture"
                );
                fixture
            }
            None => Fixture::default(),
        };
        Ok(Self::from_fixture(fixture, config))
    }

    /// Create a backend holding `fixture`
    pub fn from_fixture(fixture: Fixture, config: &MemoryConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                fixture,
                proposals: HashMap::new(),
            })),
            optimizer_online: Arc::new(AtomicBool::new(true)),
            optimal_batch_size: config.optimal_batch_size,
        }
    }

    /// Switch the optimizer on or off; while off every optimizer call fails
    pub fn set_optimizer_online(&self, online: bool) {
        self.optimizer_online.store(online, Ordering::SeqCst);
    }

    /// Open the assessment of a submission as `assessor`, locking it for everyone else
    pub async fn start_assessment(
        &self,
        submission_id: SubmissionId,
        assessor: UserRef,
    ) -> Result<(), MemoryError> {
        let mut state = self.state.write().await;
        let submission = state
            .submission_mut(submission_id)
            .ok_or(MemoryError::UnknownSubmission(submission_id))?;
        let result = submission.result.get_or_insert_with(AssessmentResult::default);
        result.assessor = Some(assessor);
        Ok(())
    }

    /// Submit the assessment of a submission
    pub async fn complete_assessment(
        &self,
        submission_id: SubmissionId,
        score: f64,
        completed_at: OffsetDateTime,
    ) -> Result<(), MemoryError> {
        let mut state = self.state.write().await;
        let submission = state
            .submission_mut(submission_id)
            .ok_or(MemoryError::UnknownSubmission(submission_id))?;
        let result = submission.result.get_or_insert_with(AssessmentResult::default);
        result.score = Some(score);
        result.completion_date = Some(completed_at);
        Ok(())
    }
}
