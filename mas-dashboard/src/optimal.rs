//! The optimizer's proposal and the client fetching it.

use crate::Set;
use mas_core::{
    models::{ExerciseId, ModelingExercise, SubmissionId},
    ports::OptimizerService,
};
use rand::Rng;
use tracing::{Level, event};

/// The ordered set of submission ids the optimizer proposed last.
///
/// The set is only meaningful within the current dashboard session. It is replaced
/// wholesale on every successful fetch and never patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptimalIdSet(Set<SubmissionId>);

impl OptimalIdSet {
    /// Number of remembered ids
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no id is remembered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the optimizer proposed `submission_id`
    pub fn contains(&self, submission_id: SubmissionId) -> bool {
        self.0.contains(&submission_id)
    }

    /// Iterate the ids in the order the optimizer proposed them
    pub fn iter(&self) -> impl Iterator<Item = SubmissionId> + '_ {
        self.0.iter().copied()
    }

    /// Whether the set should be refetched before it is used again.
    ///
    /// A set with fewer than `threshold` ids is considered used up.
    pub fn is_stale(&self, threshold: usize) -> bool {
        self.0.len() < threshold
    }

    /// Pick one id uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<SubmissionId> {
        if self.0.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.0.len());
        self.0.get_index(index).copied()
    }
}

impl FromIterator<SubmissionId> for OptimalIdSet {
    fn from_iter<I: IntoIterator<Item = SubmissionId>>(iter: I) -> Self {
        Self(Set::from_iter(iter))
    }
}

/// Thin client over the [`OptimizerService`] port.
pub struct OptimalSetClient<'a, O> {
    optimizer: &'a O,
}

impl<'a, O: OptimizerService> OptimalSetClient<'a, O> {
    /// Wrap an optimizer
    pub fn new(optimizer: &'a O) -> Self {
        Self { optimizer }
    }

    /// Request the next optimal submissions of an exercise.
    ///
    /// An empty set signals that no optimal submission is available.
    pub async fn fetch_optimal_ids(
        &self,
        exercise_id: ExerciseId,
    ) -> Result<OptimalIdSet, O::Error> {
        let ids = self
            .optimizer
            .get_optimal_submission_ids(exercise_id)
            .await?;
        Ok(ids.into_iter().collect())
    }

    /// Like [`fetch_optimal_ids`](Self::fetch_optimal_ids), but a failure is logged and
    /// treated exactly like an empty answer. The optimizer is an optional enhancement and
    /// must never take the dashboard down with it.
    pub async fn fetch_or_empty(&self, exercise_id: ExerciseId) -> OptimalIdSet {
        match self.fetch_optimal_ids(exercise_id).await {
            Ok(ids) => {
                event!(
                    Level::DEBUG,
                    %exercise_id,
                    count = ids.len(),
                    "fetched optimal submissions"
                );
                ids
            }
            Err(err) => {
                event!(
                    Level::WARN,
                    %exercise_id,
                    err = err.to_string(),
                    "optimizer unavailable, continuing without optimal submissions"
                );
                OptimalIdSet::default()
            }
        }
    }

    /// Clear the server-side optimality tracking, if the exercise supports it.
    ///
    /// # Returns
    ///
    /// - Ok(true) if the reset was issued and succeeded
    /// - Ok(false) if the diagram type does not support resetting
    /// - Err if the optimizer refused
    pub async fn reset_optimality(&self, exercise: &ModelingExercise) -> Result<bool, O::Error> {
        if !exercise.supports_optimality_reset() {
            event!(Level::DEBUG, exercise_id = %exercise.id, "optimality reset not supported");
            return Ok(false);
        }
        self.optimizer.reset_optimality(exercise.id).await?;
        Ok(true)
    }
}
