use crate::{MemoryBackend, MemoryError, fixture::ExerciseFixture};
use mas_core::{
    models::{ExerciseId, SubmissionId},
    ports::OptimizerService,
};
use std::sync::atomic::Ordering;
use tracing::{Level, event};

/// Submitted, not yet assessed and not locked by any assessor, in id order
fn open_submissions(entry: &ExerciseFixture) -> Vec<SubmissionId> {
    let mut open: Vec<SubmissionId> = entry
        .submissions
        .iter()
        .filter(|submission| {
            submission.submitted
                && !submission.is_assessed()
                && submission
                    .result
                    .as_ref()
                    .and_then(|result| result.assessor.as_ref())
                    .is_none()
        })
        .map(|submission| submission.id)
        .collect();
    open.sort();
    open
}

impl MemoryBackend {
    fn ensure_optimizer_online(&self) -> Result<(), MemoryError> {
        if self.optimizer_online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(MemoryError::OptimizerUnavailable)
        }
    }
}

impl OptimizerService for MemoryBackend {
    type Error = MemoryError;

    async fn get_optimal_submission_ids(
        &self,
        exercise_id: ExerciseId,
    ) -> Result<Vec<SubmissionId>, Self::Error> {
        self.ensure_optimizer_online()?;

        let mut state = self.state.write().await;
        let open = open_submissions(
            state
                .exercise(exercise_id)
                .ok_or(MemoryError::UnknownExercise(exercise_id))?,
        );

        // Keep proposing what was proposed before for as long as it is still open,
        // so that repeated requests are stable.
        let cached: Vec<SubmissionId> = state
            .proposals
            .get(&exercise_id)
            .map(|ids| ids.iter().copied().filter(|id| open.contains(id)).collect())
            .unwrap_or_default();

        let proposal = if cached.is_empty() {
            open.into_iter().take(self.optimal_batch_size).collect()
        } else {
            cached
        };

        event!(Level::DEBUG, %exercise_id, count = proposal.len(), "proposing optimal submissions");
        state.proposals.insert(exercise_id, proposal.clone());
        Ok(proposal)
    }

    async fn reset_optimality(&self, exercise_id: ExerciseId) -> Result<(), Self::Error> {
        self.ensure_optimizer_online()?;

        let mut state = self.state.write().await;
        if state.exercise(exercise_id).is_none() {
            return Err(MemoryError::UnknownExercise(exercise_id));
        }
        state.proposals.remove(&exercise_id);
        Ok(())
    }

    async fn cancel_assessment(&self, submission_id: SubmissionId) -> Result<(), Self::Error> {
        let mut state = self.state.write().await;
        let submission = state
            .submission_mut(submission_id)
            .ok_or(MemoryError::UnknownSubmission(submission_id))?;

        if submission.is_assessed() {
            return Err(MemoryError::AlreadyAssessed(submission_id));
        }
        submission.result = None;
        event!(Level::DEBUG, %submission_id, "assessment cancelled");
        Ok(())
    }
}
