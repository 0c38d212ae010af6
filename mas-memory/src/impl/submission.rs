use crate::{MemoryBackend, MemoryError};
use mas_core::{
    models::{ExerciseId, Submission, SubmissionQuery},
    ports::SubmissionRepository,
};

impl SubmissionRepository for MemoryBackend {
    type Error = MemoryError;

    async fn get_submissions_for_exercise(
        &self,
        exercise_id: ExerciseId,
        query: SubmissionQuery,
    ) -> Result<Vec<Submission>, Self::Error> {
        let state = self.state.read().await;
        let entry = state
            .exercise(exercise_id)
            .ok_or(MemoryError::UnknownExercise(exercise_id))?;

        Ok(entry
            .submissions
            .iter()
            .filter(|submission| submission.submitted || !query.submitted_only)
            .cloned()
            .collect())
    }
}
