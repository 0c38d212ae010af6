use crate::models::{ExerciseId, Submission, SubmissionQuery};

/// Repository interface for listing the submissions of an exercise.
///
/// Implementations return the payload as the backend delivers it. In particular the
/// back-references between submission, result and participation are not expected to be
/// set, and the `submitted_only` flag is a request to the server, not a guarantee: the
/// dashboard filters again on its side.
pub trait SubmissionRepository: Send + Sync {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// List the submissions of a modeling exercise, together with their latest result
    fn get_submissions_for_exercise(
        &self,
        exercise_id: ExerciseId,
        query: SubmissionQuery,
    ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send;
}
