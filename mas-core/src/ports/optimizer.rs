use crate::models::{ExerciseId, SubmissionId};

/// Interface to the server-side assessment optimizer.
///
/// The optimizer compares the submitted models of an exercise and proposes the
/// submissions whose assessment yields the most reusable feedback. The comparison itself
/// is entirely server-side; clients only consume the proposed ids.
pub trait OptimizerService: Send + Sync {
    /// Error type for optimizer failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Request the next optimal submissions of an exercise.
    ///
    /// # Returns
    ///
    /// An ordered sequence of submission ids. An empty sequence means that no optimal
    /// submission is currently available.
    fn get_optimal_submission_ids(
        &self,
        exercise_id: ExerciseId,
    ) -> impl Future<Output = Result<Vec<SubmissionId>, Self::Error>> + Send;

    /// Clear the server-side optimality tracking of an exercise.
    ///
    /// Only meaningful for diagram types that support it; callers are expected to check
    /// [`ModelingExercise::supports_optimality_reset`](crate::models::ModelingExercise::supports_optimality_reset)
    /// first.
    fn reset_optimality(
        &self,
        exercise_id: ExerciseId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Cancel a started assessment, releasing the submission for other assessors
    fn cancel_assessment(
        &self,
        submission_id: SubmissionId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
