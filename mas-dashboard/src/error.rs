use mas_core::models::NotModelingError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The ways a dashboard operation may fail.
///
/// Failures of the optimizer are deliberately absent: the optimal set is an optional
/// enhancement, and fetching it degrades to "no optimal submissions" instead of failing.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The current user could not be resolved
    #[error("failed to resolve the current user: {0}")]
    Identity(#[source] BoxError),
    /// The course could not be loaded
    #[error("failed to load course: {0}")]
    Course(#[source] BoxError),
    /// The exercise could not be loaded
    #[error("failed to load exercise: {0}")]
    Exercise(#[source] BoxError),
    /// The exercise is not a modeling exercise
    #[error(transparent)]
    NotModeling(#[from] NotModelingError),
    /// The submissions could not be loaded
    #[error("failed to load submissions: {0}")]
    Submissions(#[source] BoxError),
    /// The server refused to cancel the assessment
    #[error("failed to cancel assessment: {0}")]
    CancelAssessment(#[source] BoxError),
    /// The server refused to reset the optimality tracking
    #[error("failed to reset optimality: {0}")]
    ResetOptimality(#[source] BoxError),
    /// The operation needs the exercise, but the dashboard has not been loaded yet
    #[error("the dashboard has not been loaded")]
    NotLoaded,
}

impl DashboardError {
    pub(crate) fn boxed<E: std::error::Error + Send + Sync + 'static>(
        variant: fn(BoxError) -> Self,
    ) -> impl FnOnce(E) -> Self {
        move |err| variant(Box::new(err))
    }
}
