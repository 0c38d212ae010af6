use crate::models::{Course, CourseId, Exercise, ExerciseId};

/// Repository interface for the course and exercise the dashboard is opened for.
pub trait ExerciseRepository: Send + Sync {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Retrieve a course by id
    fn find_course(
        &self,
        course_id: CourseId,
    ) -> impl Future<Output = Result<Course, Self::Error>> + Send;

    /// Retrieve an exercise of any type by id
    fn find_exercise(
        &self,
        exercise_id: ExerciseId,
    ) -> impl Future<Output = Result<Exercise, Self::Error>> + Send;
}
