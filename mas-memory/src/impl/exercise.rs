use crate::{MemoryBackend, MemoryError};
use mas_core::{
    models::{Course, CourseId, Exercise, ExerciseId},
    ports::ExerciseRepository,
};

impl ExerciseRepository for MemoryBackend {
    type Error = MemoryError;

    async fn find_course(&self, course_id: CourseId) -> Result<Course, Self::Error> {
        let state = self.state.read().await;
        state
            .fixture
            .courses
            .iter()
            .find(|course| course.id == course_id)
            .cloned()
            .ok_or(MemoryError::UnknownCourse(course_id))
    }

    async fn find_exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, Self::Error> {
        let state = self.state.read().await;
        state
            .exercise(exercise_id)
            .map(|entry| entry.exercise.clone())
            .ok_or(MemoryError::UnknownExercise(exercise_id))
    }
}
