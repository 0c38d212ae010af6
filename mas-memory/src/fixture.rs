//! The seed data format of the in-memory backend.

use mas_core::models::{Course, Exercise, Submission};
use serde::{Deserialize, Serialize};

/// Courses, exercises and their submissions, as loaded from a JSON file.
///
/// ```json
/// {
///   "courses": [{ "id": 1, "title": "Software Engineering" }],
///   "exercises": [{
///     "id": 2, "type": "modeling", "courseId": 1,
///     "assessmentType": "SEMI_AUTOMATIC", "diagramType": "ClassDiagram",
///     "submissions": [{ "id": 10, "submitted": true }]
///   }]
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Fixture {
    /// All known courses
    #[serde(default)]
    pub courses: Vec<Course>,
    /// All known exercises with their submissions
    #[serde(default)]
    pub exercises: Vec<ExerciseFixture>,
}

/// An exercise together with the submissions made for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseFixture {
    /// The exercise itself
    #[serde(flatten)]
    pub exercise: Exercise,
    /// Its submissions, submitted or not
    #[serde(default)]
    pub submissions: Vec<Submission>,
}
