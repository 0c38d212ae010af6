use crate::models::{CourseId, ExerciseId, SubmissionId};

/// The assessment editor view of a single modeling submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssessmentRoute {
    /// Course owning the exercise
    pub course_id: CourseId,
    /// The modeling exercise
    pub exercise_id: ExerciseId,
    /// The submission to assess
    pub submission_id: SubmissionId,
}

impl AssessmentRoute {
    /// The route as path segments, in the form routers accept them
    pub fn segments(&self) -> Vec<String> {
        vec![
            "/course-management".to_owned(),
            self.course_id.to_string(),
            "modeling-exercises".to_owned(),
            self.exercise_id.to_string(),
            "submissions".to_owned(),
            self.submission_id.to_string(),
            "assessment".to_owned(),
        ]
    }
}

impl std::fmt::Display for AssessmentRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "/course-management/{}/modeling-exercises/{}/submissions/{}/assessment",
            self.course_id, self.exercise_id, self.submission_id
        )
    }
}
