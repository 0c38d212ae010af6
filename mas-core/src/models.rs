mod course;
mod event;
mod exercise;
mod ids;
mod result;
mod route;
mod submission;
mod user;

pub use course::Course;
pub use event::ResultListModified;
pub use exercise::{
    AssessmentType, DiagramType, Exercise, ExerciseType, ModelingExercise, NotModelingError,
};
pub use ids::{CourseId, ExerciseId, ParticipationId, ResultId, SubmissionId, UserId};
pub use result::AssessmentResult;
pub use route::AssessmentRoute;
pub use submission::{Participation, Submission, SubmissionQuery};
pub use user::{Authority, UserRef};

/// Translation key of the notice shown when no optimal submission is left to assess.
pub const NO_SUBMISSION_FOUND: &str = "assessmentDashboard.noSubmissionFound";

/// Translation key of the question asked before an assessment is cancelled.
pub const CONFIRM_CANCEL: &str = "modelingAssessmentEditor.messages.confirmCancel";
