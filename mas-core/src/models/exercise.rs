use crate::models::{CourseId, ExerciseId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of work an exercise asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    /// Source code, built and tested by a CI server
    Programming,
    /// A UML (or similar) diagram drawn in the modeling editor
    Modeling,
    /// Multiple choice, drag and drop and short answer questions
    Quiz,
    /// Free text answers
    Text,
    /// Arbitrary uploaded files
    FileUpload,
}

/// How submissions of an exercise are graded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentType {
    /// Fully graded by the system
    Automatic,
    /// Graded by tutors, assisted by automatic feedback suggestions
    SemiAutomatic,
    /// Graded by tutors only
    Manual,
}

/// The category of a modeling exercise.
///
/// The diagram type decides whether the server-side model comparison (and with it the
/// optimal submission selection) is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramType {
    #[allow(missing_docs)]
    ClassDiagram,
    #[allow(missing_docs)]
    ObjectDiagram,
    #[allow(missing_docs)]
    ActivityDiagram,
    #[allow(missing_docs)]
    UseCaseDiagram,
    #[allow(missing_docs)]
    CommunicationDiagram,
    #[allow(missing_docs)]
    ComponentDiagram,
    #[allow(missing_docs)]
    DeploymentDiagram,
}

/// An exercise of any type, as returned by the exercise endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique identifier of the exercise
    pub id: ExerciseId,
    /// Discriminates the exercise kind
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Human-readable title
    #[serde(default)]
    pub title: String,
    /// The course the exercise belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    /// How submissions are graded
    pub assessment_type: AssessmentType,
    /// Only present for modeling exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<DiagramType>,
}

/// The exercise handed to the modeling dashboard was of another type.
#[derive(Debug, Error)]
#[error("exercise {exercise_id} is a {found:?} exercise, not a modeling exercise")]
pub struct NotModelingError {
    /// The offending exercise
    pub exercise_id: ExerciseId,
    /// The type it actually has
    pub found: ExerciseType,
}

/// A modeling exercise: an [`Exercise`] whose type has been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelingExercise {
    /// Unique identifier of the exercise
    pub id: ExerciseId,
    /// Human-readable title
    pub title: String,
    /// The course the exercise belongs to
    pub course_id: Option<CourseId>,
    /// How submissions are graded
    pub assessment_type: AssessmentType,
    /// The diagram category, if the server reported one
    pub diagram_type: Option<DiagramType>,
}

impl ModelingExercise {
    /// Whether semantic model comparison ("Compass") is active for this exercise.
    ///
    /// Only semi-automatic class and activity diagram exercises are compared, and only
    /// those have an optimal submission set.
    pub fn is_compass_active(&self) -> bool {
        self.assessment_type == AssessmentType::SemiAutomatic
            && matches!(
                self.diagram_type,
                Some(DiagramType::ClassDiagram | DiagramType::ActivityDiagram)
            )
    }

    /// Whether the server supports resetting the optimality tracking of this exercise
    pub fn supports_optimality_reset(&self) -> bool {
        self.diagram_type == Some(DiagramType::ClassDiagram)
    }
}

impl TryFrom<Exercise> for ModelingExercise {
    type Error = NotModelingError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        if value.exercise_type != ExerciseType::Modeling {
            return Err(NotModelingError {
                exercise_id: value.id,
                found: value.exercise_type,
            });
        }
        Ok(Self {
            id: value.id,
            title: value.title,
            course_id: value.course_id,
            assessment_type: value.assessment_type,
            diagram_type: value.diagram_type,
        })
    }
}
