use crate::models::ExerciseId;
use serde::{Deserialize, Serialize};

/// Notification that the result list of an exercise changed somewhere else in the application
/// (an assessment was submitted, overridden or cancelled).
///
/// An event without an exercise concerns every listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultListModified {
    /// The exercise whose results changed, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<ExerciseId>,
}

impl ResultListModified {
    /// An event scoped to a single exercise
    pub fn for_exercise(exercise_id: ExerciseId) -> Self {
        Self {
            exercise_id: Some(exercise_id),
        }
    }

    /// True if a listener for `exercise_id` should react to this event
    pub fn concerns(&self, exercise_id: ExerciseId) -> bool {
        self.exercise_id.is_none_or(|id| id == exercise_id)
    }
}
