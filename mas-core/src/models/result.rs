use crate::models::{ParticipationId, ResultId, SubmissionId, UserId, UserRef};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The (possibly partial) assessment of a submission.
///
/// A result exists as soon as someone starts assessing, or when the server attaches an
/// automatic partial result. It only counts as assessed once it has both a completion
/// date and a score.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Unique identifier of the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResultId>,
    /// The user currently (or finally) assessing the submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessor: Option<UserRef>,
    /// Set once the assessment has been submitted
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_date: Option<OffsetDateTime>,
    /// The achieved score in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Back-reference to the owning submission, restored after loading
    #[serde(skip)]
    pub submission_id: Option<SubmissionId>,
    /// Back-reference to the owning participation, restored after loading
    #[serde(skip)]
    pub participation_id: Option<ParticipationId>,
}

impl AssessmentResult {
    /// The id of the assessor, if anyone has started assessing
    pub fn assessor_id(&self) -> Option<UserId> {
        self.assessor.as_ref().map(|assessor| assessor.id)
    }

    /// True once both a completion date and a score are present
    pub fn is_complete(&self) -> bool {
        self.completion_date.is_some() && self.score.is_some()
    }
}
