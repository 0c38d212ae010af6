use crate::models::{AssessmentResult, ParticipationId, ResultId, SubmissionId, UserRef};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Query options for listing the submissions of an exercise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionQuery {
    /// Ask the server to leave out submissions that were never submitted
    pub submitted_only: bool,
}

impl Default for SubmissionQuery {
    fn default() -> Self {
        Self {
            submitted_only: true,
        }
    }
}

/// A student's participation in an exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// Unique identifier of the participation
    pub id: ParticipationId,
    /// The participating student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<UserRef>,
    /// When the student started working on the exercise
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub initialization_date: Option<OffsetDateTime>,

    /// Back-references to the results of this participation, restored after loading
    #[serde(skip)]
    pub result_ids: Vec<ResultId>,
}

/// One student's work product for an exercise, graded or not.
///
/// The `optimal` flag is derived by the dashboard on every partition pass. It is never
/// sent to or read from the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Unique identifier of the submission
    pub id: SubmissionId,
    /// Only submitted work is eligible for assessment
    #[serde(default)]
    pub submitted: bool,
    /// When the work was handed in
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_date: Option<OffsetDateTime>,
    /// The participation the submission belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation: Option<Participation>,
    /// The current result, if assessment has started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AssessmentResult>,

    /// Derived: part of the optimal set and free for the current user to pick
    #[serde(skip)]
    pub optimal: bool,
}

impl Submission {
    /// A bare submitted submission without participation or result
    pub fn new(id: impl Into<SubmissionId>) -> Self {
        Self {
            id: id.into(),
            submitted: true,
            submission_date: None,
            participation: None,
            result: None,
            optimal: false,
        }
    }

    /// Reconnect the associations the REST payload leaves dangling: the result points back
    /// to this submission and its participation, and the participation lists the result.
    pub fn link_back_references(&mut self) {
        let participation_id = self.participation.as_ref().map(|p| p.id);
        if let Some(result) = self.result.as_mut() {
            result.submission_id = Some(self.id);
            result.participation_id = participation_id;
            if let Some(participation) = self.participation.as_mut() {
                participation.result_ids = result.id.into_iter().collect();
            }
        }
    }

    /// True if the result is complete (see [`AssessmentResult::is_complete`])
    pub fn is_assessed(&self) -> bool {
        self.result.as_ref().is_some_and(AssessmentResult::is_complete)
    }

    /// Time between the start of the participation and the completion of the assessment
    pub fn working_time(&self) -> Option<Duration> {
        let completed = self.result.as_ref()?.completion_date?;
        let started = self.participation.as_ref()?.initialization_date?;
        Some(completed - started)
    }
}
