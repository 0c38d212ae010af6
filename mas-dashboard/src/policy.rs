//! Who may be routed to which submission.
//!
//! Two assessors must never be sent to the same submission at the same time. The
//! server records the assessor on the result as soon as someone opens the assessment
//! editor, so a submission is only offered to the current user if nobody has started
//! assessing it, or if the current user is the one who started.

use mas_core::models::{Submission, UserId};

/// True if `submission` may be offered to `current_user` as an optimal submission
pub fn is_eligible(submission: &Submission, current_user: UserId) -> bool {
    match submission.result.as_ref().and_then(|result| result.assessor_id()) {
        None => true,
        Some(assessor) => assessor == current_user,
    }
}

/// The eligibility rule bound to the user it is evaluated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssessmentLockPolicy {
    current_user: UserId,
}

impl AssessmentLockPolicy {
    /// Create the policy for the logged-in assessor
    pub fn new(current_user: UserId) -> Self {
        Self { current_user }
    }

    /// The assessor the policy decides for
    pub fn current_user(&self) -> UserId {
        self.current_user
    }

    /// See [`is_eligible`]
    pub fn is_eligible(&self, submission: &Submission) -> bool {
        is_eligible(submission, self.current_user)
    }
}
