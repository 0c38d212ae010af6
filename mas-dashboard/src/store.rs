//! The working set of submissions of one exercise.

use crate::{Map, OptimalIdSet, is_eligible};
use mas_core::models::{ResultId, Submission, SubmissionId, UserId};

/// The filtered view split into the submissions to offer as optimal and all the others.
///
/// Both sequences preserve the relative order of the filtered view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Optimal and eligible for the current user
    pub optimal: Vec<SubmissionId>,
    /// Everything else in the filtered view
    pub other: Vec<SubmissionId>,
}

impl Partition {
    /// Total number of submissions in the partition
    pub fn len(&self) -> usize {
        self.optimal.len() + self.other.len()
    }

    /// True if the filtered view was empty
    pub fn is_empty(&self) -> bool {
        self.optimal.is_empty() && self.other.is_empty()
    }
}

/// Holds the submitted work of an exercise and derives the dashboard partitions from it.
///
/// The store is always replaced wholesale by [`set_all`](Self::set_all); the only
/// in-place mutation is the derived `optimal` flag written by
/// [`partition`](Self::partition).
#[derive(Clone, Debug, Default)]
pub struct SubmissionStore {
    /// Submitted work keyed by id, in the order the repository delivered it
    submissions: Map<SubmissionId, Submission>,
    /// The caller-selected subset; `None` selects everything
    filtered: Option<Vec<SubmissionId>>,
}

impl SubmissionStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set.
    ///
    /// Submissions that were never submitted are dropped, the back-references between
    /// submission, result and participation are restored and the filtered view is reset
    /// to the full working set. A repeated id replaces the earlier entry in place.
    pub fn set_all(&mut self, submissions: impl IntoIterator<Item = Submission>) {
        self.submissions = submissions
            .into_iter()
            .filter(|submission| submission.submitted)
            .map(|mut submission| {
                submission.link_back_references();
                (submission.id, submission)
            })
            .collect();
        self.filtered = None;
    }

    /// Number of submissions in the working set
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    /// True if the working set is empty
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Iterate the working set in repository order
    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.values()
    }

    /// Look up a submission of the working set
    pub fn get(&self, submission_id: SubmissionId) -> Option<&Submission> {
        self.submissions.get(&submission_id)
    }

    /// Follow a result's back-reference to the submission owning it
    pub fn by_result(&self, result_id: ResultId) -> Option<&Submission> {
        self.iter().find(|submission| {
            submission
                .result
                .as_ref()
                .is_some_and(|result| result.id == Some(result_id))
        })
    }

    /// Number of submissions whose result has both a completion date and a score
    pub fn count_assessed(&self) -> usize {
        self.iter().filter(|submission| submission.is_assessed()).count()
    }

    /// Narrow the filtered view to the submissions matching `predicate`
    pub fn set_filter(&mut self, predicate: impl Fn(&Submission) -> bool) {
        self.filtered = Some(
            self.iter()
                .filter(|submission| predicate(submission))
                .map(|submission| submission.id)
                .collect(),
        );
    }

    /// Widen the filtered view back to the full working set
    pub fn clear_filter(&mut self) {
        self.filtered = None;
    }

    /// Iterate the filtered view in repository order
    pub fn filtered(&self) -> impl Iterator<Item = &Submission> {
        let all = self.filtered.is_none().then(|| self.submissions.values());
        let selected = self
            .filtered
            .iter()
            .flatten()
            .filter_map(|id| self.submissions.get(id));
        all.into_iter().flatten().chain(selected)
    }

    /// Recompute the `optimal` flag and split the filtered view.
    ///
    /// A submission is optimal if the optimizer proposed it and it is eligible for
    /// `current_user` (see [`is_eligible`]). The flag is recomputed for the whole working
    /// set on every call; the split only covers the filtered view.
    pub fn partition(&mut self, optimal_ids: &OptimalIdSet, current_user: UserId) -> Partition {
        for submission in self.submissions.values_mut() {
            submission.optimal =
                optimal_ids.contains(submission.id) && is_eligible(submission, current_user);
        }

        let (optimal, other): (Vec<_>, Vec<_>) =
            self.filtered().partition(|submission| submission.optimal);

        Partition {
            optimal: optimal.into_iter().map(|submission| submission.id).collect(),
            other: other.into_iter().map(|submission| submission.id).collect(),
        }
    }

    /// Resolve ids (e.g. one side of a [`Partition`]) to submissions of the working set
    pub fn resolve<'a>(
        &'a self,
        ids: &'a [SubmissionId],
    ) -> impl Iterator<Item = &'a Submission> + 'a {
        ids.iter().filter_map(|id| self.submissions.get(id))
    }
}
