//! The dashboard workflow.
//!
//! The controller moves through a small state machine:
//!
//! ```text
//! Idle --load/refresh--> Loading --submissions (and optimal set) fetched--> Ready
//! Ready --assess next optimal--> Busy --navigated or nothing found--> Ready
//! Ready --cancel assessment (confirmed)--> Loading --> Ready
//! ```
//!
//! Every mutating operation takes `&mut self`, so a controller has exactly one writer
//! at a time. Views observe the state through [`DashboardController::subscribe_state`].

use crate::{
    DashboardConfig, DashboardError, OptimalIdSet, OptimalSetClient, Partition,
    ResultListEvents, SubmissionStore, Subscription,
};
use mas_core::{
    models::{
        AssessmentRoute, Authority, CONFIRM_CANCEL, Course, CourseId, ExerciseId,
        ModelingExercise, NO_SUBMISSION_FOUND, Submission, SubmissionId, SubmissionQuery,
        UserRef,
    },
    ports::{
        ConfirmationPrompt as _, ExerciseRepository as _, IdentityService as _, Navigator as _,
        Notifier as _, OptimizerService as _, Session, SubmissionRepository as _,
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument as _, Level, event, span};

/// The observable state of a dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardState {
    /// Constructed, nothing loaded yet
    Idle,
    /// Fetching course, exercise, submissions or the optimal set
    Loading,
    /// Partitions are current
    Ready,
    /// Choosing the next optimal submission to assess
    Busy,
}

/// What "assess next optimal" ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessOutcome {
    /// The user was routed to the assessment editor of a submission
    Navigated(AssessmentRoute),
    /// The optimizer had nothing to offer; an informational notice was shown
    NoSubmissionFound,
}

/// What "cancel assessment" ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The assessment was cancelled and the dashboard reloaded
    Cancelled,
    /// The user declined the confirmation; nothing happened
    Declined,
}

/// Coordinates loading, partitioning and distributing the submissions of one modeling
/// exercise.
///
/// The random source `R` decides which optimal submission an assessor is routed to;
/// tests inject a seeded generator to make the choice reproducible.
pub struct DashboardController<S: Session, R = StdRng> {
    session: S,
    config: DashboardConfig,
    rng: R,

    course_id: CourseId,
    exercise_id: ExerciseId,
    current_user: UserRef,

    course: Option<Course>,
    exercise: Option<ModelingExercise>,
    store: SubmissionStore,
    optimal_ids: OptimalIdSet,
    partition: Partition,
    assessed: usize,
    all_submissions_visible: bool,

    state: watch::Sender<DashboardState>,
    token: CancellationToken,
}

impl<S: Session> DashboardController<S, StdRng> {
    /// Create a controller choosing submissions with an OS-seeded generator.
    ///
    /// The current user is resolved once, here; nothing is loaded until
    /// [`load`](Self::load) is called.
    pub async fn new(
        session: S,
        config: DashboardConfig,
        course_id: CourseId,
        exercise_id: ExerciseId,
    ) -> Result<Self, DashboardError> {
        Self::with_rng(session, config, StdRng::from_os_rng(), course_id, exercise_id).await
    }
}

impl<S: Session, R: Rng> DashboardController<S, R> {
    /// Create a controller with an explicit random source
    pub async fn with_rng(
        session: S,
        config: DashboardConfig,
        rng: R,
        course_id: CourseId,
        exercise_id: ExerciseId,
    ) -> Result<Self, DashboardError> {
        let current_user = session
            .identity()
            .current_user()
            .await
            .map_err(DashboardError::boxed(DashboardError::Identity))?;

        let (state, _) = watch::channel(DashboardState::Idle);

        Ok(Self {
            session,
            config,
            rng,
            course_id,
            exercise_id,
            current_user,
            course: None,
            exercise: None,
            store: SubmissionStore::new(),
            optimal_ids: OptimalIdSet::default(),
            partition: Partition::default(),
            assessed: 0,
            all_submissions_visible: false,
            state,
            token: CancellationToken::new(),
        })
    }

    /// The current state
    pub fn state(&self) -> DashboardState {
        *self.state.borrow()
    }

    /// Observe state changes
    pub fn subscribe_state(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    fn transition(&self, next: DashboardState) -> DashboardState {
        let previous = self.state.send_replace(next);
        if previous != next {
            event!(
                Level::DEBUG,
                exercise_id = %self.exercise_id,
                from = ?previous,
                to = ?next,
                "dashboard state"
            );
        }
        previous
    }

    /// The session the controller was built with
    pub fn session(&self) -> &S {
        &self.session
    }

    /// The logged-in assessor
    pub fn current_user(&self) -> &UserRef {
        &self.current_user
    }

    /// Admins and instructors may override assessments of others
    pub fn can_override_assessments(&self) -> bool {
        self.current_user.has_any_authority(&[Authority::Admin, Authority::Instructor])
    }

    /// The course, once loaded
    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// The exercise, once loaded
    pub fn exercise(&self) -> Option<&ModelingExercise> {
        self.exercise.as_ref()
    }

    /// The working set of submitted submissions
    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    /// The optimal ids currently remembered
    pub fn optimal_ids(&self) -> &OptimalIdSet {
        &self.optimal_ids
    }

    /// The current split of the filtered view
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Submissions to offer as optimal, in list order
    pub fn optimal_submissions(&self) -> impl Iterator<Item = &Submission> {
        self.store.resolve(&self.partition.optimal)
    }

    /// All other submissions of the filtered view, in list order
    pub fn other_submissions(&self) -> impl Iterator<Item = &Submission> {
        self.store.resolve(&self.partition.other)
    }

    /// Number of fully assessed submissions as of the last load
    pub fn assessed_count(&self) -> usize {
        self.assessed
    }

    /// Whether the non-optimal submissions have been revealed
    pub fn all_submissions_visible(&self) -> bool {
        self.all_submissions_visible
    }

    /// Reveal the non-optimal submissions, unless the dashboard is busy choosing one
    pub fn make_all_submissions_visible(&mut self) {
        if self.state() != DashboardState::Busy {
            self.all_submissions_visible = true;
        }
    }

    /// Load course, exercise and submissions.
    ///
    /// The course and exercise are fetched concurrently. Failures restore the previous
    /// state and propagate; only the optimal set degrades silently.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let previous = self.transition(DashboardState::Loading);
        match self.load_exercise().await {
            Ok(()) => {
                self.transition(DashboardState::Ready);
                Ok(())
            }
            Err(err) => {
                self.transition(previous);
                Err(err)
            }
        }
    }

    async fn load_exercise(&mut self) -> Result<(), DashboardError> {
        let exercises = self.session.exercises();
        let (course_id, exercise_id) = (self.course_id, self.exercise_id);

        let course = async {
            exercises
                .find_course(course_id)
                .await
                .map_err(DashboardError::boxed(DashboardError::Course))
        };
        let exercise = async {
            exercises
                .find_exercise(exercise_id)
                .await
                .map_err(DashboardError::boxed(DashboardError::Exercise))
        };
        let (course, exercise) = tokio::try_join!(course, exercise)?;

        let exercise = ModelingExercise::try_from(exercise)?;

        // Course and exercise only count as loaded once their submissions are
        let previous = (self.course.replace(course), self.exercise.replace(exercise));
        if let Err(err) = self.fetch_submissions(true).await {
            (self.course, self.exercise) = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Reload everything from the backend, forcing a fresh optimal set
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        if self.exercise.is_none() {
            return self.load().await;
        }
        self.get_submissions(true).await
    }

    /// Reload the submissions of the exercise.
    ///
    /// `force_reload` refetches the optimal set even if the remembered one is not stale.
    pub async fn get_submissions(&mut self, force_reload: bool) -> Result<(), DashboardError> {
        if self.exercise.is_none() {
            return Err(DashboardError::NotLoaded);
        }
        let previous = self.transition(DashboardState::Loading);
        match self.fetch_submissions(force_reload).await {
            Ok(()) => {
                self.transition(DashboardState::Ready);
                Ok(())
            }
            Err(err) => {
                self.transition(previous);
                Err(err)
            }
        }
    }

    async fn fetch_submissions(&mut self, force_reload: bool) -> Result<(), DashboardError> {
        let exercise_id = self.exercise.as_ref().ok_or(DashboardError::NotLoaded)?.id;
        let query = SubmissionQuery {
            submitted_only: self.config.submitted_only,
        };

        let submissions = self
            .session
            .submissions()
            .get_submissions_for_exercise(exercise_id, query)
            .await
            .map_err(DashboardError::boxed(DashboardError::Submissions))?;

        self.store.set_all(submissions);
        self.filter_submissions(force_reload).await?;
        self.assessed = self.store.count_assessed();
        Ok(())
    }

    /// Refetch the optimal set if needed, then re-partition.
    ///
    /// The optimal set is only used when Compass is active for the exercise. It is
    /// refetched when `force_reload` is set or when fewer than
    /// [`staleness_threshold`](DashboardConfig::staleness_threshold) ids are remembered.
    pub async fn filter_submissions(&mut self, force_reload: bool) -> Result<(), DashboardError> {
        let exercise = self.exercise.as_ref().ok_or(DashboardError::NotLoaded)?;

        if exercise.is_compass_active()
            && (force_reload || self.optimal_ids.is_stale(self.config.staleness_threshold))
        {
            let exercise_id = exercise.id;
            self.optimal_ids = OptimalSetClient::new(self.session.optimizer())
                .fetch_or_empty(exercise_id)
                .await;
        }

        self.apply_filter();
        Ok(())
    }

    /// Narrow the filtered view and re-partition
    pub fn update_filtered_submissions(&mut self, predicate: impl Fn(&Submission) -> bool) {
        self.store.set_filter(predicate);
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.partition = self
            .store
            .partition(&self.optimal_ids, self.current_user.id);
    }

    /// Clear the server-side optimality tracking and fetch a fresh optimal set.
    ///
    /// Returns `false` without contacting the server if the diagram type does not
    /// support a reset.
    pub async fn reset_optimality(&mut self) -> Result<bool, DashboardError> {
        let exercise = self.exercise.as_ref().ok_or(DashboardError::NotLoaded)?;

        let reset = OptimalSetClient::new(self.session.optimizer())
            .reset_optimality(exercise)
            .await
            .map_err(DashboardError::boxed(DashboardError::ResetOptimality))?;

        if reset {
            self.filter_submissions(true).await?;
        }
        Ok(reset)
    }

    /// Route the user to a randomly chosen optimal submission.
    ///
    /// If no optimal id is remembered, the optimizer is asked once more. If it still has
    /// nothing (or fails), an informational notice is shown instead of navigating.
    pub async fn assess_next_optimal(&mut self) -> Result<AssessOutcome, DashboardError> {
        let exercise_id = self.exercise.as_ref().ok_or(DashboardError::NotLoaded)?.id;
        self.transition(DashboardState::Busy);

        if self.optimal_ids.is_empty() {
            let ids = OptimalSetClient::new(self.session.optimizer())
                .fetch_or_empty(exercise_id)
                .await;

            if ids.is_empty() {
                self.transition(DashboardState::Ready);
                let notifier = self.session.notifier();
                notifier.clear();
                notifier.info(NO_SUBMISSION_FOUND);
                return Ok(AssessOutcome::NoSubmissionFound);
            }

            self.optimal_ids = ids;
            self.apply_filter();
        }

        let outcome = match self.optimal_ids.choose(&mut self.rng) {
            Some(submission_id) => AssessOutcome::Navigated(self.navigate_to(submission_id)),
            None => AssessOutcome::NoSubmissionFound,
        };
        self.transition(DashboardState::Ready);
        Ok(outcome)
    }

    fn navigate_to(&self, submission_id: SubmissionId) -> AssessmentRoute {
        let route = AssessmentRoute {
            course_id: self.course.as_ref().map_or(self.course_id, |course| course.id),
            exercise_id: self.exercise_id,
            submission_id,
        };
        event!(Level::INFO, %route, "assessing optimal submission");
        self.session.navigator().navigate_to(route.segments());
        route
    }

    /// Cancel a started assessment after the user confirmed it, then reload everything.
    ///
    /// The reload is a full [`refresh`](Self::refresh) rather than a local patch, so the
    /// view reflects the server's assessor state.
    pub async fn cancel_assessment(
        &mut self,
        submission_id: SubmissionId,
    ) -> Result<CancelOutcome, DashboardError> {
        if !self.session.prompt().confirm(CONFIRM_CANCEL).await {
            event!(Level::DEBUG, %submission_id, "cancel assessment declined");
            return Ok(CancelOutcome::Declined);
        }

        self.session
            .optimizer()
            .cancel_assessment(submission_id)
            .await
            .map_err(DashboardError::boxed(DashboardError::CancelAssessment))?;

        self.refresh().await?;
        Ok(CancelOutcome::Cancelled)
    }

    /// A token cancelled when this controller is dropped
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Subscribe to result list modifications for as long as this controller lives
    pub fn subscribe_results(&self, events: &ResultListEvents) -> Subscription {
        events.subscribe(self.cancellation_token())
    }

    /// Reload on every result list modification concerning this exercise, until the
    /// subscription ends.
    pub async fn watch_results(
        &mut self,
        mut subscription: Subscription,
    ) -> Result<(), DashboardError> {
        let span = span!(Level::INFO, "watching result list", exercise_id = %self.exercise_id);
        let exercise_id = self.exercise_id;
        async move {
            while let Some(modified) = subscription.next().await {
                if modified.concerns(exercise_id) {
                    self.refresh().await?;
                }
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

impl<S: Session, R> Drop for DashboardController<S, R> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
