#![allow(dead_code)]

use mas_core::{
    models::{
        AssessmentResult, AssessmentType, Course, CourseId, DiagramType, Exercise, ExerciseId,
        ExerciseType, Submission, SubmissionId, SubmissionQuery, UserRef,
    },
    ports::{
        ConfirmationPrompt, ExerciseRepository, IdentityService, Navigator, Notifier,
        OptimizerService, Session, SubmissionRepository,
    },
};
use mas_dashboard::{DashboardConfig, DashboardController, DashboardError, DashboardState};
use rand::{SeedableRng, rngs::StdRng};
use std::{collections::VecDeque, sync::Mutex};
use thiserror::Error;
use tokio::sync::watch;

pub const COURSE: CourseId = CourseId(1);
pub const EXERCISE: ExerciseId = ExerciseId(2);

#[derive(Debug, Error)]
#[error("mock backend failure")]
pub struct MockError;

/// Everything the dashboard did to its collaborators
#[derive(Debug, Default)]
pub struct Calls {
    pub submission_fetches: usize,
    pub optimal_fetches: usize,
    pub resets: usize,
    pub cancels: Vec<SubmissionId>,
    pub navigations: Vec<Vec<String>>,
    pub clears: usize,
    pub notices: Vec<String>,
    pub prompts: Vec<String>,
    /// The dashboard state observed whenever the optimizer was asked for ids
    pub states_at_optimal_fetch: Vec<DashboardState>,
}

pub struct MockSession {
    pub user: Option<UserRef>,
    pub exercise: Exercise,
    pub submissions: Mutex<Option<Vec<Submission>>>,
    /// Scripted optimizer answers, consumed front to back; `None` is a failure
    pub optimal_script: Mutex<VecDeque<Option<Vec<u64>>>>,
    /// Answer once the script is exhausted; `None` is a failure
    pub optimal_fallback: Mutex<Option<Vec<u64>>>,
    pub confirm: bool,
    pub state_observer: Mutex<Option<watch::Receiver<DashboardState>>>,
    pub calls: Mutex<Calls>,
}

impl MockSession {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            user: Some(UserRef::new(9)),
            exercise: modeling_exercise(AssessmentType::SemiAutomatic, DiagramType::ClassDiagram),
            submissions: Mutex::new(Some(submissions)),
            optimal_script: Mutex::new(VecDeque::new()),
            optimal_fallback: Mutex::new(Some(Vec::new())),
            confirm: true,
            state_observer: Mutex::new(None),
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercise = exercise;
        self
    }

    pub fn with_user(mut self, user: Option<UserRef>) -> Self {
        self.user = user;
        self
    }

    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Queue optimizer answers; `None` entries fail
    pub fn with_optimal_script(self, script: impl IntoIterator<Item = Option<Vec<u64>>>) -> Self {
        self.optimal_script.lock().unwrap().extend(script);
        self
    }

    pub fn with_optimal_fallback(self, fallback: Option<Vec<u64>>) -> Self {
        *self.optimal_fallback.lock().unwrap() = fallback;
        self
    }

    pub fn set_submissions(&self, submissions: Option<Vec<Submission>>) {
        *self.submissions.lock().unwrap() = submissions;
    }

    pub fn observe_state(&self, receiver: watch::Receiver<DashboardState>) {
        *self.state_observer.lock().unwrap() = Some(receiver);
    }

    pub fn calls<T>(&self, f: impl FnOnce(&Calls) -> T) -> T {
        f(&self.calls.lock().unwrap())
    }
}

impl SubmissionRepository for MockSession {
    type Error = MockError;

    async fn get_submissions_for_exercise(
        &self,
        _exercise_id: ExerciseId,
        _query: SubmissionQuery,
    ) -> Result<Vec<Submission>, MockError> {
        self.calls.lock().unwrap().submission_fetches += 1;
        self.submissions.lock().unwrap().clone().ok_or(MockError)
    }
}

impl ExerciseRepository for MockSession {
    type Error = MockError;

    async fn find_course(&self, course_id: CourseId) -> Result<Course, MockError> {
        Ok(Course {
            id: course_id,
            title: "Software Engineering".into(),
            short_name: Some("se".into()),
        })
    }

    async fn find_exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, MockError> {
        if exercise_id == self.exercise.id {
            Ok(self.exercise.clone())
        } else {
            Err(MockError)
        }
    }
}

impl OptimizerService for MockSession {
    type Error = MockError;

    async fn get_optimal_submission_ids(
        &self,
        _exercise_id: ExerciseId,
    ) -> Result<Vec<SubmissionId>, MockError> {
        let state = self
            .state_observer
            .lock()
            .unwrap()
            .as_ref()
            .map(|receiver| *receiver.borrow());

        let mut calls = self.calls.lock().unwrap();
        calls.optimal_fetches += 1;
        calls.states_at_optimal_fetch.extend(state);

        let answer = match self.optimal_script.lock().unwrap().pop_front() {
            Some(scripted) => scripted,
            None => self.optimal_fallback.lock().unwrap().clone(),
        };
        answer
            .map(|ids| ids.into_iter().map(SubmissionId).collect())
            .ok_or(MockError)
    }

    async fn reset_optimality(&self, _exercise_id: ExerciseId) -> Result<(), MockError> {
        self.calls.lock().unwrap().resets += 1;
        Ok(())
    }

    async fn cancel_assessment(&self, submission_id: SubmissionId) -> Result<(), MockError> {
        self.calls.lock().unwrap().cancels.push(submission_id);
        Ok(())
    }
}

impl IdentityService for MockSession {
    type Error = MockError;

    async fn current_user(&self) -> Result<UserRef, MockError> {
        self.user.clone().ok_or(MockError)
    }
}

impl Navigator for MockSession {
    fn navigate_to(&self, segments: Vec<String>) {
        self.calls.lock().unwrap().navigations.push(segments);
    }
}

impl Notifier for MockSession {
    fn clear(&self) {
        self.calls.lock().unwrap().clears += 1;
    }

    fn info(&self, message_key: &str) {
        self.calls.lock().unwrap().notices.push(message_key.to_owned());
    }
}

impl ConfirmationPrompt for MockSession {
    async fn confirm(&self, message_key: &str) -> bool {
        self.calls.lock().unwrap().prompts.push(message_key.to_owned());
        self.confirm
    }
}

impl Session for MockSession {
    type Submissions = Self;
    type Exercises = Self;
    type Optimizer = Self;
    type Identity = Self;
    type Navigator = Self;
    type Notifier = Self;
    type Prompt = Self;

    fn submissions(&self) -> &Self {
        self
    }

    fn exercises(&self) -> &Self {
        self
    }

    fn optimizer(&self) -> &Self {
        self
    }

    fn identity(&self) -> &Self {
        self
    }

    fn navigator(&self) -> &Self {
        self
    }

    fn notifier(&self) -> &Self {
        self
    }

    fn prompt(&self) -> &Self {
        self
    }
}

pub fn modeling_exercise(assessment_type: AssessmentType, diagram_type: DiagramType) -> Exercise {
    Exercise {
        id: EXERCISE,
        exercise_type: ExerciseType::Modeling,
        title: "Library system".into(),
        course_id: Some(COURSE),
        assessment_type,
        diagram_type: Some(diagram_type),
    }
}

pub fn submission(id: u64, submitted: bool, assessor: Option<u64>) -> Submission {
    let mut submission = Submission::new(id);
    submission.submitted = submitted;
    submission.result = assessor.map(|assessor| AssessmentResult {
        assessor: Some(UserRef::new(assessor)),
        ..Default::default()
    });
    submission
}

pub fn ids(ids: impl IntoIterator<Item = u64>) -> Vec<SubmissionId> {
    ids.into_iter().map(SubmissionId).collect()
}

/// A controller over `session` with a fixed seed, not loaded yet
pub async fn unloaded(
    session: MockSession,
) -> Result<DashboardController<MockSession, StdRng>, DashboardError> {
    DashboardController::with_rng(
        session,
        DashboardConfig::default(),
        StdRng::seed_from_u64(42),
        COURSE,
        EXERCISE,
    )
    .await
}

/// A controller over `session` with a fixed seed, loaded and observed
pub async fn loaded(session: MockSession) -> DashboardController<MockSession, StdRng> {
    let mut controller = unloaded(session).await.expect("identity resolves");
    controller
        .session()
        .observe_state(controller.subscribe_state());
    controller.load().await.expect("dashboard loads");
    controller
}
