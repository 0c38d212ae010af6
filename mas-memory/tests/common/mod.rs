#![allow(dead_code)]

use mas_core::{
    models::{
        AssessmentType, Course, CourseId, DiagramType, Exercise, ExerciseId, ExerciseType,
        Submission, UserRef,
    },
    ports::{ConfirmationPrompt, Navigator, Notifier, Session},
};
use mas_dashboard::{DashboardConfig, DashboardController};
use mas_memory::{
    MemoryBackend, StaticIdentity,
    config::MemoryConfig,
    fixture::{ExerciseFixture, Fixture},
};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Mutex;

pub const COURSE: CourseId = CourseId(1);
pub const EXERCISE: ExerciseId = ExerciseId(2);
pub const TUTOR: u64 = 9;
pub const OTHER_TUTOR: u64 = 12;

/// Records what the dashboard showed to the user
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub navigations: Mutex<Vec<Vec<String>>>,
    pub notices: Mutex<Vec<String>>,
    pub decline: bool,
}

impl Navigator for RecordingUi {
    fn navigate_to(&self, segments: Vec<String>) {
        self.navigations.lock().unwrap().push(segments);
    }
}

impl Notifier for RecordingUi {
    fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }

    fn info(&self, message_key: &str) {
        self.notices.lock().unwrap().push(message_key.to_owned());
    }
}

impl ConfirmationPrompt for RecordingUi {
    async fn confirm(&self, _message_key: &str) -> bool {
        !self.decline
    }
}

pub struct TestSession {
    pub backend: MemoryBackend,
    pub identity: StaticIdentity,
    pub ui: RecordingUi,
}

impl Session for TestSession {
    type Submissions = MemoryBackend;
    type Exercises = MemoryBackend;
    type Optimizer = MemoryBackend;
    type Identity = StaticIdentity;
    type Navigator = RecordingUi;
    type Notifier = RecordingUi;
    type Prompt = RecordingUi;

    fn submissions(&self) -> &MemoryBackend {
        &self.backend
    }

    fn exercises(&self) -> &MemoryBackend {
        &self.backend
    }

    fn optimizer(&self) -> &MemoryBackend {
        &self.backend
    }

    fn identity(&self) -> &StaticIdentity {
        &self.identity
    }

    fn navigator(&self) -> &RecordingUi {
        &self.ui
    }

    fn notifier(&self) -> &RecordingUi {
        &self.ui
    }

    fn prompt(&self) -> &RecordingUi {
        &self.ui
    }
}

pub fn exercise(id: ExerciseId, diagram_type: DiagramType) -> Exercise {
    Exercise {
        id,
        exercise_type: ExerciseType::Modeling,
        title: format!("Exercise {id}"),
        course_id: Some(COURSE),
        assessment_type: AssessmentType::SemiAutomatic,
        diagram_type: Some(diagram_type),
    }
}

/// One course with one class diagram exercise and submissions 10..20, of which 15 is a draft
pub fn fixture() -> Fixture {
    let submissions = (10..20)
        .map(|id| {
            let mut submission = Submission::new(id);
            submission.submitted = id != 15;
            submission
        })
        .collect();

    Fixture {
        courses: vec![Course {
            id: COURSE,
            title: "Software Engineering".into(),
            short_name: Some("se".into()),
        }],
        exercises: vec![ExerciseFixture {
            exercise: exercise(EXERCISE, DiagramType::ClassDiagram),
            submissions,
        }],
    }
}

pub fn backend(batch_size: usize) -> MemoryBackend {
    MemoryBackend::from_fixture(
        fixture(),
        &MemoryConfig {
            fixture_path: None,
            optimal_batch_size: batch_size,
        },
    )
}

pub async fn dashboard(
    backend: MemoryBackend,
    ui: RecordingUi,
) -> anyhow::Result<DashboardController<TestSession, StdRng>> {
    let session = TestSession {
        backend,
        identity: StaticIdentity(UserRef::new(TUTOR)),
        ui,
    };
    let mut controller = DashboardController::with_rng(
        session,
        DashboardConfig::default(),
        StdRng::seed_from_u64(7),
        COURSE,
        EXERCISE,
    )
    .await?;
    controller.load().await?;
    Ok(controller)
}
