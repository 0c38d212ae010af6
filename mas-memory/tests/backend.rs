mod common;

use common::{COURSE, EXERCISE, OTHER_TUTOR, backend, fixture};
use mas_core::{
    models::{CourseId, ExerciseId, SubmissionId, SubmissionQuery, UserRef},
    ports::{ExerciseRepository, OptimizerService, SubmissionRepository},
};
use mas_memory::{MemoryBackend, MemoryError, config::MemoryConfig};
use rstest::rstest;
use time::OffsetDateTime;

fn ids(ids: impl IntoIterator<Item = u64>) -> Vec<SubmissionId> {
    ids.into_iter().map(SubmissionId).collect()
}

#[tokio::test]
async fn finds_courses_and_exercises() -> anyhow::Result<()> {
    let db = backend(10);

    assert_eq!(db.find_course(COURSE).await?.title, "Software Engineering");
    assert_eq!(db.find_exercise(EXERCISE).await?.id, EXERCISE);

    assert!(matches!(
        db.find_course(CourseId(99)).await,
        Err(MemoryError::UnknownCourse(CourseId(99)))
    ));
    assert!(matches!(
        db.find_exercise(ExerciseId(99)).await,
        Err(MemoryError::UnknownExercise(ExerciseId(99)))
    ));
    Ok(())
}

#[rstest]
#[case::submitted_only(true, 9)]
#[case::including_drafts(false, 10)]
#[tokio::test]
async fn lists_submissions(
    #[case] submitted_only: bool,
    #[case] expected: usize,
) -> anyhow::Result<()> {
    let db = backend(10);
    let submissions = db
        .get_submissions_for_exercise(EXERCISE, SubmissionQuery { submitted_only })
        .await?;
    assert_eq!(submissions.len(), expected);
    Ok(())
}

#[tokio::test]
async fn proposes_open_submissions_in_id_order() -> anyhow::Result<()> {
    let db = backend(4);
    db.start_assessment(SubmissionId(10), UserRef::new(OTHER_TUTOR))
        .await?;
    db.complete_assessment(SubmissionId(11), 0.0, OffsetDateTime::now_utc())
        .await?;

    let proposal = db.get_optimal_submission_ids(EXERCISE).await?;
    assert_eq!(proposal, ids([12, 13, 14, 16]));
    Ok(())
}

#[tokio::test]
async fn proposals_stay_stable_until_reset() -> anyhow::Result<()> {
    let db = backend(3);
    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([10, 11, 12]));

    // a proposed submission gets picked up by someone else
    db.start_assessment(SubmissionId(11), UserRef::new(OTHER_TUTOR))
        .await?;
    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([10, 12]));

    db.reset_optimality(EXERCISE).await?;
    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([10, 12, 13]));
    Ok(())
}

#[tokio::test]
async fn exhausted_proposals_are_replenished() -> anyhow::Result<()> {
    let db = backend(2);
    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([10, 11]));

    let now = OffsetDateTime::now_utc();
    db.complete_assessment(SubmissionId(10), 50.0, now).await?;
    db.complete_assessment(SubmissionId(11), 75.0, now).await?;

    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([12, 13]));
    Ok(())
}

#[tokio::test]
async fn offline_optimizer_fails() -> anyhow::Result<()> {
    let db = backend(10);
    db.set_optimizer_online(false);

    assert!(matches!(
        db.get_optimal_submission_ids(EXERCISE).await,
        Err(MemoryError::OptimizerUnavailable)
    ));
    assert!(matches!(
        db.reset_optimality(EXERCISE).await,
        Err(MemoryError::OptimizerUnavailable)
    ));

    db.set_optimizer_online(true);
    assert!(!db.get_optimal_submission_ids(EXERCISE).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn cancel_releases_started_assessments_only() -> anyhow::Result<()> {
    let db = backend(10);
    db.start_assessment(SubmissionId(12), UserRef::new(OTHER_TUTOR))
        .await?;
    db.cancel_assessment(SubmissionId(12)).await?;

    let submissions = db
        .get_submissions_for_exercise(EXERCISE, SubmissionQuery::default())
        .await?;
    let released = submissions.iter().find(|s| s.id == SubmissionId(12));
    assert!(released.is_some_and(|s| s.result.is_none()));

    db.complete_assessment(SubmissionId(13), 100.0, OffsetDateTime::now_utc())
        .await?;
    assert!(matches!(
        db.cancel_assessment(SubmissionId(13)).await,
        Err(MemoryError::AlreadyAssessed(SubmissionId(13)))
    ));
    assert!(matches!(
        db.cancel_assessment(SubmissionId(99)).await,
        Err(MemoryError::UnknownSubmission(SubmissionId(99)))
    ));
    Ok(())
}

#[tokio::test]
async fn opens_fixture_files() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("mas-memory-{}.json", std::process::id()));
    tokio::fs::write(&path, serde_json::to_vec(&fixture())?).await?;

    let config = MemoryConfig {
        fixture_path: Some(path.clone()),
        ..Default::default()
    };
    let db = MemoryBackend::open(&config).await;
    tokio::fs::remove_file(&path).await?;

    let submissions = db?
        .get_submissions_for_exercise(EXERCISE, SubmissionQuery::default())
        .await?;
    assert_eq!(submissions.len(), 9);
    Ok(())
}

#[tokio::test]
async fn parses_the_documented_fixture_format() -> anyhow::Result<()> {
    let raw = r#"{
        "courses": [{ "id": 1, "title": "Software Engineering" }],
        "exercises": [{
            "id": 2, "type": "modeling", "courseId": 1,
            "assessmentType": "SEMI_AUTOMATIC", "diagramType": "ClassDiagram",
            "submissions": [
                { "id": 10, "submitted": true },
                { "id": 11, "submitted": true, "result": { "assessor": { "id": 12 } } }
            ]
        }]
    }"#;
    let db = MemoryBackend::from_fixture(serde_json::from_str(raw)?, &MemoryConfig::default());

    assert_eq!(db.get_optimal_submission_ids(EXERCISE).await?, ids([10]));
    Ok(())
}

#[tokio::test]
async fn missing_fixture_file_is_an_io_error() {
    let config = MemoryConfig {
        fixture_path: Some(std::env::temp_dir().join("mas-memory-does-not-exist.json")),
        ..Default::default()
    };
    assert!(matches!(
        MemoryBackend::open(&config).await,
        Err(MemoryError::Io(_))
    ));
}
