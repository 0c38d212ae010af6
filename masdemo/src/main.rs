use mas_core::models::{CourseId, ExerciseId, Submission, SubmissionId, UserRef};
use mas_dashboard::{AssessOutcome, CancelOutcome, DashboardController};
use mas_memory::MemoryBackend;
use masdemo::{AppConfig, Cli, Commands, impls::DemoSession};
use rand::{SeedableRng as _, rngs::StdRng};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig { dashboard, memory } = AppConfig::load(&cli)?;

    let backend = MemoryBackend::open(&memory).await?;
    let session = DemoSession::new(backend, UserRef::new(cli.user), cli.yes);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut controller = DashboardController::with_rng(
        session,
        dashboard,
        rng,
        CourseId(cli.course),
        ExerciseId(cli.exercise),
    )
    .await?;
    controller.load().await?;

    match cli.command {
        Commands::Show => print_dashboard(&controller),
        Commands::AssessNext => {
            if let AssessOutcome::Navigated(route) = controller.assess_next_optimal().await? {
                println!("assessing submission {}", route.submission_id);
            }
        }
        Commands::Cancel { submission } => {
            match controller.cancel_assessment(SubmissionId(submission)).await? {
                CancelOutcome::Cancelled => print_dashboard(&controller),
                CancelOutcome::Declined => println!("kept assessment of {submission}"),
            }
        }
        Commands::ResetOptimality => {
            if !controller.reset_optimality().await? {
                println!("optimality cannot be reset for this diagram type");
            }
            print_dashboard(&controller);
        }
    }

    Ok(())
}

fn print_dashboard(controller: &DashboardController<DemoSession, StdRng>) {
    if let (Some(course), Some(exercise)) = (controller.course(), controller.exercise()) {
        println!("{} / {}", course.title, exercise.title);
    }
    println!(
        "assessed {} of {} submissions",
        controller.assessed_count(),
        controller.store().len()
    );

    println!("optimal:");
    controller.optimal_submissions().for_each(print_submission);
    println!("other:");
    controller.other_submissions().for_each(print_submission);
}

fn print_submission(submission: &Submission) {
    let assessor = submission
        .result
        .as_ref()
        .and_then(|result| result.assessor_id())
        .map_or_else(|| "-".to_owned(), |id| id.to_string());
    let status = if submission.is_assessed() {
        "assessed"
    } else {
        "open"
    };
    println!("  {:>6}  {status:<8}  assessor {assessor}", submission.id.to_string());
}
