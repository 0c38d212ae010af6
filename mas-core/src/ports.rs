mod exercise;
mod identity;
mod interaction;
mod optimizer;
mod session;
mod submission;

pub use exercise::ExerciseRepository;
pub use identity::IdentityService;
pub use interaction::{ConfirmationPrompt, Navigator, Notifier};
pub use optimizer::OptimizerService;
pub use session::Session;
pub use submission::SubmissionRepository;
