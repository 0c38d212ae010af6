use super::{
    ConfirmationPrompt, ExerciseRepository, IdentityService, Navigator, Notifier,
    OptimizerService, SubmissionRepository,
};

/// The collaborators of one dashboard session, injected as a unit.
///
/// A session replaces process-wide singletons (cached current user, global router,
/// global alert service): everything the dashboard touches is reachable from here, and
/// its lifetime is the lifetime of the controller owning it.
///
/// A single type may implement several of the ports and return itself from multiple
/// accessors.
pub trait Session: Send + Sync {
    /// Source of submissions
    type Submissions: SubmissionRepository;
    /// Source of courses and exercises
    type Exercises: ExerciseRepository;
    /// The server-side optimizer
    type Optimizer: OptimizerService;
    /// Resolves the logged-in user
    type Identity: IdentityService;
    /// Routes to other views
    type Navigator: Navigator;
    /// Shows notices
    type Notifier: Notifier;
    /// Asks for confirmation
    type Prompt: ConfirmationPrompt;

    /// Access the submission repository
    fn submissions(&self) -> &Self::Submissions;

    /// Access the course and exercise repository
    fn exercises(&self) -> &Self::Exercises;

    /// Access the optimizer
    fn optimizer(&self) -> &Self::Optimizer;

    /// Access the identity service
    fn identity(&self) -> &Self::Identity;

    /// Access the navigator
    fn navigator(&self) -> &Self::Navigator;

    /// Access the notifier
    fn notifier(&self) -> &Self::Notifier;

    /// Access the confirmation prompt
    fn prompt(&self) -> &Self::Prompt;
}
