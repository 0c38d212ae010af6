//! Console implementations of the user interface ports.
//!
//! This module provides the concrete [`Session`] of the demo, combining the in-memory
//! backend with a console that prints navigation and notices.

use mas_core::{
    models::UserRef,
    ports::{ConfirmationPrompt, Navigator, Notifier, Session},
};
use mas_memory::{MemoryBackend, StaticIdentity};
use tracing::{Level, event};

/// A terminal standing in for the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    /// Confirm every prompt without asking
    pub assume_yes: bool,
}

/// The browser path a list of route segments addresses
pub fn route_path(segments: &[String]) -> String {
    segments.join("/")
}

impl Navigator for Console {
    fn navigate_to(&self, segments: Vec<String>) {
        println!("-> {}", route_path(&segments));
    }
}

impl Notifier for Console {
    fn clear(&self) {
        event!(Level::DEBUG, "clearing notices");
    }

    fn info(&self, message_key: &str) {
        println!("[info] {message_key}");
    }
}

impl ConfirmationPrompt for Console {
    async fn confirm(&self, message_key: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("{message_key} [y/N]");
        let answer = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim(), "y" | "Y" | "yes"),
            Ok(Err(error)) => {
                event!(Level::WARN, %error, "failed to read confirmation");
                false
            }
            Err(error) => {
                event!(Level::WARN, %error, "confirmation task failed");
                false
            }
        }
    }
}

/// The demo's session: one backend, one fixed user and the console.
#[derive(Debug, Clone)]
pub struct DemoSession {
    /// Backend serving submissions, exercises and the optimizer
    pub backend: MemoryBackend,
    /// The logged-in tutor
    pub identity: StaticIdentity,
    /// Where navigation, notices and prompts go
    pub console: Console,
}

impl DemoSession {
    /// Create a session for `user` over `backend`
    pub fn new(backend: MemoryBackend, user: UserRef, assume_yes: bool) -> Self {
        Self {
            backend,
            identity: StaticIdentity(user),
            console: Console { assume_yes },
        }
    }
}

impl Session for DemoSession {
    type Submissions = MemoryBackend;
    type Exercises = MemoryBackend;
    type Optimizer = MemoryBackend;
    type Identity = StaticIdentity;
    type Navigator = Console;
    type Notifier = Console;
    type Prompt = Console;

    fn submissions(&self) -> &Self::Submissions {
        &self.backend
    }

    fn exercises(&self) -> &Self::Exercises {
        &self.backend
    }

    fn optimizer(&self) -> &Self::Optimizer {
        &self.backend
    }

    fn identity(&self) -> &Self::Identity {
        &self.identity
    }

    fn navigator(&self) -> &Self::Navigator {
        &self.console
    }

    fn notifier(&self) -> &Self::Notifier {
        &self.console
    }

    fn prompt(&self) -> &Self::Prompt {
        &self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mas_core::models::{AssessmentRoute, CourseId, ExerciseId, SubmissionId};

    #[test]
    fn navigation_prints_the_assessment_path() {
        let route = AssessmentRoute {
            course_id: CourseId(1),
            exercise_id: ExerciseId(2),
            submission_id: SubmissionId(10),
        };
        assert_eq!(
            route_path(&route.segments()),
            "/course-management/1/modeling-exercises/2/submissions/10/assessment"
        );
    }

    #[tokio::test]
    async fn assume_yes_skips_the_prompt() {
        let console = Console { assume_yes: true };
        assert!(console.confirm("modelingAssessmentEditor.messages.confirmCancel").await);
    }
}
