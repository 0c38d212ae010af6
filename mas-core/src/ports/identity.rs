use crate::models::UserRef;

/// Resolves the account of the logged-in user.
pub trait IdentityService: Send + Sync {
    /// Error type for identity lookups
    type Error: std::error::Error + Send + Sync + 'static;

    /// The currently authenticated user
    fn current_user(&self) -> impl Future<Output = Result<UserRef, Self::Error>> + Send;
}
