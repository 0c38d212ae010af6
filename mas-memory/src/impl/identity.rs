use mas_core::{models::UserRef, ports::IdentityService};
use std::convert::Infallible;

/// An identity service that always reports the same user.
#[derive(Clone, Debug)]
pub struct StaticIdentity(pub UserRef);

impl IdentityService for StaticIdentity {
    type Error = Infallible;

    async fn current_user(&self) -> Result<UserRef, Self::Error> {
        Ok(self.0.clone())
    }
}
