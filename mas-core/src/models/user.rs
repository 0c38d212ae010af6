use crate::models::UserId;
use serde::{Deserialize, Serialize};

/// A role granted to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// Full administrative access
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Instructor of at least one course
    #[serde(rename = "ROLE_INSTRUCTOR")]
    Instructor,
    /// Teaching assistant (tutor)
    #[serde(rename = "ROLE_TA")]
    TeachingAssistant,
    /// Regular student account
    #[serde(rename = "ROLE_USER")]
    User,
}

/// A reference to a user as it is embedded in other payloads.
///
/// Only the id is authoritative; the remaining fields are informational and may be
/// absent depending on the endpoint that produced the payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    /// Unique identifier of the user
    pub id: UserId,
    /// Login name of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Roles held by the user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorities: Vec<Authority>,
}

impl UserRef {
    /// A bare reference carrying only the id
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            login: None,
            authorities: Vec::new(),
        }
    }

    /// True if the user holds any of the given authorities
    pub fn has_any_authority(&self, authorities: &[Authority]) -> bool {
        self.authorities.iter().any(|a| authorities.contains(a))
    }
}
