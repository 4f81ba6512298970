use crate::UserId;
use serde::{Deserialize, Serialize};

/// Profile of the currently signed-in user.
///
/// The frontend should display `display_name` (if present) or `username`,
/// and treat the presence of a profile as proof of authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

impl UserProfile {
    /// Name to greet the user with.
    pub fn preferred_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}
