//! Signed-in investor identity.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Identity of the signed-in investor.
///
/// Persisted verbatim as `{"name", "email", "id"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
    pub id: UserId,
}

impl UserSession {
    pub fn new(name: impl Into<String>, email: impl Into<String>, id: UserId) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            id,
        }
    }

    /// Account used by the "demo login" shortcut.
    pub fn demo() -> Self {
        Self::new("Demo User", "demo@example.com", UserId::new(1))
    }

    /// Local sign-in without credentials checking; a blank email falls back
    /// to the sample account address.
    pub fn local(email: Option<&str>) -> Self {
        let email = email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .unwrap_or("john@example.com");
        Self::new("John Doe", email, UserId::new(1))
    }

    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_json_uses_flat_shape() {
        let json = serde_json::to_value(UserSession::demo()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Demo User", "email": "demo@example.com", "id": 1})
        );
    }

    #[test]
    fn local_sign_in_falls_back_to_sample_email() {
        assert_eq!(UserSession::local(None).email, "john@example.com");
        assert_eq!(UserSession::local(Some("  ")).email, "john@example.com");
        assert_eq!(UserSession::local(Some("a@b.c")).email, "a@b.c");
    }

    #[test]
    fn first_name_takes_leading_word() {
        assert_eq!(UserSession::demo().first_name(), "Demo");
    }
}
