//! The account profile entity.

use serde::{Deserialize, Serialize};

/// A user profile as bound to the profile form.
///
/// The demo store has a single hard-coded user and never persists edits;
/// a submitted form only shapes the response it is echoed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Path to the avatar image; empty means "render the initial".
    pub avatar: String,
}

impl UserProfile {
    /// First character of the name, used when no avatar image is set.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_first_char() {
        let profile = UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            avatar: String::new(),
        };
        assert_eq!(profile.initial(), Some('J'));
    }

    #[test]
    fn test_initial_empty_name() {
        let profile = UserProfile {
            name: String::new(),
            email: String::new(),
            avatar: String::new(),
        };
        assert_eq!(profile.initial(), None);
    }
}
