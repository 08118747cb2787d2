//! Profile page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use eshop_core::profile::UserProfile;

use crate::filters;
use crate::state::AppState;

use super::PLACEHOLDER_IMAGE;

/// The demo account holder.
fn demo_user() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        avatar: PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Profile form data.
///
/// The picture input is not bound to a field; browsers may still submit
/// it and the extra field is ignored.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdateForm {
    pub name: String,
    pub email: String,
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/show.html")]
pub struct ProfileShowTemplate {
    pub show_admin_link: bool,
    pub name: String,
    pub email: String,
    pub avatar: String,
    /// First letter of the name, shown when there is no avatar image.
    pub initial: String,
}

impl From<UserProfile> for ProfileShowTemplate {
    fn from(user: UserProfile) -> Self {
        let initial = user.initial().map(String::from).unwrap_or_default();
        Self {
            show_admin_link: false,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            initial,
        }
    }
}

/// Display the profile page.
#[instrument(skip(_state))]
pub async fn show(State(_state): State<AppState>) -> impl IntoResponse {
    ProfileShowTemplate::from(demo_user())
}

/// Handle a profile form submit.
///
/// Nothing is persisted. The submitted values are echoed back into the
/// page so it reflects what was typed; a fresh GET shows the demo user
/// again.
#[instrument(skip(_state, form))]
pub async fn update(
    State(_state): State<AppState>,
    Form(form): Form<ProfileUpdateForm>,
) -> impl IntoResponse {
    ProfileShowTemplate::from(UserProfile {
        name: form.name,
        email: form.email,
        avatar: demo_user().avatar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_user_fields() {
        let template = ProfileShowTemplate::from(demo_user());
        assert_eq!(template.name, "John Doe");
        assert_eq!(template.email, "john@example.com");
        assert_eq!(template.initial, "J");
    }

    #[test]
    fn test_initial_empty_for_blank_name() {
        let template = ProfileShowTemplate::from(UserProfile {
            name: String::new(),
            email: "someone@example.com".to_string(),
            avatar: String::new(),
        });
        assert_eq!(template.initial, "");
    }
}
