//! Authentication
//!
//! Login and signup forms, their client-side validation, and the view state
//! that the authentication screen renders from.

use thiserror::Error;

use crate::api::{Backend, LoginRequest, SignupRequest};
use crate::message::Message;
use crate::session::{SessionStore, SESSION_KEY};

/// Which form the authentication view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Signup form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Client-side signup validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all sign up fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl SignupForm {
    /// Check the form and build the request body
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let fields = [&self.username, &self.email, &self.password, &self.confirm];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Result of a login or signup submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Login succeeded and the username is persisted
    SignedIn { username: String },
    /// Account created; the user should log in next
    SignedUp(Message),
    /// Validation, HTTP or transport failure
    Failed(Message),
}

/// Submit the login form.
///
/// On success the username is written to durable storage before the
/// outcome is returned.
pub async fn login<B, S>(backend: &B, store: &S, form: &LoginForm) -> AuthOutcome
where
    B: Backend + ?Sized,
    S: SessionStore + ?Sized,
{
    match backend.login(&form.to_request()).await {
        Ok(_) => match store.set(SESSION_KEY, &form.username) {
            Ok(()) => AuthOutcome::SignedIn {
                username: form.username.clone(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist session");
                AuthOutcome::Failed(Message::error(e.to_string()))
            }
        },
        Err(e) => {
            tracing::warn!(username = %form.username, error = %e, "Login failed");
            AuthOutcome::Failed(Message::error(
                e.auth_message("Login failed.", "Login error."),
            ))
        }
    }
}

/// Submit the signup form. Invalid forms never reach the backend.
pub async fn signup<B>(backend: &B, form: &SignupForm) -> AuthOutcome
where
    B: Backend + ?Sized,
{
    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => return AuthOutcome::Failed(Message::error(e.to_string())),
    };

    match backend.signup(&request).await {
        Ok(response) => {
            let text = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Sign up successful. You can now log in.".to_string());
            AuthOutcome::SignedUp(Message::success(text))
        }
        Err(e) => {
            tracing::warn!(username = %request.username, error = %e, "Sign up failed");
            AuthOutcome::Failed(Message::error(
                e.auth_message("Sign up failed.", "Sign up error."),
            ))
        }
    }
}

/// View state of the authentication screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
    pub message: Option<Message>,
    pub loading: bool,
}

impl AuthState {
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Clear the previous message and mark a request in flight
    pub fn begin(&mut self) {
        self.message = None;
        self.loading = true;
    }

    /// Apply a finished submission. Returns the username on a successful
    /// login so the caller can hand control to the application view.
    pub fn finish(&mut self, outcome: AuthOutcome) -> Option<String> {
        self.loading = false;
        match outcome {
            AuthOutcome::SignedIn { username } => Some(username),
            AuthOutcome::SignedUp(message) => {
                self.mode = AuthMode::Login;
                self.message = Some(message);
                None
            }
            AuthOutcome::Failed(message) => {
                self.message = Some(message);
                None
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.loading) {
            (AuthMode::Login, true) => "Logging In...",
            (AuthMode::Login, false) => "Login",
            (AuthMode::Signup, true) => "Signing Up...",
            (AuthMode::Signup, false) => "Sign Up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::backend::fake::{Call, RecordingBackend};
    use crate::api::{ApiError, MessageResponse};
    use crate::message::MessageKind;
    use crate::session::{MemoryStore, Session, View};

    fn filled_signup() -> SignupForm {
        SignupForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_with_empty_confirm_skips_network() {
        let backend = RecordingBackend::default();
        let form = SignupForm {
            confirm: String::new(),
            ..filled_signup()
        };

        let outcome = signup(&backend, &form).await;

        assert_eq!(
            outcome,
            AuthOutcome::Failed(Message::error("Please fill in all sign up fields."))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_password_mismatch_skips_network() {
        let backend = RecordingBackend::default();
        let form = SignupForm {
            confirm: "hunter3".to_string(),
            ..filled_signup()
        };

        let outcome = signup(&backend, &form).await;

        assert_eq!(
            outcome,
            AuthOutcome::Failed(Message::error("Passwords do not match."))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_success_returns_to_login() {
        let backend = RecordingBackend {
            signup: Ok(MessageResponse {
                message: Some("User created successfully! Please login.".to_string()),
            }),
            ..RecordingBackend::default()
        };
        let mut state = AuthState {
            mode: AuthMode::Signup,
            ..AuthState::default()
        };

        state.begin();
        assert_eq!(state.submit_label(), "Signing Up...");
        let outcome = signup(&backend, &filled_signup()).await;
        assert_eq!(state.finish(outcome), None);

        assert_eq!(state.mode, AuthMode::Login);
        assert!(!state.loading);
        let message = state.message.unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "User created successfully! Please login.");
        assert_eq!(
            backend.calls(),
            vec![Call::Signup(SignupRequest {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "hunter2".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_signup_success_without_message() {
        let backend = RecordingBackend::default();
        let outcome = signup(&backend, &filled_signup()).await;
        assert_eq!(
            outcome,
            AuthOutcome::SignedUp(Message::success("Sign up successful. You can now log in."))
        );
    }

    #[tokio::test]
    async fn test_login_success_persists_username() {
        let backend = RecordingBackend::default();
        let store = MemoryStore::new();
        let mut session = Session::restore(&store);
        let form = LoginForm {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };

        let mut state = AuthState::default();
        state.begin();
        let outcome = login(&backend, &store, &form).await;
        let username = state.finish(outcome).unwrap();
        session.authenticated(&username).unwrap();

        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("alice"));
        assert_eq!(session.view(), View::Application { username: "alice" });
        assert_eq!(state.message, None);
    }

    #[tokio::test]
    async fn test_login_failure_shows_detail_verbatim() {
        let backend = RecordingBackend::rejecting_login(401, r#"{"detail": "Incorrect password"}"#);
        let store = MemoryStore::new();
        let form = LoginForm {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        };

        let mut state = AuthState::default();
        state.begin();
        let outcome = login(&backend, &store, &form).await;

        assert_eq!(state.finish(outcome), None);
        assert_eq!(state.message, Some(Message::error("Incorrect password")));
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
        assert_eq!(state.mode, AuthMode::Login);
    }

    #[tokio::test]
    async fn test_login_transport_failure() {
        let backend = RecordingBackend {
            login: Err(ApiError::Transport(String::new())),
            ..RecordingBackend::default()
        };
        let store = MemoryStore::new();

        let outcome = login(&backend, &store, &LoginForm::default()).await;
        assert_eq!(outcome, AuthOutcome::Failed(Message::error("Login error.")));
    }

    #[test]
    fn test_switch_mode_keeps_message() {
        let mut state = AuthState::default();
        state.message = Some(Message::error("Incorrect password"));
        state.switch_mode(AuthMode::Signup);
        assert_eq!(state.submit_label(), "Sign Up");
        assert!(state.message.is_some());
    }
}
