//! Explicit session context and the two-step login flow.
//!
//! The session is owned by whoever opened the workspace and handed to the
//! operations that need it; nothing reads login state from ambient storage.

use crate::client::AuthApi;
use crate::{Error, Result};
use chrono::Utc;
use hypodesk_types::wire::SignInRequest;
use hypodesk_types::{Role, Session};
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";

/// The signed-in user, if any, persisted next to the config.
#[derive(Debug, Clone)]
pub struct SessionContext {
    path: PathBuf,
    current: Option<Session>,
}

impl SessionContext {
    /// Load the persisted session from `data_dir`. A corrupt file counts as
    /// signed out.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SESSION_FILE);
        let current = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Session>(&content) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "ignoring unreadable session file"
                    );
                    None
                }
            }
        } else {
            None
        };

        Ok(Self { path, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Gate for protected operations.
    pub fn require(&self) -> Result<&Session> {
        self.current.as_ref().ok_or(Error::NotAuthenticated)
    }

    pub fn establish(&mut self, session: Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;
        tracing::info!(user = %session.user_id, role = %session.role, "session established");
        self.current = Some(session);
        Ok(())
    }

    /// Clear the session in memory and on disk.
    pub fn logout(&mut self) -> Result<Option<Session>> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(self.current.take())
    }
}

/// Where the login flow currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    Identify,
    Password {
        user_name: String,
        available_roles: Vec<String>,
    },
}

/// Two-step sign-in: validate the user id and role, then check the password.
pub struct LoginFlow<'a> {
    auth: &'a dyn AuthApi,
    application_code: String,
    user_id: String,
    role: Role,
    step: LoginStep,
}

impl<'a> LoginFlow<'a> {
    pub fn new(auth: &'a dyn AuthApi, application_code: impl Into<String>) -> Self {
        Self {
            auth,
            application_code: application_code.into(),
            user_id: String::new(),
            role: Role::default(),
            step: LoginStep::Identify,
        }
    }

    pub fn step(&self) -> &LoginStep {
        &self.step
    }

    /// Step one. On success the flow moves to the password step and the
    /// service's message is returned.
    pub fn validate_user(&mut self, user_id: &str, role: Role) -> Result<String> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(Error::Validation("user id is required".to_string()));
        }

        let response = self
            .auth
            .lookup_user(user_id, &self.application_code, role)
            .map_err(|e| match e {
                Error::Api { status, .. } => Error::Api {
                    status,
                    message: "Invalid user credentials. Please check your user ID and role."
                        .to_string(),
                },
                other => other,
            })?;

        if !response.user_exists {
            return Err(Error::NotFound("User not found".to_string()));
        }

        self.user_id = user_id.to_string();
        self.role = role;
        self.step = LoginStep::Password {
            user_name: response.user_name.unwrap_or_else(|| user_id.to_string()),
            available_roles: if response.available_roles.is_empty() {
                vec![role.as_str().to_string()]
            } else {
                response.available_roles
            },
        };

        Ok(response
            .message
            .unwrap_or_else(|| "User validated successfully".to_string()))
    }

    /// Step two. Returns the new session to the caller, who decides where it
    /// is stored.
    pub fn sign_in(&mut self, password: &str) -> Result<Session> {
        let LoginStep::Password { user_name, .. } = &self.step else {
            return Err(Error::Validation("validate the user id first".to_string()));
        };
        if password.is_empty() {
            return Err(Error::Validation("password is required".to_string()));
        }

        let request = SignInRequest {
            user_id: self.user_id.clone(),
            aplctn_cd: self.application_code.clone(),
            role: self.role.as_str().to_string(),
        };
        let response = self.auth.sign_in(&request, password)?;

        Ok(Session {
            user_id: response.user_id.unwrap_or_else(|| self.user_id.clone()),
            user_name: user_name.clone(),
            role: self.role,
            application_code: self.application_code.clone(),
            signed_in_at: Utc::now(),
        })
    }

    /// Return to step one, forgetting the validated user.
    pub fn back(&mut self) {
        self.step = LoginStep::Identify;
        self.user_id.clear();
    }
}
