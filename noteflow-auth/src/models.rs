use serde::Deserialize;

/// Which form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// Endpoint the credentials are posted to
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "/api/login",
            AuthMode::Register => "/api/register",
        }
    }

    /// Page to navigate to after a successful submit
    pub fn redirect_target(self) -> Page {
        match self {
            AuthMode::Login => Page::Dashboard,
            AuthMode::Register => Page::Login,
        }
    }

    /// Rejection text used when the server gives no usable reason
    pub fn generic_rejection(self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed",
            AuthMode::Register => "Registration failed",
        }
    }
}

/// Navigation targets of the web front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard.html",
            Page::Login => "login.html",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field contents as entered by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl FormValues {
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            password: password.into(),
        }
    }

    pub fn register(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: Some(email.into()),
            password: password.into(),
        }
    }

    /// Builds the request credentials for `mode`.
    ///
    /// Username and email are trimmed, the password is kept verbatim. Returns
    /// the name of the first required field that is empty.
    pub fn credentials(&self, mode: AuthMode) -> Result<Credentials, &'static str> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("username");
        }

        let email = match mode {
            AuthMode::Login => None,
            AuthMode::Register => {
                let email = self.email.as_deref().unwrap_or("").trim();
                if email.is_empty() {
                    return Err("email");
                }
                Some(email)
            }
        };

        if self.password.trim().is_empty() {
            return Err("password");
        }

        Ok(match email {
            None => Credentials::Login {
                username: username.to_string(),
                password: self.password.clone(),
            },
            Some(email) => Credentials::Register {
                username: username.to_string(),
                email: email.to_string(),
                password: self.password.clone(),
            },
        })
    }
}

/// Request body for one submit
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
}

impl Credentials {
    /// JSON body with exactly the fields of the mode
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Credentials::Login { username, password } => serde_json::json!({
                "username": username,
                "password": password,
            }),
            Credentials::Register {
                username,
                email,
                password,
            } => serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }),
        }
    }
}

/// Failure body returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; empty strings count as missing
    pub fn reason(self) -> Option<String> {
        self.error
            .filter(|e| !e.is_empty())
            .or(self.message.filter(|m| !m.is_empty()))
    }
}

/// Success body of the login endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuccessBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Why a submit was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A required field was empty, nothing was sent
    Validation { field: &'static str },
    /// The server answered with a failure status
    Server { message: String },
}

impl Rejection {
    pub fn message(&self) -> &str {
        match self {
            Rejection::Validation { .. } => "missing required field",
            Rejection::Server { message } => message.as_str(),
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(Page),
    Rejected(Rejection),
    NetworkFailure,
}

/// Error classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ValidationFailure,
    ServerRejection,
    TransportFailure,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            AuthOutcome::Success(_) => None,
            AuthOutcome::Rejected(Rejection::Validation { .. }) => {
                Some(FailureKind::ValidationFailure)
            }
            AuthOutcome::Rejected(Rejection::Server { .. }) => Some(FailureKind::ServerRejection),
            AuthOutcome::NetworkFailure => Some(FailureKind::TransportFailure),
        }
    }
}

/// State of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    /// Nothing sent yet
    Idle,
    /// Waiting for the server
    Submitting(AuthMode),
    Succeeded(Page),
    Rejected(Rejection),
    NetworkFailed,
}

impl SubmitState {
    /// Starts a new submission, whatever the previous state was
    pub fn begin(mode: AuthMode) -> Self {
        SubmitState::Submitting(mode)
    }

    /// Moves a submission to its terminal state
    pub fn finish(outcome: AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::Success(page) => SubmitState::Succeeded(page),
            AuthOutcome::Rejected(rejection) => SubmitState::Rejected(rejection),
            AuthOutcome::NetworkFailure => SubmitState::NetworkFailed,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmitState::Succeeded(_) | SubmitState::Rejected(_) | SubmitState::NetworkFailed
        )
    }
}
