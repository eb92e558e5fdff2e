use noteflow_auth::{AuthMode, AuthOutcome, Page, Rejection};

/// How prominently a notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// What the user gets to see after an action: the alert text and where to go next
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
    pub navigate_to: Option<Page>,
}

impl Notice {
    fn info(text: impl Into<String>, navigate_to: Page) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
            navigate_to: Some(navigate_to),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
            navigate_to: None,
        }
    }

    pub fn from_outcome(mode: AuthMode, outcome: &AuthOutcome) -> Self {
        match (mode, outcome) {
            (AuthMode::Login, AuthOutcome::Success(page)) => Notice::info("Success!", *page),
            (AuthMode::Register, AuthOutcome::Success(page)) => Notice::info(
                "Registration successful! Welcome to NoteFlow!\nPlease log in with your new account.",
                *page,
            ),
            (AuthMode::Login, AuthOutcome::Rejected(Rejection::Validation { .. })) => {
                Notice::error("Username and password are required.")
            }
            (AuthMode::Register, AuthOutcome::Rejected(Rejection::Validation { .. })) => {
                Notice::error("All fields are required! Please check username, email and password.")
            }
            (AuthMode::Login, AuthOutcome::Rejected(Rejection::Server { message })) => {
                Notice::error(format!("Error: {}", message))
            }
            (AuthMode::Register, AuthOutcome::Rejected(Rejection::Server { message })) => {
                Notice::error(format!(
                    "Registration failed: {}{}",
                    message,
                    registration_hint(message)
                ))
            }
            (AuthMode::Login, AuthOutcome::NetworkFailure) => {
                Notice::error("Connect Error, Retry Later Please")
            }
            (AuthMode::Register, AuthOutcome::NetworkFailure) => Notice::error(
                "Network problem. Please check your internet connection and try again.",
            ),
        }
    }

    pub fn logged_out(page: Page) -> Self {
        Notice::info("Logged out.", page)
    }

    pub fn session_status(logged_in: bool) -> Self {
        Self {
            level: Level::Info,
            text: if logged_in { "Logged in." } else { "Not logged in." }.to_string(),
            navigate_to: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Render for the terminal, with the navigation target on its own line
    pub fn render(&self) -> String {
        match self.navigate_to {
            Some(page) => format!("{}\n-> {}", self.text, page),
            None => self.text.clone(),
        }
    }
}

/// Extra advice appended to a registration error, first match wins
fn registration_hint(message: &str) -> &'static str {
    if message.contains("email") {
        "\nPlease check the email format"
    } else if message.contains("username") {
        "\nThe username is already taken"
    } else if message.contains("password") {
        "\nThe password must be at least 8 characters"
    } else {
        ""
    }
}
