use crate::models::{AuthMode, AuthOutcome, ErrorBody, FormValues, Rejection, SuccessBody};
use crate::transport::{Transport, TransportResponse};

/// Login and registration against the NoteFlow API
///
/// Holds no state between submits; every call to [`AuthRequestFlow::submit`]
/// issues at most one request and returns a terminal outcome.
pub struct AuthRequestFlow<T> {
    transport: T,
}

impl<T: Transport> AuthRequestFlow<T> {
    /// Create a new flow over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `form`, send it to the endpoint for `mode` and classify the answer
    pub async fn submit(&self, form: &FormValues, mode: AuthMode) -> AuthOutcome {
        let credentials = match form.credentials(mode) {
            Ok(credentials) => credentials,
            Err(field) => {
                log::debug!("{:?} not sent, `{}` is empty", mode, field);
                return AuthOutcome::Rejected(Rejection::Validation { field });
            }
        };

        let body = credentials.to_json();

        match self.transport.post_json(mode.endpoint(), &body).await {
            Ok(response) => classify(mode, &response),
            Err(e) => {
                log::warn!("{:?} request failed: {}", mode, e);
                AuthOutcome::NetworkFailure
            }
        }
    }

    pub async fn login(&self, form: &FormValues) -> AuthOutcome {
        self.submit(form, AuthMode::Login).await
    }

    pub async fn register(&self, form: &FormValues) -> AuthOutcome {
        self.submit(form, AuthMode::Register).await
    }
}

/// Map a completed response to an outcome
pub fn classify(mode: AuthMode, response: &TransportResponse) -> AuthOutcome {
    if response.is_success() {
        match serde_json::from_slice::<SuccessBody>(&response.body) {
            Ok(body) => {
                if let Some(user) = body.user {
                    log::info!("Logged in as {}", user);
                } else if let Some(message) = body.message {
                    log::info!("{}", message);
                }
            }
            Err(e) => log::debug!("Success body is not JSON: {}", e),
        }
        return AuthOutcome::Success(mode.redirect_target());
    }

    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::reason)
        .unwrap_or_else(|| mode.generic_rejection().to_string());

    log::debug!("{:?} rejected with {}: {}", mode, response.status, message);
    AuthOutcome::Rejected(Rejection::Server { message })
}
