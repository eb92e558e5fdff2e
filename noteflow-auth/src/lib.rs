//! # NoteFlow Auth
//!
//! The login and registration request flow of the NoteFlow note-taking app.
//!
//! This crate provides:
//! - Validation of form values before anything is sent
//! - One JSON POST per submit to `/api/login` or `/api/register`
//! - Classification of the answer into an [`AuthOutcome`]
//! - The local session store holding the `authToken` key, and logout
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on the request flow. It does **not**:
//! - Show notices or navigate (handled by the application)
//! - Retry failed submits (the user decides)
//! - Read form fields from any UI toolkit
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use noteflow_auth::{AuthRequestFlow, AuthOutcome, FormValues, HttpTransport};
//!
//! let flow = AuthRequestFlow::new(HttpTransport::new("http://127.0.0.1:10106")?);
//! match flow.login(&FormValues::login("alice", "secret")).await {
//!     AuthOutcome::Success(page) => println!("go to {}", page),
//!     AuthOutcome::Rejected(reason) => println!("Error: {}", reason.message()),
//!     AuthOutcome::NetworkFailure => println!("Connect Error, Retry Later Please"),
//! }
//! ```

pub mod models;
pub mod service;
pub mod session;
pub mod transport;

pub use models::{
    AuthMode, AuthOutcome, Credentials, FailureKind, FormValues, Page, Rejection, SubmitState,
};
pub use service::AuthRequestFlow;
pub use session::{logout, SessionError, SessionStore, AUTH_TOKEN_KEY};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
