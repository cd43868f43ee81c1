//! # API crate: backend client and session logic for MentorLink
//!
//! Everything the pages need that is not rendering lives here, so it can be
//! tested without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Shared [`HttpClient`] with a fixed base address and the explicit [`AuthedClient`] bearer capability |
//! | [`endpoints`] | Typed calls for `/api/auth/*` and `/api/profile/me` |
//! | [`session`] | [`SessionStore`]: tokens, current user, login/register/logout/profile refresh |
//! | [`chatbot`] | Local inference client with proxy fallback, chat transcript state |
//! | [`fallback`] | Two-attempt retry combinator |
//! | [`progress`] | Profile completeness report |
//! | [`validation`] | Client-side form checks and role translation |
//! | [`config`] | `mentorlink.toml` / build-time configuration |
//! | [`error`] | [`ApiError`] taxonomy |
//! | [`models`] | Wire and domain types |

pub mod chatbot;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod fallback;
pub mod models;
pub mod progress;
pub mod session;
pub mod validation;

pub use chatbot::{ChatbotClient, Conversation};
pub use client::{AuthedClient, HttpClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{ChatAuthor, ChatMessage, Credentials, RegisterInput, Role, SupportRequest, User, UserProfile};
pub use progress::ProgressReport;
pub use session::{Notifier, Session, SessionStore, ToastKind};
