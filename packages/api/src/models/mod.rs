//! Data models exchanged with the backend.

mod auth;
mod chat;
mod profile;
mod support;
mod user;

pub use auth::{
    AuthData, AuthEnvelope, Authenticated, Credentials, ProfileResponse, RegisterInput,
    SignupRequest,
};
pub use chat::{ChatAuthor, ChatMessage, GenerateRequest, GenerateResponse, ProxyRequest};
pub use profile::{MyProfileResponse, UserProfile};
pub use support::{MessageResponse, SupportRequest};
pub use user::{Role, User};
