//! Typed calls for each backend endpoint.

use crate::client::{AuthedClient, HttpClient};
use crate::error::Result;
use crate::models::{
    AuthEnvelope, Credentials, MessageResponse, MyProfileResponse, ProfileResponse, SignupRequest,
    SupportRequest, User, UserProfile,
};

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_PROFILE_PATH: &str = "/api/auth/profile";
pub const SUPPORT_PATH: &str = "/api/auth/support";
pub const MY_PROFILE_PATH: &str = "/api/profile/me";

impl HttpClient {
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthEnvelope> {
        self.post(SIGNUP_PATH, request).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthEnvelope> {
        self.post(LOGIN_PATH, credentials).await
    }

    /// Public contact form.
    pub async fn send_support(&self, request: &SupportRequest) -> Result<MessageResponse> {
        self.post(SUPPORT_PATH, request).await
    }
}

impl AuthedClient {
    /// The signed-in user as the backend currently sees them.
    pub async fn current_user(&self) -> Result<User> {
        let resp: ProfileResponse = self.get(AUTH_PROFILE_PATH).await?;
        Ok(resp.user)
    }

    /// The extended profile of the signed-in user.
    pub async fn my_profile(&self) -> Result<UserProfile> {
        let resp: MyProfileResponse = self.get(MY_PROFILE_PATH).await?;
        Ok(resp.profile)
    }
}
