use serde::{Deserialize, Serialize};

/// Extended profile from `GET /api/profile/me`.
///
/// Every field is optional; the backend fills in whatever the user has
/// completed so far and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub bio: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<u16>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MyProfileResponse {
    pub profile: UserProfile,
}
