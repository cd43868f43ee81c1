//! Client-side form validation.
//!
//! Checks run before any request is made and fail with
//! [`ApiError::Validation`] carrying the message shown to the user.

use crate::error::ApiError;
use crate::models::{Credentials, RegisterInput, Role, SignupRequest, SupportRequest};

pub const GRADUATION_YEAR_REQUIRED: &str = "Graduation year is required for alumni";
pub const MIN_PASSWORD_LEN: usize = 6;

const MIN_GRADUATION_YEAR: u16 = 1950;
const MAX_GRADUATION_YEAR: u16 = 2100;

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

/// Translate the registration form's role value to the wire role.
///
/// The form offers `STUDENT` and `ALUMNI`; the backend expects `student` and
/// `alumni`. Matching ignores case and surrounding whitespace. Admin accounts
/// cannot be self-registered.
pub fn normalize_role(raw: &str) -> Result<Role, ApiError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "STUDENT" => Ok(Role::Student),
        "ALUMNI" => Ok(Role::Alumni),
        _ => Err(invalid("Please select a valid role")),
    }
}

/// Minimal shape check: one `@` with something on both sides and a dot in the domain.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(invalid("Please enter a valid email address"))
    }
}

fn parse_graduation_year(raw: &str) -> Result<Option<u16>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u16>() {
        Ok(year) if (MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&year) => Ok(Some(year)),
        _ => Err(invalid("Please enter a valid graduation year")),
    }
}

/// Validate the registration form and build the signup request.
pub fn validate_registration(input: &RegisterInput) -> Result<SignupRequest, ApiError> {
    let role = normalize_role(&input.role)?;
    let graduation_year = parse_graduation_year(&input.graduation_year)?;
    if role == Role::Alumni && graduation_year.is_none() {
        return Err(invalid(GRADUATION_YEAR_REQUIRED));
    }

    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(invalid("First and last name are required"));
    }
    validate_email(&input.email)?;
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid("Password must be at least 6 characters"));
    }

    Ok(SignupRequest {
        email: input.email.trim().to_string(),
        password: input.password.clone(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
        graduation_year,
    })
}

/// Both fields must be present; the trimmed email is what gets sent.
pub fn validate_credentials(credentials: &Credentials) -> Result<Credentials, ApiError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(invalid("Email and password are required"));
    }
    Ok(Credentials::new(email, credentials.password.clone()))
}

pub fn validate_support(request: &SupportRequest) -> Result<SupportRequest, ApiError> {
    let trimmed = SupportRequest {
        first_name: request.first_name.trim().to_string(),
        email: request.email.trim().to_string(),
        subject: request.subject.trim().to_string(),
        message: request.message.trim().to_string(),
    };
    if trimmed.first_name.is_empty()
        || trimmed.email.is_empty()
        || trimmed.subject.is_empty()
        || trimmed.message.is_empty()
    {
        return Err(invalid("Please fill in all fields"));
    }
    validate_email(&trimmed.email)?;
    Ok(trimmed)
}
