//! Registration input and its validation rules.

use validator::Validate;

use crate::error::CoreError;
use crate::roles::RoleProfile;

/// Everything collected from a new user at sign-up.
///
/// `password` is plaintext here; it is hashed before it reaches the
/// repository layer and is never stored.
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    /// Bounded by `users.username VARCHAR(50)`.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be 3 to 50 characters"
    ))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub profile: RoleProfile,
}

impl Registration {
    /// Run field validation plus the role profile rules.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        if self.username.trim() != self.username {
            return Err(CoreError::Validation(
                "Username cannot start or end with whitespace".to_string(),
            ));
        }
        self.profile.validate()
    }
}
