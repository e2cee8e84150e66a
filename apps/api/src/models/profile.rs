use serde::Deserialize;

use crate::errors::AppError;

pub const PROFILE_REQUIRED: &str = "Please enter your name and email to begin.";

/// Who is using the form. Every action requires both fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Profile {
    /// Gates an action on a non-blank name and email.
    pub fn require(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::Validation(PROFILE_REQUIRED.to_string()));
        }
        Ok(())
    }
}
