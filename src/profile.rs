//! User profile record with name-length validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name must be at least 2 characters (got {0})")]
    NameTooShort(usize),
    #[error("name must be at most 20 characters (got {0})")]
    NameTooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_single: Option<bool>,
}

impl Profile {
    /// Build a validated profile
    pub fn new(name: impl Into<String>, age: u32, phone_number: impl Into<String>) -> Result<Self, ProfileError> {
        let profile = Profile {
            name: name.into(),
            age,
            phone_number: phone_number.into(),
            is_single: None,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_single(mut self, is_single: bool) -> Self {
        self.is_single = Some(is_single);
        self
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let len = self.name.chars().count();
        if len < NAME_MIN_CHARS {
            return Err(ProfileError::NameTooShort(len));
        }
        if len > NAME_MAX_CHARS {
            return Err(ProfileError::NameTooLong(len));
        }
        Ok(())
    }
}
