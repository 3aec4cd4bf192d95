//! Onboarding profile record.
//!
//! Wire form is camelCase to match the API's JSON contract.

use serde::{Deserialize, Serialize};

/// Structured profile submitted when a user completes onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    pub full_name: String,

    pub bio: String,

    /// Language the user speaks natively.
    pub native_language: String,

    /// Language the user is here to learn.
    pub learning_language: String,

    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Reference to the profile picture (URL), if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl OnboardingProfile {
    /// Check the required onboarding fields, reporting every missing one.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut missing = Vec::new();

        let required = [
            ("fullName", &self.full_name),
            ("bio", &self.bio),
            ("nativeLanguage", &self.native_language),
            ("learningLanguage", &self.learning_language),
            ("location", &self.location),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}
