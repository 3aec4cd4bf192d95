//! Domain models shared with the API boundary.

pub mod profile;

pub use profile::{Gender, OnboardingProfile};
