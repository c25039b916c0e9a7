//! Data models for the EPI server

pub mod company;
pub mod dates;
pub mod employee;
pub mod equipment;
pub mod substitution;

// Re-export commonly used types
pub use company::Company;
pub use employee::Employee;
pub use equipment::{Equipment, ExpirationStatus};
pub use substitution::SubstitutionRecord;

use validator::ValidationError;

/// Rejects strings that are empty or whitespace only
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
