use url::Url;

use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// Answer-level checks live here so the builder and the prompt session
/// apply exactly the same rules.
pub struct DomainValidator;

impl DomainValidator {
    /// A repository URL must be an absolute, well-formed URL.
    pub fn validate_repository_url(candidate: &str) -> Result<(), DomainError> {
        Url::parse(candidate)
            .map(|_| ())
            .map_err(|e| DomainError::InvalidRepositoryUrl {
                url: candidate.to_string(),
                reason: e.to_string(),
            })
    }
}
