use crate::access_gate::domain::model::enums::access_gate_domain_error::AccessGateDomainError;

/// Email exactly as claimed by the caller. Matching against the allow-list is
/// case-sensitive, so no normalization happens here. Length is not bounded:
/// an over-long claim simply misses the allow-list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(value: String) -> Result<Self, AccessGateDomainError> {
        if value.is_empty() {
            return Err(AccessGateDomainError::InvalidEmail);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Text before the first `@`, or the whole value when there is none.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }
}
