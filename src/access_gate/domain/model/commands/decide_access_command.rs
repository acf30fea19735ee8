use crate::access_gate::domain::model::{
    enums::access_gate_domain_error::AccessGateDomainError, value_objects::user_email::UserEmail,
};

#[derive(Clone, Debug)]
pub struct DecideAccessCommand {
    email: UserEmail,
    ip_address: Option<String>,
}

impl DecideAccessCommand {
    pub fn new(email: String, ip_address: Option<String>) -> Result<Self, AccessGateDomainError> {
        Ok(Self {
            email: UserEmail::new(email)?,
            ip_address: ip_address.filter(|ip| !ip.is_empty()),
        })
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
}
