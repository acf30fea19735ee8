use crate::access_gate::domain::model::{
    enums::access_gate_domain_error::AccessGateDomainError, value_objects::user_email::UserEmail,
};

#[derive(Clone, Debug)]
pub struct RequestManualNotificationCommand {
    email: UserEmail,
}

impl RequestManualNotificationCommand {
    pub fn new(email: String) -> Result<Self, AccessGateDomainError> {
        Ok(Self {
            email: UserEmail::new(email)?,
        })
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }
}
