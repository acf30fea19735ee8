use crate::access_gate::domain::model::{
    enums::access_gate_domain_error::AccessGateDomainError, value_objects::user_email::UserEmail,
};

pub const RECENT_LOGINS_LIMIT: i64 = 10;

#[derive(Clone, Debug)]
pub struct RecentLoginsQuery {
    email: UserEmail,
}

impl RecentLoginsQuery {
    pub fn new(email: String) -> Result<Self, AccessGateDomainError> {
        Ok(Self {
            email: UserEmail::new(email)?,
        })
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn limit(&self) -> i64 {
        RECENT_LOGINS_LIMIT
    }
}
