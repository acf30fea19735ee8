/// Claimed caller identity as resolved from request metadata.
///
/// Nothing in here has been verified locally: the email is whatever the
/// upstream proxy (or one of the fallbacks) supplied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestIdentity {
    email: String,
    ip: String,
}

impl RequestIdentity {
    pub fn new(email: String, ip: String) -> Self {
        Self { email, ip }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn into_parts(self) -> (String, String) {
        (self.email, self.ip)
    }
}
