#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivityType {
    SuccessfulLogin,
    UnauthorizedAccessAttempt,
    ManualNotificationRequest,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuccessfulLogin => "Successful Login",
            Self::UnauthorizedAccessAttempt => "Unauthorized Access Attempt",
            Self::ManualNotificationRequest => "Manual Notification Request",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
