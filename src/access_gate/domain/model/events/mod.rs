pub mod login_succeeded_event;
pub mod unauthorized_access_attempted_event;
