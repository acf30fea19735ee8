pub mod authorized_user;
pub mod login_event;
