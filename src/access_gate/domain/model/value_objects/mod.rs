pub mod display_name;
pub mod user_email;
