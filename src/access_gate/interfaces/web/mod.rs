pub mod dashboard_view;
pub mod email_form_view;
pub mod template_environment;
pub mod unauthorized_view;
