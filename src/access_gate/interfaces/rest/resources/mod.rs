pub mod access_gate_error_response_resource;
pub mod health_response_resource;
pub mod login_form_resource;
pub mod login_logs_response_resource;
pub mod notification_response_resource;
