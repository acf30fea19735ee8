pub mod access_decision_command_service;
pub mod access_decision_query_service;
