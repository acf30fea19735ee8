pub mod access_decision_command_service_impl;
