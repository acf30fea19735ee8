pub mod access_decision_query_service_impl;
