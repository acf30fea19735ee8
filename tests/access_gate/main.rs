mod query_service_tests;
mod value_object_tests;
mod view_tests;
