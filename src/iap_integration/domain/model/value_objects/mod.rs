pub mod request_identity;
