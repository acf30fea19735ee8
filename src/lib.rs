pub mod access_gate;
pub mod config;
pub mod iap_integration;
pub mod notifications;
pub mod shared;
