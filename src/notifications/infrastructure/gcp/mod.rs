pub mod access_token_provider;
pub mod metadata_server_access_token_provider_impl;
pub mod static_access_token_provider_impl;
