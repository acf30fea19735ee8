pub mod iap_header_identity_extractor_impl;
