pub mod identity_extractor;
