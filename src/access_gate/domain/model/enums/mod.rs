pub mod access_gate_domain_error;
