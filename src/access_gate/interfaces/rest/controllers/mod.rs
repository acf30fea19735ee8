pub mod access_gate_rest_controller;
