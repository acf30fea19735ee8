pub mod rest;
pub mod web;
