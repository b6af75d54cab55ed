//! HTTP API: upload form, calculation endpoints, and request/response mapping.

pub mod app;
pub mod config;
