//! HTTP middleware applied to every route.

pub mod security;

pub use security::security_headers;
