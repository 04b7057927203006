/// Client entry point
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Endpoint group implementations
pub mod services;
/// Authenticated session shared by every endpoint group
pub mod session;
