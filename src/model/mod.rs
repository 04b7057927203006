/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Login models and bearer token
pub mod auth;
/// HTTP request utilities and response decoding
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Serde helpers for loosely typed response fields
pub mod utils;
