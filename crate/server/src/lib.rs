//! A demonstration API server exposing a single route protected by an
//! OAuth2 bearer-token authorization gate.
//!
//! Token validation happens in the [`middlewares`] module: inbound tokens
//! are checked against the identity provider's published JWKS, the
//! configured issuer and, when set, the expected audience. Everything
//! behind the gate is a plain pass-through handler.

pub mod config;
pub mod error;
mod middlewares;
pub mod result;
mod routes;
pub mod start_server;

#[cfg(test)]
mod tests;
