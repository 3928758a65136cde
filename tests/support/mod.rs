//! Shared test utilities.

pub mod joke_server;
pub mod runtime;
