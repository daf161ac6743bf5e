//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain: the Favicon.so tools.

pub mod tools;
