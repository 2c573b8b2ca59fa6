//! Typed tool catalog + HTTP gateway runtime for the QUADS MCP server.
//!
//! This crate owns everything between a tool invocation and the remote
//! QUADS API: the per-operation call declarations, the outbound request
//! builder, the success/error envelope normalizer, and the request-scoped
//! diagnostics channel. It intentionally contains **no** protocol framing
//! and **no** process startup logic; those live in the server binary.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod envelope;
pub mod runtime;
