//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single request/response exchange with the chat endpoint.
//! The wire schema itself lives in the shared `protocol` crate.

pub mod api;
