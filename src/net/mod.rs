//! Networking modules for the dashboard REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the collection fetches and `types` defines the wire schema.
//! The API itself is an external collaborator; nothing here retries or caches.

pub mod api;
pub mod types;
