//! Per-view state structs owned by page-level signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! State stays as plain data; derivations over it live in `util` so they can
//! be unit-tested without a rendering harness.

pub mod list_view;
