//! Pure logic shared across list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate derivation and timing logic from page and
//! component rendering so the interesting behavior tests without a UI
//! harness.

pub mod entry_animation;
pub mod list_pipeline;
