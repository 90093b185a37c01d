//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch, search, pagination,
//! entry animation) and delegates rendering details to `components`.

pub mod bookings;
pub mod proposals;
