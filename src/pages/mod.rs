//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; session reads and writes go
//! through the `state::auth` context.

pub mod console;
pub mod landing;
pub mod login;
