//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one page; it owns page-scoped state and delegates rendering
//! details to `components`.

pub mod home;
