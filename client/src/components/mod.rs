//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections and primitives that make up the single page. Only the case card,
//! phone carousel, image fallback and the two overlays hold state; the rest is
//! declarative layout over `crate::content`.

pub mod case_card;
pub mod contact_modal;
pub mod decor;
pub mod fallback_image;
pub mod footer;
pub mod hero;
pub mod impact;
pub mod logo_wall;
pub mod navbar;
pub mod resume_modal;
pub mod showcase;
pub mod solo_lab;
pub mod testimonials;
