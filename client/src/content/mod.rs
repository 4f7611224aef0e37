//! Static page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page displays lives here as `const` data, so components
//! only decide layout and the copy can be reviewed in one place.

pub mod case_studies;
pub mod impact;
pub mod profile;
pub mod solo_lab;
pub mod testimonials;
