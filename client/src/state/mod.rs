//! Interaction state for the page.
//!
//! DESIGN
//! ======
//! Each model is plain data with small transition methods. Components wrap
//! them in `RwSignal`s; nothing here touches the DOM, so every transition is
//! covered by ordinary unit tests.

pub mod carousel;
pub mod disclosure;
pub mod image;
pub mod overlay;
pub mod resume_access;
