//! Pure rendering from backend responses to page changes
//!
//! Nothing here performs I/O; controllers feed the results into the view
//! bindings.

pub mod cart;
pub mod markup;
pub mod registration;
