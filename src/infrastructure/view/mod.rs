//! View bindings over an in-memory page document

mod cart;
mod document;
mod registration;

pub use cart::{CartBinding, DocumentCartView};
pub use document::{Document, Element};
pub use registration::{AvailabilityBinding, DocumentRegistrationView, RegistrationBinding};
