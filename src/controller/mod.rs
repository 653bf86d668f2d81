//! Page controllers wiring backend calls, timers and view updates

mod cart;
mod registration;

pub use cart::{CartController, CartTiming, REMOVE_PROMPT};
pub use registration::RegistrationValidator;
