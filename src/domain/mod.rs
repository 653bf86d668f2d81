//! Domain layer - page entities, backend contracts and view bindings

pub mod cart;
pub mod error;
pub mod notification;
pub mod registration;

pub use cart::{
    ButtonState, CartApi, CartMutation, CartView, ItemId, Quantity, QuantityDirection,
    SubmitOutcome, SubmittedForm,
};
pub use error::DomainError;
pub use notification::{Notification, NotificationKind, NotificationSink};
pub use registration::{
    AccountApi, AvailabilityField, Field, FieldState, PasswordCheck, RegistrationConfig,
    RegistrationView, Strength,
};
