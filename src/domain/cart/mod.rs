//! Cart domain module for the badge, add-to-cart forms and line items

mod api;
mod entity;
mod response;
mod view;

pub use api::*;
pub use entity::*;
pub use response::*;
pub use view::*;
