//! Registration domain module for live signup form validation

mod api;
mod config;
mod field;
mod result;
mod view;

pub use api::*;
pub use config::*;
pub use field::*;
pub use result::*;
pub use view::*;
