//! Infrastructure layer - HTTP backend access, timers, notifications and views

pub mod api;
pub mod http;
pub mod logging;
pub mod notification;
pub mod timing;
pub mod view;
