//! HTTP request handlers organized by domain.

pub mod hello_handler;
pub mod user_handler;

pub use hello_handler::*;
pub use user_handler::*;
